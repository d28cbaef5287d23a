//! Login screen layout

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::{LoginField, LoginScreen, BANNER_TITLE, SCREEN_TITLE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the fields grow on large terminals
const MAX_FIELD_WIDTH: u16 = 60;
/// Horizontal margin around the fields
const FIELD_MARGIN: u16 = 4;
const LOGIN_BUTTON_WIDTH: u16 = 24;

/// Placement of every widget on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginLayout {
    pub nav_bar: Rect,
    pub banner: Rect,
    pub email: Rect,
    pub password: Rect,
    pub button: Rect,
    pub help: Rect,
}

impl LoginLayout {
    /// Email centered vertically, password just below, button below that,
    /// banner filling the space above the email field.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Navigation bar
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Help line
            ])
            .split(area);
        let (nav_bar, content, help) = (chunks[0], chunks[1], chunks[2]);

        let field_width = content
            .width
            .saturating_sub(FIELD_MARGIN * 2)
            .min(MAX_FIELD_WIDTH);
        let field_x = content.x + content.width.saturating_sub(field_width) / 2;
        let email_y = content.y + (content.height / 2).saturating_sub(FIELD_HEIGHT / 2 + 1);

        let email = Rect::new(field_x, email_y, field_width, FIELD_HEIGHT).intersection(content);
        let password = Rect::new(field_x, email_y + FIELD_HEIGHT, field_width, FIELD_HEIGHT)
            .intersection(content);

        let button_width = LOGIN_BUTTON_WIDTH.min(content.width);
        let button = Rect::new(
            content.x + content.width.saturating_sub(button_width) / 2,
            email_y + FIELD_HEIGHT * 2 + 1,
            button_width,
            BUTTON_HEIGHT,
        )
        .intersection(content);

        let banner = Rect::new(
            content.x,
            content.y,
            content.width,
            email_y.saturating_sub(content.y),
        );

        Self {
            nav_bar,
            banner,
            email,
            password,
            button,
            help,
        }
    }
}

/// Draw the login screen
pub fn draw(frame: &mut Frame, area: Rect, screen: &LoginScreen, spinner_frame: usize) {
    let layout = LoginLayout::new(area);

    let nav = Paragraph::new(Span::styled(
        SCREEN_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(nav, layout.nav_bar);

    if layout.banner.height > 0 {
        let banner_y = layout.banner.y + layout.banner.height / 2;
        let banner_area = Rect::new(layout.banner.x, banner_y, layout.banner.width, 1);
        let banner = Paragraph::new(Span::styled(
            BANNER_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(banner, banner_area);
    }

    let active = screen.form.active_login_field();
    for (field, rect) in [
        (LoginField::Email, layout.email),
        (LoginField::Password, layout.password),
    ] {
        if !rect.is_empty() {
            draw_field(
                frame,
                rect,
                screen.form.field(field),
                active == Some(field),
                spinner_frame,
            );
        }
    }

    if !layout.button.is_empty() {
        render_action_button(
            frame,
            layout.button,
            "Login",
            Color::Green,
            screen.form.is_button_active(),
        );
    }

    let help = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" next  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" continue/login  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(help).alignment(Alignment::Center),
        layout.help,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_fields_and_button() {
        let layout = LoginLayout::new(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.password.y, layout.email.y + FIELD_HEIGHT);
        assert!(layout.button.y > layout.password.y);
        assert_eq!(layout.email.width, MAX_FIELD_WIDTH);
        assert_eq!(layout.email.x, 10);
        assert_eq!(layout.button.width, LOGIN_BUTTON_WIDTH);
        assert!(layout.banner.bottom() <= layout.email.y);
    }

    #[test]
    fn test_email_field_is_vertically_centered() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = LoginLayout::new(area);
        let content_mid = 2 + (40 - 3) / 2;
        let email_mid = layout.email.y + FIELD_HEIGHT / 2;
        assert!(email_mid.abs_diff(content_mid) <= 1);
    }

    #[test]
    fn test_layout_fits_tiny_terminal() {
        let area = Rect::new(0, 0, 12, 6);
        let layout = LoginLayout::new(area);
        for rect in [layout.email, layout.password, layout.button] {
            if rect.is_empty() {
                continue;
            }
            assert!(rect.right() <= area.right());
            assert!(rect.bottom() <= area.bottom());
        }
    }
}
