//! Modal alert with a single acknowledge action

use super::base::{render_dialog, DialogConfig};
use crate::state::{Alert, ACKNOWLEDGE_TITLE};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render `alert` centered over the screen
pub fn render_alert_dialog(frame: &mut Frame, alert: &Alert) {
    let actions = vec![
        Span::styled(
            format!(" {ACKNOWLEDGE_TITLE} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" to dismiss", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &alert.title,
            title_color: Color::White,
            border_color: Color::Cyan,
            message: &alert.message,
            actions,
            max_width: 50,
        },
    );
}
