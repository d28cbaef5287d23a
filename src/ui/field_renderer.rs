//! Text field rendering with a trailing accessory slot

use crate::state::{Accessory, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Field height in rows (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Frames of the indeterminate progress indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph shown for a valid field
pub const CHECKMARK: &str = "✔";

/// The accessory glyph and its style, if anything should be drawn
pub fn accessory_glyph(accessory: Accessory, spinner_frame: usize) -> Option<Span<'static>> {
    match accessory {
        Accessory::None => None,
        Accessory::Checkmark => Some(Span::styled(CHECKMARK, Style::default().fg(Color::Green))),
        Accessory::Spinner => Some(Span::styled(
            SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()],
            Style::default().fg(Color::Red),
        )),
    }
}

/// Draw a single-line input field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    spinner_frame: usize,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1), // Left inset
            Constraint::Min(0),    // Text
            Constraint::Length(2), // Trailing accessory
        ])
        .split(inner);

    let cursor = if is_active { "▌" } else { "" };
    let display_value = field.display_value();
    let text = if display_value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(field.placeholder.as_str(), Style::default().fg(Color::DarkGray)),
        ])
    } else {
        // Keep the tail visible when the value is wider than the field
        let width = chunks[1].width.saturating_sub(1) as usize;
        let skip = display_value.chars().count().saturating_sub(width);
        let visible: String = display_value.chars().skip(skip).collect();
        Line::from(vec![
            Span::raw(visible),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };
    frame.render_widget(Paragraph::new(text), chunks[1]);

    if let Some(glyph) = accessory_glyph(field.visible_accessory(is_active), spinner_frame) {
        frame.render_widget(Paragraph::new(Line::from(glyph)), chunks[2]);
    }
}
