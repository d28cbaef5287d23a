//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod login;

use crate::app::App;
use components::render_alert_dialog;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    login::draw(frame, area, &app.screen, app.spinner_frame(now));

    // Alert is modal and drawn over everything else
    if let Some(alert) = app.screen.alert.current() {
        render_alert_dialog(frame, alert);
    }
}
