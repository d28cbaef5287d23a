//! Rx Login - Terminal login screen with reactive form validation
//!
//! Email and password fields are validated through a small reactive
//! pipeline: edits are debounced, checked, combined into a single form gate
//! and reflected back as per-field accessories.

mod app;
mod config;
mod coordinator;
mod logging;
mod reactive;
mod state;
mod ui;
mod validation;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use config::LoginConfig;
use coordinator::Coordinator;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = LoginConfig::load()?;

    // Initialize logging
    let log_path = logging::init(&config);
    info!(log_file = ?log_path, "Starting rx-login");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Create coordinator and run
    let mut coordinator = Coordinator::new(terminal, config);
    let result = coordinator.run(EventStream::new()).await;

    // Restore terminal
    disable_raw_mode()?;
    let terminal = coordinator.terminal_mut();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}
