//! Bootstrap and event loop for the login screen

use crate::app::{App, SPINNER_INTERVAL};
use crate::config::LoginConfig;
use crate::ui;
use anyhow::Result;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;
use tracing::{debug, info};

/// Owns the display surface and installs the root screen on it
pub struct Coordinator<B: Backend> {
    terminal: Terminal<B>,
    config: LoginConfig,
    app: Option<App>,
}

impl<B: Backend> Coordinator<B> {
    pub fn new(terminal: Terminal<B>, config: LoginConfig) -> Self {
        Self {
            terminal,
            config,
            app: None,
        }
    }

    /// Install the login screen as the root and draw it. Calling this again
    /// leaves the installed screen untouched.
    pub fn start(&mut self) -> Result<()> {
        if self.app.is_some() {
            debug!("Coordinator already started");
            return Ok(());
        }

        let now = Instant::now();
        let app = App::new(&self.config, now);
        self.terminal.draw(|frame| ui::draw(frame, &app, now))?;
        self.app = Some(app);
        info!(
            debounce_ms = self.config.debounce_window().as_millis() as u64,
            "Login screen started"
        );
        Ok(())
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Drive the app from `events` until it asks to quit or the stream ends
    pub async fn run<S>(&mut self, mut events: S) -> Result<()>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        self.start()?;
        let Self { terminal, app, .. } = self;
        let Some(app) = app.as_mut() else {
            return Ok(());
        };

        loop {
            let now = Instant::now();
            app.tick(now);
            terminal.draw(|frame| ui::draw(frame, app, now))?;

            if app.should_quit() {
                break;
            }

            let deadline = app.next_deadline();
            let animating = app.is_animating();

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => app.handle_event(event, Instant::now()),
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                _ = sleep_until(deadline) => {}
                _ = tokio::time::sleep(SPINNER_INTERVAL), if animating => {}
            }
        }

        app.screen.close();
        info!("Login screen closed");
        Ok(())
    }
}

/// Resolve at `deadline`, or never when there is none
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use crate::state::LoginField;
    use futures::stream;
    use ratatui::backend::TestBackend;

    fn coordinator() -> Coordinator<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        Coordinator::new(terminal, LoginConfig::default())
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, modifiers)))
    }

    fn screen_text(coordinator: &mut Coordinator<TestBackend>) -> String {
        let buffer = coordinator.terminal_mut().backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    mod start {
        use super::*;

        #[test]
        fn test_start_installs_and_draws_root_screen() {
            let mut c = coordinator();
            assert!(c.app.as_ref().is_none());

            c.start().unwrap();

            assert!(c.app.as_ref().is_some());
            assert!(screen_text(&mut c).contains("Rx Login"));
        }

        #[test]
        fn test_second_start_is_noop() {
            let mut c = coordinator();
            c.start().unwrap();
            if let Some(app) = c.app.as_mut() {
                app.screen.input_char('x', Instant::now());
            }

            c.start().unwrap();

            let app = c.app.as_ref().unwrap();
            assert_eq!(app.screen.form.email.as_text(), "x");
        }
    }

    mod run {
        use super::*;

        #[tokio::test]
        async fn test_run_until_ctrl_c() {
            let mut c = coordinator();
            let events = stream::iter(vec![
                key(KeyCode::Char('a'), KeyModifiers::NONE),
                key(KeyCode::Char('c'), KeyModifiers::CONTROL),
                key(KeyCode::Char('b'), KeyModifiers::NONE),
            ]);

            c.run(events).await.unwrap();

            let app = c.app.as_ref().unwrap();
            assert!(app.should_quit());
            assert_eq!(app.screen.form.email.as_text(), "a");
        }

        #[tokio::test]
        async fn test_run_ends_with_event_stream() {
            let mut c = coordinator();
            let events = stream::iter(vec![key(KeyCode::Char('z'), KeyModifiers::NONE)]);

            c.run(events).await.unwrap();

            let app = c.app.as_ref().unwrap();
            assert!(!app.should_quit());
            assert_eq!(app.screen.form.email.as_text(), "z");
        }

        #[tokio::test]
        async fn test_run_releases_pipeline_on_exit() {
            let mut c = coordinator();
            let events = stream::iter(vec![key(KeyCode::Char('c'), KeyModifiers::CONTROL)]);

            c.run(events).await.unwrap();

            let app = c.app.as_ref().unwrap();
            let pipeline = app.screen.pipeline();
            assert_eq!(pipeline.everything_valid().observer_count(), 0);
            assert_eq!(pipeline.validity(LoginField::Email).observer_count(), 0);
        }

        #[tokio::test]
        async fn test_run_propagates_stream_error() {
            let mut c = coordinator();
            let events = stream::iter(vec![Err(io::Error::other("tty gone"))]);

            let err = c.run(events).await.unwrap_err();

            assert!(err.to_string().contains("tty gone"));
        }
    }
}
