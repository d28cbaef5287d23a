//! Application state and core logic

use crate::config::LoginConfig;
use crate::state::{LoginField, LoginScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::debug;

/// Spinner frame advance interval
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Main application struct
pub struct App {
    /// The root (and only) screen
    pub screen: LoginScreen,
    /// Whether the app should quit
    quit: bool,
    /// Reference point for spinner animation
    started: Instant,
}

impl App {
    /// Create a new App instance with the login screen as its root
    pub fn new(config: &LoginConfig, now: Instant) -> Self {
        Self {
            screen: LoginScreen::new(config.debounce_window(), config.mask_password(), now),
            quit: false,
            started: now,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Paste(text) if !self.screen.alert.is_presented() => {
                self.screen.paste(&text, now)
            }
            // Resize needs nothing beyond the redraw the loop already does
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global quit
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        // Alert is modal: only acknowledgement gets through
        if self.screen.alert.is_presented() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                if let Some(alert) = self.screen.dismiss_alert() {
                    debug!(title = %alert.title, "Alert dismissed");
                }
            }
            return;
        }

        let on_button = self.screen.form.is_button_active();

        match key.code {
            KeyCode::Char('s') if ctrl => self.screen.submit(),
            KeyCode::Char('u') if ctrl => self.screen.clear_field(now),
            KeyCode::Tab | KeyCode::Down => self.screen.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.screen.prev_field(),
            KeyCode::Enter | KeyCode::Char(' ') if on_button => self.screen.submit(),
            KeyCode::Enter => {
                // Email "continues" to the password; password is "done"
                if self.screen.form.active_login_field() == Some(LoginField::Email) {
                    self.screen.next_field();
                } else {
                    self.screen.submit();
                }
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Backspace => self.screen.backspace(now),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.screen.input_char(c, now)
            }
            _ => {}
        }
    }

    /// Advance timers. Returns true if anything changed on screen.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.screen.tick(now)
    }

    /// Earliest instant the event loop must wake up for a debounce
    pub fn next_deadline(&self) -> Option<Instant> {
        self.screen.next_deadline()
    }

    /// True if the screen needs periodic redraws
    pub fn is_animating(&self) -> bool {
        self.screen.is_animating()
    }

    /// Current spinner frame index at `now`
    pub fn spinner_frame(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_millis() / SPINNER_INTERVAL.as_millis()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Accessory, Alert};
    use crossterm::event::KeyEventState;

    const WINDOW: Duration = Duration::from_millis(1000);

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
    }

    struct TestApp {
        app: App,
        t0: Instant,
    }

    impl TestApp {
        fn new() -> Self {
            let t0 = Instant::now();
            Self {
                app: App::new(&LoginConfig::default(), t0),
                t0,
            }
        }

        /// Type credentials the way a user would and wait out the debounce
        fn login_with(&mut self, email: &str, password: &str) {
            let t0 = self.t0;
            type_text(&mut self.app, email, t0);
            self.app.handle_key(key(KeyCode::Enter), t0);
            type_text(&mut self.app, password, t0);
            self.app.tick(t0 + WINDOW);
        }
    }

    mod app_basic_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            let t = TestApp::new();
            assert!(!t.app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut t = TestApp::new();
            t.app.handle_key(ctrl('c'), t.t0);
            assert!(t.app.should_quit());
        }

        #[test]
        fn test_esc_quits_without_alert() {
            let mut t = TestApp::new();
            t.app.handle_key(key(KeyCode::Esc), t.t0);
            assert!(t.app.should_quit());
        }

        #[test]
        fn test_uses_configured_debounce() {
            let t0 = Instant::now();
            let config = LoginConfig {
                debounce_ms: Some(200),
                ..Default::default()
            };
            let app = App::new(&config, t0);
            assert_eq!(app.next_deadline(), Some(t0 + Duration::from_millis(200)));
        }

        #[test]
        fn test_spinner_frame_advances() {
            let t = TestApp::new();
            assert_eq!(t.app.spinner_frame(t.t0), 0);
            assert_eq!(t.app.spinner_frame(t.t0 + SPINNER_INTERVAL * 3), 3);
        }
    }

    mod input_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_goes_to_focused_field() {
            let mut t = TestApp::new();
            type_text(&mut t.app, "me@x.io", t.t0);
            t.app.handle_key(key(KeyCode::Tab), t.t0);
            type_text(&mut t.app, "pw", t.t0);

            assert_eq!(t.app.screen.form.email.as_text(), "me@x.io");
            assert_eq!(t.app.screen.form.password.as_text(), "pw");
        }

        #[test]
        fn test_focus_cycles_with_tab_and_arrows() {
            let mut t = TestApp::new();
            t.app.handle_key(key(KeyCode::Down), t.t0);
            assert_eq!(
                t.app.screen.form.active_login_field(),
                Some(LoginField::Password)
            );
            t.app.handle_key(key(KeyCode::Tab), t.t0);
            assert!(t.app.screen.form.is_button_active());
            t.app.handle_key(key(KeyCode::BackTab), t.t0);
            t.app.handle_key(key(KeyCode::Up), t.t0);
            assert_eq!(t.app.screen.form.active_login_field(), Some(LoginField::Email));
        }

        #[test]
        fn test_enter_on_email_moves_to_password() {
            let mut t = TestApp::new();
            t.app.handle_key(key(KeyCode::Enter), t.t0);
            assert_eq!(
                t.app.screen.form.active_login_field(),
                Some(LoginField::Password)
            );
            assert!(!t.app.screen.alert.is_presented());
        }

        #[test]
        fn test_backspace_and_ctrl_u() {
            let mut t = TestApp::new();
            type_text(&mut t.app, "abc", t.t0);
            t.app.handle_key(key(KeyCode::Backspace), t.t0);
            assert_eq!(t.app.screen.form.email.as_text(), "ab");
            t.app.handle_key(ctrl('u'), t.t0);
            assert_eq!(t.app.screen.form.email.as_text(), "");
        }

        #[test]
        fn test_alt_chars_are_not_typed() {
            let mut t = TestApp::new();
            t.app
                .handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), t.t0);
            assert_eq!(t.app.screen.form.email.as_text(), "");
        }

        #[test]
        fn test_key_release_is_ignored() {
            let mut t = TestApp::new();
            let release = KeyEvent {
                code: KeyCode::Char('a'),
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Release,
                state: KeyEventState::NONE,
            };
            t.app.handle_event(Event::Key(release), t.t0);
            assert_eq!(t.app.screen.form.email.as_text(), "");
        }

        #[test]
        fn test_paste_event_appends() {
            let mut t = TestApp::new();
            t.app
                .handle_event(Event::Paste("user@test.com".to_string()), t.t0);
            assert_eq!(t.app.screen.form.email.as_text(), "user@test.com");
        }

        #[test]
        fn test_accessories_follow_validation() {
            let mut t = TestApp::new();
            t.login_with("user@test.com", "short");
            assert_eq!(t.app.screen.form.email.accessory(), Accessory::Checkmark);
            assert_eq!(t.app.screen.form.password.accessory(), Accessory::Spinner);
            assert!(t.app.is_animating());
        }
    }

    mod submit_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_login_shows_success() {
            let mut t = TestApp::new();
            t.login_with("user@test.com", "abcdefg1");
            // Enter on the password field submits
            t.app.handle_key(key(KeyCode::Enter), t.t0 + WINDOW);
            assert_eq!(t.app.screen.alert.current(), Some(&Alert::logged_in()));
        }

        #[test]
        fn test_bad_email_shows_failure() {
            let mut t = TestApp::new();
            t.login_with("bad-email", "abcdefg1");
            t.app.handle_key(ctrl('s'), t.t0 + WINDOW);
            assert_eq!(
                t.app.screen.alert.current(),
                Some(&Alert::check_information())
            );
        }

        #[test]
        fn test_button_activation_submits() {
            let mut t = TestApp::new();
            t.login_with("user@test.com", "abcdefg1");
            t.app.handle_key(key(KeyCode::Tab), t.t0 + WINDOW);
            t.app.handle_key(key(KeyCode::Char(' ')), t.t0 + WINDOW);
            assert_eq!(t.app.screen.alert.current(), Some(&Alert::logged_in()));
        }

        #[test]
        fn test_alert_is_modal_and_dismissed_by_enter() {
            let mut t = TestApp::new();
            t.app.handle_key(ctrl('s'), t.t0);
            assert!(t.app.screen.alert.is_presented());

            // Typing is swallowed while the alert is up
            type_text(&mut t.app, "zz", t.t0);
            assert_eq!(t.app.screen.form.email.as_text(), "");

            t.app.handle_key(key(KeyCode::Enter), t.t0);
            assert!(!t.app.screen.alert.is_presented());
            assert!(!t.app.should_quit());
        }

        #[test]
        fn test_esc_dismisses_alert_without_quitting() {
            let mut t = TestApp::new();
            t.app.handle_key(ctrl('s'), t.t0);
            t.app.handle_key(key(KeyCode::Esc), t.t0);
            assert!(!t.app.screen.alert.is_presented());
            assert!(!t.app.should_quit());
        }
    }
}
