//! Modal result alert

use tracing::info;

/// Title of the single acknowledge action
pub const ACKNOWLEDGE_TITLE: &str = "OK";

/// A modal alert with one acknowledge action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Shown when the form gate is open at submit time
    pub fn logged_in() -> Self {
        Self::new("Congratulations", "You are logged in.")
    }

    /// Shown when the form gate is closed at submit time
    pub fn check_information() -> Self {
        Self::new("Sorry", "Check the information you entered.")
    }
}

/// Something that can put an alert in front of the user
#[cfg_attr(test, mockall::automock)]
pub trait AlertPresenter {
    fn present(&mut self, alert: Alert);
}

/// The login screen's alert slot. At most one alert is shown at a time.
#[derive(Debug, Clone, Default)]
pub struct ModalAlert {
    current: Option<Alert>,
}

impl ModalAlert {
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub fn is_presented(&self) -> bool {
        self.current.is_some()
    }

    /// Acknowledge and close the alert
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.current.take()
    }
}

impl AlertPresenter for ModalAlert {
    fn present(&mut self, alert: Alert) {
        self.current = Some(alert);
    }
}

/// Branch on the form gate value read at submit time
pub fn present_login_result(gate_open: bool, presenter: &mut dyn AlertPresenter) {
    let alert = if gate_open {
        Alert::logged_in()
    } else {
        Alert::check_information()
    };
    info!(gate_open, title = %alert.title, "Login submitted");
    presenter.present(alert);
}
