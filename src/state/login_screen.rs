//! The login screen: form, validation pipeline and alert

use super::alert::{present_login_result, Alert, ModalAlert};
use super::forms::{Accessory, Form, FormField, LoginField, LoginForm};
use super::validation_pipeline::ValidationPipeline;
use std::time::{Duration, Instant};
use tracing::debug;

/// Navigation bar title
pub const SCREEN_TITLE: &str = "Login";
/// Banner shown above the form
pub const BANNER_TITLE: &str = "Rx Login";

/// The single presentable unit of the application. Dropping it tears down
/// every pipeline subscription.
pub struct LoginScreen {
    pub form: LoginForm,
    pub alert: ModalAlert,
    pipeline: ValidationPipeline,
}

impl LoginScreen {
    /// Build the screen and feed both fields' initial (empty) text into the
    /// pipeline, as a text source does on first subscription.
    pub fn new(debounce: Duration, mask_password: bool, now: Instant) -> Self {
        let form = LoginForm::new(mask_password);
        let mut pipeline = ValidationPipeline::new(
            debounce,
            form.email.accessory_slot(),
            form.password.accessory_slot(),
        );
        pipeline.text_changed(LoginField::Email, form.email.as_text(), now);
        pipeline.text_changed(LoginField::Password, form.password.as_text(), now);

        Self {
            form,
            alert: ModalAlert::default(),
            pipeline,
        }
    }

    #[cfg(test)]
    pub fn pipeline(&self) -> &ValidationPipeline {
        &self.pipeline
    }

    /// Apply `edit` to the focused field and push the resulting text
    /// downstream. No-op when the Login button is focused.
    fn edit_active_field(&mut self, now: Instant, edit: impl FnOnce(&mut FormField)) {
        let Some(field) = self.form.active_login_field() else {
            return;
        };
        let input = self.form.field_mut(field);
        edit(input);
        let text = input.as_text().to_string();
        self.pipeline.text_changed(field, &text, now);
    }

    pub fn input_char(&mut self, c: char, now: Instant) {
        self.edit_active_field(now, |field| field.push_char(c));
    }

    pub fn backspace(&mut self, now: Instant) {
        self.edit_active_field(now, |field| {
            field.pop_char();
        });
    }

    pub fn clear_field(&mut self, now: Instant) {
        self.edit_active_field(now, |field| field.clear());
    }

    /// Append pasted text to the focused field as a single edit
    pub fn paste(&mut self, text: &str, now: Instant) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        self.edit_active_field(now, |field| field.push_str(&text));
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    /// Read the form gate as it stands and present the matching alert.
    /// Edits still inside their debounce window are not reflected.
    pub fn submit(&mut self) {
        let gate_open = self.pipeline.gate().get();
        if self.pipeline.has_pending() {
            debug!(gate_open, "Submitted with validation pending");
        }
        present_login_result(gate_open, &mut self.alert);
    }

    /// Tear down the pipeline. The form keeps its last accessories.
    pub fn close(&mut self) {
        self.pipeline.dispose();
    }

    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alert.dismiss()
    }

    /// Advance the pipeline clock. Returns true if any validation ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.pipeline.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pipeline.next_deadline()
    }

    /// True if a spinner is currently on screen
    pub fn is_animating(&self) -> bool {
        self.form.active_login_field().is_some_and(|field| {
            self.form.field(field).visible_accessory(true) == Accessory::Spinner
        })
    }
}
