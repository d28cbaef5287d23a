//! Reactive validation pipeline for the login form
//!
//! Each input is debounced, mapped through its validator and multicast with
//! replay. The two per-field results feed the accessory slots and a
//! latest-value AND whose every emission is written to the [`FormGate`].

use super::forms::{Accessory, AccessorySlot, LoginField};
use crate::reactive::{combine_latest, Debouncer, DisposeBag, ReplaySubject};
use crate::validation::{validate_email, validate_password};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default quiet window before an edit is validated
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Validator applied to a field's debounced text
pub type Validator = Box<dyn Fn(&str) -> bool>;

/// Overall form submittability. Written by the pipeline, read once at
/// submit time.
#[derive(Debug, Clone, Default)]
pub struct FormGate(Rc<Cell<bool>>);

impl FormGate {
    pub fn get(&self) -> bool {
        self.0.get()
    }

    fn set(&self, open: bool) {
        self.0.set(open);
    }
}

/// Validators for both fields
pub struct Validators {
    pub email: Validator,
    pub password: Validator,
}

impl Default for Validators {
    fn default() -> Self {
        Self {
            email: Box::new(validate_email),
            password: Box::new(validate_password),
        }
    }
}

/// One input stream: its debounce stage, validator and result subject
struct FieldStream {
    input: Debouncer<String>,
    validator: Validator,
    valid: ReplaySubject<bool>,
}

impl FieldStream {
    fn new(window: Duration, validator: Validator) -> Self {
        Self {
            input: Debouncer::new(window),
            validator,
            valid: ReplaySubject::new(),
        }
    }

    /// Validate and emit if the debounce window has elapsed
    fn poll(&mut self, field: LoginField, now: Instant) -> bool {
        let Some(text) = self.input.poll(now) else {
            return false;
        };
        let valid = (self.validator)(&text);
        debug!(?field, valid, "Debounced validation");
        self.valid.next(valid);
        true
    }
}

pub struct ValidationPipeline {
    email: FieldStream,
    password: FieldStream,
    everything_valid: ReplaySubject<bool>,
    gate: FormGate,
    bag: DisposeBag,
}

impl ValidationPipeline {
    /// Build the pipeline with the standard validators, writing feedback
    /// into the given accessory slots
    pub fn new(window: Duration, email_slot: AccessorySlot, password_slot: AccessorySlot) -> Self {
        Self::with_validators(window, Validators::default(), email_slot, password_slot)
    }

    pub fn with_validators(
        window: Duration,
        validators: Validators,
        email_slot: AccessorySlot,
        password_slot: AccessorySlot,
    ) -> Self {
        let email = FieldStream::new(window, validators.email);
        let password = FieldStream::new(window, validators.password);
        let gate = FormGate::default();
        let mut bag = DisposeBag::new();

        let (everything_valid, upstream) =
            combine_latest(&email.valid, &password.valid, |e: &bool, p: &bool| *e && *p);
        for subscription in upstream {
            subscription.disposed_by(&mut bag);
        }

        {
            let gate = gate.clone();
            everything_valid
                .subscribe(move |open: &bool| {
                    debug!(open, "everythingValid");
                    gate.set(*open);
                })
                .disposed_by(&mut bag);
        }

        email
            .valid
            .subscribe(accessory_feedback(email_slot))
            .disposed_by(&mut bag);
        password
            .valid
            .subscribe(accessory_feedback(password_slot))
            .disposed_by(&mut bag);

        Self {
            email,
            password,
            everything_valid,
            gate,
            bag,
        }
    }

    fn stream_mut(&mut self, field: LoginField) -> &mut FieldStream {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Feed the full current text of `field` after an edit
    pub fn text_changed(&mut self, field: LoginField, text: &str, now: Instant) {
        self.stream_mut(field).input.push(text.to_string(), now);
    }

    /// Fire any debounce windows that have elapsed at `now`. Returns true if
    /// at least one validation ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let email = self.email.poll(LoginField::Email, now);
        let password = self.password.poll(LoginField::Password, now);
        let ran = email || password;
        if ran {
            debug!(everything_valid = ?self.everything_valid.value(), "Validation tick");
        }
        ran
    }

    /// The earliest pending debounce deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.email.input.deadline(), self.password.input.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// True while an edit is waiting out its debounce window. Submitting now
    /// reads the gate as it was before that edit.
    pub fn has_pending(&self) -> bool {
        self.email.input.is_pending() || self.password.input.is_pending()
    }

    /// Per-field validity stream
    #[cfg(test)]
    pub fn validity(&self, field: LoginField) -> &ReplaySubject<bool> {
        match field {
            LoginField::Email => &self.email.valid,
            LoginField::Password => &self.password.valid,
        }
    }

    /// Combined validity stream
    #[cfg(test)]
    pub fn everything_valid(&self) -> &ReplaySubject<bool> {
        &self.everything_valid
    }

    pub fn gate(&self) -> &FormGate {
        &self.gate
    }

    /// Release every subscription; the gate and accessories stop updating.
    /// Dropping the pipeline does the same.
    pub fn dispose(&mut self) {
        self.bag.dispose();
    }
}

/// Checkmark on a valid result, spinner otherwise
fn accessory_feedback(slot: AccessorySlot) -> impl FnMut(&bool) + 'static {
    move |valid: &bool| {
        slot.set(if *valid {
            Accessory::Checkmark
        } else {
            Accessory::Spinner
        });
    }
}
