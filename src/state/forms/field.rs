//! Form field value objects

use std::cell::Cell;
use std::rc::Rc;

/// Mask character shown in place of secure-entry text
pub const SECURE_MASK: char = '•';

/// What a field shows in its trailing accessory slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accessory {
    #[default]
    None,
    /// Value passed validation; always visible
    Checkmark,
    /// Value failed validation; animated, only visible while editing
    Spinner,
}

/// Shared trailing-accessory slot. The UI reads it, the validation
/// feedback subscribers overwrite it.
pub type AccessorySlot = Rc<Cell<Accessory>>;

/// A single text input with its configuration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    /// Render the value masked
    pub is_secure: bool,
    accessory: AccessorySlot,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_secure: false,
            accessory: AccessorySlot::default(),
        }
    }

    /// Create a new secure-entry field
    pub fn secure(label: &str, placeholder: &str) -> Self {
        Self {
            is_secure: true,
            ..Self::text(label, placeholder)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.value.push_str(s);
    }

    /// Remove the last character. Returns false if the field was empty.
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secure {
            std::iter::repeat(SECURE_MASK)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }

    /// Handle to the accessory slot, for wiring feedback subscribers
    pub fn accessory_slot(&self) -> AccessorySlot {
        Rc::clone(&self.accessory)
    }

    pub fn accessory(&self) -> Accessory {
        self.accessory.get()
    }

    /// The accessory as it should currently be drawn: the spinner only shows
    /// while the field is being edited.
    pub fn visible_accessory(&self, is_editing: bool) -> Accessory {
        match self.accessory() {
            Accessory::Spinner if !is_editing => Accessory::None,
            accessory => accessory,
        }
    }
}
