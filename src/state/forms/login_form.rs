//! Login form state and focus handling

use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The two validated inputs of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn index(self) -> usize {
        match self {
            Self::Email => 0,
            Self::Password => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Email),
            1 => Some(Self::Password),
            _ => None,
        }
    }
}

/// Email, password and the Login button row
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl LoginForm {
    /// Index of the Login button row
    pub const BUTTON_INDEX: usize = 2;

    pub fn new(mask_password: bool) -> Self {
        let mut password = FormField::secure("Password", "Enter password...");
        password.is_secure = mask_password;
        Self {
            email: FormField::text("Email", "Enter email..."),
            password,
            active_field_index: 0,
        }
    }

    /// Returns true if the Login button is currently focused
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == Self::BUTTON_INDEX
    }

    /// The input currently being edited, if focus is on a field
    pub fn active_login_field(&self) -> Option<LoginField> {
        LoginField::from_index(self.active_field_index)
    }

    pub fn field(&self, field: LoginField) -> &FormField {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, field: LoginField) -> &mut FormField {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    #[cfg(test)]
    pub fn focus(&mut self, field: LoginField) {
        self.set_active_field(field.index());
    }

    #[cfg(test)]
    pub fn focus_button(&mut self) {
        self.set_active_field(Self::BUTTON_INDEX);
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        3 // email, password, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTON_INDEX);
    }
}
