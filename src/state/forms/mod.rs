//! Form domain layer

mod field;
mod login_form;

pub use field::{Accessory, AccessorySlot, FormField};
pub use login_form::{Form, LoginField, LoginForm};
