//! Application state module

mod alert;
mod forms;
mod login_screen;
mod validation_pipeline;

pub use alert::*;
pub use forms::*;
pub use login_screen::*;
pub use validation_pipeline::*;
