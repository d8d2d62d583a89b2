//! Data models for the login demo.

mod forms;
mod settings;

pub use forms::{LoginForm, RegistrationForm, RegistrationStatus};
pub use settings::AppSettings;
