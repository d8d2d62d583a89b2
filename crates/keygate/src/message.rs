//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch between the Login and Register tabs.
    SelectTab(Tab),
    /// Login form messages.
    Login(LoginMessage),
    /// Registration form messages.
    Register(RegisterMessage),
    /// Leave the welcome screen.
    LogOut,
    /// Delayed switch back to the Login tab after a registration.
    ReturnToLogin,
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
}

/// Login form messages.
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Username field changed.
    UsernameChanged(String),
    /// Password field changed.
    PasswordChanged(String),
    /// Submit the form.
    Submit,
}

/// Registration form messages.
#[derive(Debug, Clone)]
pub enum RegisterMessage {
    /// Username field changed.
    UsernameChanged(String),
    /// Password field changed.
    PasswordChanged(String),
    /// Confirm password field changed.
    ConfirmPasswordChanged(String),
    /// Submit the form.
    Submit,
}

/// Form tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Login form.
    #[default]
    Login,
    /// Registration form.
    Register,
}
