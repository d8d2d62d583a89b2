//! Login and registration form state.

use keygate_core::{Account, PasswordPolicy, PasswordValidationResult, RegistrationError};

/// Status line shown on the Register tab after a submit.
pub const REGISTRATION_SUCCESS: &str = "User successfully created! You can now log in.";

/// State for the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Username as typed.
    pub username: String,
    /// Password as typed.
    pub password: String,
    /// Error from the last submit.
    pub error: Option<String>,
}

impl LoginForm {
    /// Create a new empty login form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every required field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Outcome of the registration flow, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegistrationStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// The last submit failed.
    Rejected(String),
    /// The last submit created an account.
    Committed(String),
}

impl RegistrationStatus {
    /// Build the status for a registration result.
    #[must_use]
    pub fn from_result(result: &Result<Account, RegistrationError>) -> Self {
        match result {
            Ok(_) => Self::Committed(REGISTRATION_SUCCESS.to_string()),
            Err(e) => Self::Rejected(e.message()),
        }
    }

    /// Get the text to display, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Rejected(message) | Self::Committed(message) => Some(message.as_str()),
        }
    }

    /// Returns true for a successful registration.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// State for the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    /// Username as typed.
    pub username: String,
    /// Password as typed.
    pub password: String,
    /// Confirmation as typed.
    pub confirm_password: String,
    /// Strength evaluation of the current password.
    pub validation: PasswordValidationResult,
    /// Outcome of the last submit.
    pub status: RegistrationStatus,
}

impl RegistrationForm {
    /// Create a new empty registration form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the password and re-evaluate its strength.
    pub fn set_password(&mut self, password: String) {
        self.validation = PasswordPolicy::evaluate(&password);
        self.password = password;
    }

    /// Returns true if every required field has a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty() && !self.confirm_password.is_empty()
    }

    /// Clear the inputs, keeping the status line.
    pub fn clear_inputs(&mut self) {
        let status = std::mem::take(&mut self.status);
        *self = Self {
            status,
            ..Self::default()
        };
    }

    /// Record a registration result, clearing the inputs on success.
    pub fn apply_result(&mut self, result: &Result<Account, RegistrationError>) {
        self.status = RegistrationStatus::from_result(result);
        if result.is_ok() {
            self.clear_inputs();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;

    mod login_form_tests {
        use super::*;

        #[test]
        fn new_is_incomplete() {
            assert!(!LoginForm::new().is_complete());
        }

        #[test]
        fn requires_both_fields() {
            let mut form = LoginForm::new();
            form.username = "demo".to_string();
            assert!(!form.is_complete());
            form.password = "x".to_string();
            assert!(form.is_complete());
        }

        #[test]
        fn whitespace_counts_as_value() {
            let form = LoginForm {
                username: " ".to_string(),
                password: " ".to_string(),
                error: None,
            };
            assert!(form.is_complete());
        }
    }

    mod registration_form_tests {
        use super::*;

        #[test]
        fn password_change_reevaluates() {
            let mut form = RegistrationForm::new();
            form.set_password("abc".to_string());
            assert_eq!(form.validation, PasswordValidationResult::default());

            form.set_password("Abc12345!".to_string());
            assert!(form.validation.is_satisfied());

            form.set_password("Abc".to_string());
            assert!(form.validation.uppercase);
            assert!(!form.validation.length);
            assert!(!form.validation.symbol);
        }

        #[test]
        fn requires_all_fields() {
            let mut form = RegistrationForm::new();
            form.username = "bob".to_string();
            form.set_password("Abc12345!".to_string());
            assert!(!form.is_complete());
            form.confirm_password = "Abc12345!".to_string();
            assert!(form.is_complete());
        }

        #[test]
        fn success_clears_inputs() {
            let mut form = RegistrationForm::new();
            form.username = "bob".to_string();
            form.set_password("Abc12345!".to_string());
            form.confirm_password = "Abc12345!".to_string();

            form.apply_result(&Ok(Account::new("bob", "Abc12345!")));

            assert!(form.username.is_empty());
            assert!(form.password.is_empty());
            assert!(form.confirm_password.is_empty());
            assert!(!form.validation.is_satisfied());
            assert!(form.status.is_success());
            assert_eq!(form.status.message(), Some(REGISTRATION_SUCCESS));
        }

        #[test]
        fn failure_keeps_inputs() {
            let mut form = RegistrationForm::new();
            form.username = "demo".to_string();
            form.set_password("Abc12345!".to_string());
            form.confirm_password = "Abc12345!".to_string();

            form.apply_result(&Err(RegistrationError::UsernameTaken));

            assert_eq!(form.username, "demo");
            assert!(form.validation.is_satisfied());
            assert_eq!(
                form.status,
                RegistrationStatus::Rejected("Username already exists".to_string())
            );
            assert!(!form.status.is_success());
        }
    }

    mod status_tests {
        use super::*;

        #[test]
        fn idle_has_no_message() {
            assert_eq!(RegistrationStatus::Idle.message(), None);
        }

        #[test]
        fn rejected_message() {
            let status =
                RegistrationStatus::from_result(&Err(RegistrationError::PasswordMismatch));
            assert_eq!(status.message(), Some("Passwords do not match"));
        }
    }
}
