//! Error types for the core library.

use thiserror::Error;

use crate::policy::PasswordValidationResult;

/// Errors returned by [`CredentialStore::login`](crate::CredentialStore::login).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No account matches the username and password exactly.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Errors returned by [`CredentialStore::register`](crate::CredentialStore::register).
///
/// Only the first failing check is reported, in the order the variants appear.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The username belongs to an existing account, including the default one.
    #[error("Username already exists")]
    UsernameTaken,

    /// The password and its confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The password does not satisfy every strength rule.
    #[error("Please meet all password requirements")]
    WeakPassword(PasswordValidationResult),

    /// The persistence slot rejected the write.
    #[error("Could not save account: {0}")]
    Persistence(#[from] StorageError),
}

impl RegistrationError {
    /// Get human-readable error message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Get the registration form field this error relates to.
    ///
    /// Returns `None` for failures that are not caused by user input.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::UsernameTaken => Some("username"),
            Self::PasswordMismatch => Some("confirm_password"),
            Self::WeakPassword(_) => Some("password"),
            Self::Persistence(_) => None,
        }
    }
}

/// Errors raised by a [`PersistenceSlot`](crate::PersistenceSlot).
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The value does not fit in the slot.
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} available")]
    QuotaExceeded {
        /// Size of the rejected value in bytes.
        needed: usize,
        /// Capacity of the slot in bytes.
        quota: usize,
    },
}

/// Result type alias for persistence slot operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_messages() {
        assert_eq!(
            RegistrationError::UsernameTaken.message(),
            "Username already exists"
        );
        assert_eq!(
            RegistrationError::PasswordMismatch.message(),
            "Passwords do not match"
        );
        assert_eq!(
            RegistrationError::WeakPassword(PasswordValidationResult::default()).message(),
            "Please meet all password requirements"
        );
    }

    #[test]
    fn test_persistence_message_includes_cause() {
        let err = RegistrationError::from(StorageError::QuotaExceeded {
            needed: 120,
            quota: 64,
        });
        assert_eq!(
            err.message(),
            "Could not save account: Storage quota exceeded: 120 bytes needed, 64 available"
        );
    }

    #[test]
    fn test_registration_fields() {
        assert_eq!(RegistrationError::UsernameTaken.field(), Some("username"));
        assert_eq!(
            RegistrationError::PasswordMismatch.field(),
            Some("confirm_password")
        );
        assert_eq!(
            RegistrationError::WeakPassword(PasswordValidationResult::default()).field(),
            Some("password")
        );
        let io = std::io::Error::other("disk full");
        assert_eq!(RegistrationError::from(StorageError::from(io)).field(), None);
    }

    #[test]
    fn test_auth_error_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }
}
