//! Account model types.

use serde::{Deserialize, Serialize};

/// Username of the built-in account.
pub const DEFAULT_USERNAME: &str = "demo";

/// Password of the built-in account.
pub const DEFAULT_PASSWORD: &str = "Demo@123";

/// A username/password pair recognized for login.
///
/// Passwords are kept in plaintext; this is a demonstration store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Login name, unique within a store.
    pub username: String,
    /// Login password.
    pub password: String,
}

impl Account {
    /// Create a new account.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create the built-in account that every store contains.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }

    /// Returns true if both fields equal the inputs exactly.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_account() {
        let account = Account::builtin();
        assert_eq!(account.username, "demo");
        assert_eq!(account.password, "Demo@123");
    }

    #[test]
    fn test_matches_is_exact() {
        let account = Account::new("alice", "Secret!23");
        assert!(account.matches("alice", "Secret!23"));
        assert!(!account.matches("Alice", "Secret!23"));
        assert!(!account.matches("alice ", "Secret!23"));
        assert!(!account.matches("alice", "secret!23"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let account = Account::new("alice", "Secret!23");
        let debug = format!("{account:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("Secret!23"));
    }

    #[test]
    fn test_serialized_shape() {
        let account = Account::new("alice", "Secret!23");
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, r#"{"username":"alice","password":"Secret!23"}"#);

        let parsed: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, account);
    }
}
