//! Credential store.

use tracing::{debug, warn};

use super::event::StoreEvent;
use super::model::Account;
use crate::error::{AuthError, RegistrationError};
use crate::policy::PasswordPolicy;
use crate::storage::PersistenceSlot;

/// Holds the known accounts and keeps the persisted ones in sync with a slot.
///
/// The visible account set is always the built-in account followed by the
/// persisted accounts, in the order they were registered.
pub struct CredentialStore<S> {
    slot: S,
    default_account: Account,
    persisted: Vec<Account>,
    events: Vec<StoreEvent>,
}

impl<S: PersistenceSlot> CredentialStore<S> {
    /// Open a store over `slot`, loading any persisted accounts.
    #[must_use]
    pub fn open(slot: S) -> Self {
        let persisted = Self::load(&slot);
        debug!("Opened credential store with {} saved accounts", persisted.len());
        Self {
            slot,
            default_account: Account::builtin(),
            persisted,
            events: Vec::new(),
        }
    }

    /// Read the persisted accounts from `slot`.
    ///
    /// An absent entry, a failed read and unparsable contents all yield an
    /// empty list.
    #[must_use]
    pub fn load(slot: &S) -> Vec<Account> {
        let contents = match slot.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read saved accounts: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!("Ignoring malformed saved accounts: {e}");
                Vec::new()
            }
        }
    }

    /// Find the account matching both credentials exactly.
    ///
    /// Inputs are compared verbatim: case-sensitive, untrimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if no account matches, whether
    /// the username is unknown or the password is wrong.
    pub fn login(&self, username: &str, password: &str) -> Result<Account, AuthError> {
        self.accounts()
            .find(|account| account.matches(username, password))
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Validate and persist a new account.
    ///
    /// Checks run in a fixed order and only the first failure is reported:
    /// duplicate username, then confirmation mismatch, then password strength.
    /// The slot is written only after every check passes, and the in-memory
    /// accounts change only after the write succeeds.
    ///
    /// On success a [`StoreEvent::ReturnToLogin`] is queued.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`RegistrationError`].
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Account, RegistrationError> {
        if self.contains_username(username) {
            return Err(RegistrationError::UsernameTaken);
        }

        if password != confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }

        let strength = PasswordPolicy::evaluate(password);
        if !PasswordPolicy::is_satisfied(&strength) {
            return Err(RegistrationError::WeakPassword(strength));
        }

        let account = Account::new(username, password);
        let mut updated: Vec<Account> = self
            .persisted
            .iter()
            .filter(|a| a.username != self.default_account.username)
            .cloned()
            .collect();
        updated.push(account.clone());

        let payload = serde_json::to_string(&updated).map_err(crate::StorageError::from)?;
        self.slot.write(&payload)?;

        self.persisted = updated;
        self.events.push(StoreEvent::ReturnToLogin {
            username: account.username.clone(),
        });
        debug!("Registered account {}", account.username);
        Ok(account)
    }

    /// Returns true if any visible account uses `username`.
    #[must_use]
    pub fn contains_username(&self, username: &str) -> bool {
        self.accounts().any(|account| account.username == username)
    }
}

impl<S> CredentialStore<S> {
    /// Iterate over the visible accounts, built-in account first.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        std::iter::once(&self.default_account).chain(self.persisted.iter())
    }

    /// Get the accounts loaded from or written to the slot.
    #[must_use]
    pub fn persisted(&self) -> &[Account] {
        &self.persisted
    }

    /// Get the built-in account.
    #[must_use]
    pub const fn default_account(&self) -> &Account {
        &self.default_account
    }

    /// Drain the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Get the underlying slot.
    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Consume the store and return its slot.
    #[must_use]
    pub fn into_slot(self) -> S {
        self.slot
    }
}

impl<S> std::fmt::Debug for CredentialStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("default_account", &self.default_account)
            .field("persisted", &self.persisted)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::needless_collect,
    clippy::similar_names
)]
mod tests {
    use super::*;
    use crate::account::model::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
    use crate::error::{StorageError, StorageResult};
    use crate::storage::MemorySlot;

    /// Slot that accepts reads but refuses every write.
    #[derive(Default)]
    struct ReadOnlySlot {
        contents: Option<String>,
    }

    impl PersistenceSlot for ReadOnlySlot {
        fn read(&self) -> StorageResult<Option<String>> {
            Ok(self.contents.clone())
        }

        fn write(&mut self, _contents: &str) -> StorageResult<()> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    /// Slot whose reads always fail.
    struct UnreadableSlot;

    impl PersistenceSlot for UnreadableSlot {
        fn read(&self) -> StorageResult<Option<String>> {
            Err(StorageError::Io(std::io::Error::other("unavailable")))
        }

        fn write(&mut self, _contents: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    fn usernames<S>(store: &CredentialStore<S>) -> Vec<String> {
        store.accounts().map(|a| a.username.clone()).collect()
    }

    mod load_tests {
        use super::*;

        #[test]
        fn empty_slot() {
            assert!(CredentialStore::load(&MemorySlot::new()).is_empty());
        }

        #[test]
        fn malformed_contents() {
            let slot = MemorySlot::with_contents("{not json");
            assert!(CredentialStore::load(&slot).is_empty());
        }

        #[test]
        fn wrong_shape() {
            let slot = MemorySlot::with_contents(r#"{"username":"a","password":"b"}"#);
            assert!(CredentialStore::load(&slot).is_empty());
        }

        #[test]
        fn unreadable_slot() {
            assert!(CredentialStore::load(&UnreadableSlot).is_empty());
        }

        #[test]
        fn saved_accounts_in_order() {
            let slot = MemorySlot::with_contents(
                r#"[{"username":"b","password":"x"},{"username":"a","password":"y"}]"#,
            );
            let accounts = CredentialStore::load(&slot);
            assert_eq!(accounts, vec![Account::new("b", "x"), Account::new("a", "y")]);
        }
    }

    mod login_tests {
        use super::*;

        #[test]
        fn default_account() {
            let store = CredentialStore::open(MemorySlot::new());
            let account = store.login(DEFAULT_USERNAME, DEFAULT_PASSWORD).unwrap();
            assert_eq!(&account, store.default_account());
        }

        #[test]
        fn wrong_password_and_unknown_user_are_indistinguishable() {
            let store = CredentialStore::open(MemorySlot::new());
            let wrong_password = store.login(DEFAULT_USERNAME, "nope").unwrap_err();
            let unknown_user = store.login("nobody", DEFAULT_PASSWORD).unwrap_err();
            assert_eq!(wrong_password, AuthError::InvalidCredentials);
            assert_eq!(wrong_password, unknown_user);
        }

        #[test]
        fn inputs_are_not_normalized() {
            let store = CredentialStore::open(MemorySlot::new());
            assert!(store.login("Demo", DEFAULT_PASSWORD).is_err());
            assert!(store.login(" demo", DEFAULT_PASSWORD).is_err());
            assert!(store.login(DEFAULT_USERNAME, "Demo@123 ").is_err());
        }

        #[test]
        fn saved_account() {
            let slot = MemorySlot::with_contents(r#"[{"username":"alice","password":"pw"}]"#);
            let store = CredentialStore::open(slot);
            assert_eq!(store.login("alice", "pw").unwrap().username, "alice");
        }

        #[test]
        fn first_match_wins() {
            // Tampered storage may shadow the built-in account
            let slot = MemorySlot::with_contents(r#"[{"username":"demo","password":"Demo@123"}]"#);
            let store = CredentialStore::open(slot);
            let account = store.login(DEFAULT_USERNAME, DEFAULT_PASSWORD).unwrap();
            assert_eq!(&account, store.default_account());
        }
    }

    mod register_tests {
        use super::*;

        #[test]
        fn success_persists_and_allows_login() {
            let mut store = CredentialStore::open(MemorySlot::new());

            let account = store.register("newuser", "Abc12345!", "Abc12345!").unwrap();

            assert_eq!(account, Account::new("newuser", "Abc12345!"));
            assert_eq!(store.login("newuser", "Abc12345!").unwrap(), account);
            assert_eq!(
                store.slot().contents(),
                Some(r#"[{"username":"newuser","password":"Abc12345!"}]"#)
            );
        }

        #[test]
        fn duplicate_username() {
            let mut store = CredentialStore::open(MemorySlot::new());
            store.register("u1", "Abc12345!", "Abc12345!").unwrap();
            let before = usernames(&store);

            let err = store.register("u1", "Xyz98765?", "Xyz98765?").unwrap_err();

            assert!(matches!(err, RegistrationError::UsernameTaken));
            assert_eq!(usernames(&store), before);
        }

        #[test]
        fn default_username_is_taken() {
            let mut store = CredentialStore::open(MemorySlot::new());
            let err = store
                .register(DEFAULT_USERNAME, "Abc12345!", "Abc12345!")
                .unwrap_err();
            assert!(matches!(err, RegistrationError::UsernameTaken));
        }

        #[test]
        fn mismatch_with_two_strong_passwords() {
            let mut store = CredentialStore::open(MemorySlot::new());
            let err = store.register("bob", "Abc12345!", "Abc12345?").unwrap_err();
            assert!(matches!(err, RegistrationError::PasswordMismatch));
        }

        #[test]
        fn weak_password_reports_evaluation() {
            let mut store = CredentialStore::open(MemorySlot::new());
            let err = store.register("bob", "abc12345", "abc12345").unwrap_err();
            let RegistrationError::WeakPassword(result) = err else {
                panic!("expected WeakPassword");
            };
            assert!(result.length);
            assert!(!result.uppercase);
            assert!(!result.symbol);
        }

        #[test]
        fn duplicate_checked_before_mismatch() {
            let mut store = CredentialStore::open(MemorySlot::new());
            let err = store.register(DEFAULT_USERNAME, "a", "b").unwrap_err();
            assert!(matches!(err, RegistrationError::UsernameTaken));
        }

        #[test]
        fn mismatch_checked_before_strength() {
            let mut store = CredentialStore::open(MemorySlot::new());
            let err = store.register("bob", "weak", "other").unwrap_err();
            assert!(matches!(err, RegistrationError::PasswordMismatch));
        }

        #[test]
        fn rejected_registration_does_not_write() {
            let mut store = CredentialStore::open(MemorySlot::new());
            let _ = store.register("bob", "weak", "weak");
            assert!(store.slot().contents().is_none());
            assert!(store.persisted().is_empty());
            assert!(store.take_events().is_empty());
        }

        #[test]
        fn failed_write_leaves_store_unchanged() {
            let slot = ReadOnlySlot {
                contents: Some(r#"[{"username":"alice","password":"pw"}]"#.to_string()),
            };
            let mut store = CredentialStore::open(slot);

            let err = store.register("bob", "Abc12345!", "Abc12345!").unwrap_err();

            assert!(matches!(err, RegistrationError::Persistence(_)));
            assert_eq!(usernames(&store), vec!["demo", "alice"]);
            assert!(store.login("bob", "Abc12345!").is_err());
            assert!(store.take_events().is_empty());
        }

        #[test]
        fn quota_exceeded_leaves_store_unchanged() {
            let mut store = CredentialStore::open(MemorySlot::new().with_quota(16));

            let err = store.register("bob", "Abc12345!", "Abc12345!").unwrap_err();

            assert!(matches!(
                err,
                RegistrationError::Persistence(StorageError::QuotaExceeded { .. })
            ));
            assert!(store.persisted().is_empty());
            assert!(store.slot().contents().is_none());
        }

        #[test]
        fn appends_to_previous_accounts() {
            let slot = MemorySlot::with_contents(r#"[{"username":"alice","password":"pw"}]"#);
            let mut store = CredentialStore::open(slot);

            store.register("bob", "Abc12345!", "Abc12345!").unwrap();

            assert_eq!(
                store.persisted(),
                &[Account::new("alice", "pw"), Account::new("bob", "Abc12345!")]
            );
        }

        #[test]
        fn write_drops_tampered_default_entry() {
            let slot = MemorySlot::with_contents(
                r#"[{"username":"demo","password":"hijack"},{"username":"alice","password":"pw"}]"#,
            );
            let mut store = CredentialStore::open(slot);

            // Loaded entries are taken as-is
            assert_eq!(store.persisted().len(), 2);
            // ...but still count as taken usernames
            assert!(store.contains_username("alice"));

            store.register("bob", "Abc12345!", "Abc12345!").unwrap();

            let names: Vec<_> = store.persisted().iter().map(|a| a.username.as_str()).collect();
            assert_eq!(names, vec!["alice", "bob"]);
            assert!(!store.slot().contents().unwrap().contains("hijack"));
        }

        #[test]
        fn success_queues_return_to_login() {
            let mut store = CredentialStore::open(MemorySlot::new());
            store.register("bob", "Abc12345!", "Abc12345!").unwrap();

            assert_eq!(
                store.take_events(),
                vec![StoreEvent::ReturnToLogin {
                    username: "bob".to_string()
                }]
            );
            assert!(store.take_events().is_empty());
        }
    }

    mod accessor_tests {
        use super::*;

        #[test]
        fn default_account_listed_first() {
            let slot = MemorySlot::with_contents(r#"[{"username":"alice","password":"pw"}]"#);
            let store = CredentialStore::open(slot);
            assert_eq!(usernames(&store), vec!["demo", "alice"]);
        }

        #[test]
        fn reopen_round_trip() {
            let mut store = CredentialStore::open(MemorySlot::new());
            store.register("zed", "Abc12345!", "Abc12345!").unwrap();
            store.register("amy", "Xyz98765?", "Xyz98765?").unwrap();
            let before: Vec<Account> = store.accounts().cloned().collect();

            let reopened = CredentialStore::open(store.into_slot());
            let after: Vec<Account> = reopened.accounts().cloned().collect();

            assert_eq!(before, after);
        }

        #[test]
        fn debug_hides_passwords() {
            let mut store = CredentialStore::open(MemorySlot::new());
            store.register("bob", "Abc12345!", "Abc12345!").unwrap();
            let debug = format!("{store:?}");
            assert!(debug.contains("bob"));
            assert!(!debug.contains("Abc12345!"));
            assert!(!debug.contains("Demo@123"));
        }
    }
}
