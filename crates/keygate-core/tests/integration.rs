//! Integration tests for the credential store.
//!
//! These tests drive the store through its public API over file-backed slots
//! in a temporary directory.

#![allow(clippy::unwrap_used)]

use std::fs;

use keygate_core::{
    Account, AuthError, CredentialStore, DEFAULT_PASSWORD, DEFAULT_USERNAME, FileSlot,
    MemorySlot, PasswordPolicy, RegistrationError, StoreEvent,
};

fn visible(store: &CredentialStore<FileSlot>) -> Vec<Account> {
    store.accounts().cloned().collect()
}

#[test]
fn test_fresh_store_has_only_default_account() {
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::open(FileSlot::in_dir(dir.path()));

    assert_eq!(visible(&store), vec![Account::builtin()]);
    assert!(store.persisted().is_empty());
    assert_eq!(
        store.login(DEFAULT_USERNAME, DEFAULT_PASSWORD).unwrap(),
        Account::builtin()
    );
}

#[test]
fn test_register_then_login() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CredentialStore::open(FileSlot::in_dir(dir.path()));

    assert!(PasswordPolicy::evaluate("Abc12345!").is_satisfied());
    store.register("newuser", "Abc12345!", "Abc12345!").unwrap();

    let account = store.login("newuser", "Abc12345!").unwrap();
    assert_eq!(account.username, "newuser");
    assert_eq!(
        store.login("newuser", "abc12345!").unwrap_err(),
        AuthError::InvalidCredentials
    );
}

#[test]
fn test_file_contains_only_registered_accounts() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CredentialStore::open(FileSlot::in_dir(dir.path()));

    store.register("first", "Abc12345!", "Abc12345!").unwrap();
    store.register("second", "Xyz98765?", "Xyz98765?").unwrap();

    let raw = fs::read_to_string(dir.path().join("users.json")).unwrap();
    let saved: Vec<Account> = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        saved,
        vec![
            Account::new("first", "Abc12345!"),
            Account::new("second", "Xyz98765?"),
        ]
    );
    assert!(!raw.contains(DEFAULT_USERNAME));
}

#[test]
fn test_reopen_yields_identical_accounts() {
    let dir = tempfile::tempdir().unwrap();

    let before = {
        let mut store = CredentialStore::open(FileSlot::in_dir(dir.path()));
        store.register("zoe", "Abc12345!", "Abc12345!").unwrap();
        store.register("adam", "Xyz98765?", "Xyz98765?").unwrap();
        store.register("mia", "Qwe!rty12", "Qwe!rty12").unwrap();
        visible(&store)
    };

    let reopened = CredentialStore::open(FileSlot::in_dir(dir.path()));
    assert_eq!(visible(&reopened), before);

    let names: Vec<_> = before.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, vec!["demo", "zoe", "adam", "mia"]);
}

#[test]
fn test_reopened_store_rejects_existing_username() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = CredentialStore::open(FileSlot::in_dir(dir.path()));
        store.register("u1", "Abc12345!", "Abc12345!").unwrap();
    }

    let mut store = CredentialStore::open(FileSlot::in_dir(dir.path()));
    let before = visible(&store);
    let err = store.register("u1", "Xyz98765?", "Xyz98765?").unwrap_err();

    assert!(matches!(err, RegistrationError::UsernameTaken));
    assert_eq!(visible(&store), before);
}

#[test]
fn test_malformed_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("users.json"), "definitely not json").unwrap();

    let mut store = CredentialStore::open(FileSlot::in_dir(dir.path()));
    assert!(store.persisted().is_empty());

    // The next registration replaces the garbage
    store.register("fresh", "Abc12345!", "Abc12345!").unwrap();
    let reopened = CredentialStore::open(FileSlot::in_dir(dir.path()));
    assert_eq!(reopened.persisted(), &[Account::new("fresh", "Abc12345!")]);
}

#[test]
fn test_unwritable_location_reports_persistence_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let mut store = CredentialStore::open(FileSlot::in_dir(&blocker));
    let err = store.register("bob", "Abc12345!", "Abc12345!").unwrap_err();

    assert!(matches!(err, RegistrationError::Persistence(_)));
    assert!(err.field().is_none());
    assert!(store.persisted().is_empty());
    assert!(store.login("bob", "Abc12345!").is_err());
    assert!(store.take_events().is_empty());
}

#[test]
fn test_first_failing_check_is_reported() {
    let mut store = CredentialStore::open(MemorySlot::new());
    store.register("taken", "Abc12345!", "Abc12345!").unwrap();
    let _ = store.take_events();

    let cases = [
        (("taken", "weak", "other"), "Username already exists"),
        (("free", "weak", "other"), "Passwords do not match"),
        (("free", "weak", "weak"), "Please meet all password requirements"),
    ];

    for ((username, password, confirm), expected) in cases {
        let err = store.register(username, password, confirm).unwrap_err();
        assert_eq!(err.message(), expected);
    }
    assert!(store.take_events().is_empty());
}

#[test]
fn test_event_per_successful_registration() {
    let mut store = CredentialStore::open(MemorySlot::new());
    store.register("a1", "Abc12345!", "Abc12345!").unwrap();
    store.register("a2", "Abc12345!", "Abc12345!").unwrap();

    let events = store.take_events();
    assert_eq!(
        events,
        vec![
            StoreEvent::ReturnToLogin {
                username: "a1".to_string()
            },
            StoreEvent::ReturnToLogin {
                username: "a2".to_string()
            },
        ]
    );
}
