//! # keygate-core
//!
//! Core logic for the `KeyGate` login demo.
//!
//! This crate provides:
//! - **Credential store** - built-in account plus registered accounts, login
//!   lookup and validated registration
//! - **Password policy** - length, uppercase and symbol rules evaluated on
//!   every keystroke
//! - **Persistence slots** - in-memory and file-backed storage for the
//!   registered accounts
//!
//! Passwords are stored and compared in plaintext. Do not use this for real
//! authentication.
//!
//! ## Example
//!
//! ```
//! use keygate_core::{CredentialStore, MemorySlot, PasswordPolicy};
//!
//! let mut store = CredentialStore::open(MemorySlot::new());
//! assert!(store.login("demo", "Demo@123").is_ok());
//!
//! assert!(PasswordPolicy::evaluate("Abc12345!").is_satisfied());
//! store.register("newuser", "Abc12345!", "Abc12345!").unwrap();
//! assert!(store.login("newuser", "Abc12345!").is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
mod error;
pub mod policy;
pub mod storage;

pub use account::{Account, CredentialStore, DEFAULT_PASSWORD, DEFAULT_USERNAME, StoreEvent};
pub use error::{AuthError, RegistrationError, StorageError, StorageResult};
pub use policy::{PasswordPolicy, PasswordValidationResult, StrengthRule};
pub use storage::{FileSlot, MemorySlot, PersistenceSlot, USERS_SLOT};
