//! Account management module.
//!
//! Provides the account model and the credential store.

mod event;
mod model;
mod store;

pub use event::StoreEvent;
pub use model::{Account, DEFAULT_PASSWORD, DEFAULT_USERNAME};
pub use store::CredentialStore;
