//! Events emitted by the credential store.

/// Follow-up signal queued by the store after a state change.
///
/// The store owns no timers; the caller drains events with
/// [`CredentialStore::take_events`](super::CredentialStore::take_events) and
/// decides how and when to act on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new account was committed; the UI may return to the login screen.
    ReturnToLogin {
        /// Username of the account that was created.
        username: String,
    },
}
