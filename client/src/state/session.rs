#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use shell::SESSION_KEY;
use shell::storage::{KeyValueStore, StorageError};

/// Operator session established by the login screen.
///
/// There is no credential check; the callsign is display-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub callsign: Option<String>,
}

impl SessionState {
    /// Name shown in the header, falling back to a generic operator label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.callsign.as_deref().unwrap_or("OPERATOR")
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.callsign.is_some()
    }
}

/// Store the session flag is written to. Shared through context; the same
/// store backs the reporter.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Record a login: set the callsign and write the `user-auth` flag.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the flag cannot be written. The
    /// callsign is set either way.
    pub fn sign_in(&self, session: &mut SessionState, callsign: String) -> Result<(), StorageError> {
        session.callsign = Some(callsign);
        self.store.set(SESSION_KEY, "true")
    }
}
