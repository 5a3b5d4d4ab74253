//! Session credential accessor.

use crate::error::{Error, Result};
use crate::storage::{KeyValueStore, MemoryStore};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key holding the session credential.
pub const TOKEN_KEY: &str = "token";

/// An opaque, non-empty session token.
///
/// Presence of a credential is treated as proof of authentication. Nothing
/// about its content is inspected.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap `token`, rejecting the empty string.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::EmptyCredential);
        }
        Ok(Self(token))
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw token.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

/// Handle to the session credential in an injected store.
///
/// Cloning is cheap and every clone sees the same store, so a sign-out done
/// through one handle is visible to the guard holding another.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    /// Create a session over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Create a session over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The stored credential, or `None` when absent.
    ///
    /// A store that cannot be read yields `None`: an unreadable session is an
    /// unauthenticated session. Empty stored values are also absent.
    pub fn get_credential(&self) -> Option<Credential> {
        match self.store.read(TOKEN_KEY) {
            Ok(Some(token)) => Credential::new(token).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Session store unreadable, treating credential as absent");
                None
            }
        }
    }

    /// Persist `token`, replacing any prior credential.
    pub fn set_credential(&self, token: impl Into<String>) -> Result<()> {
        let credential = Credential::new(token)?;
        self.store.write(TOKEN_KEY, credential.as_str())?;
        debug!("Session credential stored");
        Ok(())
    }

    /// Remove the credential. Clearing an absent credential is a no-op.
    ///
    /// A store that refuses the removal gets an empty value written instead,
    /// which reads as absent. The error is returned only when both fail.
    pub fn clear_credential(&self) -> Result<()> {
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            warn!(error = %e, "Session store refused removal, blanking credential");
            self.store.write(TOKEN_KEY, "")?;
        }
        debug!("Session credential cleared");
        Ok(())
    }

    /// Whether a credential is present.
    pub fn is_authenticated(&self) -> bool {
        self.get_credential().is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
