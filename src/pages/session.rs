//! Bridge between the browser session cookie and the shell's key-value session.
//!
//! `tower-sessions` is async and per-request; the shell's [`Session`] is a
//! synchronous accessor over a [`KeyValueStore`](toolbox_shell::KeyValueStore).
//! Each request copies the cookie session's `token` into an in-memory store,
//! runs the shell against it, then writes back whatever changed.

use crate::types::Result;
use std::sync::Arc;
use toolbox_shell::{MemoryStore, Session, TOKEN_KEY};
use tower_sessions::Session as CookieSession;

/// Per-request copy of the browser session.
pub struct SessionSnapshot {
    store: Arc<MemoryStore>,
    loaded: Option<String>,
}

impl SessionSnapshot {
    /// Read the credential out of the cookie session.
    ///
    /// A session backend that cannot be read yields an empty snapshot, so the
    /// request is treated as signed out.
    pub async fn load(cookie: &CookieSession) -> Self {
        let loaded = match cookie.get::<String>(TOKEN_KEY).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Session read failed, treating as signed out");
                None
            }
        };

        let store = MemoryStore::with_entries(loaded.clone().map(|token| (TOKEN_KEY, token)));
        Self {
            store: Arc::new(store),
            loaded,
        }
    }

    /// Shell session over this snapshot.
    pub fn session(&self) -> Session {
        Session::new(self.store.clone())
    }

    /// Write a changed credential back to the cookie session.
    ///
    /// The session id is rotated whenever a new credential is stored.
    pub async fn persist(&self, cookie: &CookieSession) -> Result<()> {
        let current = self.store.get(TOKEN_KEY);
        if current == self.loaded {
            return Ok(());
        }

        match current {
            Some(token) => {
                cookie.cycle_id().await?;
                cookie.insert(TOKEN_KEY, token).await?;
                tracing::debug!("Stored credential in browser session");
            }
            None => {
                cookie.remove::<String>(TOKEN_KEY).await?;
                tracing::debug!("Removed credential from browser session");
            }
        }
        Ok(())
    }
}
