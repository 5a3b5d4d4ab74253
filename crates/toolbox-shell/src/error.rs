//! Error types for toolbox-shell.

use crate::route::ViewId;
use thiserror::Error;

/// Result type for toolbox-shell operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in toolbox-shell operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The backing key-value store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// An empty string was offered as a session credential.
    #[error("Credential must not be empty")]
    EmptyCredential,

    /// A view received an action it does not expose.
    #[error("View '{view}' does not support action '{action}'")]
    UnsupportedAction {
        /// View that received the action.
        view: ViewId,
        /// Short name of the rejected action.
        action: &'static str,
    },

    /// Serialization error in a persisted store.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
