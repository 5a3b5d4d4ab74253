//! API request handlers.

/// Authentication handlers (form and JSON login).
pub mod auth;
/// Liveness and health handlers.
pub mod health;
