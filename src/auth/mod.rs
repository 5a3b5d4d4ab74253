//! Sign-in for the toolbox
//!
//! A single configured account stands in for a user directory. A successful
//! sign-in yields an opaque bearer token that the front-end stores as the
//! session credential.
//!
//! # Security Features
//!
//! - **Password Hashing**: the configured password is kept only as an Argon2id hash
//! - **Tokens**: 32 random bytes, hex encoded
//!
//! # Configuration
//!
//! Configure via `toolbox.toml`:
//! ```toml
//! [auth]
//! username = "admin"
//! password_env = "TOOLBOX_PASSWORD"   # env var holding the password
//! ```

/// Password verification and token issuing.
pub mod service;

pub use service::AuthService;
