//! # Stock Toolbox
//!
//! Server for the stock toolbox: a sign-in page, a tool launcher and the
//! stock-selection, backtesting and strategy-management pages behind it.
//!
//! Navigation, the route guard and view state come from the
//! [`toolbox_shell`] crate. This crate puts them on the web:
//!
//! 1. **Server-rendered pages** - each request runs a [`toolbox_shell::Shell`]
//!    against the browser's cookie session and returns HTML or a redirect
//! 2. **JSON API** - sign-in endpoints issuing the bearer token a browser
//!    front-end stores as its session credential
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use toolbox::{create_app, AppState, AuthService, ConfigManager, ToolboxConfig};
//!
//! let state = AppState {
//!     config_manager: Arc::new(ConfigManager::from_config(ToolboxConfig::default())),
//!     auth_service: Arc::new(AuthService::new("admin", "admin123")?),
//! };
//! let app = create_app(state);
//! ```
//!
//! ## Modules
//!
//! - [`api`] - JSON API handlers and routes
//! - [`auth`] - Account check and token issuing
//! - [`cli`] - Command-line interface
//! - [`pages`] - Server-rendered shell pages
//! - [`types`] - Common types and error handling
//! - [`utils`] - TOML configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Sign-in service.
pub mod auth;
/// Command-line interface.
pub mod cli;
/// Server-rendered shell pages.
pub mod pages;
/// Core types (requests, responses, errors).
#[allow(missing_docs)]
pub mod types;
/// Configuration utilities (TOML).
#[allow(missing_docs)]
pub mod utils;

// Re-export commonly used types
pub use auth::AuthService;
pub use types::{AppError, Result};
pub use utils::toml_config::{ConfigManager, ToolboxConfig};

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tower_sessions::{MemoryStore as CookieStore, SessionManagerLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// TOML-based infrastructure configuration
    pub config_manager: Arc<ConfigManager>,
    /// Account check and token issuing
    pub auth_service: Arc<AuthService>,
}

/// Build the full application router: shell pages, JSON API, health check,
/// with session, CORS and tracing layers applied.
///
/// The CORS allow-list is read from the live configuration on every request,
/// so [`ConfigManager::reload`] takes effect without a restart. Cookie
/// settings are fixed when the router is built.
pub fn create_app(state: AppState) -> Router {
    let config = state.config_manager.config();

    let session_layer = SessionManagerLayer::new(CookieStore::default())
        .with_name(config.session.cookie_name.clone())
        .with_secure(config.session.secure);

    let manager = state.config_manager.clone();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            manager.config().cors.allows(origin)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true);

    Router::new()
        .route("/login", get(pages::show).post(pages::login))
        .route("/logout", post(pages::logout))
        .route("/health", get(api::handlers::health::health))
        .nest("/api", api::routes::create_router())
        .fallback(pages::show)
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
