//! Shared helpers for the HTTP integration tests.

use axum::Router;
use std::sync::Arc;
use toolbox::{create_app, AppState, AuthService, ConfigManager, ToolboxConfig};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "admin123";

/// Application with default configuration and the test account.
pub fn create_test_app() -> Router {
    let state = AppState {
        config_manager: Arc::new(ConfigManager::from_config(ToolboxConfig::default())),
        auth_service: Arc::new(
            AuthService::new(USERNAME, PASSWORD).expect("Failed to create auth service"),
        ),
    };
    create_app(state)
}
