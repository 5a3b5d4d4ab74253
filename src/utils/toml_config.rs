//! TOML-based configuration for the toolbox server
//!
//! Infrastructure settings (bind address, logging, sign-in account, session
//! cookie, CORS) live in `toolbox.toml`. Secrets are never written to the file;
//! the file names the environment variable that holds them.
//!
//! Use `ConfigManager` for shared, swappable access to the current configuration.

use arc_swap::ArcSwap;
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Root configuration structure loaded from toolbox.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolboxConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub cors: CorsConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

// ============= Authentication Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Account name accepted by the sign-in endpoints
    #[serde(default = "default_username")]
    pub username: String,

    /// Environment variable name containing the account password
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password_env() -> String {
    "TOOLBOX_PASSWORD".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password_env: default_password_env(),
        }
    }
}

// ============= Session Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the browser session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Only send the session cookie over HTTPS
    #[serde(default)]
    pub secure: bool,

    /// Session file used by the `open` and `session` CLI commands
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_cookie_name() -> String {
    "toolbox_session".to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data/session.json")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure: false,
            store_path: default_store_path(),
        }
    }
}

// ============= CORS Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API with credentials
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    /// Whether a request `Origin` header is on the allow-list.
    pub fn allows(&self, origin: &HeaderValue) -> bool {
        self.allowed_origins
            .iter()
            .any(|allowed| allowed.as_bytes() == origin.as_bytes())
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),
}

impl ToolboxConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: ToolboxConfig = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path` when it exists, defaults otherwise.
    ///
    /// For commands that only need the session file location.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }

        if self.auth.username.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.username must not be empty".to_string(),
            ));
        }

        if self.auth.password_env.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.password_env must name an environment variable".to_string(),
            ));
        }

        if self.session.cookie_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "session.cookie_name must not be empty".to_string(),
            ));
        }

        for origin in &self.cors.allowed_origins {
            if HeaderValue::from_str(origin).is_err()
                || !(origin.starts_with("http://") || origin.starts_with("https://"))
            {
                return Err(ConfigError::ValidationError(format!(
                    "cors.allowed_origins contains an invalid origin: {}",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// Validate that the secrets referenced by the config are available
    pub fn validate_secrets(&self) -> Result<(), ConfigError> {
        self.password().map(|_| ())
    }

    /// Resolve an environment variable, treating empty values as unset
    pub fn resolve_env(&self, env_name: &str) -> Option<String> {
        std::env::var(env_name).ok().filter(|v| !v.is_empty())
    }

    /// The sign-in password from the configured environment variable
    pub fn password(&self) -> Result<String, ConfigError> {
        self.resolve_env(&self.auth.password_env)
            .ok_or_else(|| ConfigError::MissingEnvVar(self.auth.password_env.clone()))
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ============= Configuration Manager =============

/// Shared configuration handle with lock-free reads and explicit reload
pub struct ConfigManager {
    config: Arc<ArcSwap<ToolboxConfig>>,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new configuration manager and load the initial config
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(ConfigError::ReadError)?
                .join(path)
        };

        let config = ToolboxConfig::load(&path)?;

        Ok(Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: path,
        })
    }

    /// Create a config manager directly from a config (useful for testing)
    pub fn from_config(config: ToolboxConfig) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: PathBuf::from("test-config.toml"),
        }
    }

    /// Get the current configuration (lockless read)
    pub fn config(&self) -> Arc<ToolboxConfig> {
        self.config.load_full()
    }

    /// Path the configuration was loaded from
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Reload the configuration from disk, keeping the old one on failure
    pub fn reload(&self) -> Result<(), ConfigError> {
        info!("Reloading configuration from {:?}", self.config_path);

        let new_config = ToolboxConfig::load(&self.config_path)?;
        self.config.store(Arc::new(new_config));

        info!("Configuration reloaded successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> String {
        r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"
log_format = "json"

[auth]
username = "trader"
password_env = "TOOLBOX_TEST_PASSWORD_PARSE"

[session]
cookie_name = "sid"
secure = true
store_path = "/tmp/toolbox/session.json"

[cors]
allowed_origins = ["https://toolbox.example.com"]
"#
        .to_string()
    }

    #[test]
    fn test_parse_config() {
        let config: ToolboxConfig =
            toml::from_str(&create_test_config()).expect("Failed to parse config");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.auth.username, "trader");
        assert_eq!(config.session.cookie_name, "sid");
        assert!(config.session.secure);
        assert_eq!(config.cors.allowed_origins.len(), 1);
        assert!(config
            .cors
            .allows(&HeaderValue::from_static("https://toolbox.example.com")));
        assert!(!config
            .cors
            .allows(&HeaderValue::from_static("http://localhost:5173")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: ToolboxConfig = toml::from_str("").unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.server.log_format, LogFormat::Pretty);
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.auth.password_env, "TOOLBOX_PASSWORD");
        assert_eq!(config.session.cookie_name, "toolbox_session");
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let config: ToolboxConfig = toml::from_str("[server]\nport = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_origin() {
        let config: ToolboxConfig =
            toml::from_str("[cors]\nallowed_origins = [\"localhost:3000\"]\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_password_env() {
        let config: ToolboxConfig =
            toml::from_str("[auth]\npassword_env = \"TOOLBOX_TEST_PASSWORD_UNSET\"\n").unwrap();
        assert!(matches!(
            config.password(),
            Err(ConfigError::MissingEnvVar(name)) if name == "TOOLBOX_TEST_PASSWORD_UNSET"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ToolboxConfig::load("/nonexistent/toolbox.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

        let fallback = ToolboxConfig::load_or_default("/nonexistent/toolbox.toml").unwrap();
        assert_eq!(fallback.server.port, 3000);
    }

    #[test]
    fn test_manager_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("toolbox.toml");
        fs::write(&path, "[server]\nport = 4000\n").unwrap();

        let manager = ConfigManager::new(&path).unwrap();
        assert_eq!(manager.config().server.port, 4000);

        fs::write(&path, "[server]\nport = 4001\n").unwrap();
        manager.reload().unwrap();
        assert_eq!(manager.config().server.port, 4001);
    }

    #[test]
    fn test_manager_keeps_config_on_bad_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("toolbox.toml");
        fs::write(&path, "[server]\nport = 4000\n").unwrap();

        let manager = ConfigManager::new(&path).unwrap();
        fs::write(&path, "[server\nport = ").unwrap();

        assert!(manager.reload().is_err());
        assert_eq!(manager.config().server.port, 4000);
    }
}
