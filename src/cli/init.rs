//! `init`: scaffold `toolbox.toml`, `.env.example` and the data directory.

use super::output::Output;
use crate::utils::toml_config::ToolboxConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the generated configuration file
pub const CONFIG_FILE: &str = "toolbox.toml";

/// Result of the init operation
#[derive(Debug, PartialEq, Eq)]
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// toolbox.toml already exists and `--force` was not given
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Options for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Sign-in account name
    pub username: String,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.header("Initializing Stock Toolbox");

    let base_path = &config.path;
    let config_path = base_path.join(CONFIG_FILE);
    if config_path.exists() && !config.force {
        output.warning(&format!("{} already exists!", CONFIG_FILE));
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    let data_dir = base_path.join("data");
    if let Err(e) = fs::create_dir_all(&data_dir) {
        output.error(&format!("Failed to create data/: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("directory", "data");

    let files = [
        (CONFIG_FILE, "config", generate_toolbox_toml(&config)),
        (".env.example", "env", generate_env_example()),
    ];
    for (name, kind, content) in files {
        match write_file(&base_path.join(name), &content, config.force) {
            Ok(true) => output.created(kind, name),
            Ok(false) => output.skipped(name, "already exists"),
            Err(e) => {
                output.error(&format!("Failed to create {}: {}", name, e));
                return InitResult::Error(e.to_string());
            }
        }
    }

    match write_file(&base_path.join(".gitignore"), GITIGNORE, false) {
        Ok(true) => output.created("file", ".gitignore"),
        Ok(false) => output.skipped(".gitignore", "already exists"),
        Err(e) => output.warning(&format!("Failed to create .gitignore: {}", e)),
    }

    output.success("Stock Toolbox project initialized");

    output.header("Next Steps");
    output.info("1. Set the sign-in password:");
    output.command("cp .env.example .env");
    output.info("2. Start the server:");
    output.command("toolbox-server");
    output.hint(&format!(
        "Server will be available at http://{}:{}",
        config.host, config.port
    ));

    InitResult::Success
}

/// Write `content` unless the file exists and `force` is off. Returns whether it wrote.
fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    fs::write(path, content)?;
    Ok(true)
}

fn generate_toolbox_toml(config: &InitConfig) -> String {
    let defaults = ToolboxConfig::default();
    let origins = defaults
        .cors
        .allowed_origins
        .iter()
        .map(|o| format!("\"{}\"", o))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"# Stock Toolbox configuration

[server]
host = "{host}"
port = {port}
log_level = "{log_level}"
# "pretty" or "json"
log_format = "pretty"

[auth]
username = "{username}"
# Environment variable holding the sign-in password
password_env = "{password_env}"

[session]
cookie_name = "{cookie_name}"
# Set to true when served over HTTPS
secure = false
# Session file used by `toolbox-server open` and `toolbox-server session`
store_path = "{store_path}"

[cors]
allowed_origins = [{origins}]
"#,
        host = config.host,
        port = config.port,
        log_level = defaults.server.log_level,
        username = config.username,
        password_env = defaults.auth.password_env,
        cookie_name = defaults.session.cookie_name,
        store_path = defaults.session.store_path.display(),
        origins = origins,
    )
}

fn generate_env_example() -> String {
    r#"# Stock Toolbox Environment Variables
# Copy this file to .env and fill in the values.

# REQUIRED: password for the account in [auth] username
TOOLBOX_PASSWORD=change-me

# Optional: Logging filter, overrides server.log_level
RUST_LOG=info,toolbox=debug
"#
    .to_string()
}

const GITIGNORE: &str = r#"/data/
.env
/target/
"#;
