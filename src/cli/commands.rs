//! Offline commands: route table, config report, and headless navigation
//! against the file-backed session.

use super::output::Output;
use super::SessionCommands;
use crate::utils::toml_config::ToolboxConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use toolbox_shell::screen::Block;
use toolbox_shell::{
    Access, FileStore, Navigation, Screen, Session, Shell, ROOT_PATH, ROUTES,
};

/// Session backed by the configured session file.
pub fn file_session(config: &ToolboxConfig) -> Session {
    Session::new(Arc::new(FileStore::open(&config.session.store_path)))
}

/// `routes`: print the route table.
pub fn routes(output: &Output) {
    output.header("Routes");
    output.table_header(&["Path", "View", "Access"]);
    for route in ROUTES.iter() {
        let access = match route.access {
            Access::Public => "public",
            Access::Protected => "protected",
        };
        output.table_row(&[route.path, route.view.as_str(), access]);
    }
    output.table_row(&[ROOT_PATH, "-", "redirect /login"]);
}

/// `config`: show the loaded configuration, optionally checking secrets.
pub fn config(path: &Path, validate: bool, output: &Output) -> Result<()> {
    let config = ToolboxConfig::load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    output.header("Configuration");
    output.kv("file", &path.display().to_string());
    output.kv("bind", &config.bind_address());
    output.kv("log_level", &config.server.log_level);
    output.kv("username", &config.auth.username);
    output.kv("password_env", &config.auth.password_env);
    output.kv("cookie_name", &config.session.cookie_name);
    output.kv("store_path", &config.session.store_path.display().to_string());
    for origin in &config.cors.allowed_origins {
        output.list_item(origin);
    }

    if validate {
        config.validate_secrets()?;
        output.success("Configuration is valid");
    }
    Ok(())
}

/// `session status|set|clear` against the session file.
pub fn session(command: &SessionCommands, config: &ToolboxConfig, output: &Output) -> Result<()> {
    let session = file_session(config);
    let store = config.session.store_path.display().to_string();

    match command {
        SessionCommands::Status => {
            output.kv("store", &store);
            if session.is_authenticated() {
                output.success("signed in");
            } else {
                output.info("signed out");
            }
        }
        SessionCommands::Set { token } => {
            if let Some(parent) = config.session.store_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            session.set_credential(token.as_str())?;
            output.success(&format!("Credential stored in {}", store));
        }
        SessionCommands::Clear => {
            session.clear_credential()?;
            output.success("Credential cleared");
        }
    }
    Ok(())
}

/// Where a path settled and the screen shown there.
#[derive(Debug, Serialize)]
pub struct OpenReport {
    pub navigation: Navigation,
    pub screen: Screen,
}

/// Open `path` in a shell over the session file.
pub fn resolve(path: &str, config: &ToolboxConfig) -> OpenReport {
    let mut shell = Shell::new(file_session(config));
    let navigation = shell.open(path);
    OpenReport {
        navigation,
        screen: shell.screen(),
    }
}

/// `open <path>`: navigate a shell over the session file and describe the result.
///
/// With `json` the report is printed as a JSON document instead.
pub fn open(path: &str, json: bool, config: &ToolboxConfig, output: &Output) -> Result<()> {
    let report = resolve(path, config);

    if json {
        let document =
            serde_json::to_string_pretty(&report).context("Failed to encode screen")?;
        println!("{}", document);
        return Ok(());
    }

    let navigation = &report.navigation;
    output.header("Navigation");
    output.kv("requested", &navigation.requested);
    output.kv("location", navigation.location);
    output.kv("view", navigation.view.as_str());
    if let Some(reason) = navigation.redirect {
        output.kv("redirect", &reason.to_string());
    }

    describe(&report.screen, output);
    Ok(())
}

fn describe(screen: &Screen, output: &Output) {
    output.header(&screen.title);
    for block in &screen.blocks {
        match block {
            Block::Heading { text } => output.info(text),
            Block::LoginForm { title, error } => {
                output.info(title);
                if let Some(error) = error {
                    output.warning(error);
                }
            }
            Block::Placeholder {
                title, subtitle, ..
            } => {
                output.info(title);
                output.list_item(subtitle);
            }
            Block::Tabs { tabs, active } => {
                for tab in tabs {
                    let marker = if tab.tab == *active { "*" } else { " " };
                    output.list_item(&format!("{} {}", marker, tab.label));
                }
            }
            Block::CardGroup { title, cards } => {
                if let Some(title) = title {
                    output.info(title);
                }
                for card in cards {
                    output.list_item(&format!("{}: {}", card.title, card.description));
                }
            }
        }
    }

    let actions = screen.actions();
    if !actions.is_empty() {
        let names: Vec<&str> = actions.iter().map(|a| a.name()).collect();
        output.kv("actions", &names.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> ToolboxConfig {
        let mut config = ToolboxConfig::default();
        config.session.store_path = dir.path().join("data").join("session.json");
        config
    }

    #[test]
    fn test_session_set_then_clear() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let output = Output::no_color();

        session(
            &SessionCommands::Set {
                token: "t1".to_string(),
            },
            &config,
            &output,
        )
        .unwrap();
        assert!(file_session(&config).is_authenticated());

        session(&SessionCommands::Clear, &config, &output).unwrap();
        assert!(!file_session(&config).is_authenticated());
    }

    #[test]
    fn test_session_set_rejects_empty_token() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let result = session(
            &SessionCommands::Set {
                token: String::new(),
            },
            &config,
            &Output::no_color(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_open_without_session_file_succeeds() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        open("/toolbox", false, &config, &Output::no_color()).unwrap();
        assert!(!config.session.store_path.exists());
    }

    #[test]
    fn test_report_serializes_screen() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        file_session(&config).set_credential("t1").unwrap();

        let json = serde_json::to_value(resolve("/toolbox", &config)).unwrap();

        assert_eq!(json["navigation"]["location"], "/toolbox");
        assert_eq!(json["navigation"]["view"], "toolbox");
        assert_eq!(json["screen"]["view"], "toolbox");
        let blocks = json["screen"]["blocks"].as_array().unwrap();
        let group = blocks.iter().find(|b| b["kind"] == "card-group").unwrap();
        let first = &group["cards"][0];
        assert_eq!(first["accent"], "blue");
        assert_eq!(
            first["on_select"],
            serde_json::json!({"type": "open", "value": "stock-selector"})
        );
    }

    #[test]
    fn test_report_follows_redirect() {
        let dir = TempDir::new().unwrap();
        let json = serde_json::to_value(resolve("/toolbox", &config_in(&dir))).unwrap();
        assert_eq!(json["navigation"]["location"], "/login");
        assert_eq!(json["navigation"]["redirect"], "unauthenticated");
        assert_eq!(json["screen"]["view"], "login");
    }

    #[test]
    fn test_config_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = config(&dir.path().join("toolbox.toml"), false, &Output::no_color());
        assert!(result.is_err());
    }
}
