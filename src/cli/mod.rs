//! CLI module for the toolbox server
//!
//! Provides command-line interface parsing and handling for the toolbox-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod commands;
pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stock Toolbox server
///
/// Serves the sign-in page, tool launcher and tool pages, with every page
/// behind the session guard.
#[derive(Parser, Debug)]
#[command(
    name = "toolbox-server",
    version,
    about = "Stock Toolbox - session-gated stock selection and backtesting shell",
    long_about = "Serves the stock toolbox: sign-in, the tool launcher and its tool pages.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold a configuration.",
    after_help = "EXAMPLES:\n    \
                  toolbox-server init                  # Scaffold toolbox.toml and .env.example\n    \
                  toolbox-server                       # Start the server (requires toolbox.toml)\n    \
                  toolbox-server routes                # Print the route table\n    \
                  toolbox-server open /toolbox         # Resolve a path against the saved session\n    \
                  toolbox-server --config my.toml      # Use a custom config file"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "toolbox.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the server (default)
    Serve,

    /// Create toolbox.toml, .env.example and the data directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Sign-in account name
        #[arg(long, default_value = "admin")]
        username: String,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "3000")]
        port: u16,
    },

    /// Show configuration information
    Config {
        /// Also check that referenced secrets are set
        #[arg(long)]
        validate: bool,
    },

    /// Print the route table
    Routes,

    /// Inspect or change the saved session
    #[command(subcommand)]
    Session(SessionCommands),

    /// Resolve a path against the saved session and show the resulting view
    Open {
        /// Path to open, e.g. /toolbox
        path: String,

        /// Print the navigation and screen as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Saved-session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Show whether a credential is stored
    Status,

    /// Store a credential
    Set {
        /// Opaque token, as issued by the sign-in API
        token: String,
    },

    /// Remove the stored credential
    Clear,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["toolbox-server"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("toolbox.toml"));
    }

    #[test]
    fn test_parse_session_set() {
        let cli = Cli::try_parse_from(["toolbox-server", "session", "set", "t1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Session(SessionCommands::Set { token })) if token == "t1"
        ));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["toolbox-server", "open", "/toolbox", "--config", "x.toml"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Some(Commands::Open { path, json: false }) if path == "/toolbox"));
    }
}
