use std::sync::Arc;

use anyhow::Context;
use toolbox::{
    cli::{
        commands,
        init::{self, InitConfig, InitResult},
        output::Output,
        Cli, Commands,
    },
    create_app,
    utils::toml_config::LogFormat,
    AppState, AuthService, ConfigManager, ToolboxConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if !matches!(cli.command, None | Some(Commands::Serve)) {
        init_cli_tracing(cli.verbose, !cli.no_color);
    }

    match cli.command {
        None | Some(Commands::Serve) => serve(&cli.config, cli.verbose, &output).await,
        Some(Commands::Init {
            path,
            force,
            username,
            host,
            port,
        }) => {
            let result = init::run(
                InitConfig {
                    path,
                    force,
                    username,
                    host,
                    port,
                },
                &output,
            );
            match result {
                InitResult::Success | InitResult::AlreadyExists => Ok(()),
                InitResult::Error(e) => anyhow::bail!("Initialization failed: {}", e),
            }
        }
        Some(Commands::Config { validate }) => commands::config(&cli.config, validate, &output),
        Some(Commands::Routes) => {
            commands::routes(&output);
            Ok(())
        }
        Some(Commands::Session(command)) => {
            let config = ToolboxConfig::load_or_default(&cli.config)?;
            commands::session(&command, &config, &output)
        }
        Some(Commands::Open { path, json }) => {
            let config = ToolboxConfig::load_or_default(&cli.config)?;
            commands::open(&path, json, &config, &output)
        }
    }
}

async fn serve(config_path: &std::path::Path, verbose: bool, output: &Output) -> anyhow::Result<()> {
    let config_manager = match ConfigManager::new(config_path) {
        Ok(manager) => manager,
        Err(e) => {
            output.error(&e.to_string());
            output.hint("Run 'toolbox-server init' to create a configuration");
            return Err(e.into());
        }
    };
    let config = config_manager.config();

    init_tracing(&config, verbose);

    let auth_service = AuthService::from_config(&config).with_context(|| {
        format!(
            "Sign-in password not available; set {}",
            config.auth.password_env
        )
    })?;

    let config_manager = Arc::new(config_manager);
    #[cfg(unix)]
    tokio::spawn(reload_on_hangup(config_manager.clone()));

    let state = AppState {
        config_manager,
        auth_service: Arc::new(auth_service),
    };

    let app = create_app(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    output.banner(&address);
    tracing::info!(%address, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &ToolboxConfig, verbose: bool) {
    let default_filter = if verbose {
        "debug".to_string()
    } else {
        format!("{},tower_http=info", config.server.log_level)
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Logs for one-shot commands go to stderr so they never mix with command output.
fn init_cli_tracing(verbose: bool, ansi: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .without_time(),
        )
        .init();
}

/// Reload `toolbox.toml` on SIGHUP. A file that fails to load leaves the
/// running configuration in place.
#[cfg(unix)]
async fn reload_on_hangup(manager: Arc<ConfigManager>) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(e) => {
            tracing::warn!(error = %e, "Config reload on SIGHUP unavailable");
            return;
        }
    };

    while hangup.recv().await.is_some() {
        if let Err(e) = manager.reload() {
            tracing::error!(
                path = %manager.path().display(),
                error = %e,
                "Config reload failed, keeping previous configuration"
            );
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
