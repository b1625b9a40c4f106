//! Rewrite CLI - Command-line interface for the Rewrite API.
//!
//! Manages projects, message templates, webhooks and API keys from the
//! terminal, and keeps the API secret in the local configuration file.
//! Useful for scripting (`--format json`) and for checking API access.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use rewrite_core::config::{AppConfig, ConfigHandle};
use rewrite_core::error::RwResult;
use rewrite_core::logging;

/// Rewrite - manage SMS projects, templates, webhooks and API keys.
#[derive(Parser)]
#[command(
    name = "rewrite",
    version,
    about = "Rewrite API command-line client",
    long_about = "A command-line client for the Rewrite API.\n\
                  Manage projects, message templates, webhooks and API keys."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// API secret (overrides config for this run).
    #[arg(long, global = true)]
    secret: Option<String>,

    /// API base URL (overrides config for this run).
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and manage projects.
    Projects {
        #[command(subcommand)]
        action: commands::projects::ProjectsAction,
    },
    /// Manage message templates of a project.
    Templates {
        #[command(subcommand)]
        action: commands::templates::TemplatesAction,
    },
    /// Manage webhook endpoints of a project.
    Webhooks {
        #[command(subcommand)]
        action: commands::webhooks::WebhooksAction,
    },
    /// Manage API keys of a project.
    #[command(name = "api-keys")]
    ApiKeys {
        #[command(subcommand)]
        action: commands::api_keys::ApiKeysAction,
    },
    /// View and modify the local configuration.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> RwResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_handle = match cli.config.as_deref() {
        Some(path) => {
            let path = PathBuf::from(path);
            let config = if path.exists() {
                AppConfig::load_from_file(&path)?
            } else {
                AppConfig::default()
            };
            ConfigHandle::with_path(config, path)
        }
        None => ConfigHandle::new(AppConfig::load_default()?),
    };

    // Initialize logging
    let (log_level, log_dir) = {
        let cfg = config_handle.read().await;
        let level = if cli.verbose { "debug".to_string() } else { cfg.logging.level.clone() };
        (level, cfg.effective_log_dir()?)
    };
    let json_output = config_handle.read().await.logging.json_output;
    let _guard = logging::init_logging(&log_level, &log_dir, json_output)?;

    info!("Rewrite CLI v{}", rewrite_core::constants::APP_VERSION);

    // Command-line overrides apply to this run only and are never saved.
    let runtime_config = {
        let mut cfg = config_handle.read().await.clone();
        if let Some(secret) = cli.secret {
            cfg.secret = secret;
        }
        if let Some(base_url) = cli.base_url {
            cfg.rest.base_url = AppConfig::sanitize_base_url(&base_url);
        }
        cfg
    };

    // Ctrl-C cancels the in-flight request and any pending retry.
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling");
            trigger.cancel();
        }
    });

    // Dispatch to command handlers
    match cli.command {
        Commands::Projects { action } => {
            commands::projects::run(&runtime_config, action, cli.format, cancel).await
        }
        Commands::Templates { action } => {
            commands::templates::run(&runtime_config, action, cli.format, cancel).await
        }
        Commands::Webhooks { action } => {
            commands::webhooks::run(&runtime_config, action, cli.format, cancel).await
        }
        Commands::ApiKeys { action } => {
            commands::api_keys::run(&runtime_config, action, cli.format, cancel).await
        }
        Commands::Config { action } => {
            commands::config::run(config_handle, action, cli.format).await
        }
    }
}
