//! Configuration commands.

use clap::Subcommand;
use console::style;

use rewrite_core::config::{AppConfig, ConfigHandle};
use rewrite_core::constants::API_BASE_URL;
use rewrite_core::error::RwResult;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration (secret masked).
    Show,
    /// Store the API secret.
    SetSecret {
        /// API secret.
        secret: String,
    },
    /// Point the client at a different API origin.
    SetBaseUrl {
        /// Base URL, e.g. https://api.rewritetoday.com.
        url: String,
    },
    /// Print the configuration file path.
    Path,
}

fn config_json(cfg: &AppConfig) -> serde_json::Value {
    serde_json::json!({
        "secret": super::mask_secret(&cfg.secret),
        "rest": {
            "base_url": cfg.rest.base_url,
            "timeout_ms": cfg.rest.timeout_ms,
            "max_retries": cfg.rest.max_retries,
            "headers": cfg.rest.headers.keys().collect::<Vec<_>>(),
        },
        "logging": {
            "level": cfg.logging.level,
            "directory": cfg.logging.directory,
            "json_output": cfg.logging.json_output,
        },
    })
}

fn print_config_text(cfg: &AppConfig) {
    let base_url = if cfg.rest.base_url.is_empty() {
        format!("{API_BASE_URL} (default)")
    } else {
        cfg.rest.base_url.clone()
    };

    println!("{}", style("API").bold().underlined());
    println!("  secret              {}", super::mask_secret(&cfg.secret));
    println!("  rest.base_url       {base_url}");
    println!("  rest.timeout_ms     {}", cfg.rest.timeout_ms);
    println!("  rest.max_retries    {}", cfg.rest.max_retries);
    if !cfg.rest.headers.is_empty() {
        let mut names: Vec<_> = cfg.rest.headers.keys().cloned().collect();
        names.sort();
        println!("  rest.headers        {}", names.join(", "));
    }

    println!();
    println!("{}", style("Logging").bold().underlined());
    println!("  logging.level       {}", cfg.logging.level);
    println!("  logging.json_output {}", cfg.logging.json_output);
}

pub async fn run(config: ConfigHandle, action: ConfigAction, format: OutputFormat) -> RwResult<()> {
    match action {
        ConfigAction::Show => {
            let cfg = config.read().await;
            match format {
                OutputFormat::Json => super::print_json(&config_json(&cfg)),
                OutputFormat::Text => print_config_text(&cfg),
            }
        }
        ConfigAction::SetSecret { secret } => {
            let secret = secret.trim().to_string();
            {
                let mut cfg = config.write().await;
                cfg.secret = secret.clone();
            }
            config.save().await?;
            println!(
                "{} API secret set to {}.",
                style("SET").green().bold(),
                super::mask_secret(&secret)
            );
        }
        ConfigAction::SetBaseUrl { url } => {
            let sanitized = AppConfig::sanitize_base_url(&url);
            {
                let mut cfg = config.write().await;
                cfg.rest.base_url = sanitized.clone();
            }
            config.save().await?;
            println!("{} Base URL set to: {}", style("SET").green().bold(), sanitized);
        }
        ConfigAction::Path => {
            let path = config.path()?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "path": path.display().to_string() })),
                OutputFormat::Text => println!("{}", path.display()),
            }
        }
    }

    Ok(())
}
