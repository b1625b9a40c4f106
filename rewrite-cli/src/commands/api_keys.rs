//! API key commands.

use clap::Subcommand;
use console::style;
use tokio_util::sync::CancellationToken;

use rewrite_core::config::AppConfig;
use rewrite_core::error::RwResult;
use rewrite_models::{ApiKey, ApiKeyScope, CreateApiKeyBody, CreateApiKeyOptions};

use super::PageArgs;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ApiKeysAction {
    /// List API keys of a project.
    List {
        /// Project id.
        project: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create an API key.
    Create {
        /// Project id.
        project: String,
        /// Key name.
        name: String,
        /// Granted scope, e.g. project:read or * (repeatable).
        #[arg(long = "scope", required = true)]
        scopes: Vec<ApiKeyScope>,
    },
    /// Revoke an API key.
    Delete {
        /// Project id.
        project: String,
        /// API key id.
        id: String,
    },
}

fn describe_scopes(key: &ApiKey) -> String {
    key.scopes.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
}

pub async fn run(
    config: &AppConfig,
    action: ApiKeysAction,
    format: OutputFormat,
    cancel: CancellationToken,
) -> RwResult<()> {
    let client = super::create_client(config)?;
    let api_keys = client.api_keys().with_options(super::fetch_options(&cancel));

    match action {
        ApiKeysAction::List { project, page } => {
            let cursor = page.to_cursor();
            let resp = api_keys.list(&project, Some(&cursor)).await?;
            let keys = super::payload(resp, "API keys")?;

            match format {
                OutputFormat::Json => super::print_json(&keys),
                OutputFormat::Text => {
                    if keys.is_empty() {
                        println!("No API keys in project {project}.");
                    } else {
                        let mut table = super::new_table(vec!["ID", "Name", "Scopes"]);
                        for k in &keys {
                            table.add_row(vec![k.id.to_string(), k.name.clone(), describe_scopes(k)]);
                        }
                        println!("{table}");
                        println!("\n{} key(s) shown", keys.len());
                    }
                }
            }
        }
        ApiKeysAction::Create { project, name, scopes } => {
            let options = CreateApiKeyOptions {
                project,
                body: CreateApiKeyBody { name, scopes },
            };
            let resp = api_keys.create(&options).await?;
            let key = super::payload(resp, "API key")?;

            match format {
                OutputFormat::Json => super::print_json(&key),
                OutputFormat::Text => {
                    println!("{} API key created.", style("OK").green().bold());
                    println!("  id       {}", key.id);
                    println!("  name     {}", key.name);
                    println!("  scopes   {}", describe_scopes(&key));
                }
            }
        }
        ApiKeysAction::Delete { project, id } => {
            api_keys.delete(&id, &project).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "deleted": true })),
                OutputFormat::Text => println!("{} API key {} revoked.", style("OK").green().bold(), id),
            }
        }
    }

    Ok(())
}
