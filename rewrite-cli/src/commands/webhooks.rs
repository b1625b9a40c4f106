//! Webhook commands.

use clap::Subcommand;
use console::style;
use tokio_util::sync::CancellationToken;

use rewrite_core::config::AppConfig;
use rewrite_core::error::RwResult;
use rewrite_models::{
    ApiWebhook, CreateWebhookBody, CreateWebhookOptions, UpdateWebhookBody, UpdateWebhookOptions,
    WebhookEventType, WebhookStatus,
};

use super::PageArgs;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum WebhooksAction {
    /// List webhooks of a project.
    List {
        /// Project id.
        project: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a webhook.
    Get {
        /// Project id.
        project: String,
        /// Webhook id.
        id: String,
    },
    /// Register a webhook endpoint.
    Create {
        /// Project id.
        project: String,
        /// Webhook name.
        name: String,
        /// HTTPS endpoint receiving the events.
        endpoint: String,
        /// Event to subscribe to, e.g. sms.delivered (repeatable; default: all).
        #[arg(long = "event")]
        events: Vec<WebhookEventType>,
    },
    /// Update a webhook. Only the given fields change.
    Update {
        /// Project id.
        project: String,
        /// Webhook id.
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        endpoint: Option<String>,
        /// Replace the subscribed events (repeatable).
        #[arg(long = "event")]
        events: Vec<WebhookEventType>,
        /// ACTIVE or INACTIVE.
        #[arg(long)]
        status: Option<WebhookStatus>,
    },
    /// Delete a webhook.
    Delete {
        /// Project id.
        project: String,
        /// Webhook id.
        id: String,
    },
}

fn describe_events(events: &[WebhookEventType]) -> String {
    if events.is_empty() {
        return "-".to_string();
    }
    events.iter().map(|e| e.as_str()).collect::<Vec<_>>().join(", ")
}

fn styled_status(status: WebhookStatus) -> String {
    match status {
        WebhookStatus::Active => style(status.as_str()).green().to_string(),
        WebhookStatus::Inactive => style(status.as_str()).dim().to_string(),
    }
}

fn print_webhook(webhook: &ApiWebhook, format: OutputFormat) {
    match format {
        OutputFormat::Json => super::print_json(webhook),
        OutputFormat::Text => {
            println!("{} [{}]", style(&webhook.name).bold(), styled_status(webhook.status));
            println!("  id         {}", webhook.id);
            println!("  project    {}", webhook.project_id);
            println!("  endpoint   {}", webhook.endpoint);
            println!("  events     {}", describe_events(&webhook.events));
        }
    }
}

pub async fn run(
    config: &AppConfig,
    action: WebhooksAction,
    format: OutputFormat,
    cancel: CancellationToken,
) -> RwResult<()> {
    let client = super::create_client(config)?;
    let webhooks = client.webhooks().with_options(super::fetch_options(&cancel));

    match action {
        WebhooksAction::List { project, page } => {
            let cursor = page.to_cursor();
            let resp = webhooks.list(&project, Some(&cursor)).await?;
            let items = super::payload(resp, "webhooks")?;

            match format {
                OutputFormat::Json => super::print_json(&items),
                OutputFormat::Text => {
                    if items.is_empty() {
                        println!("No webhooks in project {project}.");
                    } else {
                        let mut table = super::new_table(vec!["ID", "Name", "Endpoint", "Events", "Status"]);
                        for w in &items {
                            table.add_row(vec![
                                w.id.to_string(),
                                w.name.clone(),
                                super::truncate(&w.endpoint, 40),
                                describe_events(&w.events),
                                styled_status(w.status),
                            ]);
                        }
                        println!("{table}");
                        println!("\n{} webhook(s) shown", items.len());
                    }
                }
            }
        }
        WebhooksAction::Get { project, id } => {
            let resp = webhooks.get(&id, &project).await?;
            print_webhook(&super::payload(resp, "webhook")?, format);
        }
        WebhooksAction::Create { project, name, endpoint, events } => {
            let events = if events.is_empty() {
                WebhookEventType::ALL.to_vec()
            } else {
                events
            };
            let options = CreateWebhookOptions {
                project,
                body: CreateWebhookBody { name, endpoint, events },
            };
            let resp = webhooks.create(&options).await?;
            let webhook = super::payload(resp, "webhook")?;
            if let OutputFormat::Text = format {
                println!("{} Webhook created.", style("OK").green().bold());
            }
            print_webhook(&webhook, format);
        }
        WebhooksAction::Update { project, id, name, endpoint, events, status } => {
            let body = UpdateWebhookBody {
                name,
                endpoint,
                events: (!events.is_empty()).then_some(events),
                status,
            };
            let resp = webhooks
                .update(&id, &UpdateWebhookOptions { project, body })
                .await?;
            print_webhook(&super::payload(resp, "webhook")?, format);
        }
        WebhooksAction::Delete { project, id } => {
            webhooks.delete(&id, &project).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "deleted": true })),
                OutputFormat::Text => println!("{} Webhook {} deleted.", style("OK").green().bold(), id),
            }
        }
    }

    Ok(())
}
