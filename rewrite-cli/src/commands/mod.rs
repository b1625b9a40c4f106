//! CLI command implementations.

pub mod api_keys;
pub mod config;
pub mod projects;
pub mod templates;
pub mod webhooks;

use clap::Args;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use rewrite_api::{FetchOptions, Rewrite};
use rewrite_core::config::AppConfig;
use rewrite_core::error::{RwError, RwResult};
use rewrite_models::{ApiResponse, CursorOptions, Snowflake};

/// Cursor pagination flags shared by list commands.
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Page size (API default: 15).
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,
    /// Return items after this id.
    #[arg(long)]
    pub after: Option<String>,
    /// Return items before this id.
    #[arg(long)]
    pub before: Option<String>,
}

impl PageArgs {
    pub fn to_cursor(&self) -> CursorOptions {
        CursorOptions {
            limit: self.limit.unwrap_or(0),
            after: self.after.clone().map(Snowflake::from),
            before: self.before.clone().map(Snowflake::from),
        }
    }
}

/// Helper to create an API client from config.
pub fn create_client(config: &AppConfig) -> RwResult<Rewrite> {
    Rewrite::from_config(config)
}

/// Request options that abort when the user hits Ctrl-C.
pub fn fetch_options(cancel: &CancellationToken) -> FetchOptions {
    FetchOptions::default().cancel_on(cancel.clone())
}

/// Take the payload out of an envelope, or fail with the API's message.
pub fn payload<T>(resp: ApiResponse<T>, what: &str) -> RwResult<T> {
    let message = resp.error_message();
    resp.into_data().ok_or_else(|| {
        RwError::Decode(match message {
            Some(m) => format!("no {what} in response: {m}"),
            None => format!("no {what} in response"),
        })
    })
}

/// Pretty-print a value as JSON.
pub fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Table with the CLI's standard look.
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Mask a secret for display, keeping its prefix and last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        return "(not set)".to_string();
    }
    if chars.len() <= 8 {
        return "********".to_string();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}

/// Truncate a string to a maximum length, appending an ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}
