//! Webhook entity, event and status enums, and request bodies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::common::Snowflake;

/// A webhook endpoint configured on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWebhook {
    pub id: Snowflake,
    pub name: String,
    pub endpoint: String,
    #[serde(default)]
    pub events: Vec<WebhookEventType>,
    pub status: WebhookStatus,
    pub project_id: Snowflake,
}

/// SMS lifecycle events a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "sms.queued")]
    SmsQueued,
    #[serde(rename = "sms.delivered")]
    SmsDelivered,
    #[serde(rename = "sms.scheduled")]
    SmsScheduled,
    #[serde(rename = "sms.failed")]
    SmsFailed,
    #[serde(rename = "sms.canceled")]
    SmsCanceled,
}

impl WebhookEventType {
    /// All event types, in API order.
    pub const ALL: &'static [WebhookEventType] = &[
        Self::SmsQueued,
        Self::SmsDelivered,
        Self::SmsScheduled,
        Self::SmsFailed,
        Self::SmsCanceled,
    ];

    /// Wire name of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmsQueued => "sms.queued",
            Self::SmsDelivered => "sms.delivered",
            Self::SmsScheduled => "sms.scheduled",
            Self::SmsFailed => "sms.failed",
            Self::SmsCanceled => "sms.canceled",
        }
    }
}

impl FromStr for WebhookEventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("unknown webhook event: {s}"))
    }
}

impl std::fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a webhook is receiving events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookStatus {
    Active,
    Inactive,
}

impl WebhookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl FromStr for WebhookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(format!("unknown webhook status: {s}")),
        }
    }
}

impl std::fmt::Display for WebhookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body for `POST /projects/{id}/webhooks`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhookBody {
    pub name: String,
    pub endpoint: String,
    pub events: Vec<WebhookEventType>,
}

/// Body for `PATCH /projects/{id}/webhooks/{webhookId}`. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWebhookBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<WebhookEventType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WebhookStatus>,
}

/// Webhook creation request; `project` is sent in the body as well.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhookOptions {
    pub project: String,
    #[serde(flatten)]
    pub body: CreateWebhookBody,
}

/// Webhook update request.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateWebhookOptions {
    pub project: String,
    #[serde(flatten)]
    pub body: UpdateWebhookBody,
}
