//! Rewrite Models - Wire types for the Rewrite REST API.
//!
//! This crate owns the JSON shapes exchanged with the API: resource entities
//! (projects, templates, webhooks, API keys), their enums, the request bodies
//! accepted by mutation endpoints, cursor pagination options, and the common
//! response envelope.

pub mod models;
pub mod response;

// Re-export key types
pub use models::common::{CursorOptions, Null, Snowflake};
pub use models::project::{ApiProject, CreateProjectBody, UpdateProjectBody};
pub use models::template::{
    ApiTemplate, ApiTemplateVariable, CreateTemplateBody, CreateTemplateOptions,
    UpdateTemplateBody, UpdateTemplateOptions,
};
pub use models::webhook::{
    ApiWebhook, CreateWebhookBody, CreateWebhookOptions, UpdateWebhookBody,
    UpdateWebhookOptions, WebhookEventType, WebhookStatus,
};
pub use models::api_key::{ApiKey, ApiKeyScope, CreateApiKeyBody, CreateApiKeyOptions};
pub use response::{ApiResponse, ApiValidationError};
