//! API key entity, permission scopes, and the creation body.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::common::Snowflake;

/// An API key issued for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: Snowflake,
    pub name: String,
    pub project_id: Snowflake,
    #[serde(default)]
    pub scopes: Vec<ApiKeyScope>,
}

/// Permissions grantable to an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiKeyScope {
    /// Every available permission.
    #[serde(rename = "*")]
    Wildcard,
    #[serde(rename = "project:read")]
    ReadProject,
    #[serde(rename = "project:write")]
    WriteProject,
    #[serde(rename = "project:api_key:read")]
    ReadApiKeys,
    #[serde(rename = "project:template:write")]
    WriteTemplate,
    #[serde(rename = "project:template:read")]
    ReadTemplates,
    #[serde(rename = "project:payment:read")]
    ReadPayments,
    #[serde(rename = "project:webhook:read")]
    ReadWebhooks,
    #[serde(rename = "project:webhook:write")]
    WriteWebhooks,
}

impl ApiKeyScope {
    pub const ALL: &'static [ApiKeyScope] = &[
        Self::Wildcard,
        Self::ReadProject,
        Self::WriteProject,
        Self::ReadApiKeys,
        Self::WriteTemplate,
        Self::ReadTemplates,
        Self::ReadPayments,
        Self::ReadWebhooks,
        Self::WriteWebhooks,
    ];

    /// Wire name of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wildcard => "*",
            Self::ReadProject => "project:read",
            Self::WriteProject => "project:write",
            Self::ReadApiKeys => "project:api_key:read",
            Self::WriteTemplate => "project:template:write",
            Self::ReadTemplates => "project:template:read",
            Self::ReadPayments => "project:payment:read",
            Self::ReadWebhooks => "project:webhook:read",
            Self::WriteWebhooks => "project:webhook:write",
        }
    }
}

impl FromStr for ApiKeyScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| format!("unknown api key scope: {s}"))
    }
}

impl std::fmt::Display for ApiKeyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body for `POST /projects/{id}/api-keys`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateApiKeyBody {
    pub name: String,
    pub scopes: Vec<ApiKeyScope>,
}

/// API key creation request; `project` is sent in the body as well.
#[derive(Debug, Clone, Serialize)]
pub struct CreateApiKeyOptions {
    pub project: String,
    #[serde(flatten)]
    pub body: CreateApiKeyBody,
}
