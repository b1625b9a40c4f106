//! Response envelope types.
//!
//! Every Rewrite REST response wraps its payload in a common envelope:
//! ```json
//! { "ok": true, "data": { ... } }
//! { "ok": false, "code": "VALIDATION", "message": "...", "errors": { "message": "...", "detailed": {} } }
//! ```

use serde::{Deserialize, Serialize};

/// Standard API response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    /// Whether the API handled the request successfully.
    #[serde(default)]
    pub ok: bool,
    /// Response payload (type varies by endpoint).
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Machine-readable status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Validation details (present only on rejected input).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ApiValidationError>,
}

// Avoids the `T: Default` bound a plain `#[serde(default)]` would add.
fn none<T>() -> Option<T> {
    None
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            ok: false,
            data: None,
            code: None,
            message: None,
            errors: None,
        }
    }
}

/// Validation details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiValidationError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed: Option<serde_json::Map<String, serde_json::Value>>,
}

impl<T> ApiResponse<T> {
    /// Best available error description for an unsuccessful envelope.
    pub fn error_message(&self) -> Option<String> {
        if self.ok {
            return None;
        }
        self.errors
            .as_ref()
            .map(|e| e.message.clone())
            .or_else(|| self.message.clone())
    }

    /// Take the payload, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
