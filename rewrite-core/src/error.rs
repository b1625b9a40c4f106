//! Global error types for the Rewrite client.
//!
//! All error categories across the workspace are unified into a single
//! `RwError` enum with conversions from underlying library errors.

use thiserror::Error;

use crate::constants;

/// Convenience type alias for Results using RwError.
pub type RwResult<T> = Result<T, RwError>;

/// Unified error type covering all error categories of the Rewrite client.
#[derive(Error, Debug)]
pub enum RwError {
    // -- Configuration errors --
    /// Invalid construction input or configuration file contents.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    /// A query payload had a shape the URL builder cannot encode.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    // -- Network errors --
    /// The API answered with a terminal non-success status.
    #[error("{}", http_display(.message, .status))]
    Http {
        /// Message extracted from the error body.
        message: String,
        /// HTTP status code.
        status: u16,
        /// Fully-qualified request URL.
        url: String,
        /// HTTP method of the request.
        method: String,
    },

    /// Connection, TLS or body transfer failure.
    #[error("network error: {0}")]
    Network(String),

    /// The per-request timeout elapsed.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The caller cancelled the call.
    #[error("request cancelled: {0}")]
    Cancelled(String),

    // -- Payload errors --
    /// A successful response could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A request body could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn http_display(message: &str, status: &u16) -> String {
    if message.is_empty() {
        format!("HTTPError({status})")
    } else {
        message.to_string()
    }
}

impl RwError {
    /// Build the error returned for constructor input of the wrong shape.
    pub fn secret_type() -> Self {
        RwError::Config(constants::SECRET_TYPE_MESSAGE.to_string())
    }

    /// HTTP status of a terminal HTTP failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RwError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the call ended because of a timeout or caller cancellation.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, RwError::Timeout(_) | RwError::Cancelled(_))
    }

    /// Whether the failure carries a status the API treats as transient.
    pub fn is_retryable(&self) -> bool {
        self.status()
            .is_some_and(|s| constants::RETRYABLE_STATUSES.contains(&s))
    }
}

impl From<serde_json::Error> for RwError {
    fn from(e: serde_json::Error) -> Self {
        RwError::Decode(e.to_string())
    }
}

impl From<toml::de::Error> for RwError {
    fn from(e: toml::de::Error) -> Self {
        RwError::Config(e.to_string())
    }
}
