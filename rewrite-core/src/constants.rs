//! API-wide constants.

use std::time::Duration;

/// Application name, used for platform directories.
pub const APP_NAME: &str = "Rewrite";

/// Crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical Rewrite API origin.
pub const API_BASE_URL: &str = "https://api.rewritetoday.com";

/// REST API version segment.
pub const API_VERSION: &str = "v1";

/// Request timeout used when neither the request nor the client sets one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of retries for retryable statuses.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// First backoff step; doubles on every attempt.
pub const RETRY_BASE_DELAY: Duration = Duration::from_millis(300);

/// Upper bound for the exponential part of the backoff.
pub const RETRY_MAX_DELAY: Duration = Duration::from_secs(10);

/// Largest share of the capped delay added as jitter.
pub const RETRY_JITTER_RATIO: f64 = 0.3;

/// HTTP statuses considered transient.
pub const RETRYABLE_STATUSES: &[u16] = &[408, 425, 429, 500, 502, 503, 504];

/// Page size sent when a cursor query omits `limit`.
pub const DEFAULT_PAGE_LIMIT: u32 = 15;

/// Message used when an error response carries no body.
pub const GENERIC_ERROR_MESSAGE: &str = "Request failed";

/// Message used when the retry budget runs out.
pub const MAX_RETRIES_MESSAGE: &str = "Max retries reached";

/// Message for constructor input of the wrong shape.
pub const SECRET_TYPE_MESSAGE: &str = "Expected a string for the secret";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert_eq!(RETRYABLE_STATUSES.len(), 7);
        assert!(RETRYABLE_STATUSES.contains(&429));
        assert!(!RETRYABLE_STATUSES.contains(&501));
    }

    #[test]
    fn test_backoff_bounds() {
        assert!(RETRY_BASE_DELAY < RETRY_MAX_DELAY);
        assert!(RETRY_JITTER_RATIO > 0.0 && RETRY_JITTER_RATIO < 1.0);
    }
}
