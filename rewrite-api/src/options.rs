//! Client, retry and per-request options.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use rewrite_core::config::RestConfig;
use rewrite_core::constants;

use crate::retry;
use crate::url::Query;

/// Custom delay before retry number `attempt` (0-based).
pub type DelayFn = Arc<dyn Fn(u32) -> Duration + Send + Sync>;

/// Callback invoked before each retry.
pub type RetryHook = Arc<dyn Fn(&RetryEvent) + Send + Sync>;

/// Options for the low-level REST client.
#[derive(Clone, Default)]
pub struct RestOptions {
    /// API origin. Empty means `https://api.rewritetoday.com`.
    pub base_url: String,
    /// API secret sent as the Bearer token.
    pub auth: String,
    /// Default per-request timeout. `None` means 5s.
    pub timeout: Option<Duration>,
    /// Headers merged into every request.
    pub headers: HashMap<String, String>,
    /// Retry behavior for retryable statuses. `None` means 3 retries with backoff.
    pub retry: Option<RetryOptions>,
}

impl RestOptions {
    /// Options with only a secret set.
    pub fn with_auth(auth: impl Into<String>) -> Self {
        Self {
            auth: auth.into(),
            ..Self::default()
        }
    }

    /// Bridge persisted configuration to transport options.
    pub fn from_config(config: &RestConfig, secret: impl Into<String>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            auth: secret.into(),
            timeout: (config.timeout_ms > 0).then(|| Duration::from_millis(config.timeout_ms)),
            headers: config.headers.clone(),
            retry: Some(RetryOptions::with_max(config.max_retries)),
        }
    }

    /// Maximum retries after the first attempt.
    pub fn max_retries(&self) -> u32 {
        self.retry
            .as_ref()
            .map_or(constants::DEFAULT_MAX_RETRIES, |r| r.max)
    }
}

impl std::fmt::Debug for RestOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestOptions")
            .field("base_url", &self.base_url)
            .field("auth", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("retry", &self.retry)
            .finish()
    }
}

/// Retry behavior for failed requests.
#[derive(Clone)]
pub struct RetryOptions {
    /// Maximum number of retries after the first attempt.
    ///
    /// Zero disables retries; it is never read as "use the default". Leave
    /// [`RestOptions::retry`] as `None` to get the default of 3.
    pub max: u32,
    /// Custom wait before each retry; defaults to exponential backoff with jitter.
    pub delay: Option<DelayFn>,
    /// Runs before each retry. A panic inside the hook is caught and logged.
    pub on_retry: Option<RetryHook>,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self::with_max(constants::DEFAULT_MAX_RETRIES)
    }
}

impl RetryOptions {
    pub fn with_max(max: u32) -> Self {
        Self {
            max,
            delay: None,
            on_retry: None,
        }
    }

    /// Replace the backoff with a custom delay function.
    pub fn delay(mut self, delay: impl Fn(u32) -> Duration + Send + Sync + 'static) -> Self {
        self.delay = Some(Arc::new(delay));
        self
    }

    /// Install a hook run before every retry.
    pub fn on_retry(mut self, hook: impl Fn(&RetryEvent) + Send + Sync + 'static) -> Self {
        self.on_retry = Some(Arc::new(hook));
        self
    }

    /// Wait before retry number `attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match &self.delay {
            Some(delay) => delay(attempt),
            None => retry::backoff(attempt),
        }
    }
}

impl std::fmt::Debug for RetryOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryOptions")
            .field("max", &self.max)
            .field("delay", &self.delay.as_ref().map(|_| "custom"))
            .field("on_retry", &self.on_retry.is_some())
            .finish()
    }
}

/// Per-request customization.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Headers added to, or overriding, the client headers for this request.
    pub headers: HashMap<String, String>,
    /// Timeout override for each attempt of this request.
    pub timeout: Option<Duration>,
    /// Query appended to the URL.
    pub query: Option<Query>,
    /// Cancels the request and any pending retry when triggered.
    pub cancel: Option<CancellationToken>,
}

impl FetchOptions {
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Status and URL of the response that triggered a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub url: String,
}

/// Context passed to [`RetryOptions::on_retry`].
#[derive(Debug, Clone)]
pub struct RetryEvent {
    pub method: String,
    pub route: String,
    /// Index of the attempt that failed (0-based).
    pub attempt: u32,
    pub response: ResponseMeta,
    pub options: FetchOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_retries_defaults_to_three() {
        assert_eq!(RestOptions::default().max_retries(), 3);
        assert_eq!(RetryOptions::default().max, 3);
    }

    #[test]
    fn test_explicit_zero_disables_retries() {
        let options = RestOptions {
            retry: Some(RetryOptions::with_max(0)),
            ..RestOptions::with_auth("rw")
        };
        assert_eq!(options.max_retries(), 0);
    }

    #[test]
    fn test_custom_delay_overrides_backoff() {
        let retry = RetryOptions::default().delay(|attempt| Duration::from_millis(u64::from(attempt) * 7));
        assert_eq!(retry.delay_for(3), Duration::from_millis(21));
    }

    #[test]
    fn test_default_delay_uses_backoff() {
        let delay = RetryOptions::default().delay_for(0);
        assert!(delay >= Duration::from_millis(300) && delay <= Duration::from_millis(390));
    }

    #[test]
    fn test_from_config() {
        let mut config = RestConfig::default();
        config.base_url = "https://example.com".into();
        config.max_retries = 1;
        let options = RestOptions::from_config(&config, "rw_cfg");
        assert_eq!(options.auth, "rw_cfg");
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.max_retries(), 1);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", RestOptions::with_auth("rw_super_secret"));
        assert!(!rendered.contains("rw_super_secret"));
    }
}
