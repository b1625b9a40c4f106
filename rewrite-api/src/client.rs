//! Low-level REST client for the Rewrite API.
//!
//! Owns the HTTP connection pool, the authorization header, per-request
//! timeout and cancellation, and the retry loop for transient statuses.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use rewrite_core::constants;
use rewrite_core::error::{RwError, RwResult};

use crate::options::{FetchOptions, ResponseMeta, RestOptions, RetryEvent};
use crate::response::{decode_data, error_message};
use crate::retry;
use crate::url::build_url;

/// Outcome of one physical HTTP attempt that produced a response.
struct Attempt {
    status: StatusCode,
    url: String,
    body: Vec<u8>,
}

/// HTTP client for the Rewrite REST API.
///
/// Cheap to clone: clones share the connection pool, the options and the
/// header set, so [`RestClient::set_auth`] is visible to every clone.
#[derive(Clone)]
pub struct RestClient {
    inner: Client,
    options: Arc<RestOptions>,
    /// Default headers plus `Authorization`.
    headers: Arc<RwLock<HashMap<String, String>>>,
}

impl RestClient {
    /// Create a client from options.
    pub fn new(options: RestOptions) -> RwResult<Self> {
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| RwError::Config(format!("failed to build HTTP client: {e}")))?;

        let mut headers = options.headers.clone();
        headers.retain(|k, _| !k.eq_ignore_ascii_case(AUTHORIZATION.as_str()));
        headers.insert(AUTHORIZATION.as_str().to_string(), bearer(&options.auth));

        Ok(Self {
            inner,
            options: Arc::new(options),
            headers: Arc::new(RwLock::new(headers)),
        })
    }

    /// Create a client with default options and the given secret.
    pub fn with_token(token: impl Into<String>) -> RwResult<Self> {
        Self::new(RestOptions::with_auth(token))
    }

    /// Replace the token sent in the `Authorization` header.
    ///
    /// Requests already in flight keep the header they were built with.
    pub async fn set_auth(&self, token: impl Into<String>) {
        let token = token.into();
        let mut guard = self.headers.write().await;
        guard.retain(|k, _| !k.eq_ignore_ascii_case(AUTHORIZATION.as_str()));
        guard.insert(AUTHORIZATION.as_str().to_string(), bearer(&token));
        debug!("authorization token updated");
    }

    /// Snapshot of the headers sent with every request.
    pub async fn headers(&self) -> HashMap<String, String> {
        self.headers.read().await.clone()
    }

    /// Configured API origin (empty means the canonical origin).
    pub fn base_url(&self) -> &str {
        &self.options.base_url
    }

    pub fn options(&self) -> &RestOptions {
        &self.options
    }

    // --- Verbs ---

    /// GET `route` and decode the envelope's `data`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        route: &str,
        options: &FetchOptions,
    ) -> RwResult<Option<T>> {
        let body = self.execute(Method::GET, route, None, options).await?;
        decode_data(&body)
    }

    /// POST a JSON body to `route` and decode the envelope's `data`.
    pub async fn post<T, B>(&self, route: &str, body: &B, options: &FetchOptions) -> RwResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, route, body, options).await
    }

    /// PUT a JSON body to `route` and decode the envelope's `data`.
    pub async fn put<T, B>(&self, route: &str, body: &B, options: &FetchOptions) -> RwResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, route, body, options).await
    }

    /// PATCH `route` with a JSON body and decode the envelope's `data`.
    pub async fn patch<T, B>(&self, route: &str, body: &B, options: &FetchOptions) -> RwResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PATCH, route, body, options).await
    }

    /// DELETE `route` and decode the envelope's `data`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        route: &str,
        options: &FetchOptions,
    ) -> RwResult<Option<T>> {
        let body = self.execute(Method::DELETE, route, None, options).await?;
        decode_data(&body)
    }

    async fn send_json<T, B>(
        &self,
        method: Method,
        route: &str,
        body: &B,
        options: &FetchOptions,
    ) -> RwResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        // Encoded once; every attempt reuses the same value.
        let body = serde_json::to_value(body)
            .map_err(|e| RwError::Serialization(format!("failed to encode request body: {e}")))?;
        let bytes = self.execute(method, route, Some(&body), options).await?;
        decode_data(&bytes)
    }

    /// Run one logical call, retrying transient statuses, and return the raw
    /// success body.
    pub async fn execute(
        &self,
        method: Method,
        route: &str,
        body: Option<&serde_json::Value>,
        options: &FetchOptions,
    ) -> RwResult<Vec<u8>> {
        let url = build_url(route, options.query.as_ref(), &self.options.base_url);
        let timeout = resolve_timeout(options.timeout, self.options.timeout);
        let max_retries = self.options.max_retries();
        let cancel = options.cancel.as_ref();

        let mut attempt: u32 = 0;
        loop {
            debug!(method = %method, url = %url, attempt, "sending request");

            let response = self
                .send_once(method.clone(), &url, timeout, body, options)
                .await?;

            if response.status.is_success() {
                return Ok(response.body);
            }

            let status = response.status.as_u16();
            if !retry::is_retryable_status(status) {
                return Err(RwError::Http {
                    message: error_message(&response.body),
                    status,
                    url: response.url,
                    method: method.to_string(),
                });
            }

            if attempt >= max_retries {
                warn!(method = %method, route, status, attempts = attempt + 1, "giving up after retries");
                return Err(RwError::Http {
                    message: constants::MAX_RETRIES_MESSAGE.to_string(),
                    status,
                    url: response.url,
                    method: method.to_string(),
                });
            }

            self.notify_retry(&method, route, attempt, &response, options);

            let delay = match &self.options.retry {
                Some(policy) => policy.delay_for(attempt),
                None => retry::backoff(attempt),
            };
            warn!(
                "retrying {} {} after status {} (attempt {}/{}) in {:.2}s",
                method,
                route,
                status,
                attempt + 1,
                max_retries,
                delay.as_secs_f64()
            );
            sleep_or_cancel(delay, cancel).await?;

            attempt += 1;
        }
    }

    /// One physical attempt, raced against the caller's cancellation token.
    async fn send_once(
        &self,
        method: Method,
        url: &str,
        timeout: Duration,
        body: Option<&serde_json::Value>,
        options: &FetchOptions,
    ) -> RwResult<Attempt> {
        let builder = self.build_request(method, url, timeout, body, &options.headers).await?;

        let exchange = async {
            let response = builder.send().await.map_err(classify_error)?;
            let status = response.status();
            let url = response.url().to_string();
            let body = response.bytes().await.map_err(classify_error)?;
            Ok::<_, RwError>(Attempt {
                status,
                url,
                body: body.to_vec(),
            })
        };

        match options.cancel.as_ref() {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(RwError::Cancelled(format!("request to {url} cancelled"))),
                    result = exchange => result,
                }
            }
            None => exchange.await,
        }
    }

    /// Build a request with merged headers, timeout and optional JSON body.
    async fn build_request(
        &self,
        method: Method,
        url: &str,
        timeout: Duration,
        body: Option<&serde_json::Value>,
        overrides: &HashMap<String, String>,
    ) -> RwResult<RequestBuilder> {
        let headers = {
            let guard = self.headers.read().await;
            merge_headers(&guard, overrides)?
        };

        let mut builder = self
            .inner
            .request(method, url)
            .timeout(timeout)
            .headers(headers);
        if let Some(b) = body {
            builder = builder.json(b);
        }
        Ok(builder)
    }

    /// Run the retry hook, if any. A panicking hook is logged and ignored.
    fn notify_retry(
        &self,
        method: &Method,
        route: &str,
        attempt: u32,
        response: &Attempt,
        options: &FetchOptions,
    ) {
        let Some(hook) = self.options.retry.as_ref().and_then(|r| r.on_retry.as_ref()) else {
            return;
        };

        let event = RetryEvent {
            method: method.to_string(),
            route: route.to_string(),
            attempt,
            response: ResponseMeta {
                status: response.status.as_u16(),
                url: response.url.clone(),
            },
            options: options.clone(),
        };

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| hook(&event))) {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(attempt, route, "retry hook panicked: {reason}");
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Per-request timeout, else the client default, else 5s. Zero counts as unset.
fn resolve_timeout(request: Option<Duration>, client: Option<Duration>) -> Duration {
    request
        .filter(|t| !t.is_zero())
        .or_else(|| client.filter(|t| !t.is_zero()))
        .unwrap_or(constants::DEFAULT_TIMEOUT)
}

/// Client headers overridden by per-request headers, case-insensitively.
fn merge_headers(
    base: &HashMap<String, String>,
    overrides: &HashMap<String, String>,
) -> RwResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(base.len() + overrides.len());
    for (key, value) in base.iter().chain(overrides.iter()) {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| RwError::Config(format!("invalid header name {key:?}: {e}")))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| RwError::Config(format!("invalid value for header {key:?}: {e}")))?;
        if name == AUTHORIZATION {
            value.set_sensitive(true);
        }
        map.insert(name, value);
    }
    Ok(map)
}

/// Sleep for `delay` unless the token fires first.
async fn sleep_or_cancel(delay: Duration, cancel: Option<&CancellationToken>) -> RwResult<()> {
    match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(RwError::Cancelled("cancelled while waiting to retry".into())),
                _ = tokio::time::sleep(delay) => Ok(()),
            }
        }
        None => {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

/// Classify a reqwest error into an RwError variant.
fn classify_error(e: reqwest::Error) -> RwError {
    if e.is_timeout() {
        RwError::Timeout(e.to_string())
    } else if e.is_builder() {
        RwError::Config(format!("invalid request: {e}"))
    } else if e.is_connect() {
        RwError::Network(format!("connection failed: {e}"))
    } else {
        RwError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::options::RetryOptions;

    #[tokio::test]
    async fn test_new_sets_bearer_header() {
        let client = RestClient::with_token("rw_test").unwrap();
        let headers = client.headers().await;
        assert_eq!(headers.get("authorization").unwrap(), "Bearer rw_test");
    }

    #[tokio::test]
    async fn test_set_auth_is_shared_by_clones() {
        let client = RestClient::with_token("old").unwrap();
        let clone = client.clone();
        client.set_auth("new").await;
        assert_eq!(clone.headers().await.get("authorization").unwrap(), "Bearer new");
    }

    #[test]
    fn test_resolve_timeout() {
        let five = Duration::from_secs(5);
        assert_eq!(resolve_timeout(None, None), five);
        assert_eq!(resolve_timeout(None, Some(Duration::from_secs(2))), Duration::from_secs(2));
        assert_eq!(
            resolve_timeout(Some(Duration::from_millis(50)), Some(Duration::from_secs(2))),
            Duration::from_millis(50)
        );
        assert_eq!(resolve_timeout(Some(Duration::ZERO), Some(Duration::ZERO)), five);
    }

    #[test]
    fn test_merge_headers_overrides_case_insensitively() {
        let base = HashMap::from([
            ("Authorization".to_string(), "Bearer a".to_string()),
            ("X-Trace".to_string(), "1".to_string()),
        ]);
        let overrides = HashMap::from([("authorization".to_string(), "Bearer b".to_string())]);
        let merged = merge_headers(&base, &overrides).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[AUTHORIZATION], "Bearer b");
        assert!(merged[AUTHORIZATION].is_sensitive());
        assert_eq!(merged["x-trace"], "1");
    }

    #[test]
    fn test_merge_headers_rejects_invalid_name() {
        let overrides = HashMap::from([("bad header".to_string(), "x".to_string())]);
        let err = merge_headers(&HashMap::new(), &overrides).unwrap_err();
        assert!(matches!(err, RwError::Config(_)));
    }

    #[tokio::test]
    async fn test_sleep_or_cancel_returns_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let err = sleep_or_cancel(Duration::from_secs(30), Some(&token)).await.unwrap_err();
        assert!(matches!(err, RwError::Cancelled(_)));
        assert!(err.is_cancellation());
    }

    #[test]
    fn test_panicking_hook_is_contained() {
        let calls = Arc::new(AtomicU32::new(0));
        let seen = calls.clone();
        let options = RestOptions {
            retry: Some(RetryOptions::default().on_retry(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                panic!("hook failure");
            })),
            ..RestOptions::with_auth("rw")
        };
        let client = RestClient::new(options).unwrap();
        let attempt = Attempt {
            status: StatusCode::SERVICE_UNAVAILABLE,
            url: "https://api.rewritetoday.com/v1/projects".into(),
            body: Vec::new(),
        };

        client.notify_retry(&Method::GET, "/projects", 0, &attempt, &FetchOptions::default());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
