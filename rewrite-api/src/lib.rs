//! Rewrite API - HTTP client for the Rewrite REST API.
//!
//! This crate provides a typed client for projects, message templates,
//! webhooks and API keys. The [`RestClient`] transport handles URL
//! construction, Bearer authentication, per-request timeouts and
//! cancellation, response envelope decoding, and retry with exponential
//! backoff for transient statuses. [`Rewrite`] wraps it with one facade per
//! resource.

pub mod client;
pub mod endpoints;
pub mod options;
pub mod response;
pub mod retry;
pub mod rewrite;
pub mod routes;
pub mod url;

// Re-export key types
pub use client::RestClient;
pub use endpoints::{ApiKeys, Projects, Templates, Webhooks};
pub use options::{DelayFn, FetchOptions, ResponseMeta, RestOptions, RetryEvent, RetryHook, RetryOptions};
pub use reqwest::Method;
pub use rewrite::{Rewrite, RewriteOptions};
pub use tokio_util::sync::CancellationToken;
pub use crate::url::{build_url, Query};
