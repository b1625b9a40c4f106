//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use rewrite_api::{RestClient, RestOptions, RetryOptions, Rewrite, RewriteOptions};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const SECRET: &str = "rw_test";

/// Retry policy with no wait between attempts.
pub fn instant_retry(max: u32) -> RetryOptions {
    RetryOptions::with_max(max).delay(|_| Duration::ZERO)
}

/// Transport options pointing at the mock server.
pub fn rest_options(server: &MockServer, retry: RetryOptions) -> RestOptions {
    RestOptions {
        base_url: server.uri(),
        retry: Some(retry),
        ..RestOptions::with_auth(SECRET)
    }
}

/// Low-level client pointing at the mock server.
pub fn rest_client(server: &MockServer, retry: RetryOptions) -> RestClient {
    RestClient::new(rest_options(server, retry)).expect("failed to build rest client")
}

/// Top-level client pointing at the mock server.
pub fn rewrite_client(server: &MockServer) -> Rewrite {
    Rewrite::with_options(RewriteOptions {
        secret: SECRET.into(),
        rest: Some(rest_options(server, instant_retry(1))),
    })
    .expect("failed to build rewrite client")
}

/// Success body as the API sends it: the envelope nested under `data`.
pub fn envelope(data: Value) -> Value {
    json!({ "data": { "ok": true, "data": data } })
}

pub fn project_json(id: &str) -> Value {
    json!({ "id": id, "name": "Test", "ownerId": "999" })
}

pub fn template_json(id: &str, project: &str) -> Value {
    json!({
        "id": id,
        "name": "welcome",
        "projectId": project,
        "variables": [{ "name": "first_name", "fallback": "there" }]
    })
}

pub fn webhook_json(id: &str, project: &str) -> Value {
    json!({
        "id": id,
        "name": "deliveries",
        "endpoint": "https://hooks.example.com/rewrite",
        "events": ["sms.delivered", "sms.failed"],
        "status": "ACTIVE",
        "projectId": project
    })
}

pub fn api_key_json(id: &str, project: &str) -> Value {
    json!({
        "id": id,
        "name": "ci",
        "projectId": project,
        "scopes": ["project:read", "project:template:read"]
    })
}
