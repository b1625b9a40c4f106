//! Top-level Rewrite client.

use serde_json::Value;
use tracing::debug;

use rewrite_core::config::{AppConfig, RestConfig};
use rewrite_core::error::{RwError, RwResult};

use crate::client::RestClient;
use crate::endpoints::{ApiKeys, Projects, Templates, Webhooks};
use crate::options::RestOptions;

/// Construction options for [`Rewrite`].
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// API secret sent as the Bearer token.
    pub secret: String,
    /// Transport customization. Its `auth` is replaced by `secret`.
    pub rest: Option<RestOptions>,
}

/// Entry point to the Rewrite API.
///
/// Holds one [`RestClient`] and hands out resource facades borrowing it:
///
/// ```no_run
/// # async fn run() -> rewrite_core::RwResult<()> {
/// let client = rewrite_api::Rewrite::new("rw_live_...")?;
/// let project = client.projects().get("123").await?;
/// println!("{:?}", project.data);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Rewrite {
    rest: RestClient,
}

impl Rewrite {
    /// Client with default transport options.
    pub fn new(secret: impl Into<String>) -> RwResult<Self> {
        Self::with_options(RewriteOptions {
            secret: secret.into(),
            rest: None,
        })
    }

    pub fn with_options(options: RewriteOptions) -> RwResult<Self> {
        let mut rest = options.rest.unwrap_or_default();
        rest.auth = options.secret;
        Ok(Self {
            rest: RestClient::new(rest)?,
        })
    }

    /// Build a client from dynamic input.
    ///
    /// Accepts a secret string or an object `{"secret": "...", "rest": {...}}`
    /// where `rest` uses the configuration file's field names.
    pub fn from_value(value: &Value) -> RwResult<Self> {
        match value {
            Value::String(secret) => Self::new(secret.clone()),
            Value::Object(map) => {
                let secret = match map.get("secret") {
                    Some(Value::String(secret)) => secret.clone(),
                    _ => return Err(RwError::secret_type()),
                };
                let rest = match map.get("rest") {
                    None | Some(Value::Null) => None,
                    Some(rest) => {
                        let config: RestConfig = serde_json::from_value(rest.clone())
                            .map_err(|e| RwError::Config(format!("invalid rest options: {e}")))?;
                        Some(RestOptions::from_config(&config, secret.clone()))
                    }
                };
                Self::with_options(RewriteOptions { secret, rest })
            }
            _ => Err(RwError::secret_type()),
        }
    }

    /// Build a client from the persisted configuration.
    pub fn from_config(config: &AppConfig) -> RwResult<Self> {
        if !config.is_configured() {
            return Err(RwError::MissingConfig(
                "no API secret configured; run `rewrite config set-secret`".into(),
            ));
        }
        debug!(base_url = %config.rest.base_url, "creating client from configuration");
        Self::with_options(RewriteOptions {
            secret: config.secret.clone(),
            rest: Some(RestOptions::from_config(&config.rest, config.secret.clone())),
        })
    }

    /// The underlying REST client.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(&self.rest)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(&self.rest)
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(&self.rest)
    }

    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys::new(&self.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_from_value_string() {
        let client = Rewrite::from_value(&json!("rw_abc")).unwrap();
        assert_eq!(
            client.rest().headers().await.get("authorization").unwrap(),
            "Bearer rw_abc"
        );
    }

    #[test]
    fn test_from_value_object_with_rest() {
        let client = Rewrite::from_value(&json!({
            "secret": "rw_abc",
            "rest": { "base_url": "https://example.com", "max_retries": 1 }
        }))
        .unwrap();
        assert_eq!(client.rest().base_url(), "https://example.com");
        assert_eq!(client.rest().options().max_retries(), 1);
    }

    #[test]
    fn test_from_value_rejects_wrong_shapes() {
        for value in [json!(123), json!(null), json!(["rw"]), json!({ "secret": 5 }), json!({})] {
            let err = Rewrite::from_value(&value).unwrap_err();
            assert!(matches!(err, RwError::Config(ref m) if m == "Expected a string for the secret"));
        }
    }

    #[test]
    fn test_from_config_requires_secret() {
        let err = Rewrite::from_config(&AppConfig::default()).unwrap_err();
        assert!(matches!(err, RwError::MissingConfig(_)));
    }

    #[test]
    fn test_with_options_uses_secret_over_rest_auth() {
        let client = Rewrite::with_options(RewriteOptions {
            secret: "rw_real".into(),
            rest: Some(RestOptions::with_auth("ignored")),
        })
        .unwrap();
        assert_eq!(client.rest().options().auth, "rw_real");
    }
}
