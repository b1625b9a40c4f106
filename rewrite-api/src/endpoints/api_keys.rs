//! API key endpoints.

use reqwest::Method;

use rewrite_core::error::RwResult;
use rewrite_models::{ApiKey, ApiResponse, CreateApiKeyOptions, CursorOptions};

use crate::client::RestClient;
use crate::options::FetchOptions;
use crate::routes;

#[derive(Debug, Clone)]
pub struct ApiKeys<'a> {
    rest: &'a RestClient,
    options: FetchOptions,
}

impl<'a> ApiKeys<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self {
            rest,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Create an API key with the given scopes.
    pub async fn create(&self, options: &CreateApiKeyOptions) -> RwResult<ApiResponse<ApiKey>> {
        let resp: Option<ApiResponse<ApiKey>> = self
            .rest
            .post(&routes::api_keys::create(&options.project), options, &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn list(&self, project: &str, cursor: Option<&CursorOptions>) -> RwResult<ApiResponse<Vec<ApiKey>>> {
        let resp: Option<ApiResponse<Vec<ApiKey>>> = self
            .rest
            .get(&routes::api_keys::list(project, cursor), &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    /// Revoke an API key.
    pub async fn delete(&self, id: &str, project: &str) -> RwResult<()> {
        self.rest
            .execute(Method::DELETE, &routes::api_keys::delete(project, id), None, &self.options)
            .await?;
        Ok(())
    }
}
