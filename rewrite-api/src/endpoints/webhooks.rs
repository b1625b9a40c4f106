//! Webhook endpoints.

use reqwest::Method;

use rewrite_core::error::RwResult;
use rewrite_models::{
    ApiResponse, ApiWebhook, CreateWebhookOptions, CursorOptions, UpdateWebhookOptions,
};

use crate::client::RestClient;
use crate::options::FetchOptions;
use crate::routes;

/// Webhook operations, scoped to a project.
#[derive(Debug, Clone)]
pub struct Webhooks<'a> {
    rest: &'a RestClient,
    options: FetchOptions,
}

impl<'a> Webhooks<'a> {
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

    /// Register a webhook endpoint for a project.
    pub async fn create(&self, options: &CreateWebhookOptions) -> RwResult<ApiResponse<ApiWebhook>> {
        let resp: Option<ApiResponse<ApiWebhook>> = self
            .rest
            .post(&routes::webhooks::create(&options.project), options, &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn get(&self, id: &str, project: &str) -> RwResult<ApiResponse<ApiWebhook>> {
        let resp: Option<ApiResponse<ApiWebhook>> = self
            .rest
            .get(&routes::webhooks::get(project, id), &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn list(
        &self,
        project: &str,
        cursor: Option<&CursorOptions>,
    ) -> RwResult<ApiResponse<Vec<ApiWebhook>>> {
        let resp: Option<ApiResponse<Vec<ApiWebhook>>> = self
            .rest
            .get(&routes::webhooks::list(project, cursor), &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    /// Update a webhook. Only the fields set in the body are sent.
    pub async fn update(&self, id: &str, options: &UpdateWebhookOptions) -> RwResult<ApiResponse<ApiWebhook>> {
        let resp: Option<ApiResponse<ApiWebhook>> = self
            .rest
            .patch(&routes::webhooks::update(&options.project, id), options, &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn delete(&self, id: &str, project: &str) -> RwResult<()> {
        self.rest
            .execute(Method::DELETE, &routes::webhooks::delete(project, id), None, &self.options)
            .await?;
        Ok(())
    }
}
