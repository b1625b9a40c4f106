//! Project endpoints.

use reqwest::Method;

use rewrite_core::error::RwResult;
use rewrite_models::{ApiProject, ApiResponse, CreateProjectBody, UpdateProjectBody};

use crate::client::RestClient;
use crate::options::FetchOptions;
use crate::routes;

/// Project operations.
#[derive(Debug, Clone)]
pub struct Projects<'a> {
    rest: &'a RestClient,
    options: FetchOptions,
}

impl<'a> Projects<'a> {
    pub fn new(rest: &'a RestClient) -> Self {
        Self {
            rest,
            options: FetchOptions::default(),
        }
    }

    /// Use these request options for every call made through this facade.
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Create a project.
    pub async fn create(&self, body: &CreateProjectBody) -> RwResult<ApiResponse<ApiProject>> {
        let resp: Option<ApiResponse<ApiProject>> = self
            .rest
            .post(&routes::projects::create(), body, &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    /// Fetch a project by id.
    pub async fn get(&self, id: &str) -> RwResult<ApiResponse<ApiProject>> {
        let resp: Option<ApiResponse<ApiProject>> =
            self.rest.get(&routes::projects::get(id), &self.options).await?;
        Ok(resp.unwrap_or_default())
    }

    /// Rename a project or clear its icon.
    pub async fn update(&self, id: &str, body: &UpdateProjectBody) -> RwResult<ApiResponse<ApiProject>> {
        let resp: Option<ApiResponse<ApiProject>> = self
            .rest
            .patch(&routes::projects::update(id), body, &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    /// Delete a project. The response body is not decoded.
    pub async fn delete(&self, id: &str) -> RwResult<()> {
        self.rest
            .execute(Method::DELETE, &routes::projects::delete(id), None, &self.options)
            .await?;
        Ok(())
    }
}
