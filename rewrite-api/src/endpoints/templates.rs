//! Template endpoints.

use reqwest::Method;

use rewrite_core::error::RwResult;
use rewrite_models::{
    ApiResponse, ApiTemplate, CreateTemplateOptions, CursorOptions, UpdateTemplateOptions,
};

use crate::client::RestClient;
use crate::options::FetchOptions;
use crate::routes;

/// Message template operations, scoped to a project.
#[derive(Debug, Clone)]
pub struct Templates<'a> {
    rest: &'a RestClient,
    options: FetchOptions,
}

impl<'a> Templates<'a> {
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

    /// Create a template. The body carries `project` alongside the template fields.
    pub async fn create(&self, options: &CreateTemplateOptions) -> RwResult<ApiResponse<ApiTemplate>> {
        let resp: Option<ApiResponse<ApiTemplate>> = self
            .rest
            .post(&routes::templates::create(&options.project), options, &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn get(&self, id: &str, project: &str) -> RwResult<ApiResponse<ApiTemplate>> {
        let resp: Option<ApiResponse<ApiTemplate>> = self
            .rest
            .get(&routes::templates::get(project, id), &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    /// List a page of templates.
    pub async fn list(
        &self,
        project: &str,
        cursor: Option<&CursorOptions>,
    ) -> RwResult<ApiResponse<Vec<ApiTemplate>>> {
        let resp: Option<ApiResponse<Vec<ApiTemplate>>> = self
            .rest
            .get(&routes::templates::list(project, cursor), &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn update(&self, id: &str, options: &UpdateTemplateOptions) -> RwResult<ApiResponse<ApiTemplate>> {
        let resp: Option<ApiResponse<ApiTemplate>> = self
            .rest
            .patch(&routes::templates::update(&options.project, id), options, &self.options)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn delete(&self, id: &str, project: &str) -> RwResult<()> {
        self.rest
            .execute(Method::DELETE, &routes::templates::delete(project, id), None, &self.options)
            .await?;
        Ok(())
    }
}
