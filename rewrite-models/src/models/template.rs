//! Message template entity and request bodies.

use serde::{Deserialize, Serialize};

use super::common::Snowflake;

/// A message template belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTemplate {
    pub id: Snowflake,
    pub name: String,
    pub project_id: Snowflake,
    #[serde(default)]
    pub variables: Vec<ApiTemplateVariable>,
}

/// A named placeholder in a template, with an optional fallback value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTemplateVariable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl ApiTemplateVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Body for `POST /projects/{id}/templates`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTemplateBody {
    pub name: String,
    pub variables: Vec<ApiTemplateVariable>,
}

/// Body for `PATCH /projects/{id}/templates/{templateId}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTemplateBody {
    pub name: String,
    pub variables: Vec<ApiTemplateVariable>,
}

/// Template creation request: the owning project plus the body.
///
/// `project` is used for the route and is also sent in the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTemplateOptions {
    pub project: String,
    #[serde(flatten)]
    pub body: CreateTemplateBody,
}

/// Template update request: the owning project plus the body.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTemplateOptions {
    pub project: String,
    #[serde(flatten)]
    pub body: UpdateTemplateBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_deserialize_without_variables() {
        let json = r#"{"id":"1","name":"welcome","projectId":"p1"}"#;
        let template: ApiTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.project_id.as_str(), "p1");
        assert!(template.variables.is_empty());
    }

    #[test]
    fn test_create_options_flatten_project_into_body() {
        let options = CreateTemplateOptions {
            project: "p1".into(),
            body: CreateTemplateBody {
                name: "welcome".into(),
                variables: vec![ApiTemplateVariable::new("name").with_fallback("friend")],
            },
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["project"], "p1");
        assert_eq!(json["name"], "welcome");
        assert_eq!(json["variables"][0]["fallback"], "friend");
    }
}
