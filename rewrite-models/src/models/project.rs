//! Project entity and request bodies.

use serde::{Deserialize, Serialize};

use super::common::{Null, Snowflake};

/// A Rewrite project: the container that owns templates, webhooks and API keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProject {
    pub id: Snowflake,
    pub name: String,
    pub owner_id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Body for `POST /projects`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectBody {
    pub name: String,
}

/// Body for `PATCH /projects/{id}`.
///
/// Unset fields are omitted. `icon: Some(Null)` removes the project icon.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProjectBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Null>,
}

impl UpdateProjectBody {
    /// Rename the project.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            icon: None,
        }
    }

    /// Clear the project icon.
    pub fn clear_icon(mut self) -> Self {
        self.icon = Some(Null);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserialize() {
        let json = r#"{"id":"123","name":"Test","ownerId":"999"}"#;
        let project: ApiProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.id.as_str(), "123");
        assert_eq!(project.owner_id.as_str(), "999");
        assert!(project.icon.is_none());
    }

    #[test]
    fn test_update_body_omits_unset_fields() {
        let body = UpdateProjectBody::rename("Renamed");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Renamed" }));
    }

    #[test]
    fn test_update_body_clears_icon_with_explicit_null() {
        let body = UpdateProjectBody::default().clear_icon();
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"icon":null}"#);
    }
}
