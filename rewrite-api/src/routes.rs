//! Route builders for every Rewrite API resource.
//!
//! Routes are relative to the `/v1` prefix added by [`crate::url::build_url`].

use url::form_urlencoded;

use rewrite_models::CursorOptions;

/// Cursor query string: `limit=..[&after=..][&before=..]`.
pub fn cursor_query(options: Option<&CursorOptions>) -> String {
    let limit = options.map_or(rewrite_core::constants::DEFAULT_PAGE_LIMIT, CursorOptions::effective_limit);

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("limit", &limit.to_string());
    if let Some(options) = options {
        if let Some(after) = options.after.as_ref().filter(|s| !s.is_empty()) {
            query.append_pair("after", after.as_str());
        }
        if let Some(before) = options.before.as_ref().filter(|s| !s.is_empty()) {
            query.append_pair("before", before.as_str());
        }
    }
    query.finish()
}

/// Percent-encode an id for use as one path segment.
pub fn segment(id: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space.
    form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub mod projects {
    use super::segment;

    /// `POST /projects`
    pub fn create() -> String {
        "/projects".to_string()
    }

    /// `GET /projects/:id`
    pub fn get(id: &str) -> String {
        format!("/projects/{}", segment(id))
    }

    /// `PATCH /projects/:id`
    pub fn update(id: &str) -> String {
        format!("/projects/{}", segment(id))
    }

    /// `DELETE /projects/:id`
    pub fn delete(id: &str) -> String {
        format!("/projects/{}", segment(id))
    }
}

pub mod templates {
    use super::{cursor_query, segment};
    use rewrite_models::CursorOptions;

    /// `GET /projects/:id/templates` with a cursor query.
    pub fn list(id: &str, options: Option<&CursorOptions>) -> String {
        format!("/projects/{}/templates?{}", segment(id), cursor_query(options))
    }

    /// `POST /projects/:id/templates`
    pub fn create(id: &str) -> String {
        format!("/projects/{}/templates", segment(id))
    }

    /// `GET /projects/:id/templates/:templateId`
    pub fn get(id: &str, template_id: &str) -> String {
        format!("/projects/{}/templates/{}", segment(id), segment(template_id))
    }

    /// `PATCH /projects/:id/templates/:templateId`
    pub fn update(id: &str, template_id: &str) -> String {
        format!("/projects/{}/templates/{}", segment(id), segment(template_id))
    }

    /// `DELETE /projects/:id/templates/:templateId`
    pub fn delete(id: &str, template_id: &str) -> String {
        format!("/projects/{}/templates/{}", segment(id), segment(template_id))
    }
}

pub mod webhooks {
    use super::{cursor_query, segment};
    use rewrite_models::CursorOptions;

    /// `GET /projects/:id/webhooks` with a cursor query.
    pub fn list(id: &str, options: Option<&CursorOptions>) -> String {
        format!("/projects/{}/webhooks?{}", segment(id), cursor_query(options))
    }

    /// `POST /projects/:id/webhooks`
    pub fn create(id: &str) -> String {
        format!("/projects/{}/webhooks", segment(id))
    }

    /// `GET /projects/:id/webhooks/:webhookId`
    pub fn get(id: &str, webhook_id: &str) -> String {
        format!("/projects/{}/webhooks/{}", segment(id), segment(webhook_id))
    }

    /// `PATCH /projects/:id/webhooks/:webhookId`
    pub fn update(id: &str, webhook_id: &str) -> String {
        format!("/projects/{}/webhooks/{}", segment(id), segment(webhook_id))
    }

    /// `DELETE /projects/:id/webhooks/:webhookId`
    pub fn delete(id: &str, webhook_id: &str) -> String {
        format!("/projects/{}/webhooks/{}", segment(id), segment(webhook_id))
    }
}

pub mod api_keys {
    use super::{cursor_query, segment};
    use rewrite_models::CursorOptions;

    /// `GET /projects/:id/api-keys` with a cursor query.
    pub fn list(id: &str, options: Option<&CursorOptions>) -> String {
        format!("/projects/{}/api-keys?{}", segment(id), cursor_query(options))
    }

    /// `POST /projects/:id/api-keys`
    pub fn create(id: &str) -> String {
        format!("/projects/{}/api-keys", segment(id))
    }

    /// `DELETE /projects/:id/api-keys/:apiKeyId`
    pub fn delete(id: &str, api_key_id: &str) -> String {
        format!("/projects/{}/api-keys/{}", segment(id), segment(api_key_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewrite_models::Snowflake;

    #[test]
    fn test_cursor_query_defaults() {
        assert_eq!(cursor_query(None), "limit=15");
        assert_eq!(cursor_query(Some(&CursorOptions::default())), "limit=15");
        assert_eq!(api_keys::list("abc", None), "/projects/abc/api-keys?limit=15");
    }

    #[test]
    fn test_cursor_query_order_and_encoding() {
        let options = CursorOptions {
            limit: 50,
            after: Some(Snowflake::from("a b")),
            before: Some(Snowflake::from("x&y")),
        };
        assert_eq!(cursor_query(Some(&options)), "limit=50&after=a+b&before=x%26y");
    }

    #[test]
    fn test_cursor_query_skips_empty_cursors() {
        let options = CursorOptions {
            limit: 5,
            after: Some(Snowflake::default()),
            before: None,
        };
        assert_eq!(cursor_query(Some(&options)), "limit=5");
    }

    #[test]
    fn test_resource_routes() {
        assert_eq!(projects::create(), "/projects");
        assert_eq!(projects::get("123"), "/projects/123");
        assert_eq!(templates::create("p1"), "/projects/p1/templates");
        assert_eq!(templates::update("p1", "t1"), "/projects/p1/templates/t1");
        assert_eq!(webhooks::get("p1", "w1"), "/projects/p1/webhooks/w1");
        assert_eq!(
            webhooks::list("p1", Some(&CursorOptions::with_limit(2))),
            "/projects/p1/webhooks?limit=2"
        );
        assert_eq!(api_keys::delete("p1", "k1"), "/projects/p1/api-keys/k1");
    }

    #[test]
    fn test_ids_are_single_path_segments() {
        assert_eq!(projects::get("a/b?c"), "/projects/a%2Fb%3Fc");
        assert_eq!(templates::get("p 1", "t+1"), "/projects/p%201/templates/t%2B1");
        assert_eq!(
            webhooks::list("p/1", None),
            "/projects/p%2F1/webhooks?limit=15"
        );
    }
}
