//! Request URL construction.
//!
//! Joins a base origin, the `/v1` version segment, a route and an optional
//! query into a fully-qualified URL.

use std::collections::BTreeMap;

use url::form_urlencoded;

use rewrite_core::constants::{API_BASE_URL, API_VERSION};
use rewrite_core::error::{RwError, RwResult};

/// Query payload appended to a request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Pre-encoded query string; one leading `?` is stripped.
    Raw(String),
    /// Key-value pairs, encoded in key order.
    Map(BTreeMap<String, String>),
    /// Key-value pairs allowing repeated keys; encoded with a stable sort by key.
    Pairs(Vec<(String, String)>),
}

impl Query {
    /// Encode the query without the leading `?`.
    pub fn encode(&self) -> String {
        match self {
            Query::Raw(raw) => raw.strip_prefix('?').unwrap_or(raw).to_string(),
            Query::Map(map) => form_urlencoded::Serializer::new(String::new())
                .extend_pairs(map.iter())
                .finish(),
            Query::Pairs(pairs) => {
                let mut sorted: Vec<&(String, String)> = pairs.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(&b.0));
                form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(sorted.into_iter().map(|(k, v)| (k, v)))
                    .finish()
            }
        }
    }

    /// Build a map query from borrowed pairs.
    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Query::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Build a pair-list query from borrowed pairs.
    pub fn pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Query::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Query::Raw(raw.to_string())
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Query::Raw(raw)
    }
}

impl From<BTreeMap<String, String>> for Query {
    fn from(map: BTreeMap<String, String>) -> Self {
        Query::Map(map)
    }
}

impl From<Vec<(String, String)>> for Query {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Query::Pairs(pairs)
    }
}

impl TryFrom<serde_json::Value> for Query {
    type Error = RwError;

    /// Accepts a string, an object of string values, or an array of
    /// `[key, value]` string arrays.
    fn try_from(value: serde_json::Value) -> RwResult<Self> {
        use serde_json::Value;

        match value {
            Value::String(raw) => Ok(Query::Raw(raw)),
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| match v {
                    Value::String(s) => Ok((k, s)),
                    other => Err(RwError::InvalidQuery(format!(
                        "value for {k:?} must be a string, got {other}"
                    ))),
                })
                .collect::<RwResult<BTreeMap<_, _>>>()
                .map(Query::Map),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Array(pair) => match pair.as_slice() {
                        [Value::String(k), Value::String(v)] => Ok((k.clone(), v.clone())),
                        _ => Err(RwError::InvalidQuery(format!(
                            "expected a [key, value] pair of strings, got {} element(s)",
                            pair.len()
                        ))),
                    },
                    other => Err(RwError::InvalidQuery(format!(
                        "expected a [key, value] pair, got {other}"
                    ))),
                })
                .collect::<RwResult<Vec<_>>>()
                .map(Query::Pairs),
            other => Err(RwError::InvalidQuery(format!("unsupported query type: {other}"))),
        }
    }
}

/// Build the full request URL for `route`.
///
/// An empty `base_url` means the canonical origin. `/v1` is inserted between
/// origin and route unless the origin already ends with it. A query is
/// appended with `&` when the route already carries one.
pub fn build_url(route: &str, query: Option<&Query>, base_url: &str) -> String {
    let base_url = match base_url.trim() {
        "" => API_BASE_URL,
        trimmed => trimmed,
    };
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);

    let route = match route.trim() {
        "" => "/".to_string(),
        r if r.starts_with('/') => r.to_string(),
        r => format!("/{r}"),
    };

    let version_suffix = format!("/{API_VERSION}");
    let mut full = if base_url.ends_with(&version_suffix) {
        format!("{base_url}{route}")
    } else {
        format!("{base_url}{version_suffix}{route}")
    };

    if let Some(encoded) = query.map(Query::encode).filter(|q| !q.is_empty()) {
        full.push(if full.contains('?') { '&' } else { '?' });
        full.push_str(&encoded);
    }
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_with_map_query() {
        let query = Query::map([("limit", "20")]);
        assert_eq!(
            build_url("/projects/1", Some(&query), "https://example.com"),
            "https://example.com/v1/projects/1?limit=20"
        );
    }

    #[test]
    fn test_build_url_extends_route_query() {
        let query = Query::map([("x", "1")]);
        assert_eq!(
            build_url("/projects/p1/templates?limit=15", Some(&query), "https://example.com"),
            "https://example.com/v1/projects/p1/templates?limit=15&x=1"
        );
    }

    #[test]
    fn test_build_url_default_base_url() {
        assert_eq!(
            build_url("/projects/1", None, ""),
            "https://api.rewritetoday.com/v1/projects/1"
        );
    }

    #[test]
    fn test_build_url_avoids_double_version() {
        assert_eq!(
            build_url("/projects/1", None, "https://api.rewritetoday.com/v1"),
            "https://api.rewritetoday.com/v1/projects/1"
        );
        assert_eq!(
            build_url("projects", None, "https://api.rewritetoday.com/v1/"),
            "https://api.rewritetoday.com/v1/projects"
        );
    }

    #[test]
    fn test_build_url_normalizes_route() {
        assert_eq!(build_url("  ", None, "https://example.com/"), "https://example.com/v1/");
        assert_eq!(
            build_url(" projects/1 ", None, "https://example.com"),
            "https://example.com/v1/projects/1"
        );
    }

    #[test]
    fn test_raw_query_strips_question_mark() {
        let query = Query::from("?a=1&b=2");
        assert_eq!(
            build_url("/x", Some(&query), "https://example.com"),
            "https://example.com/v1/x?a=1&b=2"
        );
    }

    #[test]
    fn test_empty_query_adds_nothing() {
        let query = Query::Map(BTreeMap::new());
        assert_eq!(build_url("/x", Some(&query), "https://example.com"), "https://example.com/v1/x");
        assert_eq!(build_url("/x", Some(&Query::from("?")), "https://example.com"), "https://example.com/v1/x");
    }

    #[test]
    fn test_pairs_keep_repeated_keys_sorted_stably() {
        let query = Query::pairs([("tag", "b"), ("after", "9"), ("tag", "a")]);
        assert_eq!(query.encode(), "after=9&tag=b&tag=a");
    }

    #[test]
    fn test_values_are_form_encoded() {
        let query = Query::map([("q", "hello world&more")]);
        assert_eq!(query.encode(), "q=hello+world%26more");
    }

    #[test]
    fn test_query_from_json_value() {
        let q = Query::try_from(serde_json::json!({ "limit": "5" })).unwrap();
        assert_eq!(q.encode(), "limit=5");

        let q = Query::try_from(serde_json::json!([["a", "1"], ["a", "2"]])).unwrap();
        assert_eq!(q.encode(), "a=1&a=2");

        let q = Query::try_from(serde_json::json!("?x=1")).unwrap();
        assert_eq!(q.encode(), "x=1");
    }

    #[test]
    fn test_query_from_unsupported_json_is_rejected() {
        assert!(matches!(Query::try_from(serde_json::json!(42)), Err(RwError::InvalidQuery(_))));
        assert!(matches!(
            Query::try_from(serde_json::json!({ "limit": 5 })),
            Err(RwError::InvalidQuery(_))
        ));
        assert!(matches!(
            Query::try_from(serde_json::json!([["only-key"]])),
            Err(RwError::InvalidQuery(_))
        ));
    }
}
