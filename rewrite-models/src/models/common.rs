//! Identifier, pagination and null-marker types shared by all resources.

use serde::{Deserialize, Serialize, Serializer};

use rewrite_core::constants::DEFAULT_PAGE_LIMIT;

/// Unique identifier format used by Rewrite resources.
///
/// Snowflakes are opaque strings; the client never inspects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snowflake(pub String);

impl Snowflake {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Snowflake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Snowflake {
    fn from(s: &str) -> Self {
        Snowflake(s.to_string())
    }
}

impl From<String> for Snowflake {
    fn from(s: String) -> Self {
        Snowflake(s)
    }
}

impl AsRef<str> for Snowflake {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Cursor-based pagination options for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorOptions {
    /// Page size. Zero means the API default of 15.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,
    /// Return items after this id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Snowflake>,
    /// Return items before this id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Snowflake>,
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}

impl CursorOptions {
    /// Options with only a page size.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Page size actually sent to the API.
    pub fn effective_limit(&self) -> u32 {
        if self.limit > 0 {
            self.limit
        } else {
            DEFAULT_PAGE_LIMIT
        }
    }
}

/// Marker that always serializes as JSON `null`.
///
/// Used in update bodies to clear an optional field: `Some(Null)` sends
/// `"field": null`, while `None` leaves the field out entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

impl Serialize for Null {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_is_transparent() {
        let id: Snowflake = serde_json::from_str("\"123\"").unwrap();
        assert_eq!(id.as_str(), "123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"123\"");
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(CursorOptions::default().effective_limit(), 15);
        assert_eq!(CursorOptions::with_limit(50).effective_limit(), 50);
    }

    #[test]
    fn test_null_serializes_as_null() {
        assert_eq!(serde_json::to_string(&Null).unwrap(), "null");
    }
}
