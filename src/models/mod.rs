//! Domain objects decoded from API responses
//!
//! Responses are walked as untyped [`serde_json::Value`] trees. Every
//! field has an explicit default so partial payloads (for example a
//! request made with only the `id` part) still decode, while the `kind`
//! discriminator is checked before anything else is read.
//!
//! - [`author`] - [`Channel`] and [`User`]
//! - [`comments`] - [`Comment`], [`CommentThread`], [`CommentThreadList`]

pub mod author;
pub mod comments;

pub use author::{Channel, User};
pub use comments::{Comment, CommentThread, CommentThreadList};

use crate::error::{Result, YouTubeError};
use serde_json::Value;

pub const COMMENT_KIND: &str = "youtube#comment";
pub const COMMENT_THREAD_KIND: &str = "youtube#commentThread";
pub const COMMENT_THREAD_LIST_KIND: &str = "youtube#commentThreadListResponse";

/// Fail unless `value.kind` equals `kind`
///
/// `expected` names the object being decoded in the error message.
pub(crate) fn check_kind(value: &Value, kind: &str, expected: &'static str) -> Result<()> {
    let found = value.get("kind").and_then(Value::as_str);
    if found == Some(kind) {
        return Ok(());
    }

    Err(YouTubeError::BadKindOfResponse {
        expected,
        found: value.get("kind").map(|k| match k {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
    })
}

/// Object under `key`, or `Null` when missing
pub(crate) fn child<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&Value::Null)
}

pub(crate) fn opt_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn str_or(value: &Value, key: &str, default: &str) -> String {
    opt_str(value, key).unwrap_or_else(|| default.to_string())
}

pub(crate) fn bool_or_false(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Counts may arrive as numbers or as numeric strings
pub(crate) fn u64_or_zero(value: &Value, key: &str) -> u64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_kind() {
        assert!(check_kind(&json!({"kind": COMMENT_KIND}), COMMENT_KIND, "Comment").is_ok());

        match check_kind(&json!({"kind": 7}), COMMENT_KIND, "Comment") {
            Err(YouTubeError::BadKindOfResponse { found, .. }) => assert_eq!(found.as_deref(), Some("7")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_counts_accept_strings() {
        let value = json!({"a": 3, "b": "12", "c": "x", "d": -1});
        assert_eq!(u64_or_zero(&value, "a"), 3);
        assert_eq!(u64_or_zero(&value, "b"), 12);
        assert_eq!(u64_or_zero(&value, "c"), 0);
        assert_eq!(u64_or_zero(&value, "d"), 0);
        assert_eq!(u64_or_zero(&value, "missing"), 0);
    }
}
