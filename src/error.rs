//! Error types
//!
//! Every failure the library can surface to a caller. Validation and
//! decoding errors are raised before any request is sent or any field is
//! trusted; none of them are retried.

use thiserror::Error;

/// Errors returned by the YouTube client
#[derive(Error, Debug)]
pub enum YouTubeError {
    /// More than one resource filter was supplied
    #[error("YouTube allows one filter per request only")]
    OneFilterAllowed,

    #[error("{0} is not an allowed filter")]
    FilterNotAllowed(String),

    #[error("{0} not allowed part(s)")]
    PartNotAllowed(String),

    #[error("{0} not allowed param(s)")]
    OptionalParamNotAllowed(String),

    /// A part has no configured quota cost
    #[error("no quota cost configured for part {0}")]
    UnknownPart(String),

    /// The `kind` discriminator of a decoded object was missing or wrong
    #[error("{} is not right kind of {expected}", .found.as_deref().unwrap_or("None"))]
    BadKindOfResponse {
        expected: &'static str,
        found: Option<String>,
    },

    /// HTTP 400 from the API
    #[error("bad request: {}", .0.as_deref().unwrap_or("no message"))]
    BadRequest(Option<String>),

    /// HTTP 403 from the API
    #[error("forbidden: {}", .0.as_deref().unwrap_or("no message"))]
    Forbidden(Option<String>),

    /// Duration string did not match `PT<m>M<s>S`
    #[error("cannot parse duration {0:?}")]
    Parse(String),

    /// Following `nextPageToken` did not terminate
    #[error("pagination stopped: {0}")]
    Pagination(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, YouTubeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_kind_message_names_found_value() {
        let err = YouTubeError::BadKindOfResponse {
            expected: "Comment",
            found: Some("youtube#video".to_string()),
        };
        assert_eq!(err.to_string(), "youtube#video is not right kind of Comment");

        let err = YouTubeError::BadKindOfResponse {
            expected: "Comment Thread",
            found: None,
        };
        assert_eq!(err.to_string(), "None is not right kind of Comment Thread");
    }

    #[test]
    fn test_forbidden_without_message() {
        assert_eq!(YouTubeError::Forbidden(None).to_string(), "forbidden: no message");
    }
}
