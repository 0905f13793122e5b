//! HTTP transport for YouTube API calls
//!
//! The request engine only needs "GET with query parameters, give me the
//! status and body". [`HttpTransport`] is that seam; [`YouTubeHttpClient`]
//! is the reqwest-backed implementation. TLS, connection reuse and
//! timeouts belong to the transport.

use crate::error::Result;
use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

const USER_AGENT: &str = concat!("ytapi/", env!("CARGO_PKG_VERSION"));

/// Query parameters, keyed by wire name
pub type Params = BTreeMap<String, String>;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Status and body of a completed request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Decoded body, `None` when the body is not JSON
    pub json: Option<Value>,
    pub raw: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, raw: Vec<u8>) -> Self {
        let json = serde_json::from_slice(&raw).ok();
        Self { status, json, raw }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body, failing if it is not JSON
    pub fn into_json(self) -> Result<Value> {
        match self.json {
            Some(json) => Ok(json),
            None => Ok(serde_json::from_slice(&self.raw)?),
        }
    }

    /// The API error message, from `error.message` or a top level `message`
    pub fn error_message(&self) -> Option<String> {
        let json = self.json.as_ref()?;
        json.get("error")
            .and_then(|e| e.get("message"))
            .or_else(|| json.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Something that can issue a GET request with query parameters
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str, query: &Params) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// HTTP client wrapper for YouTube API calls
#[derive(Clone)]
pub struct YouTubeHttpClient {
    client: Client,
}

impl YouTubeHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> YouTubeHttpClientBuilder {
        YouTubeHttpClientBuilder::default()
    }
}

impl HttpTransport for YouTubeHttpClient {
    async fn get(&self, url: &str, query: &Params) -> Result<HttpResponse> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).query(query).send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

/// Settings for [`YouTubeHttpClient`]
#[derive(Debug, Clone)]
pub struct YouTubeHttpClientBuilder {
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for YouTubeHttpClientBuilder {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl YouTubeHttpClientBuilder {
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Total request timeout; unset means no timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<YouTubeHttpClient> {
        let mut builder = Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(YouTubeHttpClient {
            client: builder.build()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(sanitized.ends_with("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize_for_log("a\nb\tc d"), "abc d");
    }

    #[test]
    fn test_error_message_lookup() {
        let nested = HttpResponse::new(
            400,
            br#"{"error": {"code": 400, "message": "Invalid part"}}"#.to_vec(),
        );
        assert_eq!(nested.error_message().as_deref(), Some("Invalid part"));

        let flat = HttpResponse::new(403, br#"{"message": "quota"}"#.to_vec());
        assert_eq!(flat.error_message().as_deref(), Some("quota"));

        let html = HttpResponse::new(403, b"<html>nope</html>".to_vec());
        assert!(html.json.is_none());
        assert!(html.error_message().is_none());
    }

    #[test]
    fn test_into_json_reports_bad_body() {
        let response = HttpResponse::new(200, b"not json".to_vec());
        assert!(matches!(
            response.into_json(),
            Err(crate::error::YouTubeError::Json(_))
        ));
    }
}
