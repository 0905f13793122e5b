//! YouTube resource client
//!
//! One request engine shared by every resource type. A [`ResourcePolicy`]
//! decides which filters, parts and optional parameters are acceptable;
//! the client validates a request against it, estimates its quota cost
//! and sends it through an [`HttpTransport`].

use super::http::{sanitize_for_log, HttpResponse, HttpTransport, Params, YouTubeHttpClient};
use crate::error::{Result, YouTubeError};
use crate::resource::ResourcePolicy;
use std::collections::BTreeSet;
use url::Url;

/// Base URL of the YouTube Data API
pub const ENDPOINT: &str = "https://www.googleapis.com/youtube/v3";

/// Build [`Params`] from key/value pairs
pub fn params<K, V, I>(pairs: I) -> Params
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Comma separated, sorted key list for error messages
fn key_list<'a>(keys: impl IntoIterator<Item = &'a str>) -> String {
    keys.into_iter().collect::<BTreeSet<_>>().into_iter().collect::<Vec<_>>().join(", ")
}

/// Request engine for a single resource type
#[derive(Clone)]
pub struct ResourceClient<T = YouTubeHttpClient> {
    api_key: String,
    policy: ResourcePolicy,
    http: T,
    base_url: String,
}

impl ResourceClient<YouTubeHttpClient> {
    /// Create a client backed by a default reqwest transport
    pub fn new(api_key: &str, policy: ResourcePolicy) -> Result<Self> {
        Ok(Self::with_transport(api_key, policy, YouTubeHttpClient::new()?))
    }
}

impl<T: HttpTransport> ResourceClient<T> {
    pub fn with_transport(api_key: &str, policy: ResourcePolicy, http: T) -> Self {
        Self {
            api_key: api_key.to_string(),
            policy,
            http,
            base_url: ENDPOINT.to_string(),
        }
    }

    /// Send requests somewhere other than [`ENDPOINT`]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn transport(&self) -> &T {
        &self.http
    }

    pub fn policy(&self) -> &ResourcePolicy {
        &self.policy
    }

    pub fn resource_type(&self) -> &str {
        self.policy.resource_type()
    }

    /// Full URL of this client's resource endpoint
    pub fn resource_url(&self) -> Result<Url> {
        Ok(Url::parse(&format!("{}/{}", self.base_url, self.policy.resource_type()))?)
    }

    /// Exactly one filter key, sharing at least one key with the allowed filters
    pub fn validate_resource_filter(&self, filter: &Params) -> Result<()> {
        if filter.len() > 1 {
            return Err(YouTubeError::OneFilterAllowed);
        }

        let allowed = self.policy.allowed_filters();
        if !filter.keys().any(|k| allowed.contains(k)) {
            return Err(YouTubeError::FilterNotAllowed(key_list(
                filter.keys().map(String::as_str),
            )));
        }

        Ok(())
    }

    /// Passes when any requested part is an allowed part
    pub fn validate_parts(&self, parts: &[&str]) -> Result<()> {
        let allowed = self.policy.allowed_parts();
        if !parts.iter().any(|p| allowed.contains_key(*p)) {
            return Err(YouTubeError::PartNotAllowed(key_list(parts.iter().copied())));
        }

        Ok(())
    }

    /// Passes when any optional parameter is an allowed one
    pub fn validate_optional_params(&self, optional_params: &Params) -> Result<()> {
        let allowed = self.policy.allowed_optional_params();
        if !optional_params.keys().any(|k| allowed.contains(k)) {
            return Err(YouTubeError::OptionalParamNotAllowed(key_list(
                optional_params.keys().map(String::as_str),
            )));
        }

        Ok(())
    }

    /// Validate a request and flatten it into query parameters
    ///
    /// Produces `part` (comma joined), then the filter entry, then the
    /// optional parameters; later entries win on key collisions.
    pub fn digest_request_params(
        &self,
        filter: &Params,
        parts: &[&str],
        optional_params: &Params,
    ) -> Result<Params> {
        self.validate_resource_filter(filter)?;
        self.validate_parts(parts)?;
        if !optional_params.is_empty() {
            self.validate_optional_params(optional_params)?;
        }

        let mut query = Params::new();
        query.insert("part".to_string(), parts.join(","));
        query.extend(filter.iter().map(|(k, v)| (k.clone(), v.clone())));
        query.extend(optional_params.iter().map(|(k, v)| (k.clone(), v.clone())));

        Ok(query)
    }

    /// Quota units a request for `parts` costs
    pub fn calculate_quota(&self, parts: &[&str]) -> Result<u32> {
        parts
            .iter()
            .map(|part| {
                self.policy
                    .allowed_parts()
                    .get(*part)
                    .copied()
                    .ok_or_else(|| YouTubeError::UnknownPart(part.to_string()))
            })
            .sum()
    }

    /// Validate and send a request for this resource
    ///
    /// 400 and 403 become [`YouTubeError::BadRequest`] and
    /// [`YouTubeError::Forbidden`]; every other status, successful or not,
    /// is handed back unchanged.
    pub async fn get_resource(
        &self,
        filter: &Params,
        parts: &[&str],
        optional_params: &Params,
    ) -> Result<HttpResponse> {
        let mut query = self.digest_request_params(filter, parts, optional_params)?;
        let url = self.resource_url()?;

        tracing::debug!(
            "{} request, parts [{}], estimated quota {:?}",
            self.resource_type(),
            parts.join(","),
            self.calculate_quota(parts).ok()
        );

        query.insert("key".to_string(), self.api_key.clone());

        let response = self.http.get(url.as_str(), &query).await?;

        match response.status {
            400 => {
                let message = response.error_message();
                tracing::warn!("Bad request for {}: {:?}", self.resource_type(), message);
                Err(YouTubeError::BadRequest(message))
            }
            403 => {
                let message = response.error_message();
                tracing::warn!("Forbidden request for {}: {:?}", self.resource_type(), message);
                Err(YouTubeError::Forbidden(message))
            }
            status if !response.is_success() => {
                // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
                tracing::error!(
                    "API error: {} - {}",
                    status,
                    sanitize_for_log(&String::from_utf8_lossy(&response.raw))
                );
                Ok(response)
            }
            _ => Ok(response),
        }
    }
}
