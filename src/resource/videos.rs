//! Videos endpoint client
//!
//! <https://developers.google.com/youtube/v3/docs/videos/>

use super::registry::get_policy;
use crate::error::Result;
use crate::youtube::client::{params, ResourceClient};
use crate::youtube::http::{HttpTransport, Params, YouTubeHttpClient};
use serde_json::Value;

pub const VIDEOS: &str = "videos";

/// Parts requested when the caller does not choose any
pub const DEFAULT_VIDEO_PARTS: &[&str] = &["snippet"];

/// Client for the `videos` resource
#[derive(Clone)]
pub struct VideoApi<T = YouTubeHttpClient> {
    client: ResourceClient<T>,
}

impl VideoApi<YouTubeHttpClient> {
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(Self::with_transport(api_key, YouTubeHttpClient::new()?))
    }
}

impl<T: HttpTransport> VideoApi<T> {
    pub fn with_transport(api_key: &str, http: T) -> Self {
        let policy = get_policy(VIDEOS)
            .cloned()
            .unwrap_or_else(|| panic!("Missing embedded policy for {}", VIDEOS));

        Self {
            client: ResourceClient::with_transport(api_key, policy, http),
        }
    }

    /// Wrap an already configured engine (custom policy or base URL)
    pub fn from_client(client: ResourceClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    pub fn calculate_quota(&self, parts: &[&str]) -> Result<u32> {
        self.client.calculate_quota(parts)
    }

    /// Fetch videos and return the decoded JSON body as-is
    pub async fn get_videos(
        &self,
        filter: &Params,
        parts: &[&str],
        optional_params: &Params,
    ) -> Result<Value> {
        self.client
            .get_resource(filter, parts, optional_params)
            .await?
            .into_json()
    }

    /// Look up a single video by id with [`DEFAULT_VIDEO_PARTS`]
    pub async fn get_video_by_id(&self, video_id: &str) -> Result<Value> {
        self.get_video_by_id_with(video_id, DEFAULT_VIDEO_PARTS, &Params::new())
            .await
    }

    pub async fn get_video_by_id_with(
        &self,
        video_id: &str,
        parts: &[&str],
        optional_params: &Params,
    ) -> Result<Value> {
        self.get_videos(&params([("id", video_id)]), parts, optional_params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YouTubeError;
    use crate::youtube::http::HttpResponse;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records queries and answers with a fixed video list
    #[derive(Default)]
    struct RecordingTransport {
        queries: Mutex<Vec<Params>>,
    }

    impl HttpTransport for RecordingTransport {
        async fn get(&self, _url: &str, query: &Params) -> Result<HttpResponse> {
            self.queries.lock().unwrap().push(query.clone());
            let body = json!({"kind": "youtube#videoListResponse", "items": []});
            Ok(HttpResponse::new(200, body.to_string().into_bytes()))
        }
    }

    fn api() -> VideoApi<RecordingTransport> {
        VideoApi::with_transport("api_key", RecordingTransport::default())
    }

    fn sent_queries(api: &VideoApi<RecordingTransport>) -> Vec<Params> {
        api.client().transport().queries.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn test_get_video_by_id_defaults_to_snippet() {
        let api = api();

        let body = api.get_video_by_id("vid").await.unwrap();
        assert_eq!(body["kind"], "youtube#videoListResponse");
        assert_eq!(
            sent_queries(&api),
            vec![params([("part", "snippet"), ("id", "vid"), ("key", "api_key")])]
        );
    }

    #[tokio::test]
    async fn test_get_video_by_id_with_extra_parts() {
        let api = api();

        api.get_video_by_id_with("vid", &["snippet", "statistics"], &params([("regionCode", "GB")]))
            .await
            .unwrap();
        let queries = sent_queries(&api);
        assert_eq!(queries[0]["part"], "snippet,statistics");
        assert_eq!(queries[0]["regionCode"], "GB");
    }

    #[tokio::test]
    async fn test_comment_thread_params_rejected_for_videos() {
        let api = api();

        let result = api
            .get_video_by_id_with("vid", &["snippet"], &params([("textFormat", "plainText")]))
            .await;
        assert!(matches!(result, Err(YouTubeError::OptionalParamNotAllowed(_))));
        assert!(sent_queries(&api).is_empty());
    }

    #[test]
    fn test_quota_uses_video_costs() {
        let api = api();
        assert_eq!(api.calculate_quota(&["snippet", "statistics"]).unwrap(), 4);
        assert_eq!(api.calculate_quota(&["id", "player", "fileDetails"]).unwrap(), 1);
    }
}
