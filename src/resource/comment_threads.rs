//! CommentThreads endpoint client
//!
//! <https://developers.google.com/youtube/v3/docs/commentThreads/>

use super::registry::get_policy;
use crate::error::{Result, YouTubeError};
use crate::models::CommentThreadList;
use crate::youtube::client::{params, ResourceClient};
use crate::youtube::http::{HttpTransport, Params, YouTubeHttpClient};
use serde_json::Value;
use std::collections::HashSet;

pub const COMMENT_THREADS: &str = "commentThreads";

pub const DEFAULT_COMMENT_THREAD_PARTS: &[&str] = &["snippet"];

/// Upper bound on pages fetched by [`CommentThreadsApi::get_all_comments_by_id`]
pub const MAX_COMMENT_PAGES: usize = 500;

/// Client for the `commentThreads` resource
#[derive(Clone)]
pub struct CommentThreadsApi<T = YouTubeHttpClient> {
    client: ResourceClient<T>,
}

impl CommentThreadsApi<YouTubeHttpClient> {
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(Self::with_transport(api_key, YouTubeHttpClient::new()?))
    }
}

impl<T: HttpTransport> CommentThreadsApi<T> {
    pub fn with_transport(api_key: &str, http: T) -> Self {
        let policy = get_policy(COMMENT_THREADS)
            .cloned()
            .unwrap_or_else(|| panic!("Missing embedded policy for {}", COMMENT_THREADS));

        Self {
            client: ResourceClient::with_transport(api_key, policy, http),
        }
    }

    pub fn from_client(client: ResourceClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    pub fn calculate_quota(&self, parts: &[&str]) -> Result<u32> {
        self.client.calculate_quota(parts)
    }

    /// Fetch comment threads and return the decoded JSON body as-is
    pub async fn get_comment_threads(
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

    /// Fetch one page of comment threads as a [`CommentThreadList`]
    pub async fn get_comment_thread_list(
        &self,
        filter: &Params,
        parts: &[&str],
        optional_params: &Params,
    ) -> Result<CommentThreadList> {
        let body = self.get_comment_threads(filter, parts, optional_params).await?;
        CommentThreadList::from_value(&body)
    }

    /// First page of plain-text comment threads for a video
    pub async fn get_comments_by_id(&self, video_id: &str) -> Result<CommentThreadList> {
        self.get_comment_thread_list(
            &params([("videoId", video_id)]),
            DEFAULT_COMMENT_THREAD_PARTS,
            &params([("textFormat", "plainText")]),
        )
        .await
    }

    /// Every comment thread for a video, following `nextPageToken`
    ///
    /// Threads are returned in page order. The result carries the counts
    /// of the last page and no next page token. Fails with
    /// [`YouTubeError::Pagination`] if the server repeats a page token or
    /// more than [`MAX_COMMENT_PAGES`] pages are needed.
    pub async fn get_all_comments_by_id(&self, video_id: &str) -> Result<CommentThreadList> {
        let filter = params([("videoId", video_id)]);
        let mut optional = params([("textFormat", "plainText")]);
        let mut seen_tokens = HashSet::new();
        let mut comments = Vec::new();

        for _ in 0..MAX_COMMENT_PAGES {
            let page = self
                .get_comment_thread_list(&filter, DEFAULT_COMMENT_THREAD_PARTS, &optional)
                .await?;
            comments.extend(page.comments);

            let Some(token) = page.next_page_token else {
                return Ok(CommentThreadList {
                    next_page_token: None,
                    total_results: page.total_results,
                    results_per_page: page.results_per_page,
                    comments,
                });
            };

            if !seen_tokens.insert(token.clone()) {
                tracing::warn!("Page token {:?} repeated for {}", token, video_id);
                return Err(YouTubeError::Pagination(format!("page token {:?} repeated", token)));
            }

            tracing::debug!("Fetching next comment page for {}", video_id);
            optional.insert("pageToken".to_string(), token);
        }

        tracing::warn!("Gave up on {} after {} comment pages", video_id, MAX_COMMENT_PAGES);
        Err(YouTubeError::Pagination(format!(
            "more than {} pages",
            MAX_COMMENT_PAGES
        )))
    }
}
