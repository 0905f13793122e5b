//! Comments, comment threads, and paginated thread lists

use super::{
    bool_or_false, check_kind, child, opt_str, str_or, u64_or_zero, Channel, User, COMMENT_KIND,
    COMMENT_THREAD_KIND, COMMENT_THREAD_LIST_KIND,
};
use crate::error::Result;
use crate::utils::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A single comment (top level or reply)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: String,
    pub channel: Channel,
    pub video_id: String,
    pub display_text: String,
    pub text: String,
    pub parent_id: String,
    pub can_rate: bool,
    pub is_liked: bool,
    pub likes: u64,
    pub moderation_status: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: User,
}

impl Comment {
    /// Decode a `youtube#comment` resource
    pub fn from_value(value: &Value) -> Result<Self> {
        check_kind(value, COMMENT_KIND, "Comment")?;

        let snippet = child(value, "snippet");

        Ok(Self {
            id: str_or(value, "id", ""),
            channel: Channel::with_id(opt_str(snippet, "channelId")),
            video_id: str_or(snippet, "videoId", ""),
            display_text: str_or(snippet, "textDisplay", ""),
            text: str_or(snippet, "textOriginal", ""),
            parent_id: str_or(snippet, "parentId", ""),
            can_rate: bool_or_false(snippet, "canRate"),
            is_liked: snippet.get("viewerRating").and_then(Value::as_str) == Some("like"),
            likes: u64_or_zero(snippet, "likeCount"),
            moderation_status: str_or(snippet, "moderationStatus", ""),
            published_at: parse_timestamp(snippet.get("publishedAt").and_then(Value::as_str)),
            updated_at: parse_timestamp(snippet.get("updatedAt").and_then(Value::as_str)),
            author: User::from_snippet(snippet),
        })
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comment:")?;
        writeln!(f, "*      text={}", self.text)?;
        write!(f, "*      publishedAt={}", self.published_at.to_rfc3339())
    }
}

/// A top level comment together with its replies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentThread {
    pub id: String,
    pub channel: Channel,
    pub video_id: String,
    pub can_reply: bool,
    pub is_public: bool,
    pub replies_count: u64,
    pub top_level_comment: Comment,
    pub replies: Vec<Comment>,
}

impl CommentThread {
    /// Decode a `youtube#commentThread` resource
    ///
    /// A missing or malformed `topLevelComment`, or any malformed reply,
    /// fails the whole thread.
    pub fn from_value(value: &Value) -> Result<Self> {
        check_kind(value, COMMENT_THREAD_KIND, "Comment Thread")?;

        let snippet = child(value, "snippet");

        let top_level_comment = Comment::from_value(child(snippet, "topLevelComment"))?;

        let replies = child(child(value, "replies"), "comments")
            .as_array()
            .map(|comments| comments.iter().map(Comment::from_value).collect::<Result<Vec<_>>>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            id: str_or(value, "id", ""),
            channel: Channel::with_id(opt_str(snippet, "channelId")),
            video_id: str_or(snippet, "videoId", ""),
            can_reply: bool_or_false(snippet, "canReply"),
            is_public: bool_or_false(snippet, "isPublic"),
            replies_count: u64_or_zero(snippet, "totalReplyCount"),
            top_level_comment,
            replies,
        })
    }
}

impl fmt::Display for CommentThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CommentThread:")?;
        writeln!(f, "+    replies_count={}", self.replies_count)?;
        writeln!(f, "+    topLevelComment={}", self.top_level_comment)?;
        write!(f, "+    replies=[")?;
        for (i, reply) in self.replies.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", reply)?;
        }
        write!(f, "]")
    }
}

/// One page of a `commentThreads.list` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentThreadList {
    pub next_page_token: Option<String>,
    pub total_results: u64,
    pub results_per_page: u64,
    pub comments: Vec<CommentThread>,
}

impl CommentThreadList {
    /// Decode a `youtube#commentThreadListResponse`
    ///
    /// Threads keep the order of the response's `items`; one bad item
    /// fails the whole page.
    pub fn from_value(value: &Value) -> Result<Self> {
        check_kind(value, COMMENT_THREAD_LIST_KIND, "Comment Thread List")?;

        let page_info = child(value, "pageInfo");
        let count = |key: &str| {
            if value.get(key).is_some() {
                u64_or_zero(value, key)
            } else {
                u64_or_zero(page_info, key)
            }
        };

        let comments = child(value, "items")
            .as_array()
            .map(|items| items.iter().map(CommentThread::from_value).collect::<Result<Vec<_>>>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            next_page_token: opt_str(value, "nextPageToken"),
            total_results: count("totalResults"),
            results_per_page: count("resultsPerPage"),
            comments,
        })
    }
}

impl fmt::Display for CommentThreadList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CommentThreadList:")?;
        write!(f, "-  comments=[")?;
        for (i, thread) in self.comments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", thread)?;
        }
        write!(f, "]")
    }
}
