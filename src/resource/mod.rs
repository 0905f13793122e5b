//! Resource abstraction layer
//!
//! Resource types are data, not code: each is a [`ResourcePolicy`] loaded
//! from JSON files embedded at compile time and handed to the shared
//! [`ResourceClient`](crate::youtube::ResourceClient). The typed clients
//! here add the convenience calls specific to each endpoint.
//!
//! # Architecture
//!
//! - [`registry`] - Loads and caches resource policies from embedded JSON
//! - [`videos`] - `videos` endpoint ([`VideoApi`])
//! - [`comment_threads`] - `commentThreads` endpoint ([`CommentThreadsApi`])
//!
//! # Resource Definitions
//!
//! Policies are defined in JSON files under `src/resources/`:
//! - `videos.json` - parts, filters and optional params for videos
//! - `comment_threads.json` - the same for comment threads
//!
//! # Example
//!
//! ```ignore
//! use ytapi::resource::CommentThreadsApi;
//!
//! async fn latest_comments(key: &str) -> ytapi::Result<()> {
//!     let api = CommentThreadsApi::new(key)?;
//!     let page = api.get_comments_by_id("dQw4w9WgXcQ").await?;
//!     println!("{}", page);
//!     Ok(())
//! }
//! ```

pub mod comment_threads;
mod registry;
pub mod videos;

pub use comment_threads::{CommentThreadsApi, COMMENT_THREADS};
pub use registry::*;
pub use videos::{VideoApi, VIDEOS};
