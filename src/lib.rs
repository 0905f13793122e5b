//! Typed client for the YouTube Data API
//!
//! Requests are checked against per-resource policies before anything is
//! sent, quota costs can be estimated up front, and comment thread
//! responses decode into plain Rust structs.
//!
//! - [`youtube`] - HTTP transport and the shared request engine
//! - [`resource`] - resource policies plus [`VideoApi`] and [`CommentThreadsApi`]
//! - [`models`] - comment, thread and author types
//! - [`utils`] - duration and timestamp parsing
//! - [`error`] - [`YouTubeError`]

pub mod config;
pub mod error;
pub mod models;
pub mod resource;
pub mod utils;
pub mod youtube;

pub use error::{Result, YouTubeError};
pub use models::{Channel, Comment, CommentThread, CommentThreadList, User};
pub use resource::{CommentThreadsApi, ResourcePolicy, VideoApi};
pub use youtube::{params, HttpTransport, Params, ResourceClient};
