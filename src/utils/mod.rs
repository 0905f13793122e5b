//! Parsing helpers for YouTube wire formats
//!
//! - [`duration`] - compact `PT<m>M<s>S` video durations
//! - [`timestamp`] - `publishedAt`/`updatedAt` timestamps with a fixed fallback

pub mod duration;
pub mod timestamp;

pub use duration::{duration_seconds, humanize_duration, parse_duration};
pub use timestamp::{fallback_timestamp, parse_timestamp, FALLBACK_EPOCH};
