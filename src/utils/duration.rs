//! Video duration parsing
//!
//! The videos resource reports `contentDetails.duration` as e.g. `PT3M20S`.
//! Only the minutes/seconds shape is understood; anything else, including
//! durations carrying an hours component, is a parse error.

use crate::error::{Result, YouTubeError};
use regex::Regex;
use std::sync::OnceLock;

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

fn duration_re() -> &'static Regex {
    DURATION_RE.get_or_init(|| {
        Regex::new(r"^PT(\d+)M(\d+)S$").unwrap_or_else(|e| panic!("Invalid duration pattern: {}", e))
    })
}

/// Split a `PT<m>M<s>S` duration into `(minutes, seconds)`
pub fn parse_duration(duration: &str) -> Result<(u64, u64)> {
    let captures = duration_re()
        .captures(duration)
        .ok_or_else(|| YouTubeError::Parse(duration.to_string()))?;

    let number = |idx: usize| -> Result<u64> {
        captures[idx]
            .parse()
            .map_err(|_| YouTubeError::Parse(duration.to_string()))
    };

    Ok((number(1)?, number(2)?))
}

/// Total length of a `PT<m>M<s>S` duration in seconds
pub fn duration_seconds(duration: &str) -> Result<u64> {
    let (minutes, seconds) = parse_duration(duration)?;
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| YouTubeError::Parse(duration.to_string()))
}

/// Format a duration for display, e.g. `3 min 20 sec`
pub fn humanize_duration(duration: &str) -> Result<String> {
    let (minutes, seconds) = parse_duration(duration)?;
    Ok(format!("{} min {} sec", minutes, seconds))
}
