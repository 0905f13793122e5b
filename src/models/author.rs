//! Channels and comment authors

use super::{child, opt_str, str_or};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

const UNKNOWN_NAME: &str = "Unknown Name";

/// A YouTube channel reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub url: Option<String>,
    pub id: Option<String>,
}

impl Channel {
    pub fn with_id(id: Option<String>) -> Self {
        Self { url: None, id }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Channel:")?;
        write!(f, "*  url={}", self.url.as_deref().unwrap_or("None"))
    }
}

/// The author of a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: String,
    pub avatar: Option<String>,
    pub channel: Channel,
}

impl User {
    /// Decode from a comment `snippet` object
    pub fn from_snippet(snippet: &Value) -> Self {
        Self {
            name: str_or(snippet, "authorDisplayName", UNKNOWN_NAME),
            avatar: opt_str(snippet, "authorProfileImageUrl"),
            channel: Channel {
                url: opt_str(snippet, "authorChannelUrl"),
                id: opt_str(child(snippet, "authorChannelId"), "value"),
            },
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            avatar: None,
            channel: Channel::default(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User:")?;
        write!(f, "*  name={}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_snippet() {
        let user = User::from_snippet(&json!({
            "authorDisplayName": "Ada",
            "authorProfileImageUrl": "https://yt3.ggpht.com/ada.jpg",
            "authorChannelUrl": "http://www.youtube.com/channel/UCada",
            "authorChannelId": {"value": "UCada"}
        }));

        assert_eq!(user.name, "Ada");
        assert_eq!(user.avatar.as_deref(), Some("https://yt3.ggpht.com/ada.jpg"));
        assert_eq!(user.channel.url.as_deref(), Some("http://www.youtube.com/channel/UCada"));
        assert_eq!(user.channel.id.as_deref(), Some("UCada"));
    }

    #[test]
    fn test_user_defaults() {
        let user = User::from_snippet(&json!({}));
        assert_eq!(user, User::default());
        assert_eq!(user.name, "Unknown Name");
    }

    #[test]
    fn test_display() {
        let user = User::from_snippet(&json!({"authorDisplayName": "Ada"}));
        assert_eq!(user.to_string(), "User:\n*  name=Ada");
        assert_eq!(user.channel.to_string(), "Channel:\n*  url=None");
    }
}
