//! Resource Registry - Load resource policies from JSON
//!
//! Each YouTube resource is described by a policy: which parts may be
//! requested (and what each costs in quota), which filters select the
//! resource, and which optional parameters are accepted. Policies are
//! embedded JSON, parsed once, and never mutated afterwards.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

/// Embedded resource JSON files (compiled into the binary)
const RESOURCE_FILES: &[&str] = &[
    include_str!("../resources/videos.json"),
    include_str!("../resources/comment_threads.json"),
];

/// Request-shape rules for one resource type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourcePolicy {
    /// Filled from the registry key when loaded from JSON
    #[serde(skip)]
    resource_type: String,
    allowed_parts: BTreeMap<String, u32>,
    allowed_filters: BTreeSet<String>,
    allowed_optional_params: BTreeSet<String>,
}

impl ResourcePolicy {
    /// Build a policy outside the registry
    pub fn new<P, F, O>(
        resource_type: impl Into<String>,
        parts: impl IntoIterator<Item = (P, u32)>,
        filters: impl IntoIterator<Item = F>,
        optional_params: impl IntoIterator<Item = O>,
    ) -> Self
    where
        P: Into<String>,
        F: Into<String>,
        O: Into<String>,
    {
        Self {
            resource_type: resource_type.into(),
            allowed_parts: parts.into_iter().map(|(p, cost)| (p.into(), cost)).collect(),
            allowed_filters: filters.into_iter().map(Into::into).collect(),
            allowed_optional_params: optional_params.into_iter().map(Into::into).collect(),
        }
    }

    /// Path segment of the resource endpoint, e.g. `videos`
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Allowed parts and their quota cost
    pub fn allowed_parts(&self) -> &BTreeMap<String, u32> {
        &self.allowed_parts
    }

    pub fn allowed_filters(&self) -> &BTreeSet<String> {
        &self.allowed_filters
    }

    pub fn allowed_optional_params(&self) -> &BTreeSet<String> {
        &self.allowed_optional_params
    }
}

/// Root structure of resources/*.json
#[derive(Debug, Clone, Deserialize)]
struct ResourceConfig {
    #[serde(default)]
    resources: HashMap<String, ResourcePolicy>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<HashMap<String, ResourcePolicy>> = OnceLock::new();

/// Get the resource registry (loads from embedded JSON on first access)
fn get_registry() -> &'static HashMap<String, ResourcePolicy> {
    REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        for content in RESOURCE_FILES {
            let partial: ResourceConfig = serde_json::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse embedded resource JSON: {}", e));

            for (resource_type, mut policy) in partial.resources {
                policy.resource_type = resource_type.clone();
                registry.insert(resource_type, policy);
            }
        }

        registry
    })
}

/// Get a resource policy by resource type
pub fn get_policy(resource_type: &str) -> Option<&'static ResourcePolicy> {
    get_registry().get(resource_type)
}

/// Get all known resource types, sorted
pub fn all_resource_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = get_registry().keys().map(|s| s.as_str()).collect();
    types.sort_unstable();
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads_successfully() {
        assert_eq!(all_resource_types(), vec!["commentThreads", "videos"]);
    }

    #[test]
    fn test_videos_policy() {
        let policy = get_policy("videos").expect("videos policy should exist");

        assert_eq!(policy.resource_type(), "videos");
        assert_eq!(policy.allowed_parts().len(), 12);
        assert_eq!(policy.allowed_parts()["contentDetails"], 2);
        assert_eq!(policy.allowed_parts()["fileDetails"], 1);
        assert_eq!(policy.allowed_parts()["player"], 0);
        assert_eq!(policy.allowed_parts()["suggestions"], 1);
        assert!(policy.allowed_filters().contains("myRating"));
        assert!(policy.allowed_optional_params().contains("videoCategoryId"));
        assert!(!policy.allowed_optional_params().contains("textFormat"));
    }

    #[test]
    fn test_comment_threads_policy() {
        let policy = get_policy("commentThreads").expect("commentThreads policy should exist");

        assert_eq!(policy.resource_type(), "commentThreads");
        let parts: Vec<_> = policy.allowed_parts().iter().map(|(p, c)| (p.as_str(), *c)).collect();
        assert_eq!(parts, vec![("id", 0), ("replies", 2), ("snippet", 2)]);
        assert_eq!(policy.allowed_filters().len(), 4);
        assert!(policy.allowed_filters().contains("allThreadsRelatedToChannelId"));
        assert_eq!(policy.allowed_optional_params().len(), 6);
        assert!(policy.allowed_optional_params().contains("textFormat"));
    }

    #[test]
    fn test_unknown_policy() {
        assert!(get_policy("playlists").is_none());
    }

    #[test]
    fn test_ad_hoc_policy() {
        let policy = ResourcePolicy::new("things", [("a", 10), ("b", 4)], ["id"], std::iter::empty::<&str>());
        assert_eq!(policy.resource_type(), "things");
        assert_eq!(policy.allowed_parts()["a"], 10);
        assert!(policy.allowed_optional_params().is_empty());
    }

    #[test]
    fn test_policy_from_runtime_strings() {
        let resource = String::from("playlists");
        let parts: Vec<(String, u32)> = vec![("snippet".to_string(), 2), ("id".to_string(), 0)];
        let filters = vec!["channelId".to_string()];

        let policy = ResourcePolicy::new(resource, parts, filters, ["maxResults".to_string()]);
        assert_eq!(policy.resource_type(), "playlists");
        assert_eq!(policy.allowed_parts()["snippet"], 2);
        assert!(policy.allowed_filters().contains("channelId"));
        assert!(policy.allowed_optional_params().contains("maxResults"));
    }
}
