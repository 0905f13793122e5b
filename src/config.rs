//! Configuration Management
//!
//! Handles persistent configuration storage for the ytapi command line.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Request timeout used when neither the CLI nor the config file sets one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// YouTube Data API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// HTTP request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Directory holding the config and log files
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ytapi"))
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load configuration from a specific file, defaulting on any error
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;

        Ok(())
    }

    /// Get effective API key (CLI > config)
    pub fn effective_api_key(&self, cli: Option<&str>) -> Option<String> {
        cli.map(str::to_string)
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.is_empty())
    }

    /// Get effective timeout (CLI > config > default)
    pub fn effective_timeout(&self, cli: Option<u64>) -> Duration {
        Duration::from_secs(cli.or(self.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Set API key and save
    pub fn set_api_key(&mut self, api_key: &str) -> Result<()> {
        self.api_key = Some(api_key.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        let config = Config {
            api_key: Some("from-file".to_string()),
            timeout_secs: Some(5),
        };

        assert_eq!(config.effective_api_key(Some("from-cli")).as_deref(), Some("from-cli"));
        assert_eq!(config.effective_api_key(None).as_deref(), Some("from-file"));
        assert_eq!(config.effective_timeout(Some(9)), Duration::from_secs(9));
        assert_eq!(config.effective_timeout(None), Duration::from_secs(5));

        let empty = Config::default();
        assert!(empty.effective_api_key(None).is_none());
        assert!(empty.effective_api_key(Some("")).is_none());
        assert_eq!(empty.effective_timeout(None), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("ytapi-config-test-{}", std::process::id()));
        let path = dir.join("config.json");

        let config = Config {
            api_key: Some("KEY".to_string()),
            timeout_secs: None,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);

        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("ytapi-definitely-missing").join("config.json");
        assert_eq!(Config::load_from(&path), Config::default());
    }
}
