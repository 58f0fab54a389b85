//! # Client configuration: `codeflix.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [session]
//! storage_key = "codeflix-session"
//!
//! [chat]
//! unread_poll_interval_secs = 0   # 0 = refresh only when the header mounts or the user changes
//! ```
//!
//! Every section and field has a default, so a missing or partial file is
//! equivalent to the defaults above.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `codeflix.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeflixConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Durable session storage settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// Chat header badge settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Periodic unread-count refresh in seconds. 0 disables the timer.
    #[serde(default)]
    pub unread_poll_interval_secs: u32,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_storage_key() -> String {
    "codeflix-session".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl CodeflixConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            ..Self::default()
        }
    }

    /// Builder method to set the unread-count poll interval.
    pub fn with_unread_poll_interval(mut self, secs: u32) -> Self {
        self.chat.unread_poll_interval_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "codeflix.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = CodeflixConfig::from_toml("").unwrap();
        assert_eq!(config, CodeflixConfig::default());
        assert_eq!(config.session.storage_key, "codeflix-session");
        assert_eq!(config.chat.unread_poll_interval_secs, 0);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = CodeflixConfig::from_toml("[chat]\nunread_poll_interval_secs = 30\n").unwrap();
        assert_eq!(config.chat.unread_poll_interval_secs, 30);
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CodeflixConfig::new("https://api.codeflix.kr".to_string())
            .with_unread_poll_interval(15);
        let parsed = CodeflixConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
