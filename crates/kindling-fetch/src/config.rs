//! Resolver configuration

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::HttpResolver`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Response bodies are truncated past this size
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("kindling/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert!(config.user_agent.starts_with("kindling/"));
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: FetchConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
    }
}
