//! Application Configuration
//!
//! Defaults match the public jsonplaceholder API. Any field can be
//! overridden from a JSON blob; missing fields keep their default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_STORAGE_KEY: &str = "todo-tasks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the posts/comments API, without trailing slash
    pub api_base_url: String,
    /// Posts revealed initially and per "load more"
    pub page_size: usize,
    /// Artificial delay before more posts are revealed
    pub reveal_delay_ms: u32,
    /// Upper bound for each remote read
    pub request_timeout_ms: u32,
    /// localStorage key holding the task array
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.api_base_url)
    }

    pub fn comments_url(&self) -> String {
        format!("{}/comments", self.api_base_url)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim_end_matches('/').len();
        self.api_base_url.truncate(trimmed);
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.storage_key, "todo-tasks");
        assert_eq!(config.posts_url(), "https://jsonplaceholder.typicode.com/posts");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_base_url": "http://localhost:3000/", "page_size": 0}"#).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.comments_url(), "http://localhost:3000/comments");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(AppConfig::from_json("{not json").is_err());
        assert!(AppConfig::from_json(r#"{"page_size": "ten"}"#).is_err());
    }
}
