//! Error Types
//!
//! One enum per concern. Remote failures carry a fixed user-facing message;
//! storage and config failures are only ever logged.

use thiserror::Error;

use crate::domain::PostId;

pub const POSTS_LOAD_FAILED: &str = "Failed to load posts. Please try again later.";
pub const DETAIL_LOAD_FAILED: &str = "Failed to load post details. Please try again later.";
pub const POST_NOT_FOUND: &str = "Post not found";

/// Failure of a single remote read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl FetchError {
    /// Any non-2xx status counts as a failed read
    pub fn check_status(status: u16) -> Result<(), FetchError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(FetchError::Status(status))
        }
    }
}

/// Failure of the detail view load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("post {0} not found")]
    NotFound(PostId),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl DetailError {
    pub fn user_message(&self) -> &'static str {
        match self {
            DetailError::NotFound(_) => POST_NOT_FOUND,
            DetailError::Fetch(_) => DETAIL_LOAD_FAILED,
        }
    }
}

/// Key-value storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("stored data is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}
