//! Replies to user commands

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single command, shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Reply {
    /// Create a new reply
    pub fn new(status: String, message: String) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
        }
    }

    /// Create a success reply
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new("ok".to_string(), message.into())
    }

    /// Create an error reply
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error".to_string(), message.into())
    }

    pub fn is_error(&self) -> bool {
        self.status == "error"
    }
}
