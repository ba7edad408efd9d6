//! Stopwatch state snapshot

use serde::{Deserialize, Serialize};

/// Stopwatch state as observed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChronoState {
    pub running: bool,
    /// Instant the current segment began, shifted back by prior elapsed time
    pub start_epoch_ms: i64,
    pub elapsed_ms: u64,
}

impl ChronoState {
    /// Create a stopped, zeroed stopwatch state
    pub fn new() -> Self {
        Self {
            running: false,
            start_epoch_ms: 0,
            elapsed_ms: 0,
        }
    }
}

impl Default for ChronoState {
    fn default() -> Self {
        Self::new()
    }
}
