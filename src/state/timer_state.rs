//! Countdown state snapshot

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Countdown state as observed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub running: bool,
    /// Configured countdown length, 0 when nothing is configured
    pub duration_sec: u32,
    /// Instant the current run began, shifted back by time already spent
    pub start_epoch_ms: i64,
    pub remaining_sec: u32,
    pub phase: TimerPhase,
}

impl TimerState {
    /// Create an idle timer state with nothing configured
    pub fn new() -> Self {
        Self {
            running: false,
            duration_sec: 0,
            start_epoch_ms: 0,
            remaining_sec: 0,
            phase: TimerPhase::Idle,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
