//! Serializable view of every panel

use serde::{Deserialize, Serialize};

use crate::{
    engine::{ProgressBand, TimerStatus},
    sensors::{EnvironmentReading, SoundReading},
    state::TimerPhase,
    utils::ClockFormat,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockPanel {
    pub time: String,
    pub date: String,
    pub format: ClockFormat,
    pub toggle_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopwatchPanel {
    pub display: String,
    pub running: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownPanel {
    pub display: String,
    pub phase: TimerPhase,
    pub status: TimerStatus,
    pub status_text: String,
    pub duration_sec: u32,
    pub remaining_sec: u32,
    /// Rounded remaining fraction, `0..=100`
    pub progress_pct: u8,
    pub band: ProgressBand,
    pub urgent: bool,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub clock: ClockPanel,
    pub stopwatch: StopwatchPanel,
    pub countdown: CountdownPanel,
    pub environment: Option<EnvironmentReading>,
    pub sound: Option<SoundReading>,
}
