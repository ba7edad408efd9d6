//! Countdown timer engine

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::Clock;
use crate::{
    state::{TimerPhase, TimerState},
    utils::format_countdown,
};

/// Remaining seconds at or below which the countdown is urgent
pub const URGENT_THRESHOLD_SECS: u32 = 10;

/// Largest value accepted for either field of `configure_parts`
pub const MAX_INPUT_FIELD: i64 = 59;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("Countdown duration must be positive, got {requested}s")]
    InvalidDuration { requested: i64 },
}

/// Result of polling a running countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerTick {
    pub remaining_sec: u32,
    pub is_urgent: bool,
    /// True only on the poll that observed the countdown reach zero
    pub just_completed: bool,
}

/// Status line shown under the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seconds", rename_all = "snake_case")]
pub enum TimerStatus {
    Stopped,
    Running,
    FinalSeconds(u32),
    Paused,
    Finished,
}

impl TimerStatus {
    pub fn label(&self) -> String {
        match self {
            TimerStatus::Stopped => "Stopped".to_string(),
            TimerStatus::Running => "Running...".to_string(),
            TimerStatus::FinalSeconds(n) => format!("Last {}s!", n),
            TimerStatus::Paused => "Paused".to_string(),
            TimerStatus::Finished => "Time's up!".to_string(),
        }
    }
}

/// Colour band of the progress ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    Calm,
    Warning,
    Critical,
}

impl ProgressBand {
    /// Band for a remaining/duration ratio in `[0, 1]`
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 0.2 {
            ProgressBand::Critical
        } else if ratio <= 0.5 {
            ProgressBand::Warning
        } else {
            ProgressBand::Calm
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle { duration_sec: Option<u32> },
    Running { start_epoch_ms: i64, duration_sec: u32 },
    Paused { elapsed_ms: u64, duration_sec: u32 },
    Completed { duration_sec: u32 },
}

/// Countdown from a configured duration with one-shot completion
pub struct TimerEngine {
    clock: Arc<dyn Clock>,
    phase: Phase,
}

impl TimerEngine {
    /// Create an idle countdown with nothing configured
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            phase: Phase::Idle { duration_sec: None },
        }
    }

    /// Set the countdown length.
    ///
    /// Accepted while idle or after completion. A running or paused
    /// countdown keeps its duration; the call is ignored there.
    pub fn configure(&mut self, duration_sec: i64) -> Result<(), TimerError> {
        if duration_sec <= 0 {
            warn!("Rejected countdown duration: {}s", duration_sec);
            return Err(TimerError::InvalidDuration {
                requested: duration_sec,
            });
        }
        let duration_sec = u32::try_from(duration_sec).unwrap_or(u32::MAX);

        match self.phase {
            Phase::Idle { .. } | Phase::Completed { .. } => {
                debug!("Countdown configured for {}s", duration_sec);
                self.phase = Phase::Idle {
                    duration_sec: Some(duration_sec),
                };
            }
            Phase::Running { .. } | Phase::Paused { .. } => {
                debug!("Ignoring configure while countdown is in progress");
            }
        }
        Ok(())
    }

    /// Configure from minute and second fields, clamping each to `0..=59`
    pub fn configure_parts(&mut self, minutes: i64, seconds: i64) -> Result<(), TimerError> {
        let minutes = minutes.clamp(0, MAX_INPUT_FIELD);
        let seconds = seconds.clamp(0, MAX_INPUT_FIELD);
        self.configure(minutes * 60 + seconds)
    }

    /// Start from idle, or resume a paused countdown
    pub fn start(&mut self) {
        let now = self.clock.now_ms();
        match self.phase {
            Phase::Idle {
                duration_sec: Some(duration_sec),
            } => {
                info!("Countdown started: {}", format_countdown(duration_sec));
                self.phase = Phase::Running {
                    start_epoch_ms: now,
                    duration_sec,
                };
            }
            Phase::Paused {
                elapsed_ms,
                duration_sec,
            } => {
                info!("Countdown resumed");
                self.phase = Phase::Running {
                    start_epoch_ms: now - elapsed_ms as i64,
                    duration_sec,
                };
            }
            Phase::Idle { duration_sec: None } => {
                debug!("Countdown start ignored: no duration configured");
            }
            Phase::Running { .. } | Phase::Completed { .. } => {}
        }
    }

    /// Pause a running countdown
    pub fn stop(&mut self) {
        if let Phase::Running {
            start_epoch_ms,
            duration_sec,
        } = self.phase
        {
            let elapsed_ms = self.elapsed_since(start_epoch_ms);
            self.phase = Phase::Paused {
                elapsed_ms,
                duration_sec,
            };
            info!("Countdown paused with {}s left", self.remaining_sec());
        }
    }

    /// Return to idle and forget the duration, from any state
    pub fn reset(&mut self) {
        self.phase = Phase::Idle { duration_sec: None };
    }

    /// Poll the countdown. Detects completion exactly once per run.
    pub fn tick(&mut self) -> TimerTick {
        let remaining_sec = self.remaining_sec();
        let mut just_completed = false;

        if let Phase::Running { duration_sec, .. } = self.phase {
            if remaining_sec == 0 {
                info!("Countdown completed");
                self.phase = Phase::Completed { duration_sec };
                just_completed = true;
            }
        }

        TimerTick {
            remaining_sec,
            is_urgent: self.is_running() && is_urgent(remaining_sec),
            just_completed,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed { .. })
    }

    /// Whole seconds left, derived from the clock while running
    pub fn remaining_sec(&self) -> u32 {
        match self.phase {
            Phase::Idle { duration_sec } => duration_sec.unwrap_or(0),
            Phase::Running {
                start_epoch_ms,
                duration_sec,
            } => remaining_after(duration_sec, self.elapsed_since(start_epoch_ms)),
            Phase::Paused {
                elapsed_ms,
                duration_sec,
            } => remaining_after(duration_sec, elapsed_ms),
            Phase::Completed { .. } => 0,
        }
    }

    /// Configured duration, 0 when none
    pub fn duration_sec(&self) -> u32 {
        match self.phase {
            Phase::Idle { duration_sec } => duration_sec.unwrap_or(0),
            Phase::Running { duration_sec, .. }
            | Phase::Paused { duration_sec, .. }
            | Phase::Completed { duration_sec } => duration_sec,
        }
    }

    /// Fraction of the duration still left, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        let duration = self.duration_sec();
        if duration == 0 {
            return 0.0;
        }
        f64::from(self.remaining_sec()) / f64::from(duration)
    }

    pub fn is_urgent(&self) -> bool {
        self.is_running() && is_urgent(self.remaining_sec())
    }

    pub fn phase(&self) -> TimerPhase {
        match self.phase {
            Phase::Idle { .. } => TimerPhase::Idle,
            Phase::Running { .. } => TimerPhase::Running,
            Phase::Paused { .. } => TimerPhase::Paused,
            Phase::Completed { .. } => TimerPhase::Completed,
        }
    }

    pub fn status(&self) -> TimerStatus {
        match self.phase {
            Phase::Idle { .. } => TimerStatus::Stopped,
            Phase::Paused { .. } => TimerStatus::Paused,
            Phase::Completed { .. } => TimerStatus::Finished,
            Phase::Running { .. } => {
                let remaining = self.remaining_sec();
                if is_urgent(remaining) {
                    TimerStatus::FinalSeconds(remaining)
                } else {
                    TimerStatus::Running
                }
            }
        }
    }

    /// Remaining time formatted as `MM:SS`
    pub fn display(&self) -> String {
        format_countdown(self.remaining_sec())
    }

    /// Snapshot of the current state
    pub fn state(&self) -> TimerState {
        let start_epoch_ms = match self.phase {
            Phase::Running { start_epoch_ms, .. } => start_epoch_ms,
            Phase::Paused { elapsed_ms, .. } => self.clock.now_ms() - elapsed_ms as i64,
            Phase::Idle { .. } | Phase::Completed { .. } => 0,
        };
        TimerState {
            running: self.is_running(),
            duration_sec: self.duration_sec(),
            start_epoch_ms,
            remaining_sec: self.remaining_sec(),
            phase: self.phase(),
        }
    }

    fn elapsed_since(&self, start_epoch_ms: i64) -> u64 {
        (self.clock.now_ms() - start_epoch_ms).max(0) as u64
    }
}

fn remaining_after(duration_sec: u32, elapsed_ms: u64) -> u32 {
    let elapsed_sec = u32::try_from(elapsed_ms / 1000).unwrap_or(u32::MAX);
    duration_sec.saturating_sub(elapsed_sec)
}

fn is_urgent(remaining_sec: u32) -> bool {
    remaining_sec > 0 && remaining_sec <= URGENT_THRESHOLD_SECS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ManualClock;

    fn engine() -> (Arc<ManualClock>, TimerEngine) {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let engine = TimerEngine::new(clock.clone());
        (clock, engine)
    }

    #[test]
    fn rejects_non_positive_durations() {
        let (_, mut timer) = engine();
        assert_eq!(
            timer.configure(0),
            Err(TimerError::InvalidDuration { requested: 0 })
        );
        assert_eq!(
            timer.configure(-5),
            Err(TimerError::InvalidDuration { requested: -5 })
        );
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.duration_sec(), 0);
    }

    #[test]
    fn tick_before_configure_is_harmless() {
        let (_, mut timer) = engine();
        timer.start();
        let tick = timer.tick();
        assert_eq!(tick.remaining_sec, 0);
        assert!(!tick.is_urgent);
        assert!(!tick.just_completed);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn counts_down_from_wall_clock() {
        let (clock, mut timer) = engine();
        timer.configure(90).unwrap();
        timer.start();
        assert_eq!(timer.tick().remaining_sec, 90);
        clock.advance(999);
        assert_eq!(timer.tick().remaining_sec, 90);
        clock.advance(1);
        assert_eq!(timer.tick().remaining_sec, 89);
        clock.advance(30_000);
        assert_eq!(timer.tick().remaining_sec, 59);
    }

    #[test]
    fn completion_fires_once() {
        let (clock, mut timer) = engine();
        timer.configure(3).unwrap();
        timer.start();
        clock.advance(3_000);

        let first = timer.tick();
        assert_eq!(first.remaining_sec, 0);
        assert!(first.just_completed);
        assert!(!first.is_urgent);

        for _ in 0..5 {
            clock.advance(1_000);
            let again = timer.tick();
            assert!(!again.just_completed);
            assert_eq!(again.remaining_sec, 0);
        }
        assert!(timer.is_completed());
        assert_eq!(timer.status(), TimerStatus::Finished);
    }

    #[test]
    fn urgent_only_inside_final_ten_seconds() {
        let (clock, mut timer) = engine();
        timer.configure(12).unwrap();
        timer.start();
        assert!(!timer.tick().is_urgent);
        clock.advance(2_000);
        let tick = timer.tick();
        assert_eq!(tick.remaining_sec, 10);
        assert!(tick.is_urgent);
        assert_eq!(timer.status(), TimerStatus::FinalSeconds(10));
        assert_eq!(timer.status().label(), "Last 10s!");
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let (clock, mut timer) = engine();
        timer.configure(60).unwrap();
        timer.start();
        clock.advance(20_500);
        timer.stop();
        assert_eq!(timer.phase(), TimerPhase::Paused);
        assert_eq!(timer.remaining_sec(), 40);

        clock.advance(120_000);
        assert_eq!(timer.tick().remaining_sec, 40);

        timer.start();
        clock.advance(500);
        assert_eq!(timer.tick().remaining_sec, 39);
        clock.advance(39_000);
        assert!(timer.tick().just_completed);
    }

    #[test]
    fn configure_is_ignored_mid_run() {
        let (clock, mut timer) = engine();
        timer.configure(30).unwrap();
        timer.start();
        clock.advance(5_000);
        assert_eq!(timer.configure(600), Ok(()));
        assert_eq!(timer.duration_sec(), 30);
        timer.stop();
        assert_eq!(timer.configure(600), Ok(()));
        assert_eq!(timer.remaining_sec(), 25);
    }

    #[test]
    fn configure_after_completion_rearms() {
        let (clock, mut timer) = engine();
        timer.configure(1).unwrap();
        timer.start();
        clock.advance(1_000);
        assert!(timer.tick().just_completed);

        timer.configure(5).unwrap();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        timer.start();
        clock.advance(5_000);
        assert!(timer.tick().just_completed);
    }

    #[test]
    fn start_after_completion_needs_new_duration() {
        let (clock, mut timer) = engine();
        timer.configure(1).unwrap();
        timer.start();
        clock.advance(2_000);
        timer.tick();
        timer.start();
        assert_eq!(timer.phase(), TimerPhase::Completed);
    }

    #[test]
    fn reset_clears_everything() {
        let (clock, mut timer) = engine();
        timer.configure(45).unwrap();
        timer.start();
        clock.advance(3_000);
        timer.reset();
        assert_eq!(timer.state(), TimerState::new());
        timer.start();
        assert!(!timer.is_running());
    }

    #[test]
    fn configure_parts_clamps_fields() {
        let (_, mut timer) = engine();
        timer.configure_parts(75, -3).unwrap();
        assert_eq!(timer.duration_sec(), 59 * 60);
        timer.configure_parts(1, 99).unwrap();
        assert_eq!(timer.duration_sec(), 60 + 59);
        assert!(timer.configure_parts(0, -10).is_err());
    }

    #[test]
    fn progress_tracks_remaining_fraction() {
        let (clock, mut timer) = engine();
        assert_eq!(timer.progress(), 0.0);
        timer.configure(100).unwrap();
        timer.start();
        assert_eq!(timer.progress(), 1.0);
        clock.advance(60_000);
        assert!((timer.progress() - 0.4).abs() < f64::EPSILON);
        assert_eq!(ProgressBand::from_ratio(timer.progress()), ProgressBand::Warning);
        clock.advance(30_000);
        assert_eq!(ProgressBand::from_ratio(timer.progress()), ProgressBand::Critical);
        assert_eq!(ProgressBand::from_ratio(0.51), ProgressBand::Calm);
    }

    #[test]
    fn paused_state_reports_shifted_start() {
        let (clock, mut timer) = engine();
        let t0 = clock.now_ms();
        timer.configure(10).unwrap();
        timer.start();
        clock.advance(4_000);
        timer.stop();
        let state = timer.state();
        assert!(!state.running);
        assert_eq!(state.start_epoch_ms, t0);
        assert_eq!(state.remaining_sec, 6);
        assert_eq!(state.phase, TimerPhase::Paused);
    }
}
