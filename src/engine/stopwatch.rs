//! Stopwatch engine
//!
//! Elapsed time is always derived from the injected clock, so the display
//! stays correct no matter how often the host polls.

use std::sync::Arc;
use tracing::debug;

use super::Clock;
use crate::{state::ChronoState, utils::format_chrono};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Stopped { elapsed_ms: u64 },
    Running { start_epoch_ms: i64 },
}

/// Stopwatch that accumulates elapsed time across pause/resume
pub struct ChronoEngine {
    clock: Arc<dyn Clock>,
    phase: Phase,
}

impl ChronoEngine {
    /// Create a stopped stopwatch at zero
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            phase: Phase::Stopped { elapsed_ms: 0 },
        }
    }

    /// Start or resume. No-op while running.
    pub fn start(&mut self) {
        if let Phase::Stopped { elapsed_ms } = self.phase {
            let start_epoch_ms = self.clock.now_ms() - elapsed_ms as i64;
            debug!("Stopwatch started at {}ms elapsed", elapsed_ms);
            self.phase = Phase::Running { start_epoch_ms };
        }
    }

    /// Pause and freeze the elapsed time. No-op while stopped.
    pub fn stop(&mut self) {
        if let Phase::Running { start_epoch_ms } = self.phase {
            let elapsed_ms = self.elapsed_since(start_epoch_ms);
            debug!("Stopwatch stopped at {}ms", elapsed_ms);
            self.phase = Phase::Stopped { elapsed_ms };
        }
    }

    /// Stop and zero, from any state
    pub fn reset(&mut self) {
        self.phase = Phase::Stopped { elapsed_ms: 0 };
    }

    /// Elapsed milliseconds, live while running
    pub fn elapsed(&self) -> u64 {
        match self.phase {
            Phase::Stopped { elapsed_ms } => elapsed_ms,
            Phase::Running { start_epoch_ms } => self.elapsed_since(start_epoch_ms),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Elapsed time formatted as `HH:MM:SS`
    pub fn display(&self) -> String {
        format_chrono(self.elapsed())
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ChronoState {
        match self.phase {
            Phase::Stopped { elapsed_ms } => ChronoState {
                running: false,
                start_epoch_ms: 0,
                elapsed_ms,
            },
            Phase::Running { start_epoch_ms } => ChronoState {
                running: true,
                start_epoch_ms,
                elapsed_ms: self.elapsed_since(start_epoch_ms),
            },
        }
    }

    // A clock stepping backwards reads as zero rather than underflowing.
    fn elapsed_since(&self, start_epoch_ms: i64) -> u64 {
        (self.clock.now_ms() - start_epoch_ms).max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ManualClock;

    fn engine() -> (Arc<ManualClock>, ChronoEngine) {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let engine = ChronoEngine::new(clock.clone());
        (clock, engine)
    }

    #[test]
    fn starts_stopped_at_zero() {
        let (_, sw) = engine();
        assert_eq!(sw.elapsed(), 0);
        assert!(!sw.is_running());
        assert_eq!(sw.display(), "00:00:00");
    }

    #[test]
    fn measures_a_single_run() {
        let (clock, mut sw) = engine();
        sw.start();
        clock.advance(1_234);
        assert_eq!(sw.elapsed(), 1_234);
        sw.stop();
        clock.advance(5_000);
        assert_eq!(sw.elapsed(), 1_234);
        assert!(!sw.is_running());
    }

    #[test]
    fn accumulates_across_pause_and_resume() {
        let (clock, mut sw) = engine();
        sw.start();
        clock.advance(700);
        sw.stop();
        clock.advance(10_000);
        sw.start();
        clock.advance(300);
        sw.stop();
        assert_eq!(sw.elapsed(), 1_000);
    }

    #[test]
    fn repeated_start_and_stop_are_no_ops() {
        let (clock, mut sw) = engine();
        sw.stop();
        assert_eq!(sw.elapsed(), 0);
        sw.start();
        clock.advance(500);
        sw.start();
        clock.advance(500);
        assert_eq!(sw.elapsed(), 1_000);
        sw.stop();
        sw.stop();
        assert_eq!(sw.elapsed(), 1_000);
    }

    #[test]
    fn reset_zeroes_from_any_state() {
        let (clock, mut sw) = engine();
        sw.start();
        clock.advance(2_000);
        sw.reset();
        assert_eq!(sw.elapsed(), 0);
        assert!(!sw.is_running());

        sw.start();
        clock.advance(2_000);
        sw.stop();
        sw.reset();
        assert_eq!(sw.state(), ChronoState::new());
    }

    #[test]
    fn backwards_clock_never_goes_negative() {
        let (clock, mut sw) = engine();
        sw.start();
        clock.advance(-5_000);
        assert_eq!(sw.elapsed(), 0);
    }

    #[test]
    fn running_state_reports_shifted_start() {
        let (clock, mut sw) = engine();
        let t0 = clock.now_ms();
        sw.start();
        clock.advance(400);
        sw.stop();
        clock.advance(1_000);
        sw.start();
        let state = sw.state();
        assert!(state.running);
        assert_eq!(state.start_epoch_ms, t0 + 1_000);
        assert_eq!(state.elapsed_ms, 400);
    }
}
