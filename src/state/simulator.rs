//! Simulator state: the single owner of every panel

use std::sync::Arc;
use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, info};

use crate::{
    engine::{ChronoEngine, Clock, ProgressBand, TimerEngine, TimerTick},
    presentation::{ClockPanel, CountdownPanel, Snapshot, StopwatchPanel},
    sensors::{EnvironmentReading, EnvironmentSensor, Jitter, SoundMeter, SoundReading},
    utils::{
        format::{format_date, format_wall_time},
        ClockFormat,
    },
};

/// All simulator panels, owned by one task.
///
/// Engines are mutated only through this struct; other tasks see the
/// simulator through [`Snapshot`]s.
pub struct SimulatorState {
    clock: Arc<dyn Clock>,
    utc_offset: FixedOffset,
    clock_format: ClockFormat,
    pub chrono: ChronoEngine,
    pub timer: TimerEngine,
    environment_sensor: EnvironmentSensor,
    sound_meter: SoundMeter,
    environment: Option<EnvironmentReading>,
    sound: Option<SoundReading>,
    last_action: Option<String>,
}

impl SimulatorState {
    /// Create a simulator with stopped engines and no sensor readings yet
    pub fn new(
        clock: Arc<dyn Clock>,
        utc_offset: FixedOffset,
        clock_format: ClockFormat,
        environment_jitter: Box<dyn Jitter>,
        sound_jitter: Box<dyn Jitter>,
    ) -> Self {
        Self {
            chrono: ChronoEngine::new(Arc::clone(&clock)),
            timer: TimerEngine::new(Arc::clone(&clock)),
            clock,
            utc_offset,
            clock_format,
            environment_sensor: EnvironmentSensor::new(environment_jitter),
            sound_meter: SoundMeter::new(sound_jitter),
            environment: None,
            sound: None,
            last_action: None,
        }
    }

    /// Record the most recent user action
    pub fn record_action(&mut self, action: &str) {
        debug!("Action: {}", action);
        self.last_action = Some(action.to_string());
    }

    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    /// Flip between 24h and 12h display
    pub fn toggle_clock_format(&mut self) -> ClockFormat {
        self.clock_format = self.clock_format.toggle();
        info!("Clock format set to {:?}", self.clock_format);
        self.clock_format
    }

    /// Poll the countdown
    pub fn tick_timer(&mut self) -> TimerTick {
        self.timer.tick()
    }

    pub fn refresh_environment(&mut self) -> EnvironmentReading {
        let reading = self.environment_sensor.read();
        self.environment = Some(reading);
        reading
    }

    pub fn refresh_sound(&mut self) -> SoundReading {
        let reading = self.sound_meter.sample();
        self.sound = Some(reading);
        reading
    }

    /// Current local wall time, or `None` if the clock is out of chrono's range
    pub fn local_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::<Utc>::from_timestamp_millis(self.clock.now_ms())
            .map(|utc| utc.with_timezone(&self.utc_offset))
    }

    /// Build the frame the presentation layer draws
    pub fn snapshot(&self) -> Snapshot {
        let (time, date) = match self.local_time() {
            Some(now) => (
                format_wall_time(&now.time(), self.clock_format),
                format_date(&now.date_naive()),
            ),
            None => (String::from("--:--:--"), String::new()),
        };

        let progress = self.timer.progress();
        let status = self.timer.status();

        Snapshot {
            clock: ClockPanel {
                time,
                date,
                format: self.clock_format,
                toggle_label: self.clock_format.toggle_label().to_string(),
            },
            stopwatch: StopwatchPanel {
                display: self.chrono.display(),
                running: self.chrono.is_running(),
            },
            countdown: CountdownPanel {
                display: self.timer.display(),
                phase: self.timer.phase(),
                status,
                status_text: status.label(),
                duration_sec: self.timer.duration_sec(),
                remaining_sec: self.timer.remaining_sec(),
                progress_pct: (progress * 100.0).round() as u8,
                band: ProgressBand::from_ratio(progress),
                urgent: self.timer.is_urgent(),
            },
            environment: self.environment,
            sound: self.sound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::ManualClock,
        sensors::{ScriptedJitter, SoundLevel},
        state::TimerPhase,
    };

    // 2026-10-14T14:05:09Z
    const T0: i64 = 1_791_986_709_000;

    fn simulator(offset_hours: i32) -> (Arc<ManualClock>, SimulatorState) {
        let clock = Arc::new(ManualClock::new(T0));
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let state = SimulatorState::new(
            clock.clone(),
            offset,
            ClockFormat::TwentyFourHour,
            Box::new(ScriptedJitter::new([0.4])),
            Box::new(ScriptedJitter::new([0.5])),
        );
        (clock, state)
    }

    #[test]
    fn initial_snapshot_is_idle() {
        let (_, state) = simulator(0);
        let snap = state.snapshot();
        assert_eq!(snap.clock.time, "14:05:09");
        assert_eq!(snap.clock.date, "Wednesday, October 14, 2026");
        assert_eq!(snap.stopwatch.display, "00:00:00");
        assert_eq!(snap.countdown.phase, TimerPhase::Idle);
        assert_eq!(snap.countdown.status_text, "Stopped");
        assert_eq!(snap.countdown.progress_pct, 0);
        assert!(snap.environment.is_none());
        assert!(snap.sound.is_none());
    }

    #[test]
    fn clock_follows_offset_and_format() {
        let (_, mut state) = simulator(-3);
        assert_eq!(state.snapshot().clock.time, "11:05:09");
        assert_eq!(state.toggle_clock_format(), ClockFormat::TwelveHour);
        let snap = state.snapshot();
        assert_eq!(snap.clock.time, "11:05:09 AM");
        assert_eq!(snap.clock.toggle_label, "Switch to 24h");
    }

    #[test]
    fn sensors_populate_snapshot() {
        let (_, mut state) = simulator(0);
        let env = state.refresh_environment();
        let sound = state.refresh_sound();
        let snap = state.snapshot();
        assert_eq!(snap.environment, Some(env));
        assert_eq!(snap.sound, Some(sound));
        assert_eq!(sound.level, SoundLevel::Normal);
    }

    #[test]
    fn countdown_panel_reflects_progress() {
        let (clock, mut state) = simulator(0);
        state.timer.configure(20).unwrap();
        state.timer.start();
        clock.advance(15_000);
        state.tick_timer();
        let panel = state.snapshot().countdown;
        assert_eq!(panel.display, "00:05");
        assert_eq!(panel.progress_pct, 25);
        assert_eq!(panel.band, ProgressBand::Warning);
        assert!(panel.urgent);
        assert_eq!(panel.status_text, "Last 5s!");
    }
}
