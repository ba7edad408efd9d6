//! Terminal renderers
//!
//! Text mode prints one line per panel whose visible content changed since
//! the previous frame. JSON mode prints the whole snapshot as one line.

use serde::{Deserialize, Serialize};

use super::{CountdownPanel, Reply, Snapshot};
use crate::{
    sensors::{EnvironmentReading, SoundReading},
    state::TimerPhase,
};

const METER_WIDTH: usize = 20;
const BELL: char = '\u{7}';

/// Output encoding for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

/// Turns snapshots and replies into output lines
#[derive(Debug)]
pub struct Renderer {
    mode: OutputMode,
    previous: Option<Snapshot>,
}

impl Renderer {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            previous: None,
        }
    }

    /// Lines to print for a new snapshot; empty when nothing visible changed
    pub fn render_snapshot(&mut self, snapshot: &Snapshot) -> Result<Vec<String>, serde_json::Error> {
        if self.previous.as_ref() == Some(snapshot) {
            return Ok(Vec::new());
        }

        let lines = match self.mode {
            OutputMode::Json => vec![serde_json::to_string(snapshot)?],
            OutputMode::Text => self.text_lines(snapshot),
        };
        self.previous = Some(snapshot.clone());
        Ok(lines)
    }

    pub fn render_reply(&self, reply: &Reply) -> Result<String, serde_json::Error> {
        match self.mode {
            OutputMode::Json => serde_json::to_string(reply),
            OutputMode::Text => Ok(format!("{}: {}", reply.status, reply.message)),
        }
    }

    fn text_lines(&self, snapshot: &Snapshot) -> Vec<String> {
        let prev = self.previous.as_ref();
        let mut lines = Vec::new();

        if prev.map(|p| &p.clock) != Some(&snapshot.clock) {
            lines.push(format!("[clock] {}  {}", snapshot.clock.time, snapshot.clock.date));
        }
        if prev.map(|p| &p.stopwatch) != Some(&snapshot.stopwatch) {
            let state = if snapshot.stopwatch.running { "running" } else { "stopped" };
            lines.push(format!("[stopwatch] {} ({})", snapshot.stopwatch.display, state));
        }
        if prev.map(|p| &p.countdown) != Some(&snapshot.countdown) {
            let finished_now = snapshot.countdown.phase == TimerPhase::Completed
                && prev.map(|p| p.countdown.phase) != Some(TimerPhase::Completed);
            lines.push(countdown_line(&snapshot.countdown, finished_now));
        }
        if let Some(reading) = &snapshot.environment {
            if prev.and_then(|p| p.environment.as_ref()) != Some(reading) {
                lines.push(environment_line(reading));
            }
        }
        if let Some(reading) = &snapshot.sound {
            if prev.and_then(|p| p.sound.as_ref()) != Some(reading) {
                lines.push(sound_line(reading));
            }
        }
        lines
    }
}

fn countdown_line(panel: &CountdownPanel, finished_now: bool) -> String {
    let mut line = String::new();
    if finished_now {
        line.push(BELL);
    }
    line.push_str(&format!(
        "[countdown] {} {} {}%",
        panel.display, panel.status_text, panel.progress_pct
    ));
    if panel.urgent {
        line.push_str(" !");
    }
    line
}

fn environment_line(reading: &EnvironmentReading) -> String {
    format!(
        "[environment] {}°C {}% humidity",
        reading.temperature_c, reading.humidity_pct
    )
}

fn sound_line(reading: &SoundReading) -> String {
    let filled = ((reading.meter_pct / 100.0) * METER_WIDTH as f64).round() as usize;
    let filled = filled.min(METER_WIDTH);
    format!(
        "[sound] {:.0} dB {} [{}{}]",
        reading.decibels,
        reading.level.label(),
        "#".repeat(filled),
        " ".repeat(METER_WIDTH - filled)
    )
}
