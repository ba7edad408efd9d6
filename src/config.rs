//! Configuration and CLI argument handling

use std::time::Duration;
use anyhow::{bail, Context};
use clap::Parser;

use crate::{presentation::OutputMode, utils::ClockFormat};

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "ora-simulator")]
#[command(about = "Clock, stopwatch, countdown and simulated sensor panels in the terminal")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Stopwatch refresh cadence in milliseconds
    #[arg(long, default_value = "10")]
    pub stopwatch_refresh_ms: u64,

    /// Countdown refresh cadence in milliseconds
    #[arg(long, default_value = "100")]
    pub countdown_refresh_ms: u64,

    /// Wall clock refresh cadence in milliseconds
    #[arg(long, default_value = "1000")]
    pub clock_refresh_ms: u64,

    /// Environment sensor refresh cadence in milliseconds
    #[arg(long, default_value = "5000")]
    pub environment_refresh_ms: u64,

    /// Sound meter refresh cadence in milliseconds
    #[arg(long, default_value = "2000")]
    pub sound_refresh_ms: u64,

    /// Show the wall clock in 12-hour format
    #[arg(long)]
    pub twelve_hour: bool,

    /// Emit JSON lines instead of text
    #[arg(long)]
    pub json: bool,

    /// Countdown duration to configure at startup, as MM:SS
    #[arg(long, value_name = "MM:SS")]
    pub preset: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// How often each panel is refreshed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadences {
    pub stopwatch: Duration,
    pub countdown: Duration,
    pub clock: Duration,
    pub environment: Duration,
    pub sound: Duration,
}

impl Default for Cadences {
    fn default() -> Self {
        Self {
            stopwatch: Duration::from_millis(10),
            countdown: Duration::from_millis(100),
            clock: Duration::from_millis(1000),
            environment: Duration::from_millis(5000),
            sound: Duration::from_millis(2000),
        }
    }
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json { OutputMode::Json } else { OutputMode::Text }
    }

    pub fn clock_format(&self) -> ClockFormat {
        if self.twelve_hour { ClockFormat::TwelveHour } else { ClockFormat::TwentyFourHour }
    }

    pub fn cadences(&self) -> Cadences {
        Cadences {
            stopwatch: Duration::from_millis(self.stopwatch_refresh_ms),
            countdown: Duration::from_millis(self.countdown_refresh_ms),
            clock: Duration::from_millis(self.clock_refresh_ms),
            environment: Duration::from_millis(self.environment_refresh_ms),
            sound: Duration::from_millis(self.sound_refresh_ms),
        }
    }

    /// Reject settings the host cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        let cadences = [
            ("stopwatch", self.stopwatch_refresh_ms),
            ("countdown", self.countdown_refresh_ms),
            ("clock", self.clock_refresh_ms),
            ("environment", self.environment_refresh_ms),
            ("sound", self.sound_refresh_ms),
        ];
        for (name, ms) in cadences {
            if ms == 0 {
                bail!("{} refresh cadence must be at least 1ms", name);
            }
        }
        self.preset()?;
        Ok(())
    }

    /// Startup countdown preset as (minutes, seconds)
    pub fn preset(&self) -> anyhow::Result<Option<(i64, i64)>> {
        let Some(raw) = self.preset.as_deref() else {
            return Ok(None);
        };
        let (minutes, seconds) = raw
            .split_once(':')
            .with_context(|| format!("preset '{}' is not in MM:SS form", raw))?;
        let minutes: i64 = minutes
            .trim()
            .parse()
            .with_context(|| format!("invalid preset minutes '{}'", minutes))?;
        let seconds: i64 = seconds
            .trim()
            .parse()
            .with_context(|| format!("invalid preset seconds '{}'", seconds))?;
        Ok(Some((minutes, seconds)))
    }
}
