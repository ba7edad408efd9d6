//! Simulated ambient sound meter
//!
//! The meter bar is piecewise: each loudness level owns a fixed slice of the
//! bar, and the decibel value is mapped linearly inside its slice.

use serde::{Deserialize, Serialize};

use super::Jitter;

const BASE_LEVEL_DB: f64 = 45.0;
const LEVEL_SPREAD: (f64, f64) = (-10.0, 25.0);
const SIMULATED_FLOOR_DB: f64 = 30.0;
const SIMULATED_CEILING_DB: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundLevel {
    Low,
    Normal,
    High,
}

impl SoundLevel {
    pub fn classify(decibels: f64) -> Self {
        if decibels < 50.0 {
            SoundLevel::Low
        } else if decibels < 70.0 {
            SoundLevel::Normal
        } else {
            SoundLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoundLevel::Low => "LOW",
            SoundLevel::Normal => "NORMAL",
            SoundLevel::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundReading {
    pub decibels: f64,
    pub level: SoundLevel,
    /// Fill of the meter bar, `0..=100`
    pub meter_pct: f64,
}

impl SoundReading {
    pub fn from_decibels(decibels: f64) -> Self {
        Self {
            decibels,
            level: SoundLevel::classify(decibels),
            meter_pct: meter_percentage(decibels),
        }
    }
}

/// Position of a decibel value on the meter bar.
///
/// 30-50 dB fills 0-33%, 50-70 dB fills 33-67%, 70-120 dB fills 67-100%.
pub fn meter_percentage(decibels: f64) -> f64 {
    let pct = match SoundLevel::classify(decibels) {
        SoundLevel::Low => (decibels - 30.0) / 20.0 * 33.0,
        SoundLevel::Normal => 33.0 + (decibels - 50.0) / 20.0 * 34.0,
        SoundLevel::High => 67.0 + (decibels - 70.0) / 50.0 * 33.0,
    };
    pct.clamp(0.0, 100.0)
}

/// Ambient noise simulation
pub struct SoundMeter {
    jitter: Box<dyn Jitter>,
}

impl SoundMeter {
    pub fn new(jitter: Box<dyn Jitter>) -> Self {
        Self { jitter }
    }

    pub fn sample(&mut self) -> SoundReading {
        let variation = self.jitter.range(LEVEL_SPREAD.0, LEVEL_SPREAD.1);
        let decibels = (BASE_LEVEL_DB + variation).clamp(SIMULATED_FLOOR_DB, SIMULATED_CEILING_DB);
        SoundReading::from_decibels(decibels)
    }
}
