//! Simulated sensor panels
//!
//! Environment and sound readings are synthetic: each reading is a fixed
//! baseline plus a uniform sample from a [`Jitter`] source.

pub mod environment;
pub mod jitter;
pub mod sound;

// Re-export main types
pub use environment::{EnvironmentReading, EnvironmentSensor};
pub use jitter::{Jitter, OsJitter, ScriptedJitter};
pub use sound::{SoundLevel, SoundMeter, SoundReading};
