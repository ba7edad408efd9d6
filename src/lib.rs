//! ORA Simulator - clock, stopwatch and countdown panels for the terminal
//!
//! The library holds the time-tracking engines, the display formatting and
//! simulated sensors; the binary wires them to stdin/stdout with tokio.

pub mod commands;
pub mod config;
pub mod engine;
pub mod presentation;
pub mod sensors;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use engine::{ChronoEngine, Clock, SystemClock, TimerEngine, TimerError, TimerTick};
pub use state::SimulatorState;
pub use utils::{format_chrono, format_countdown, shutdown_signal};
