//! Utility functions module
//!
//! Display formatting and signal handling shared across the host.

pub mod format;
pub mod signals;

// Re-export main functions
pub use format::{format_chrono, format_countdown, ClockFormat};
pub use signals::shutdown_signal;
