//! Time-tracking engines
//!
//! The stopwatch and countdown engines own their state and read time only
//! through an injected [`Clock`]. They never schedule anything themselves;
//! the host polls them on whatever cadence it likes.

pub mod clock;
pub mod countdown;
pub mod stopwatch;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{ProgressBand, TimerEngine, TimerError, TimerStatus, TimerTick};
pub use stopwatch::ChronoEngine;
