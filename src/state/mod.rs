//! State management module
//!
//! Engine state snapshots and the simulator that owns every panel.

pub mod chrono_state;
pub mod simulator;
pub mod timer_state;

// Re-export main types
pub use chrono_state::ChronoState;
pub use simulator::SimulatorState;
pub use timer_state::{TimerPhase, TimerState};
