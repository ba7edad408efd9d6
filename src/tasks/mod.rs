//! Host tasks module
//!
//! The tokio tasks that stand in for the simulator page: one owns and
//! refreshes the engines, one reads commands, one draws.

pub mod display;
pub mod input;
pub mod refresh;

// Re-export main functions
pub use display::display_task;
pub use input::input_task;
pub use refresh::refresh_task;
