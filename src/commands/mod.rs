//! Command module
//!
//! Line-oriented commands typed by the user and their handlers.

pub mod handlers;
pub mod parser;

// Re-export main types
pub use handlers::handle_command;
pub use parser::{ChronoCommand, Command, CommandError, TimerCommand};
