//! Presentation module
//!
//! Snapshot types handed from the host loop to the display, the renderers
//! that turn them into terminal output, and command replies.

pub mod render;
pub mod responses;
pub mod snapshot;

// Re-export main types
pub use render::{OutputMode, Renderer};
pub use responses::Reply;
pub use snapshot::{ClockPanel, CountdownPanel, Snapshot, StopwatchPanel};
