//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`inputs`]: Array and target input fields with an editing cursor
//! - [`search`]: Status text and the index/value/pointer board
//! - [`details`]: Per-step explanation of the comparison and resulting action
//! - [`log`]: Scrolling history of status headlines
//! - [`status`]: Status bar with keybindings and state indicators
//!
//! Each pane module exports a stateless `render_*` function taking the frame,
//! its target area, the data to draw, and (for scrollable panes) a mutable
//! scroll offset that the pane clamps against its content height.

pub mod details;
pub mod inputs;
pub mod log;
pub mod search;
pub mod status;

// Re-export render functions for convenience
pub use details::render_details_pane;
pub use inputs::render_inputs_pane;
pub use log::render_log_pane;
pub use search::render_search_pane;
pub use status::render_status_bar;
