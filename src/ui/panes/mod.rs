//! TUI pane rendering modules
//!
//! Each pane module exports a single `render_*` function taking the frame,
//! its area, the data to show, focus state and a scroll offset it may adjust.
//!
//! - [`program`]: the filtered instruction stream with the current instruction
//! - [`tape`]: cell values around the cursor
//! - [`output`]: characters printed so far, plus the input prompt
//! - [`status`]: status bar with keybindings and execution state

pub mod output;
pub mod program;
pub mod status;
pub mod tape;

pub use output::render_output_pane;
pub use program::render_program_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tape::render_tape_pane;
