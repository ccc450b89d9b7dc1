//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function; scroll state lives in
//! [`App`](crate::ui::App) and is passed in by reference.
//!
//! - [`input`]: prompt, input line and validation error banner
//! - [`steps`]: one colored row per snapshot
//! - [`status`]: status bar with keybindings and step position

pub mod input;
pub mod status;
pub mod steps;

pub use input::{render_error_banner, render_input_pane};
pub use status::render_status_bar;
pub use steps::render_steps_pane;
