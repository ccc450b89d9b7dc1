//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: input text, last result, step selection and the key loop
//! - **[`panes`]**: stateless render functions for the input line, error
//!   banner, steps list and status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with [`App::new`]
//! and call [`App::run`] to start the event loop. The app only reaches the
//! core through [`crate::sort`].
//!
//! [`App::new`]: app::App::new
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
