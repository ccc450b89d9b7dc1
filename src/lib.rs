//! # Introduction
//!
//! sortstep turns a short list of single digits into a step-by-step
//! insertion-sort trace. Every snapshot in the trace records the array after
//! one outer pass and tags each position as settled or not, so a front end can
//! paint the sorted prefix as it grows. A terminal viewer built with
//! [ratatui](https://docs.rs/ratatui) ships alongside the library.
//!
//! ## Pipeline
//!
//! ```text
//! Raw text → Lexer → Validator → NumberSequence → Recorder → Trace → UI
//! ```
//!
//! 1. [`parser`]: extracts integers from the text and enforces the bounds
//!    (3 to 8 numbers, each 0 to 9), producing a [`parser::NumberSequence`]
//!    or a [`ValidationError`].
//! 2. [`sort`]: runs insertion sort over a validated sequence and captures a
//!    [`snapshot::Snapshot`] per pass.
//! 3. [`snapshot`]: the [`snapshot::Trace`] and [`snapshot::Cell`] types
//!    handed to callers, with plain and annotated text renderings.
//! 4. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let trace = sortstep::sort("931").unwrap();
//! assert_eq!(trace.plain_steps(), vec!["9 3 1", "3 9 1", "1 3 9"]);
//!
//! let err = sortstep::sort("5 5").unwrap_err();
//! assert_eq!(err, sortstep::ValidationError::SizeOutOfRange);
//! ```

pub mod constants;
pub mod error;
pub mod logging;
pub mod parser;
pub mod snapshot;
pub mod sort;
pub mod ui;

pub use error::ValidationError;
pub use sort::sort;
