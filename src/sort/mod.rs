//! Sort entry point
//!
//! [`sort`] is the single operation front ends call: raw text in, either a
//! complete [`Trace`] or a [`ValidationError`] out. Validation failure
//! short-circuits, so the recorder never runs on rejected input and no
//! partial trace is ever returned.

pub mod engine;

pub use engine::{record, Recorder};

use crate::error::ValidationError;
use crate::parser;
use crate::snapshot::Trace;
use tracing::debug;

/// Validate `raw` and record its insertion-sort trace
pub fn sort(raw: &str) -> Result<Trace, ValidationError> {
    let sequence = parser::parse(raw)?;
    debug!(input = %sequence, "sorting");
    Ok(record(&sequence))
}
