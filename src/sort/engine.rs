//! Step-recording insertion sort
//!
//! [`Recorder`] owns a scratch copy of the input and a [`Trace`]. It captures
//! the untouched input first, then one snapshot after every outer pass. After
//! pass `i` the positions `0..=i` are marked settled, because that prefix has
//! been sorted relative to itself (later passes may still shift values within
//! it).
//!
//! A recorder is consumed by [`Recorder::run`], so a trace can never be
//! revised once returned.

use crate::parser::NumberSequence;
use crate::snapshot::{Snapshot, Trace};
use tracing::{debug, trace};

/// Insertion sort over a scratch array, recording each pass
#[derive(Debug)]
pub struct Recorder {
    array: Vec<u8>,
    trace: Trace,
}

impl Recorder {
    pub fn new(sequence: &NumberSequence) -> Self {
        Recorder {
            array: sequence.as_slice().to_vec(),
            trace: Trace::with_capacity(sequence.len()),
        }
    }

    /// Run every pass and hand back the finished trace
    pub fn run(mut self) -> Trace {
        self.trace.push(Snapshot::capture(&self.array, None));

        for i in 1..self.array.len() {
            let shifted = self.insert(i);
            trace!(pass = i, shifted, state = ?self.array, "recorded pass");
            self.trace.push(Snapshot::capture(&self.array, Some(i)));
        }

        debug!(snapshots = self.trace.len(), "insertion sort finished");
        self.trace
    }

    /// Insert `array[i]` into the sorted prefix `array[..i]`.
    /// Returns how many elements were shifted right.
    fn insert(&mut self, i: usize) -> usize {
        let key = self.array[i];
        let mut j = i;

        // Shift larger prefix elements one slot right; equal ones stay put
        while j > 0 && self.array[j - 1] > key {
            self.array[j] = self.array[j - 1];
            j -= 1;
        }
        self.array[j] = key;

        i - j
    }
}

/// Record the full insertion-sort trace of a validated sequence
pub fn record(sequence: &NumberSequence) -> Trace {
    Recorder::new(sequence).run()
}
