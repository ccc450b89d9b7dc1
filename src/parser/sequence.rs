//! Validated number sequences
//!
//! A [`NumberSequence`] can only be obtained through [`validate`] (or the
//! [`parse`](super::parse) wrapper), so holding one proves the length and
//! value bounds hold. Checks run in a fixed order and the first failure wins:
//!
//! 1. length within [`MIN_LENGTH`]..=[`MAX_LENGTH`], else
//!    [`ValidationError::SizeOutOfRange`]
//! 2. every value within [`MIN_VALUE`]..=[`MAX_VALUE`], else
//!    [`ValidationError::ValueOutOfRange`]

use crate::constants::{MAX_LENGTH, MAX_VALUE, MIN_LENGTH, MIN_VALUE};
use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// An immutable, bounds-checked list of single-digit numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberSequence {
    values: Vec<u8>,
}

impl NumberSequence {
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated sequence; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.values.iter()
    }
}

/// Check the bounds of already-lexed numbers
pub fn validate(numbers: &[i32]) -> Result<NumberSequence, ValidationError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&numbers.len()) {
        debug!(count = numbers.len(), "rejected input: size out of range");
        return Err(ValidationError::SizeOutOfRange);
    }

    if let Some(bad) = numbers
        .iter()
        .find(|n| !(MIN_VALUE..=MAX_VALUE).contains(*n))
    {
        debug!(value = *bad, "rejected input: value out of range");
        return Err(ValidationError::ValueOutOfRange);
    }

    // Range already checked, the narrowing cannot truncate
    let values = numbers.iter().map(|&n| n as u8).collect();
    Ok(NumberSequence { values })
}

impl FromStr for NumberSequence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse(s)
    }
}

impl TryFrom<&[i32]> for NumberSequence {
    type Error = ValidationError;

    fn try_from(numbers: &[i32]) -> Result<Self, Self::Error> {
        validate(numbers)
    }
}

impl TryFrom<Vec<i32>> for NumberSequence {
    type Error = ValidationError;

    fn try_from(numbers: Vec<i32>) -> Result<Self, Self::Error> {
        validate(&numbers)
    }
}

impl<'a> IntoIterator for &'a NumberSequence {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
