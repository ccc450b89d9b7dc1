//! Validation error type
//!
//! [`ValidationError`] is the only failure the core can report. The sort step
//! itself is total once an input has been validated, so there is no runtime
//! error type alongside it.
//!
//! The `Display` text is the default wording shown by the bundled front ends.
//! Callers that need different wording should match on the variant instead of
//! parsing the message.

/// Reasons a raw input can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// Parsed count fell outside the accepted length range
    #[error("Input size must be between 3 and 8 numbers.")]
    SizeOutOfRange,

    /// At least one parsed number fell outside the accepted value range
    #[error("All numbers must be between 0 and 9.")]
    ValueOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_bounds() {
        use crate::constants::{MAX_LENGTH, MAX_VALUE, MIN_LENGTH, MIN_VALUE};

        assert_eq!((MIN_LENGTH, MAX_LENGTH), (3, 8));
        assert_eq!((MIN_VALUE, MAX_VALUE), (0, 9));

        assert_eq!(
            ValidationError::SizeOutOfRange.to_string(),
            "Input size must be between 3 and 8 numbers."
        );
        assert_eq!(
            ValidationError::ValueOutOfRange.to_string(),
            "All numbers must be between 0 and 9."
        );
    }
}
