//! Raw input parsing and validation
//!
//! Converts user text into a [`NumberSequence`] in two passes:
//!
//! - [`lexer`]: extracts the integers present in the text, dropping anything
//!   that does not parse
//! - [`sequence`]: enforces the length and value bounds
//!
//! [`parse`] runs both and is a pure function of its input, so the same text
//! always produces the same sequence or the same error.

pub mod digits;
pub mod lexer;
pub mod sequence;

pub use lexer::{tokenize, LexMode, Lexer};
pub use sequence::{validate, NumberSequence};

use crate::error::ValidationError;

/// Lex and validate raw user input
pub fn parse(raw: &str) -> Result<NumberSequence, ValidationError> {
    validate(&tokenize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spaced_input() {
        let seq = parse("9 8 3 2 4 6 1").unwrap();
        assert_eq!(seq.as_slice(), &[9, 8, 3, 2, 4, 6, 1]);
    }

    #[test]
    fn test_parse_unspaced_input() {
        let seq: NumberSequence = "931".parse().unwrap();
        assert_eq!(seq.as_slice(), &[9, 3, 1]);
    }

    #[test]
    fn test_dropped_tokens_count_against_size() {
        // "x" is dropped, leaving only two numbers
        assert_eq!(parse("3 x 5"), Err(ValidationError::SizeOutOfRange));
        assert_eq!(parse("3 x 5 7").unwrap().as_slice(), &[3, 5, 7]);
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert_eq!(parse(""), Err(ValidationError::SizeOutOfRange));
        assert_eq!(parse("    "), Err(ValidationError::SizeOutOfRange));
    }
}
