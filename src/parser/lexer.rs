//! Lexer for raw number input
//!
//! Turns free-form text into the list of integers it contains. Two modes are
//! supported, chosen by whether the text contains a space at all:
//!
//! - **Space mode**: split on every single `' '` and parse each token as a
//!   signed 32-bit decimal integer (`"3 12 -1"` → `[3, 12, -1]`).
//! - **Character mode**: every character is read as one decimal digit
//!   (`"931"` → `[9, 3, 1]`).
//!
//! Digits from any script are accepted (`"٩٣١"` → `[9, 3, 1]`), see
//! [`super::digits`].
//!
//! Tokens that do not parse are dropped silently in both modes, so
//! `"3 x 5"` lexes to `[3, 5]`. Bounds are not checked here; see
//! [`super::sequence::validate`].

use super::digits::{decimal_value, to_ascii_digits};

/// How the raw text is split into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    /// Tokens separated by single spaces
    Spaced,
    /// One digit per character
    Digits,
}

impl LexMode {
    /// Pick the mode for the given text
    pub fn detect(raw: &str) -> Self {
        if raw.contains(' ') {
            LexMode::Spaced
        } else {
            LexMode::Digits
        }
    }
}

/// Lexer over a single raw input string
pub struct Lexer<'a> {
    input: &'a str,
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            mode: LexMode::detect(input),
        }
    }

    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Collect every integer found in the input, in order, duplicates kept
    pub fn tokenize(&self) -> Vec<i32> {
        match self.mode {
            LexMode::Spaced => self
                .input
                .split(' ')
                .filter_map(|token| to_ascii_digits(token).parse::<i32>().ok())
                .collect(),
            // Signs and non-decimal numerals are dropped
            LexMode::Digits => self
                .input
                .chars()
                .filter_map(decimal_value)
                .map(|d| d as i32)
                .collect(),
        }
    }
}

/// Shorthand for `Lexer::new(raw).tokenize()`
pub fn tokenize(raw: &str) -> Vec<i32> {
    Lexer::new(raw).tokenize()
}
