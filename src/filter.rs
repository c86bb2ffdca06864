//! Word filtering module
//!
//! Normalizes candidate lines and tests them against the anchored
//! "exactly N lowercase ASCII letters" pattern.

use regex::Regex;

use crate::error::{ConvertError, Result};

/// Word length of the exported list
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Build the anchored pattern for a word length
pub fn word_pattern(length: usize) -> String {
    format!("^[a-z]{{{}}}$", length)
}

/// Turn a raw line into a candidate word: trim surrounding whitespace,
/// then lowercase ASCII letters. Non-ASCII characters are left as they are.
#[inline]
pub fn normalize(line: &str) -> String {
    line.trim().to_ascii_lowercase()
}

/// Filter accepting exactly `length` lowercase ASCII letters
#[derive(Debug, Clone)]
pub struct WordFilter {
    length: usize,
    pattern: Regex,
}

impl WordFilter {
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(ConvertError::InvalidLength(length));
        }

        let pattern = Regex::new(&word_pattern(length))
            .map_err(|source| ConvertError::Pattern { length, source })?;

        Ok(Self { length, pattern })
    }

    /// Check an already-normalized candidate
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        // Cheap byte-length reject before the regex
        word.len() == self.length && self.pattern.is_match(word)
    }

    /// Normalize a raw line and return it if it is a valid word
    #[inline]
    pub fn accept(&self, line: &str) -> Option<String> {
        let candidate = normalize(line);
        self.matches(&candidate).then_some(candidate)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            length: DEFAULT_WORD_LENGTH,
            pattern: Regex::new(r"^[a-z]{5}$").expect("static pattern"),
        }
    }
}
