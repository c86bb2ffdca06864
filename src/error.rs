//! Error types for the conversion pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything that can make a conversion run fail.
///
/// Malformed candidate lines are never errors; they are filtered out.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file could not be opened or read
    #[error("cannot read input file {path:?}")]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input file contains bytes that are not valid UTF-8
    #[error("input file {path:?} is not valid UTF-8 (line {line})")]
    InputEncoding { path: PathBuf, line: usize },

    /// Output file could not be created, written or flushed
    #[error("cannot write output file {path:?}")]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode word list for {path:?}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON word list could not be parsed
    #[error("{path:?} is not a JSON array")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid word length {0}: must be at least 1")]
    InvalidLength(usize),

    /// The word pattern for a length could not be compiled (too large)
    #[error("cannot build a word pattern for length {length}")]
    Pattern {
        length: usize,
        #[source]
        source: regex::Error,
    },

    /// A word list held no usable words
    #[error("no valid words in {path:?}")]
    EmptyWordList { path: PathBuf },

    /// Re-reading the written file did not give back the list that was written
    #[error("verification of {path:?} failed: wrote {expected} words, read back {found}")]
    VerifyFailed {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

impl ConvertError {
    pub(crate) fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputAccess {
            path: path.into(),
            source,
        }
    }

    /// True for failures on the input side of the pipeline
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InputAccess { .. }
                | Self::InputEncoding { .. }
                | Self::Parse { .. }
                | Self::EmptyWordList { .. }
        )
    }

    /// True for failures on the output side of the pipeline
    pub fn is_output_error(&self) -> bool {
        matches!(self, Self::OutputAccess { .. } | Self::Serialize { .. })
    }

    /// Operator hint printed after the error chain
    pub fn hint(&self) -> Option<&'static str> {
        if self.is_input_error() {
            Some("Check that the input path exists and is a UTF-8 wordlist")
        } else if self.is_output_error() {
            Some("Check that the output directory exists and is writable")
        } else {
            None
        }
    }
}
