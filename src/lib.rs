//! # Wordlist JSON
//!
//! Converts a newline-delimited wordlist into a sorted JSON array of
//! fixed-length lowercase words.
//!
//! ## Pipeline
//!
//! - **Filter**: each line is trimmed, ASCII-lowercased and kept only if it
//!   is exactly five letters `a`-`z`
//! - **Deduplication**: repeated words collapse to one entry
//! - **Sort**: ascending byte order, which is alphabetical for `a`-`z`
//! - **Output**: a compact JSON array, e.g. `["apple","zebra"]`
//!
//! The `rank` subcommand reads such arrays back and ranks starting guesses
//! by the entropy of their feedback patterns (see [`solver`]).
//!
//! ## Usage
//!
//! ```bash
//! # wordle-allowed-guesses.txt -> guesses.json
//! wordlist-json
//!
//! wordlist-json -i answers.txt -o answers.json
//!
//! # best opening guesses for the exported answers
//! wordlist-json rank -a answers.json -g guesses.json
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let summary = wordlist_json::run(
//!     Path::new("wordle-allowed-guesses.txt"),
//!     Path::new("guesses.json"),
//! )?;
//! println!("{}", wordlist_json::report::report_line(summary.words_written));
//! # Ok::<(), wordlist_json::ConvertError>(())
//! ```

pub mod cli;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod output;
pub mod processor;
pub mod report;
pub mod solver;

pub use cli::Args;
pub use error::ConvertError;
pub use processor::{run, ConvertConfig, ConvertSummary, Converter};
