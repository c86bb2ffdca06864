//! Command-line interface definition for wordlist-json
//!
//! Provides argument parsing and validation for the converter and the
//! `rank` subcommand.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::filter::DEFAULT_WORD_LENGTH;

/// Export a wordlist as a sorted JSON array of fixed-length words
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-json",
    author = "m0h1nd4",
    version,
    about = "Filter a wordlist to five-letter words and export it as JSON",
    long_about = r#"
Reads a newline-delimited wordlist, keeps the entries that are exactly five
ASCII letters after trimming and lowercasing, removes duplicates, sorts the
result and writes it as a compact JSON array.

EXAMPLES:
    # Convert the default files (wordle-allowed-guesses.txt -> guesses.json)
    wordlist-json

    # Explicit paths
    wordlist-json -i answers.txt -o answers.json

    # Four-letter words, check the written file afterwards
    wordlist-json -i words.txt -o four.json -l 4 --verify

    # Rank starting guesses against an exported answer list
    wordlist-json rank -a answers.json -g guesses.json -k 10
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input wordlist, one candidate word per line
    #[arg(short, long, value_name = "PATH", default_value = "wordle-allowed-guesses.txt")]
    pub input: PathBuf,

    /// Output JSON file (overwritten if it exists)
    #[arg(short, long, value_name = "PATH", default_value = crate::output::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Exact word length to keep
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WORD_LENGTH)]
    pub length: usize,

    /// Re-read the written file and check it matches what was written
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    /// Show detailed statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short, long, global = true, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank starting guesses by expected information (entropy)
    Rank(RankArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RankArgs {
    /// Answer list: a JSON array of words
    #[arg(short, long, value_name = "PATH", default_value = "answers.json")]
    pub answers: PathBuf,

    /// Guess list to score (default: the answer list)
    #[arg(short, long, value_name = "PATH")]
    pub guesses: Option<PathBuf>,

    /// Number of top guesses to list
    #[arg(short = 'k', long, value_name = "K", default_value_t = 20)]
    pub top: usize,
}

impl Args {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.length == 0 {
            anyhow::bail!("Word length must be at least 1");
        }

        if self.input == self.output || resolve(&self.input) == resolve(&self.output) {
            anyhow::bail!("Input and output must be different files: {:?}", self.input);
        }

        Ok(())
    }

    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Canonical form of a path for comparison. A path that does not exist yet
/// resolves through its parent directory.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
