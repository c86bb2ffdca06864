//! Core processing engine
//!
//! One linear pass: read lines, normalize and filter, deduplicate, sort,
//! write JSON.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::cli::Args;
use crate::dedup::WordSet;
use crate::encoding::LineReader;
use crate::error::{ConvertError, Result};
use crate::filter::{WordFilter, DEFAULT_WORD_LENGTH};
use crate::output::{read_word_list, write_json};

/// Converter configuration
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub length: usize,
    pub verify: bool,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            length: DEFAULT_WORD_LENGTH,
            verify: false,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            length: args.length,
            verify: args.verify,
        }
    }
}

/// Per-line counters from the filter pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineCounts {
    pub lines_read: u64,
    pub matched: u64,
    pub rejected: u64,
    pub duplicates: u64,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub lines_read: u64,
    pub matched: u64,
    pub rejected: u64,
    pub duplicates: u64,
    pub words_written: usize,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

/// Filter and deduplicate a sequence of raw lines.
///
/// Stops at the first line error; nothing is accumulated past it.
pub fn collect_words<I, S>(lines: I, filter: &WordFilter) -> Result<(WordSet, LineCounts)>
where
    I: IntoIterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let mut words = WordSet::new();
    let mut counts = LineCounts::default();

    for line in lines {
        let line = line?;
        counts.lines_read += 1;

        match filter.accept(line.as_ref()) {
            Some(word) => {
                counts.matched += 1;
                if !words.insert(word) {
                    counts.duplicates += 1;
                }
            }
            None => counts.rejected += 1,
        }
    }

    Ok((words, counts))
}

/// Convert `input` to `output` with the default five-letter filter
pub fn run(input: &Path, output: &Path) -> Result<ConvertSummary> {
    Converter::new(ConvertConfig::new(input, output))?.run()
}

/// Main converter
pub struct Converter {
    config: ConvertConfig,
    filter: WordFilter,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Result<Self> {
        let filter = WordFilter::new(config.length)?;
        Ok(Self { config, filter })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Run the full pipeline.
    ///
    /// The input is read completely before the output is opened, so a failed
    /// read leaves any existing output untouched.
    pub fn run(&self) -> Result<ConvertSummary> {
        let start = Instant::now();
        let input = &self.config.input;
        let output = &self.config.output;

        log::info!("Reading {:?}", input);
        log::debug!("Word pattern: {}", self.filter.pattern_str());
        let reader = LineReader::open(input)?;
        let (words, counts) = collect_words(reader, &self.filter)?;

        log::debug!(
            "{} lines read: {} matched, {} rejected, {} duplicates, {} unique",
            counts.lines_read,
            counts.matched,
            counts.rejected,
            counts.duplicates,
            words.len()
        );

        let words = words.into_sorted();
        if words.is_empty() {
            log::warn!(
                "No {}-letter words found in {:?}, writing an empty list",
                self.filter.length(),
                input
            );
        }

        log::info!("Writing {} words to {:?}", words.len(), output);
        let bytes_written = write_json(output, &words)?;

        if self.config.verify {
            self.verify(&words)?;
        }

        Ok(ConvertSummary {
            lines_read: counts.lines_read,
            matched: counts.matched,
            rejected: counts.rejected,
            duplicates: counts.duplicates,
            words_written: words.len(),
            bytes_written,
            elapsed: start.elapsed(),
        })
    }

    /// Re-read the output and compare against what was written
    fn verify(&self, written: &[String]) -> Result<()> {
        let output = &self.config.output;
        let read_back = read_word_list(output, &self.filter)?;

        if read_back != written {
            return Err(ConvertError::VerifyFailed {
                path: output.clone(),
                expected: written.len(),
                found: read_back.len(),
            });
        }

        log::debug!("Verified {} words in {:?}", read_back.len(), output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ok_lines<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = Result<&'a str>> + 'a {
        lines.iter().map(|l| Ok(*l))
    }

    fn setup(content: &str) -> (TempDir, PathBuf, PathBuf) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("words.json");
        std::fs::write(&input, content).unwrap();
        (dir, input, output)
    }

    #[test]
    fn test_collect_words_counts() {
        let lines = ["apple", "APPLE", "zebra", "ab1cd", "a"];
        let (words, counts) = collect_words(ok_lines(&lines), &WordFilter::default()).unwrap();

        assert_eq!(words.into_sorted(), vec!["apple", "zebra"]);
        assert_eq!(
            counts,
            LineCounts {
                lines_read: 5,
                matched: 3,
                rejected: 2,
                duplicates: 1,
            }
        );
    }

    #[test]
    fn test_collect_words_stops_on_error() {
        let lines: Vec<Result<String>> = vec![
            Ok("apple".to_string()),
            Err(ConvertError::InputEncoding {
                path: PathBuf::from("x"),
                line: 2,
            }),
            Ok("zebra".to_string()),
        ];

        let err = collect_words(lines, &WordFilter::default()).unwrap_err();
        assert!(matches!(err, ConvertError::InputEncoding { line: 2, .. }));
    }

    #[test]
    fn test_run_end_to_end() {
        let (_dir, input, output) = setup("apple\nAPPLE\nzebra\nab1cd\na\n");

        let summary = run(&input, &output).unwrap();

        assert_eq!(summary.words_written, 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), r#"["apple","zebra"]"#);
        assert_eq!(summary.bytes_written, 17);
    }

    #[test]
    fn test_run_rejects_malformed_lines() {
        let (_dir, input, output) = setup("app1e\nappl\napplesauce\n\n  crane \t\r\n");

        let summary = run(&input, &output).unwrap();

        assert_eq!(summary.words_written, 1);
        assert_eq!(summary.rejected, 4);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), r#"["crane"]"#);
    }

    #[test]
    fn test_run_accepts_cr_only_line_endings() {
        let (_dir, input, output) = setup("apple\rzebra\rcrane\r");

        let summary = run(&input, &output).unwrap();

        assert_eq!(summary.lines_read, 3);
        assert_eq!(summary.words_written, 3);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            r#"["apple","crane","zebra"]"#
        );
    }

    #[test]
    fn test_run_is_idempotent() {
        let (dir, input, output) = setup("slate\ncrane\nSLATE\nadieu\n");
        let second = dir.path().join("second.json");

        run(&input, &output).unwrap();
        run(&input, &second).unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), std::fs::read(&second).unwrap());
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.txt");
        let output = dir.path().join("out.json");

        let err = run(&input, &output).unwrap_err();

        assert!(err.is_input_error());
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_utf8_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("out.json");
        std::fs::write(&input, b"apple\n\xC3\x28\n").unwrap();
        std::fs::write(&output, "previous").unwrap();

        let err = run(&input, &output).unwrap_err();

        assert!(matches!(err, ConvertError::InputEncoding { line: 2, .. }));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_converter_length_and_verify() {
        let (_dir, input, output) = setup("word\nWORDS\nbird\nfish\nbird\n");

        let mut config = ConvertConfig::new(&input, &output);
        config.length = 4;
        config.verify = true;

        let summary = Converter::new(config).unwrap().run().unwrap();

        assert_eq!(summary.words_written, 3);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            r#"["bird","fish","word"]"#
        );
    }

    #[test]
    fn test_converter_zero_length() {
        let config = ConvertConfig {
            length: 0,
            ..ConvertConfig::new("in.txt", "out.json")
        };
        assert!(matches!(
            Converter::new(config),
            Err(ConvertError::InvalidLength(0))
        ));
    }

    #[test]
    fn test_empty_input() {
        let (_dir, input, output) = setup("");

        let summary = run(&input, &output).unwrap();

        assert_eq!(summary.words_written, 0);
        assert_eq!(summary.lines_read, 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
    }
}
