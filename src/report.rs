//! Console reporting
//!
//! The report line on stdout, plus styled status messages and the optional
//! statistics block on stderr. Also the progress bar and result listing for
//! guess ranking.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::processor::ConvertSummary;
use crate::solver::{Ranking, ScoredGuess};

/// The one line printed on success
pub fn report_line(words_written: usize) -> String {
    format!("Wrote {} words", words_written)
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print detailed statistics for a finished run
pub fn print_summary(summary: &ConvertSummary, output: &Path) {
    eprintln!();
    eprintln!("{}", "═".repeat(60).green());
    eprintln!("{}", "                    CONVERSION COMPLETE".green().bold());
    eprintln!("{}", "═".repeat(60).green());
    eprintln!();

    eprintln!("  {} {}", "Lines read:     ".green(), format_number(summary.lines_read));
    eprintln!("  {} {}", "Matched lines:  ".green(), format_number(summary.matched));
    eprintln!("  {} {}", "Rejected:       ".yellow(), format_number(summary.rejected));
    eprintln!("  {} {}", "Duplicates:     ".yellow(), format_number(summary.duplicates));
    eprintln!(
        "  {} {}",
        "Unique output:  ".green().bold(),
        format_number(summary.words_written as u64).green().bold()
    );

    eprintln!();
    eprintln!("  {} {:?}", "Output file:    ".green(), output);
    eprintln!("  {} {}", "Output size:    ".green(), ByteSize(summary.bytes_written));
    eprintln!("  {} {}", "Duration:       ".green(), format_duration(summary.elapsed));
    eprintln!();
    eprintln!("{}", "═".repeat(60).green());
}

/// Progress bar for scoring `total` guesses, drawn on stderr
pub fn scoring_progress(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("Scoring guesses");
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// One ranked guess, e.g. `crane  H=5.8386 bits  E[rem]=78.41`
pub fn format_scored(entry: &ScoredGuess) -> String {
    format!(
        "{}  H={:.4} bits  E[rem]={:.2}",
        entry.guess, entry.score.entropy, entry.score.expected_remaining
    )
}

/// Print the best guess and the top list on stdout
pub fn print_ranking(ranking: &Ranking, top_k: usize) {
    println!();
    println!("Best by entropy:");
    match &ranking.best {
        Some(best) => println!("{}", format_scored(best)),
        None => println!("(none)"),
    }

    println!();
    println!("Top {}:", top_k);
    for entry in &ranking.top {
        println!("{}", format_scored(entry));
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs == 0 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line() {
        assert_eq!(report_line(2), "Wrote 2 words");
        assert_eq!(report_line(0), "Wrote 0 words");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(14855), "14,855");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_scored() {
        let entry = ScoredGuess {
            guess: "crane".to_string(),
            score: crate::solver::GuessScore {
                entropy: 3f64.log2(),
                expected_remaining: 1.0,
            },
        };
        assert_eq!(format_scored(&entry), "crane  H=1.5850 bits  E[rem]=1.00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
    }
}
