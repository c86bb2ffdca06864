//! Starting-guess ranking
//!
//! Scores each guess by how evenly its feedback patterns split the answer
//! list. A pattern is five base-3 digits (gray, yellow, green) packed into
//! one code in `0..243`.

use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::filter::WordFilter;
use crate::output::read_word_list;

/// Letters per guess
pub const WORD_LENGTH: usize = 5;

/// Distinct feedback patterns: 3^5
pub const PATTERN_COUNT: usize = 243;

pub const GRAY: u8 = 0;
pub const YELLOW: u8 = 1;
pub const GREEN: u8 = 2;

/// Feedback code for `guess` played against `answer`.
///
/// Greens are assigned first, then yellows from the remaining letter counts,
/// so a repeated guess letter is only yellow as often as the answer still
/// holds it. Both words must be five lowercase ASCII letters.
pub fn pattern_code(guess: &str, answer: &str) -> u8 {
    let guess = guess.as_bytes();
    let answer = answer.as_bytes();
    debug_assert!(guess.len() == WORD_LENGTH && answer.len() == WORD_LENGTH);

    let mut counts = [0u8; 26];
    for &a in answer {
        counts[(a - b'a') as usize] += 1;
    }

    let mut marks = [GRAY; WORD_LENGTH];
    for i in 0..WORD_LENGTH {
        if guess[i] == answer[i] {
            marks[i] = GREEN;
            counts[(guess[i] - b'a') as usize] -= 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if marks[i] != GRAY {
            continue;
        }
        let slot = &mut counts[(guess[i] - b'a') as usize];
        if *slot > 0 {
            marks[i] = YELLOW;
            *slot -= 1;
        }
    }

    marks.iter().fold(0, |code, &m| code * 3 + m)
}

/// Number of answers falling into each pattern for `guess`
pub fn pattern_buckets<A: AsRef<str>>(guess: &str, answers: &[A]) -> [u32; PATTERN_COUNT] {
    let mut buckets = [0u32; PATTERN_COUNT];
    for answer in answers {
        buckets[pattern_code(guess, answer.as_ref()) as usize] += 1;
    }
    buckets
}

/// Quality of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GuessScore {
    /// Shannon entropy of the pattern distribution, in bits
    pub entropy: f64,
    /// Expected number of answers left after seeing the pattern
    pub expected_remaining: f64,
}

/// Score `guess` against the answer list. An empty list scores zero.
pub fn score_guess<A: AsRef<str>>(guess: &str, answers: &[A]) -> GuessScore {
    if answers.is_empty() {
        return GuessScore::default();
    }

    let total = answers.len() as f64;
    let mut score = GuessScore::default();

    for &count in pattern_buckets(guess, answers).iter().filter(|&&c| c > 0) {
        let c = count as f64;
        let p = c / total;
        score.entropy -= p * p.log2();
        score.expected_remaining += p * c;
    }

    score
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub guess: String,
    pub score: GuessScore,
}

/// Result of ranking a guess list
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// First guess reaching the highest entropy
    pub best: Option<ScoredGuess>,
    /// Highest-entropy guesses, best first; ties keep input order
    pub top: Vec<ScoredGuess>,
}

/// Score every guess and keep the best `top_k`.
///
/// `on_scored` is called with the running count after each guess.
pub fn rank_guesses<G, A, F>(guesses: &[G], answers: &[A], top_k: usize, mut on_scored: F) -> Ranking
where
    G: AsRef<str>,
    A: AsRef<str>,
    F: FnMut(usize),
{
    let mut scored = Vec::with_capacity(guesses.len());
    let mut best: Option<ScoredGuess> = None;

    for (i, guess) in guesses.iter().enumerate() {
        let guess = guess.as_ref();
        let entry = ScoredGuess {
            guess: guess.to_string(),
            score: score_guess(guess, answers),
        };

        if best
            .as_ref()
            .map_or(true, |b| entry.score.entropy > b.score.entropy)
        {
            best = Some(entry.clone());
        }

        scored.push(entry);
        on_scored(i + 1);
    }

    // Stable: equal entropies stay in input order
    scored.sort_by(|a, b| b.score.entropy.total_cmp(&a.score.entropy));
    scored.truncate(top_k);

    Ranking { best, top: scored }
}

/// Load the answer list and the optional guess list. Without a guess list
/// the answers are scored against themselves.
pub fn load_word_lists(answers: &Path, guesses: Option<&Path>) -> Result<(Vec<String>, Vec<String>)> {
    let filter = WordFilter::default();

    let load = |path: &Path| -> Result<Vec<String>> {
        let words = read_word_list(path, &filter)?;
        if words.is_empty() {
            return Err(ConvertError::EmptyWordList {
                path: path.to_path_buf(),
            });
        }
        log::debug!("Loaded {} words from {:?}", words.len(), path);
        Ok(words)
    };

    let answer_list = load(answers)?;
    let guess_list = match guesses {
        Some(path) => load(path)?,
        None => answer_list.clone(),
    };

    Ok((answer_list, guess_list))
}
