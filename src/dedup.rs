//! Deduplication of accepted words
//!
//! The word set is populated during the single read pass and consumed once
//! to produce the sorted output list.

use ahash::RandomState;
use hashbrown::HashSet;

/// Set of unique valid words
#[derive(Debug, Default)]
pub struct WordSet {
    set: HashSet<String, RandomState>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word. Returns true if it was not seen before.
    pub fn insert(&mut self, word: String) -> bool {
        self.set.insert(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Consume the set into an ascending, duplicate-free list
    pub fn into_sorted(self) -> Vec<String> {
        let mut words: Vec<String> = self.set.into_iter().collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        for word in iter {
            set.insert(word.into());
        }
        set
    }
}
