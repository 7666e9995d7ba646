//! Word lists for the game
//!
//! Provides the embedded root-word corpus and dictionary list compiled into
//! the binary, file loading, and random root selection.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};

use rand::prelude::IndexedRandom;

/// Root-word corpus with uniform random selection
///
/// Picking from an empty corpus yields `None`; deciding whether that is
/// fatal belongs to the caller.
#[derive(Debug, Clone, Copy)]
pub struct WordList<'a> {
    words: &'a [String],
}

impl<'a> WordList<'a> {
    /// Wrap a slice of candidate root words
    #[must_use]
    pub const fn new(words: &'a [String]) -> Self {
        Self { words }
    }

    /// Pick a uniformly random word, or `None` when the corpus is empty
    #[must_use]
    pub fn pick_random(&self) -> Option<&'a str> {
        self.words.choose(&mut rand::rng()).map(String::as_str)
    }

    /// Number of words in the corpus
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the corpus holds no words
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_valid_roots() {
        // All roots should be 8 letters, lowercase ASCII
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Root '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_playable() {
        // Submissions of one or two letters are rejected before lookup,
        // so the list should not carry them
        for &word in DICTIONARY_WORDS {
            assert!(word.len() >= 3, "Word '{word}' is too short to play");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_dictionary_words() {
        // Roots come from the same vocabulary players are held to
        let dictionary: std::collections::HashSet<_> = DICTIONARY_WORDS.iter().collect();

        for &root in &START_WORDS[..10] {
            // Check first 10 for speed
            assert!(
                dictionary.contains(&root),
                "Root '{root}' not in dictionary list"
            );
        }
    }

    #[test]
    fn pick_random_from_empty_corpus() {
        let words: Vec<String> = Vec::new();
        let list = WordList::new(&words);
        assert!(list.is_empty());
        assert_eq!(list.pick_random(), None);
    }

    #[test]
    fn pick_random_returns_corpus_member() {
        let words = vec!["silkworm".to_string(), "umbrella".to_string()];
        let list = WordList::new(&words);
        assert_eq!(list.len(), 2);

        for _ in 0..20 {
            let picked = list.pick_random().unwrap();
            assert!(words.iter().any(|w| w == picked));
        }
    }

    #[test]
    fn pick_random_single_word_is_deterministic() {
        let words = vec!["silkworm".to_string()];
        let list = WordList::new(&words);
        assert_eq!(list.pick_random(), Some("silkworm"));
    }
}
