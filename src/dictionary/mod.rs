//! Dictionary lookup
//!
//! The game delegates "is this a real word?" to an injected capability, so
//! the engine never hardcodes a word source. The bundled implementation is a
//! set lookup over a newline-delimited word list.

use crate::wordlists;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Recognizes words in a given language
pub trait Dictionary {
    /// Check whether `word` is a recognized word of `language`
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

/// Set-backed dictionary built from a word list
///
/// Tagged with the single language its list covers; lookups for any other
/// language answer false.
pub struct WordListDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl WordListDictionary {
    /// Build from the embedded English word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(wordlists::DICTIONARY_WORDS.iter().copied(), "en")
    }

    /// Load from a newline-delimited file
    ///
    /// Entries are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P, language: &str) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines(), language))
    }

    /// Build from any iterator of words
    pub fn from_words<I, S>(words: I, language: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            words,
            language: language.to_string(),
        }
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The language this word list covers
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(&word.to_lowercase())
    }
}
