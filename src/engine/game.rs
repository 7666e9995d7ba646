//! Game engine
//!
//! Owns the session and applies the submission rules in a fixed order, so a
//! candidate violating several rules always surfaces the same reason.

use super::config::{CorpusFallback, EngineConfig};
use crate::core::{RejectReason, Session, SubmissionOutcome, is_spellable};
use crate::dictionary::Dictionary;
use crate::wordlists::WordList;
use std::fmt;

/// Fatal startup failure: no root word can be chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// The start-word corpus contains no words
    EmptyCorpus,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => {
                write!(f, "start-word corpus is empty; no game can be started")
            }
        }
    }
}

impl std::error::Error for CorpusError {}

/// The game engine
///
/// Borrows the start-word corpus, owns the dictionary, and holds the current
/// session. Constructing an engine starts the first game, so a sessionless
/// engine cannot be observed.
pub struct GameEngine<'a, D: Dictionary> {
    start_words: WordList<'a>,
    dictionary: D,
    config: EngineConfig,
    session: Session,
}

impl<'a, D: Dictionary> GameEngine<'a, D> {
    /// Start a new engine, picking the first root word
    ///
    /// # Errors
    /// Returns [`CorpusError::EmptyCorpus`] when the corpus is empty and the
    /// config does not name a fallback word.
    pub fn start(
        start_words: &'a [String],
        dictionary: D,
        config: EngineConfig,
    ) -> Result<Self, CorpusError> {
        let start_words = WordList::new(start_words);
        let root = Self::pick_root(start_words, &config)?;

        Ok(Self {
            start_words,
            dictionary,
            config,
            session: Session::new(root),
        })
    }

    /// Restart: discard the session and pick a fresh root word
    ///
    /// Clears the used-word history and resets the score to zero. Returns the
    /// new root word.
    ///
    /// # Errors
    /// Same corpus conditions as [`GameEngine::start`].
    pub fn start_game(&mut self) -> Result<&str, CorpusError> {
        let root = Self::pick_root(self.start_words, &self.config)?;
        self.session = Session::new(root);
        Ok(self.session.root_word())
    }

    fn pick_root(words: WordList<'_>, config: &EngineConfig) -> Result<String, CorpusError> {
        match words.pick_random() {
            Some(word) => Ok(word.to_string()),
            None => match &config.on_corpus_unavailable {
                CorpusFallback::Fail => Err(CorpusError::EmptyCorpus),
                CorpusFallback::UseDefault(word) => Ok(word.clone()),
            },
        }
    }

    /// Submit a candidate word
    ///
    /// The checks run in a fixed order (length, root, history, letters,
    /// dictionary) and stop at the first violation, so the reported reason
    /// is deterministic when several rules are broken at once.
    pub fn submit_word(&mut self, raw: &str) -> SubmissionOutcome {
        let candidate = normalize(raw);

        if candidate.chars().count() <= 2 {
            return SubmissionOutcome::Rejected(RejectReason::TooShort);
        }

        if candidate == self.session.root_word() {
            return SubmissionOutcome::Rejected(RejectReason::SameAsRoot);
        }

        if self.session.contains(&candidate) {
            return SubmissionOutcome::Rejected(RejectReason::AlreadyUsed);
        }

        if !is_spellable(&candidate, self.session.root_word()) {
            return SubmissionOutcome::Rejected(RejectReason::NotSpellable);
        }

        if !self.dictionary.is_recognized(&candidate, &self.config.language) {
            return SubmissionOutcome::Rejected(RejectReason::NotRecognized);
        }

        let score_delta = score_for(&candidate);
        self.session.record(candidate.clone(), score_delta);

        SubmissionOutcome::Accepted {
            word: candidate,
            score_delta,
        }
    }

    /// Current root word
    #[must_use]
    pub fn root_word(&self) -> &str {
        self.session.root_word()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.session.used_words()
    }

    /// Running score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// Dictionary language submissions are checked against
    #[must_use]
    pub fn language(&self) -> &str {
        &self.config.language
    }
}

/// Lowercase and trim a raw submission
fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Points for an accepted word: its length when longer than three letters,
/// otherwise one point
fn score_for(word: &str) -> u32 {
    let len = word.chars().count() as u32;
    if len > 3 { len } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use std::cell::Cell;

    /// Test dictionary that counts lookups
    struct CountingDictionary {
        lookups: Cell<usize>,
    }

    impl CountingDictionary {
        fn new() -> Self {
            Self {
                lookups: Cell::new(0),
            }
        }
    }

    impl Dictionary for CountingDictionary {
        fn is_recognized(&self, _word: &str, _language: &str) -> bool {
            self.lookups.set(self.lookups.get() + 1);
            true
        }
    }

    fn corpus(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    fn dict(words: &[&str]) -> WordListDictionary {
        WordListDictionary::from_words(words.iter().copied(), "en")
    }

    fn silkworm_engine(words: &[&str]) -> (Vec<String>, WordListDictionary) {
        (corpus(&["silkworm"]), dict(words))
    }

    #[test]
    fn accepts_spellable_recognized_word() {
        let (corpus, dict) = silkworm_engine(&["silk", "worm"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        let outcome = engine.submit_word("silk");
        assert_eq!(
            outcome,
            SubmissionOutcome::Accepted {
                word: "silk".to_string(),
                score_delta: 4
            }
        );
        assert_eq!(engine.used_words(), ["silk"]);
        assert_eq!(engine.score(), 4);
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let (corpus, dict) = silkworm_engine(&["silk"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        let outcome = engine.submit_word("  SILK \n");
        assert!(outcome.is_accepted());
        assert_eq!(engine.used_words(), ["silk"]);
    }

    #[test]
    fn short_words_skip_dictionary_and_history() {
        let corpus = corpus(&["silkworm"]);
        let dict = CountingDictionary::new();
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        assert_eq!(
            engine.submit_word(""),
            SubmissionOutcome::Rejected(RejectReason::TooShort)
        );
        assert_eq!(
            engine.submit_word("a"),
            SubmissionOutcome::Rejected(RejectReason::TooShort)
        );
        assert_eq!(
            engine.submit_word("is"),
            SubmissionOutcome::Rejected(RejectReason::TooShort)
        );
        assert_eq!(engine.dictionary.lookups.get(), 0);
    }

    #[test]
    fn rejects_root_word_regardless_of_dictionary() {
        // Dictionary recognizes the root; the root guard fires first
        let (corpus, dict) = silkworm_engine(&["silkworm"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        assert_eq!(
            engine.submit_word("silkworm"),
            SubmissionOutcome::Rejected(RejectReason::SameAsRoot)
        );
    }

    #[test]
    fn rejects_repeated_word() {
        let (corpus, dict) = silkworm_engine(&["silk"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        assert!(engine.submit_word("silk").is_accepted());
        assert_eq!(
            engine.submit_word("silk"),
            SubmissionOutcome::Rejected(RejectReason::AlreadyUsed)
        );
        assert_eq!(engine.used_words(), ["silk"]);
        assert_eq!(engine.score(), 4);
    }

    #[test]
    fn rejects_unspellable_before_dictionary() {
        // "mile" is in the dictionary but needs an 'e' the root lacks
        let (corpus, dict) = silkworm_engine(&["mile"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        assert_eq!(
            engine.submit_word("mile"),
            SubmissionOutcome::Rejected(RejectReason::NotSpellable)
        );
    }

    #[test]
    fn rejects_unrecognized_word() {
        // "kilos" uses only root letters but is not in the dictionary
        let (corpus, dict) = silkworm_engine(&["silk"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        assert_eq!(
            engine.submit_word("kilos"),
            SubmissionOutcome::Rejected(RejectReason::NotRecognized)
        );
    }

    #[test]
    fn spellability_is_set_based_not_counted() {
        // Root "cat" has one 'a'; "aaa" reuses it and stands or falls on the
        // dictionary alone
        let corpus = corpus(&["cat"]);
        let mut engine =
            GameEngine::start(&corpus, dict(&["aaa"]), EngineConfig::default()).unwrap();

        assert_eq!(
            engine.submit_word("aaa"),
            SubmissionOutcome::Accepted {
                word: "aaa".to_string(),
                score_delta: 1
            }
        );
    }

    #[test]
    fn rejection_is_idempotent() {
        let (corpus, dict) = silkworm_engine(&["silk"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        let first = engine.submit_word("kilos");
        let second = engine.submit_word("kilos");
        assert_eq!(first, second);
        assert_eq!(first.reason(), Some(RejectReason::NotRecognized));
    }

    #[test]
    fn score_is_sum_of_deltas() {
        // Lengths 4, 3, 5 score 4 + 1 + 5
        let (corpus, dict) = silkworm_engine(&["silk", "oil", "kilos"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        assert!(engine.submit_word("silk").is_accepted());
        assert!(engine.submit_word("oil").is_accepted());
        assert!(engine.submit_word("kilos").is_accepted());
        assert_eq!(engine.score(), 4 + 1 + 5);
    }

    #[test]
    fn used_words_are_most_recent_first() {
        let (corpus, dict) = silkworm_engine(&["silk", "worm", "oil"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        engine.submit_word("silk");
        engine.submit_word("worm");
        engine.submit_word("oil");

        assert_eq!(engine.used_words(), ["oil", "worm", "silk"]);
    }

    #[test]
    fn restart_clears_session() {
        let (corpus, dict) = silkworm_engine(&["silk"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        engine.submit_word("silk");
        assert_eq!(engine.score(), 4);

        let root = engine.start_game().unwrap().to_string();
        assert_eq!(root, "silkworm");
        assert!(engine.used_words().is_empty());
        assert_eq!(engine.score(), 0);

        // The word is playable again after the restart
        assert!(engine.submit_word("silk").is_accepted());
    }

    #[test]
    fn root_comes_from_corpus() {
        let corpus = corpus(&["silkworm", "umbrella", "notebook"]);
        let engine = GameEngine::start(&corpus, dict(&[]), EngineConfig::default()).unwrap();

        assert!(corpus.iter().any(|w| w == engine.root_word()));
    }

    #[test]
    fn empty_corpus_fails_by_default() {
        let corpus: Vec<String> = Vec::new();
        let result = GameEngine::start(&corpus, dict(&[]), EngineConfig::default());

        assert!(matches!(result, Err(CorpusError::EmptyCorpus)));
    }

    #[test]
    fn empty_corpus_uses_configured_fallback() {
        let corpus: Vec<String> = Vec::new();
        let config = EngineConfig::new("en")
            .with_fallback(CorpusFallback::UseDefault("silkworm".to_string()));
        let mut engine = GameEngine::start(&corpus, dict(&["silk"]), config).unwrap();

        assert_eq!(engine.root_word(), "silkworm");
        assert!(engine.submit_word("silk").is_accepted());

        // Restart keeps falling back to the same word
        assert_eq!(engine.start_game().unwrap(), "silkworm");
    }

    #[test]
    fn first_violated_rule_wins() {
        let (corpus, dict) = silkworm_engine(&["silk"]);
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        // Too short and unspellable: length fires first
        assert_eq!(
            engine.submit_word("zz"),
            SubmissionOutcome::Rejected(RejectReason::TooShort)
        );

        // Unspellable and unrecognized: letters fire first
        assert_eq!(
            engine.submit_word("zebra"),
            SubmissionOutcome::Rejected(RejectReason::NotSpellable)
        );
    }

    #[test]
    fn language_is_passed_to_dictionary() {
        // A French-tagged dictionary never recognizes words under "en"
        let corpus = corpus(&["silkworm"]);
        let dict = WordListDictionary::from_words(["silk"], "fr");
        let mut engine = GameEngine::start(&corpus, dict, EngineConfig::default()).unwrap();

        assert_eq!(
            engine.submit_word("silk"),
            SubmissionOutcome::Rejected(RejectReason::NotRecognized)
        );
        assert_eq!(engine.language(), "en");
    }
}
