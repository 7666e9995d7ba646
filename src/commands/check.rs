//! One-shot word checking
//!
//! Evaluates candidate words against a fixed root without an interactive
//! session. Candidates are judged in order under normal game rules, so
//! duplicates and running score behave exactly as they would in play.

use crate::core::SubmissionOutcome;
use crate::dictionary::Dictionary;
use crate::engine::{CorpusFallback, EngineConfig, GameEngine};

/// Configuration for a check run
pub struct CheckConfig {
    pub root: String,
    pub language: String,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root: String, language: String) -> Self {
        Self { root, language }
    }
}

/// Result of checking candidates against a root
pub struct CheckResult {
    /// The normalized root word the candidates were judged against
    pub root: String,
    /// Each candidate as entered, with its outcome, in submission order
    pub outcomes: Vec<(String, SubmissionOutcome)>,
    /// Total score of the accepted candidates
    pub score: u32,
}

/// Check candidate words against the root, in order
///
/// # Errors
///
/// Returns an error if the root word is empty after trimming.
pub fn check_words<D: Dictionary>(
    config: &CheckConfig,
    dictionary: D,
    candidates: &[String],
) -> Result<CheckResult, String> {
    let root = config.root.trim().to_lowercase();
    if root.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    // An empty corpus plus a fixed fallback pins the root word
    let corpus: Vec<String> = Vec::new();
    let engine_config = EngineConfig::new(config.language.clone())
        .with_fallback(CorpusFallback::UseDefault(root));
    let mut engine =
        GameEngine::start(&corpus, dictionary, engine_config).map_err(|e| e.to_string())?;

    let outcomes = candidates
        .iter()
        .map(|candidate| (candidate.clone(), engine.submit_word(candidate)))
        .collect();

    Ok(CheckResult {
        root: engine.root_word().to_string(),
        outcomes,
        score: engine.score(),
    })
}
