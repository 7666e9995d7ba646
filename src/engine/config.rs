//! Engine configuration

/// What to do when the start-word corpus has no words
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorpusFallback {
    /// Fail the start; no sensible game exists without a word source
    #[default]
    Fail,
    /// Use a fixed root word instead
    UseDefault(String),
}

/// Configuration for a game engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Language passed to the dictionary on every lookup
    pub language: String,
    /// Behavior when the corpus is unavailable or empty
    pub on_corpus_unavailable: CorpusFallback,
}

impl EngineConfig {
    /// Config for the given language with fatal corpus handling
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            on_corpus_unavailable: CorpusFallback::Fail,
        }
    }

    /// Replace the corpus-unavailable behavior
    #[must_use]
    pub fn with_fallback(mut self, fallback: CorpusFallback) -> Self {
        self.on_corpus_unavailable = fallback;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new("en")
    }
}
