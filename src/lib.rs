//! Word Scramble
//!
//! An anagram word game: given a random root word, submit new words spelled
//! from its letters. Words must be real, unused this session, longer than two
//! letters, and not the root itself. Accepted words score their length when
//! longer than three letters, otherwise one point.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::engine::{EngineConfig, GameEngine};
//!
//! let corpus = vec!["silkworm".to_string()];
//! let dictionary = WordListDictionary::embedded();
//! let mut engine = GameEngine::start(&corpus, dictionary, EngineConfig::default()).unwrap();
//!
//! let outcome = engine.submit_word("silk");
//! assert!(outcome.is_accepted());
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod engine;

// Dictionary lookup
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
