//! Game engine
//!
//! Session lifecycle and the submission rule chain.

mod config;
mod game;

pub use config::{CorpusFallback, EngineConfig};
pub use game::{CorpusError, GameEngine};
