pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;

// Re-export error types for convenience
pub use error::{ConfigError, DictionaryError, Error, GenerationError, Result};

// Core game types used across the application
pub use game::{Direction, Game, PartialConfig, Wordsearch, WordsearchConfig};
