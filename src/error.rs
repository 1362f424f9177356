use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Primary error type for the wordsearch crate
#[derive(Error, Debug, Diagnostic)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(wordsearch::invalid_configuration))]
    Configuration(#[from] ConfigError),

    #[error("Failed to create game: {0}")]
    #[diagnostic(code(wordsearch::generation_failed))]
    Generation(#[from] GenerationError),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(wordsearch::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(wordsearch::environment_error))]
    Environment(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(wordsearch::io_error))]
    Io(#[from] io::Error),
}

/// Configuration validation errors, one per rule.
///
/// The display messages are the ones shown to players when a game cannot be
/// created from their settings, so they stay short and plain.
#[derive(Error, Debug, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be between 6 and 50")]
    #[diagnostic(code(wordsearch::config::board_size))]
    BoardSizeOutOfRange,

    #[error("Amount of words must be between 1 and 50.")]
    #[diagnostic(code(wordsearch::config::word_amount))]
    WordAmountOutOfRange,

    #[error("Word min length must be less than board size.")]
    #[diagnostic(code(wordsearch::config::min_length))]
    MinLengthExceedsBoard,

    #[error("Word max length should not be more than board size.")]
    #[diagnostic(code(wordsearch::config::max_length))]
    MaxLengthExceedsBoard,

    #[error("Amount of words cannot be greater than available ones.")]
    #[diagnostic(code(wordsearch::config::not_enough_words))]
    NotEnoughWords,

    #[error("dictionary is empty")]
    #[diagnostic(code(wordsearch::config::empty_dictionary))]
    EmptyDictionary,

    #[error("At least one direction must be specified")]
    #[diagnostic(code(wordsearch::config::no_directions))]
    NoDirections,
}

/// Word selection errors
#[derive(Error, Debug, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error(
        "dictionary has {available} unique words of length {min_length}-{max_length}, \
         but {requested} were requested"
    )]
    #[diagnostic(code(wordsearch::generate::not_enough_candidates))]
    NotEnoughCandidates {
        available: usize,
        requested: usize,
        min_length: usize,
        max_length: usize,
    },
}

/// Dictionary loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to load dictionary file: {0}")]
    #[diagnostic(code(wordsearch::dictionary::load_error))]
    LoadError(#[from] io::Error),

    #[error("Dictionary file format error: {0}")]
    #[diagnostic(code(wordsearch::dictionary::format_error))]
    FormatError(String),

    #[error("Dictionary is empty")]
    #[diagnostic(code(wordsearch::dictionary::empty))]
    EmptyDictionary,
}

// Re-export error types for convenience
pub use GameError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
