pub mod board;
pub mod config;
mod selection;

// Re-export common types
pub use board::{Board, Cell, Game, Vector2D};
pub use config::{
    Direction, PartialConfig, PartialWordsConfig, WordsConfig, WordsearchConfig,
};

use rand::Rng;
use tracing::info;

use crate::error::Result;

/// Word-search game generator.
///
/// Holds a resolved configuration and produces games from it. Configuration
/// is treated as a value: overrides are merged onto the defaults into a new
/// config, and generation borrows the selector immutably, so a shared
/// selector can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Wordsearch {
    config: WordsearchConfig,
}

impl Wordsearch {
    /// A selector with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selector with `partial` merged onto the defaults.
    pub fn with_config(partial: &PartialConfig) -> Self {
        Self {
            config: WordsearchConfig::merged(partial),
        }
    }

    /// Replaces the configuration with `partial` merged onto the defaults.
    pub fn set_config(&mut self, partial: &PartialConfig) {
        self.config = WordsearchConfig::merged(partial);
    }

    pub fn config(&self) -> &WordsearchConfig {
        &self.config
    }

    /// Generates a game from the stored configuration.
    pub fn generate(&self) -> Result<Game> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generates a game from `partial` merged onto the defaults, without
    /// touching the stored configuration.
    pub fn generate_with(&self, partial: &PartialConfig) -> Result<Game> {
        generate_from(&WordsearchConfig::merged(partial), &mut rand::thread_rng())
    }

    /// Like [`Wordsearch::generate`] with a caller-supplied rng, so results
    /// can be made deterministic.
    pub fn generate_with_rng(&self, rng: &mut impl Rng) -> Result<Game> {
        generate_from(&self.config, rng)
    }
}

fn generate_from(config: &WordsearchConfig, rng: &mut impl Rng) -> Result<Game> {
    config.validate()?;

    let words = selection::select_words(&config.words_config, rng)?;

    info!(
        "Generated game with {} words for a {}x{} board",
        words.len(),
        config.size,
        config.size
    );

    // Placement is not implemented; the grid stays empty
    Ok(Game {
        board: Vec::new(),
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_with_default_config() {
        let game = Wordsearch::new().generate().unwrap();

        assert!(game.board.is_empty());
        assert_eq!(game.words.len(), 40);

        let unique: HashSet<&String> = game.words.iter().collect();
        assert_eq!(unique.len(), 40);
        assert!(game
            .words
            .iter()
            .all(|w| (2..=6).contains(&w.chars().count())));
    }

    #[test]
    fn test_generate_single_word_from_tiny_dictionary() {
        let partial = PartialConfig {
            size: Some(6),
            words_config: Some(PartialWordsConfig {
                amount: Some(1),
                min_length: Some(2),
                max_length: Some(6),
                dictionary: Some(vec!["ab".to_string(), "cd".to_string()]),
            }),
            ..Default::default()
        };

        let game = Wordsearch::with_config(&partial).generate().unwrap();
        assert_eq!(game.words.len(), 1);
        assert!(game.words[0] == "ab" || game.words[0] == "cd");
    }

    #[test]
    fn test_invalid_config_is_reported_with_message() {
        let partial = PartialConfig {
            size: Some(5),
            ..Default::default()
        };

        let err = Wordsearch::with_config(&partial).generate().unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigError::BoardSizeOutOfRange)
        ));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Board size must be between 6 and 50"
        );
    }

    #[test]
    fn test_exhausted_pool_is_a_generation_error() {
        // Valid configuration, but no dictionary word fits the length bounds
        let partial = PartialConfig {
            words_config: Some(PartialWordsConfig {
                amount: Some(1),
                min_length: Some(5),
                max_length: Some(6),
                dictionary: Some(vec!["ab".to_string(), "cd".to_string()]),
            }),
            ..Default::default()
        };

        let err = Wordsearch::with_config(&partial).generate().unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
        assert!(err.to_string().starts_with("Failed to create game: "));
    }

    #[test]
    fn test_generate_does_not_mutate_selector() {
        let selector = Wordsearch::new();
        let before = selector.config().clone();

        selector.generate().unwrap();
        let override_partial = PartialConfig {
            size: Some(10),
            ..Default::default()
        };
        selector.generate_with(&override_partial).unwrap();

        assert_eq!(*selector.config(), before);
    }

    #[test]
    fn test_generate_with_merges_onto_defaults() {
        // generate_with starts from the defaults, not from the stored config
        let mut selector = Wordsearch::new();
        selector.set_config(&PartialConfig {
            size: Some(12),
            ..Default::default()
        });
        assert_eq!(selector.config().size, 12);

        let game = selector
            .generate_with(&PartialConfig::default())
            .unwrap();
        // Default amount, not something inherited from the stored override
        assert_eq!(game.words.len(), 40);
    }

    #[test]
    fn test_generate_with_rng_is_deterministic() {
        let selector = Wordsearch::new();

        let first = selector
            .generate_with_rng(&mut StdRng::seed_from_u64(99))
            .unwrap();
        let second = selector
            .generate_with_rng(&mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(first.words, second.words);
    }
}
