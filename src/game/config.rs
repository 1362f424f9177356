use serde::{Deserialize, Serialize};

use crate::dictionary;
use crate::error::ConfigError;

/// Bounds enforced by [`WordsearchConfig::validate`].
pub const MIN_BOARD_SIZE: usize = 6;
pub const MAX_BOARD_SIZE: usize = 50;
pub const MIN_WORD_AMOUNT: usize = 1;
pub const MAX_WORD_AMOUNT: usize = 50;

/// Compass direction a word may run along on the board.
///
/// Accepted by the configuration so that settings round-trip, but no
/// placement logic consumes these yet (see [`crate::game::board`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    /// Parses a direction from its serialized name, e.g. `DOWN_RIGHT`.
    /// Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "UP" => Some(Self::Up),
            "DOWN" => Some(Self::Down),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "UP_RIGHT" => Some(Self::UpRight),
            "UP_LEFT" => Some(Self::UpLeft),
            "DOWN_RIGHT" => Some(Self::DownRight),
            "DOWN_LEFT" => Some(Self::DownLeft),
            _ => None,
        }
    }
}

/// Word selection policy: how many words to pick, their length bounds, and
/// the candidate pool to pick them from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsConfig {
    pub amount: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub dictionary: Vec<String>,
}

/// Full game configuration. Obtain one by merging a [`PartialConfig`] onto
/// the defaults with [`WordsearchConfig::merged`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsearchConfig {
    pub size: usize,
    pub words_config: WordsConfig,
    pub allowed_directions: Vec<Direction>,
}

impl Default for WordsearchConfig {
    fn default() -> Self {
        Self {
            size: 8,
            words_config: WordsConfig {
                amount: 40,
                min_length: 2,
                max_length: 6,
                dictionary: dictionary::default_words().to_vec(),
            },
            allowed_directions: vec![Direction::Down, Direction::Right, Direction::DownRight],
        }
    }
}

impl WordsearchConfig {
    /// Defaults with `partial` applied on top. Configuration is a value;
    /// merging never touches shared state.
    pub fn merged(partial: &PartialConfig) -> Self {
        Self::default().merge(partial)
    }

    /// Applies a partial override field by field. Array-valued fields
    /// (dictionary, allowed directions) are replaced wholesale when present,
    /// never concatenated.
    pub fn merge(mut self, partial: &PartialConfig) -> Self {
        if let Some(size) = partial.size {
            self.size = size;
        }
        if let Some(words) = &partial.words_config {
            if let Some(amount) = words.amount {
                self.words_config.amount = amount;
            }
            if let Some(min_length) = words.min_length {
                self.words_config.min_length = min_length;
            }
            if let Some(max_length) = words.max_length {
                self.words_config.max_length = max_length;
            }
            if let Some(dictionary) = &words.dictionary {
                self.words_config.dictionary = dictionary.clone();
            }
        }
        if let Some(directions) = &partial.allowed_directions {
            self.allowed_directions = directions.clone();
        }
        self
    }

    /// Checks the configuration rules in a fixed order and reports the first
    /// violation. A `min_length` above `max_length` is accepted here; it
    /// surfaces during selection as a not-enough-candidates error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE || self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSizeOutOfRange);
        }

        let wc = &self.words_config;
        if wc.amount < MIN_WORD_AMOUNT || wc.amount > MAX_WORD_AMOUNT {
            return Err(ConfigError::WordAmountOutOfRange);
        }

        if wc.min_length > self.size {
            return Err(ConfigError::MinLengthExceedsBoard);
        }

        if wc.max_length > self.size {
            return Err(ConfigError::MaxLengthExceedsBoard);
        }

        if wc.dictionary.len() < wc.amount {
            return Err(ConfigError::NotEnoughWords);
        }

        if wc.dictionary.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }

        if self.allowed_directions.is_empty() {
            return Err(ConfigError::NoDirections);
        }

        Ok(())
    }
}

/// Partial configuration override. Deserializes from the same camelCase
/// shape as [`WordsearchConfig`], with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialConfig {
    pub size: Option<usize>,
    pub words_config: Option<PartialWordsConfig>,
    pub allowed_directions: Option<Vec<Direction>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialWordsConfig {
    pub amount: Option<usize>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub dictionary: Option<Vec<String>>,
}
