use dotenvy::dotenv;
use miette::IntoDiagnostic;
use std::env;
use tracing::info;

use crate::dictionary;
use crate::game::{Direction, PartialConfig, PartialWordsConfig};
use crate::Error;

/// Overrides gathered from the environment. Every variable is optional; an
/// unset variable leaves the corresponding game default in place.
pub struct AppConfig {
    pub board_size: Option<usize>,
    pub word_amount: Option<usize>,
    pub min_word_length: Option<usize>,
    pub max_word_length: Option<usize>,
    pub dictionary_path: Option<String>,
    pub allowed_directions: Option<Vec<Direction>>,
}

pub fn load_config() -> miette::Result<AppConfig> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    let board_size = optional_usize("BOARD_SIZE")?;
    let word_amount = optional_usize("WORD_AMOUNT")?;
    let min_word_length = optional_usize("MIN_WORD_LENGTH")?;
    let max_word_length = optional_usize("MAX_WORD_LENGTH")?;

    let dictionary_path = env::var("DICTIONARY_FILE_PATH").ok();

    let allowed_directions = match env::var("ALLOWED_DIRECTIONS") {
        Ok(raw) => Some(parse_directions(&raw)?),
        Err(_) => None,
    };

    Ok(AppConfig {
        board_size,
        word_amount,
        min_word_length,
        max_word_length,
        dictionary_path,
        allowed_directions,
    })
}

fn optional_usize(name: &str) -> miette::Result<Option<usize>> {
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .parse::<usize>()
                .into_diagnostic()
                .map_err(|_| Error::Environment(format!("Invalid {}", name)))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

fn parse_directions(raw: &str) -> miette::Result<Vec<Direction>> {
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            Direction::from_name(part).ok_or_else(|| {
                Error::Environment(format!("Invalid direction '{}' in ALLOWED_DIRECTIONS", part))
                    .into()
            })
        })
        .collect()
}

impl AppConfig {
    /// Resolves the environment overrides into a partial game configuration,
    /// loading the dictionary file when one is set. A `.json` path is parsed
    /// as a JSON word array, anything else as newline-delimited text.
    pub fn to_partial(&self) -> crate::Result<PartialConfig> {
        let dictionary = match &self.dictionary_path {
            Some(path) => Some(if path.ends_with(".json") {
                dictionary::load_json_file(path)?
            } else {
                dictionary::load_words_file(path)?
            }),
            None => None,
        };

        let words_config = PartialWordsConfig {
            amount: self.word_amount,
            min_length: self.min_word_length,
            max_length: self.max_word_length,
            dictionary,
        };

        Ok(PartialConfig {
            size: self.board_size,
            words_config: (words_config != PartialWordsConfig::default()).then_some(words_config),
            allowed_directions: self.allowed_directions.clone(),
        })
    }
}
