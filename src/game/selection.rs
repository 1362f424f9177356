use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::error::GenerationError;

use super::config::WordsConfig;

/// Picks `amount` unique words from the dictionary, each with a character
/// count inside the configured length bounds.
///
/// The dictionary is filtered once to the qualifying candidates (duplicates
/// collapsed) and the result is sampled without replacement, so selection
/// always terminates: a pool with too few qualifying words is an error, not
/// a spin.
pub fn select_words(
    words_config: &WordsConfig,
    rng: &mut impl Rng,
) -> Result<Vec<String>, GenerationError> {
    let min_length = words_config.min_length;
    let max_length = words_config.max_length;

    let mut seen = HashSet::new();
    let candidates: Vec<&str> = words_config
        .dictionary
        .iter()
        .map(String::as_str)
        .filter(|word| {
            let len = word.chars().count();
            len >= min_length && len <= max_length
        })
        .filter(|word| seen.insert(*word))
        .collect();

    debug!(
        "{} of {} dictionary words qualify for length {}-{}",
        candidates.len(),
        words_config.dictionary.len(),
        min_length,
        max_length
    );

    if candidates.len() < words_config.amount {
        return Err(GenerationError::NotEnoughCandidates {
            available: candidates.len(),
            requested: words_config.amount,
            min_length,
            max_length,
        });
    }

    let words: Vec<String> = candidates
        .choose_multiple(rng, words_config.amount)
        .map(|word| (*word).to_string())
        .collect();

    info!("Selected {} words: {:?}", words.len(), words);

    Ok(words)
}
