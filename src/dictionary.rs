use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, Read};
use std::path::Path;
use tracing::info;

use crate::error::{DictionaryError, Result};

// Bundled English word list, ordered roughly by frequency. The tiers are
// concatenated in order and deduplicated, so the most common words come first.
const TIERS: [&str; 6] = [
    include_str!("../data/english/10.txt"),
    include_str!("../data/english/20.txt"),
    include_str!("../data/english/30.txt"),
    include_str!("../data/english/40.txt"),
    include_str!("../data/english/50.txt"),
    include_str!("../data/english/60.txt"),
];

static DEFAULT_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for tier in TIERS {
        for line in tier.lines() {
            let word = line.trim().to_lowercase();
            if !word.is_empty() && seen.insert(word.clone()) {
                words.push(word);
            }
        }
    }
    words
});

/// The default candidate pool used when no dictionary override is given.
pub fn default_words() -> &'static [String] {
    &DEFAULT_WORDS
}

/// Loads a newline-delimited dictionary file. Words are trimmed and
/// lowercased, blank lines are skipped.
pub fn load_words_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    info!("Loading dictionary from {}", path.display());

    let file = File::open(path).map_err(DictionaryError::LoadError)?;
    let reader = io::BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(DictionaryError::LoadError)?;
        let word = line.trim().to_lowercase();
        if !word.is_empty() {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(DictionaryError::EmptyDictionary.into());
    }

    info!("Loaded {} words from dictionary", words.len());

    Ok(words)
}

/// Loads a dictionary from a JSON file holding an array of word strings,
/// the same shape the game's dictionary endpoint serves.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    info!("Loading JSON dictionary from {}", path.display());

    let mut file = File::open(path).map_err(DictionaryError::LoadError)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(DictionaryError::LoadError)?;

    let words = words_from_json(&contents)?;

    info!("Loaded {} words from dictionary", words.len());

    Ok(words)
}

/// Parses a JSON array of word strings into a normalized word list.
pub fn words_from_json(json: &str) -> Result<Vec<String>> {
    let raw: Vec<String> = serde_json::from_str(json)
        .map_err(|e| DictionaryError::FormatError(e.to_string()))?;

    let words: Vec<String> = raw
        .iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        return Err(DictionaryError::EmptyDictionary.into());
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_words() {
        let words = default_words();
        assert!(!words.is_empty());

        // Normalized and deduplicated
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
        assert!(words.iter().all(|w| *w == w.trim().to_lowercase()));

        // Enough short words to fill the default configuration (40 words of
        // length 2 to 6)
        let qualifying = words
            .iter()
            .filter(|w| (2..=6).contains(&w.chars().count()))
            .count();
        assert!(qualifying >= 40, "only {} qualifying words", qualifying);
    }

    #[test]
    fn test_load_words_file() -> std::io::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Apple")?;
        writeln!(file, "  banana  ")?;
        writeln!(file)?;
        writeln!(file, "CHERRY")?;

        let words = load_words_file(file.path()).unwrap();
        assert_eq!(words, vec!["apple", "banana", "cherry"]);

        Ok(())
    }

    #[test]
    fn test_empty_words_file() -> std::io::Result<()> {
        let file = NamedTempFile::new()?;

        let result = load_words_file(file.path());
        assert!(result.is_err());

        if let Err(e) = result {
            match e {
                crate::error::Error::Dictionary(DictionaryError::EmptyDictionary) => {}
                _ => panic!("Expected EmptyDictionary error"),
            }
        }

        Ok(())
    }

    #[test]
    fn test_missing_words_file() {
        let result = load_words_file("/nonexistent/words.txt");
        assert!(matches!(
            result,
            Err(crate::error::Error::Dictionary(DictionaryError::LoadError(_)))
        ));
    }

    #[test]
    fn test_load_json_file() -> std::io::Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"["Cat", "dog", " bird "]"#)?;

        let words = load_json_file(file.path()).unwrap();
        assert_eq!(words, vec!["cat", "dog", "bird"]);

        Ok(())
    }

    #[test]
    fn test_words_from_json_rejects_bad_payload() {
        assert!(matches!(
            words_from_json(r#"{"not": "an array"}"#),
            Err(crate::error::Error::Dictionary(DictionaryError::FormatError(_)))
        ));
        assert!(matches!(
            words_from_json("[]"),
            Err(crate::error::Error::Dictionary(DictionaryError::EmptyDictionary))
        ));
    }
}
