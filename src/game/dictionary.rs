//! Dictionary module for word validation
//!
//! Validation only ever asks one question of a dictionary: is this word
//! misspelled? That question is the [`SpellChecker`] trait, so the game can
//! run against the embedded English word list or against a fake in tests.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::warn;

/// Language tag understood by [`EmbeddedDictionary`].
pub const ENGLISH: &str = "en";

/// Embedded wordlist (SCOWL-derived American English, ~86K words).
/// Words are lowercase, alphabetic only, one per line.
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Pre-built hash set for O(1) word lookup
static DICTIONARY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    WORDS_DATA
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

/// Spell-check capability consulted as the last validation step.
pub trait SpellChecker {
    /// Returns true if `word` is not a recognized word in `language`.
    fn is_misspelled(&self, word: &str, language: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        (**self).is_misspelled(word, language)
    }
}

/// English dictionary compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDictionary;

impl EmbeddedDictionary {
    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        DICTIONARY.contains(lower.as_str())
    }

    /// Returns the total number of words in the dictionary
    #[cfg(test)]
    pub fn word_count(&self) -> usize {
        DICTIONARY.len()
    }
}

impl SpellChecker for EmbeddedDictionary {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        if language != ENGLISH {
            warn!(language, "no dictionary for language, rejecting word");
            return true;
        }
        !self.contains(word)
    }
}

/// Dictionary with a fixed vocabulary, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakeDictionary {
    known: HashSet<String>,
}

#[cfg(test)]
impl FakeDictionary {
    pub fn with_words(words: &[&str]) -> Self {
        Self {
            known: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl SpellChecker for FakeDictionary {
    fn is_misspelled(&self, word: &str, _language: &str) -> bool {
        !self.known.contains(word)
    }
}

/// Dictionary that knows every word.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveDictionary;

#[cfg(test)]
impl SpellChecker for PermissiveDictionary {
    fn is_misspelled(&self, _word: &str, _language: &str) -> bool {
        false
    }
}
