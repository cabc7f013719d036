//! Root-word list
//!
//! The list is read once at startup. Each round picks one entry at random;
//! the list itself is never re-read.

use crate::error::StartupError;
use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Root word used when the list has no usable entries.
pub const FALLBACK_ROOT_WORD: &str = "airplane";

/// Bundled list, one root word per line.
static START_DATA: &str = include_str!("../../data/start.txt");

static BUNDLED: Lazy<WordList> = Lazy::new(|| WordList::parse(START_DATA));

/// A list of candidate root words.
///
/// Cloning is cheap: the entries are shared.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Arc<[String]>,
}

impl WordList {
    /// The list compiled into the binary.
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }

    /// Read a newline-separated list from disk.
    ///
    /// A file that cannot be read is fatal. A file that is readable but has
    /// no entries is not: rounds then use [`FALLBACK_ROOT_WORD`].
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| StartupError::WordListUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let list = Self::parse(&content);
        info!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Parse list text. Entries are trimmed and lowercased; blank lines are
    /// skipped.
    pub fn parse(text: &str) -> Self {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self {
            words: words.into(),
        }
    }

    /// Pick a random entry, if there is one.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// Pick a root word, falling back to [`FALLBACK_ROOT_WORD`].
    pub fn pick_root<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.choose(rng).unwrap_or(FALLBACK_ROOT_WORD).to_string()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
