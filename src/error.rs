//! Error types for startup and configuration
//!
//! Rejected submissions are not errors: they are reported through
//! [`crate::game::validation::ValidationOutcome`]. The types here cover the
//! conditions that stop the game from starting at all.

use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable failure while preparing a game session.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The root-word list could not be read. The game has no other source of
    /// root words, so the session must not start.
    #[error("failed to load word list from {}", path.display())]
    WordListUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    EmptyPath { var: &'static str },
}
