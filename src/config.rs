//! Runtime configuration read from the environment
//!
//! Every setting is optional. A `.env` file in the working directory is
//! honoured before the process environment is consulted.

use crate::error::ConfigError;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Path to a newline-separated root-word list. Unset means the bundled list.
pub const WORD_LIST_VAR: &str = "WORD_SCRAMBLE_WORD_LIST";
/// Fixed seed for root-word selection.
pub const SEED_VAR: &str = "WORD_SCRAMBLE_SEED";
/// Where tracing output is written.
pub const LOG_FILE_VAR: &str = "WORD_SCRAMBLE_LOG_FILE";

const LOG_FILE_NAME: &str = "word-scramble.log";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub word_list_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let word_list_path = path_setting(&lookup, WORD_LIST_VAR)?;
        let log_file = path_setting(&lookup, LOG_FILE_VAR)?;

        let seed = match lookup(SEED_VAR) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed {
                var: SEED_VAR,
                value: raw,
            })?),
            None => None,
        };

        Ok(Config {
            word_list_path,
            seed,
            log_file,
        })
    }

    /// Resolve the log file location.
    ///
    /// Falls back to the OS data directory (via `directories`), then to the
    /// working directory if no home directory can be determined.
    pub fn log_file_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        match ProjectDirs::from("", "", "word-scramble") {
            Some(dirs) => {
                let data_dir = dirs.data_dir();
                match std::fs::create_dir_all(data_dir) {
                    Ok(()) => data_dir.join(LOG_FILE_NAME),
                    Err(_) => PathBuf::from(LOG_FILE_NAME),
                }
            }
            None => PathBuf::from(LOG_FILE_NAME),
        }
    }
}

fn path_setting<F>(lookup: &F, var: &'static str) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::EmptyPath { var }),
        Some(raw) => Ok(Some(PathBuf::from(raw))),
        None => Ok(None),
    }
}
