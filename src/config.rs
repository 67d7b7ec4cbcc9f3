//! Runtime configuration
//!
//! Resolved once by the composition root and handed to
//! [`SessionController::init`](crate::SessionController::init).

use std::env;
use std::path::PathBuf;

use crate::consts::{APP_DIR_NAME, DEFAULT_TOTAL_LEVELS, SAVE_FILE_NAME};
use crate::error::ConfigError;

/// Directory holding the player data document
pub const DATA_DIR_ENV_VAR: &str = "ARCADE_SESSION_DATA_DIR";
/// Number of levels in the game
pub const TOTAL_LEVELS_ENV_VAR: &str = "ARCADE_SESSION_TOTAL_LEVELS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Highest level number; levels are numbered 1..=total_levels
    pub total_levels: u32,
    /// Full path of the player data document
    pub save_path: PathBuf,
}

impl SessionConfig {
    pub fn new(total_levels: u32, save_path: impl Into<PathBuf>) -> Self {
        Self {
            total_levels,
            save_path: save_path.into(),
        }
    }

    /// Build from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, tests, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let total_levels = match lookup(TOTAL_LEVELS_ENV_VAR) {
            Some(raw) => parse_total_levels(&raw)?,
            None => DEFAULT_TOTAL_LEVELS,
        };

        let data_dir = match lookup(DATA_DIR_ENV_VAR).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => PathBuf::from(raw.trim()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(ConfigError::NoDataDir {
                    var: DATA_DIR_ENV_VAR,
                })?,
        };

        Ok(Self {
            total_levels,
            save_path: data_dir.join(SAVE_FILE_NAME),
        })
    }
}

fn parse_total_levels(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(ConfigError::InvalidTotalLevels {
            var: TOTAL_LEVELS_ENV_VAR,
            value: raw.to_string(),
        }),
    }
}
