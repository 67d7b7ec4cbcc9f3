//! Error types
//!
//! Invalid mode transitions are not errors (they are ignored), so everything
//! here is about configuration and the player data document.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read player data at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("player data at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },
    #[error("failed to serialize player data: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write player data at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidTotalLevels { var: &'static str, value: String },
    #[error("could not resolve a data directory for player data; set {var} explicitly")]
    NoDataDir { var: &'static str },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
