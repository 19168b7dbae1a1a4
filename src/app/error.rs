use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OctavoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to write storage slot {path}: {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, OctavoError>;
