use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// A required key is absent or holds a value of the wrong type.
    #[error("Invalid config field: {0}")]
    Field(#[source] serde_json::Error),

    #[error("Value is not JSON serializable: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Dataset has {inputs} input files but {targets} target files")]
    UnpairedDataset { inputs: usize, targets: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
