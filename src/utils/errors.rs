use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the seek bar crate.
///
/// Pointer input never produces an error (it is clamped); these cover the
/// configuration layer and the sampling timer thread.
#[derive(Debug, Error)]
pub enum SeekBarError {
    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to create sampling runtime: {0}")]
    Runtime(String),

    #[error("failed to spawn sampling thread: {0}")]
    Thread(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeekBarError>;
