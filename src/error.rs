use std::path::PathBuf;
use thiserror::Error;

/// Preconditions reported by the checked `try_*` operations on a drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a stroke is already in progress")]
    StrokeInProgress,

    #[error("no stroke is in progress")]
    NoStrokeInProgress,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

/// Errors that can occur while loading the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
