use std::path::PathBuf;

use thiserror::Error;
use vault_tools_bujo::BujoError;
use vault_tools_config::ConfigError;
use vault_tools_core::FormatError;
use vault_tools_library::{MergeError, NoteError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Configuration missing or invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Bullet-journal log could not be built or written
    #[error("{0}")]
    Bujo(#[from] BujoError),

    /// Pattern could not be rendered
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Records could not be merged
    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    /// Library note could not be rendered or written
    #[error("Note error: {0}")]
    Note(#[from] NoteError),

    /// Record file is not valid JSON or not a record
    #[error("Invalid record in {}: {source}", path.display())]
    Record {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn record(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Record {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
