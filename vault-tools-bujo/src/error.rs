use std::path::PathBuf;

use thiserror::Error;
use vault_tools_config::ConfigError;
use vault_tools_core::{ClockError, FormatError};

#[derive(Debug, Error)]
pub enum BujoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot format note name: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} already exists (use --force to replace it)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Invalid week '{0}', expected YYYY-WW")]
    InvalidWeek(String),

    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}
