use std::path::PathBuf;

use thiserror::Error;
use vault_tools_core::FormatError;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("JSON parse error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A setting the current command depends on is absent.
    #[error("{0} must be set in the configuration file.")]
    MissingKey(&'static str),

    /// A configured directory does not exist on disk.
    #[error("{key} points to {}, which does not exist", path.display())]
    DirNotFound { key: &'static str, path: PathBuf },

    /// A required Obsidian core plugin is not enabled in the vault.
    #[error("The Obsidian \"{0}\" core plugin must be enabled in the vault.")]
    PluginNotFound(String),

    /// A configured format pattern cannot be rendered.
    #[error("{key} is not a usable format pattern: {source}")]
    InvalidFormat {
        key: &'static str,
        source: FormatError,
    },

    #[error("Could not determine the configuration file location")]
    NoConfigPath,
}
