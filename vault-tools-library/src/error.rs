use std::path::PathBuf;

use thiserror::Error;

/// Two records could not be merged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("Cannot merge a {secondary} record into a {primary} record")]
    IncompatibleTypes {
        primary: String,
        secondary: String,
    },
}

/// A note's YAML header could not be read.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("Front matter is not terminated by a closing '---' line")]
    Unterminated,

    #[error("Invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Front matter must be a mapping")]
    NotAMapping,
}

/// Errors raised while rendering or writing a note.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not serialize front matter: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Could not serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
}
