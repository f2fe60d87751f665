//! Error types for czmono modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from workspace package discovery.
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Failed to read manifest {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("Invalid workspace pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to walk workspace directory: {0}")]
    WalkFailed(#[source] walkdir::Error),
}

/// Errors from querying the staged change set.
#[derive(Error, Debug)]
pub enum ChangeQueryError {
    #[error("Bare repository has no working tree")]
    BareRepository,

    #[error("Failed to diff HEAD against the index: {0}")]
    DiffFailed(#[source] git2::Error),
}

/// Why a subject answer was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    #[error("subject is required")]
    Required,

    #[error(
        "Subject length must be less than or equal to {max} characters. Current length is {len} characters."
    )]
    TooLong { max: usize, len: usize },
}

/// Errors from the interactive prompt engine.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt interaction failed: {0}")]
    Interaction(#[from] dialoguer::Error),

    #[error("Prompt was cancelled")]
    Cancelled,

    #[error("No commit type was selected")]
    MissingType,
}

/// Errors from writing the commit.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Nothing is staged for commit")]
    NothingStaged,

    #[error("Failed to read the index: {0}")]
    IndexFailed(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),

    #[error("Failed to write commit message to {path}: {source}")]
    WriteMessageFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
