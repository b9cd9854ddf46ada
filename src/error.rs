//! Error types for gwm's context and discovery engines.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the gwm [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`], used by the CLI to pick a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty path or target, malformed `project/branch` identifier
    InputValidation,
    /// Unknown context, missing workspace
    NotFound,
    /// A git or filesystem capability failed for one path
    CapabilityFailure,
    /// Too many discovery candidates failed
    AggregateFailure,
    /// The operation was cancelled before it finished
    Cancelled,
}

#[derive(Debug, Error)]
pub enum Error {
    /// A required input was empty or otherwise unusable
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A cross-project identifier was not of the form `project/branch`
    #[error("invalid target '{target}': expected the form project/branch")]
    InvalidTargetFormat { target: String },

    /// The context kind has no resolution rule
    #[error("unknown context: cannot resolve '{target}'")]
    UnknownContext { target: String },

    /// The workspace directory does not exist
    #[error("workspace not found: {}", .0.display())]
    WorkspaceNotFound(PathBuf),

    /// The git capability failed for a specific path
    #[error("git failed for {}: {source:#}", path.display())]
    Capability {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Filesystem error outside the git capability
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// At least half of the discovery candidates failed
    #[error("discovery failed for {failed} of {total} worktrees (e.g. {sample})")]
    TooManyFailures {
        failed: usize,
        total: usize,
        sample: String,
    },

    /// Discovery was cancelled
    #[error("discovery cancelled")]
    Cancelled,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) | Error::InvalidTargetFormat { .. } => {
                ErrorKind::InputValidation
            }
            Error::UnknownContext { .. } | Error::WorkspaceNotFound(_) => ErrorKind::NotFound,
            Error::Capability { .. } | Error::Io { .. } => ErrorKind::CapabilityFailure,
            Error::TooManyFailures { .. } => ErrorKind::AggregateFailure,
            Error::Cancelled => ErrorKind::Cancelled,
        }
    }

    pub(crate) fn capability(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Error::Capability {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
