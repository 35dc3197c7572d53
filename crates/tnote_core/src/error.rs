//! Notebook error taxonomy.
//!
//! # Responsibility
//! - Classify failures into the three propagation tiers used by callers.
//! - Keep the underlying `io::Error` reachable through `Error::source`.
//!
//! # Invariants
//! - Only `ErrorKind::SetupFailed` is fatal for a CLI invocation.
//! - Messages are user-facing and never include note content.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub type NotebookResult<T> = Result<T, NotebookError>;

/// File operation that failed while handling one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOp {
    Create,
    Write,
    Delete,
}

impl NoteOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "creating",
            Self::Write => "writing",
            Self::Delete => "deleting",
        }
    }
}

/// Coarse error classification used for exit codes and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SetupFailed,
    InvalidArgument,
    NotFound,
    IoFailure,
}

impl ErrorKind {
    /// Stable code used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SetupFailed => "setup_failed",
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::IoFailure => "io_failure",
        }
    }
}

#[derive(Debug)]
pub enum NotebookError {
    /// Storage directory could not be created.
    SetupFailed { path: PathBuf, source: io::Error },
    /// Caller input rejected before touching storage.
    InvalidArgument(String),
    /// Storage directory is missing or unreadable.
    NotFound { path: PathBuf },
    /// One note operation failed; the process may continue.
    Io {
        op: NoteOp,
        path: PathBuf,
        source: io::Error,
    },
}

impl NotebookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SetupFailed { .. } => ErrorKind::SetupFailed,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io { .. } => ErrorKind::IoFailure,
        }
    }
}

impl Display for NotebookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetupFailed { source, .. } => write!(f, "Error creating notes dir: {source}"),
            Self::InvalidArgument(message) => write!(f, "{message}"),
            Self::NotFound { path } => write!(f, "No notes found (dir: {})", path.display()),
            Self::Io { op, source, .. } => write!(f, "Error {} note: {source}", op.as_str()),
        }
    }
}

impl Error for NotebookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SetupFailed { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InvalidArgument(_) | Self::NotFound { .. } => None,
        }
    }
}
