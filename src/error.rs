//! Error types for path resolution and validation

use crate::classify::{FailureKind, IoFailureKind};
use thiserror::Error;

/// The error type for path operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A required path argument was not supplied
    #[error("Path argument is missing")]
    MissingArgument,

    /// Access to the path was refused
    #[error("Access denied: {path}")]
    PermissionDenied { path: String },

    /// The path format is not supported on this host
    #[error("Unsupported path: {path} ({message})")]
    Unsupported { path: String, message: String },

    /// The path could not be interpreted
    #[error("Invalid path argument {path:?}: {message}")]
    InvalidArgument { path: String, message: String },

    /// A security policy refused access to the path
    #[error("Security policy denied access: {path}")]
    SecurityDenied { path: String },

    /// Filesystem I/O failure
    #[error("I/O error ({kind}) for {path}: {message}")]
    Io {
        kind: IoFailureKind,
        path: String,
        message: String,
    },

    /// A character that may never appear in a path
    #[error("Invalid character {character:?} in path {path:?}")]
    InvalidPathCharacter { path: String, character: char },

    /// A character that may not appear in the final path component
    #[error("Invalid character {character:?} in file name {file_name:?} of path {path:?}")]
    InvalidFileNameCharacter {
        path: String,
        file_name: String,
        character: char,
    },

    /// Failure outside the path subsystem
    #[error("{message}")]
    Other { message: String },
}

impl PathError {
    /// Classify this error
    pub fn kind(&self) -> FailureKind {
        match self {
            PathError::MissingArgument => FailureKind::ArgumentMissing,
            PathError::PermissionDenied { .. } => FailureKind::PermissionDenied,
            PathError::Unsupported { .. } => FailureKind::Unsupported,
            PathError::InvalidArgument { .. }
            | PathError::InvalidPathCharacter { .. }
            | PathError::InvalidFileNameCharacter { .. } => FailureKind::InvalidArgument,
            PathError::SecurityDenied { .. } => FailureKind::SecurityDenied,
            PathError::Io { kind, .. } => FailureKind::Io(*kind),
            PathError::Other { .. } => FailureKind::Other,
        }
    }

    /// Build an error from an I/O error raised while handling `path`
    pub fn from_io(err: &std::io::Error, path: &str) -> Self {
        let message = err.to_string();
        match FailureKind::from(err) {
            FailureKind::PermissionDenied => PathError::PermissionDenied {
                path: path.to_string(),
            },
            FailureKind::Unsupported => PathError::Unsupported {
                path: path.to_string(),
                message,
            },
            FailureKind::InvalidArgument => PathError::InvalidArgument {
                path: path.to_string(),
                message,
            },
            FailureKind::Io(kind) => PathError::Io {
                kind,
                path: path.to_string(),
                message,
            },
            FailureKind::SecurityDenied => PathError::SecurityDenied {
                path: path.to_string(),
            },
            FailureKind::ArgumentMissing => PathError::MissingArgument,
            FailureKind::Other => PathError::Other { message },
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::from_io(&err, "")
    }
}

/// Result type for path operations
pub type Result<T> = std::result::Result<T, PathError>;
