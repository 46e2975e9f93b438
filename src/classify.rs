//! Failure classification
//!
//! Decides which failures count as expected I/O noise during best-effort path
//! resolution. The taxonomy is closed.

use crate::error::PathError;
use std::fmt;
use std::io;

/// Kind of failure raised while resolving or validating a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Access to the path was refused by the operating system
    PermissionDenied,
    /// The path format or operation is not supported on this host
    Unsupported,
    /// The path argument was present but malformed
    InvalidArgument,
    /// A security or sandbox policy refused access
    SecurityDenied,
    /// A member of the filesystem I/O family
    Io(IoFailureKind),
    /// A required argument was not supplied. Always a caller defect.
    ArgumentMissing,
    /// Anything outside the taxonomy above
    Other,
}

/// Members of the filesystem I/O failure family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoFailureKind {
    NotFound,
    DriveNotFound,
    EndOfStream,
    LoadFailure,
    NameTooLong,
    BrokenPipe,
    Generic,
}

impl FailureKind {
    /// Whether a failure of this kind may be swallowed by a best-effort fallback.
    ///
    /// `ArgumentMissing` is never I/O related, unlike `InvalidArgument`.
    pub const fn is_io_related(self) -> bool {
        match self {
            FailureKind::PermissionDenied
            | FailureKind::Unsupported
            | FailureKind::InvalidArgument
            | FailureKind::SecurityDenied
            | FailureKind::Io(_) => true,
            FailureKind::ArgumentMissing | FailureKind::Other => false,
        }
    }
}

impl From<io::ErrorKind> for FailureKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => FailureKind::Io(IoFailureKind::NotFound),
            io::ErrorKind::PermissionDenied => FailureKind::PermissionDenied,
            io::ErrorKind::Unsupported => FailureKind::Unsupported,
            io::ErrorKind::InvalidInput => FailureKind::InvalidArgument,
            io::ErrorKind::UnexpectedEof => FailureKind::Io(IoFailureKind::EndOfStream),
            io::ErrorKind::BrokenPipe => FailureKind::Io(IoFailureKind::BrokenPipe),
            io::ErrorKind::OutOfMemory => FailureKind::Other,
            _ => FailureKind::Io(IoFailureKind::Generic),
        }
    }
}

impl From<&io::Error> for FailureKind {
    fn from(err: &io::Error) -> Self {
        FailureKind::from(err.kind())
    }
}

impl fmt::Display for IoFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IoFailureKind::NotFound => "not found",
            IoFailureKind::DriveNotFound => "drive not found",
            IoFailureKind::EndOfStream => "end of stream",
            IoFailureKind::LoadFailure => "load failure",
            IoFailureKind::NameTooLong => "name too long",
            IoFailureKind::BrokenPipe => "broken pipe",
            IoFailureKind::Generic => "i/o failure",
        };
        f.write_str(name)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::PermissionDenied => f.write_str("permission denied"),
            FailureKind::Unsupported => f.write_str("unsupported"),
            FailureKind::InvalidArgument => f.write_str("invalid argument"),
            FailureKind::SecurityDenied => f.write_str("security denied"),
            FailureKind::Io(kind) => fmt::Display::fmt(kind, f),
            FailureKind::ArgumentMissing => f.write_str("argument missing"),
            FailureKind::Other => f.write_str("other"),
        }
    }
}

/// Check whether a failure belongs to the I/O-related category
///
/// Used by [`normalize_no_throw`](crate::normalize_no_throw) to decide between
/// falling back to the raw input and propagating the error.
///
/// # Examples
/// ```
/// use sln_path_utils::{is_io_related, PathError};
///
/// assert!(is_io_related(&PathError::PermissionDenied { path: "/root".into() }));
/// assert!(!is_io_related(&PathError::MissingArgument));
/// ```
pub fn is_io_related(failure: &PathError) -> bool {
    failure.kind().is_io_related()
}
