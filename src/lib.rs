//! # sln-path-utils
//!
//! Path safety helpers for reading solution (`.sln`) files.
//!
//! Solution files carry project paths written on whatever machine last saved
//! them: backslash separators, relative segments, and occasionally garbage.
//! This crate turns those strings into canonical absolute paths and rejects the
//! ones that contain characters no filesystem will accept.
//!
//! ## Features
//!
//! - **Normalization**: absolute paths with `.`/`..` collapsed and backslashes
//!   rewritten on POSIX hosts
//! - **No-throw fallback**: [`normalize_no_throw`] returns the raw input when
//!   resolution fails for I/O-related reasons, so diagnostics can always name a path
//! - **Validation**: fixed blacklists for whole paths and for file names
//! - **Failure classification**: a closed taxonomy deciding which errors are
//!   expected I/O noise
//!
//! ## Examples
//!
//! ### Validating project paths
//!
//! ```rust
//! use sln_path_utils::{file_name, is_path_invalid};
//!
//! assert!(!is_path_invalid("src\\App\\App.csproj"));
//! assert!(is_path_invalid("src/App/App?.csproj"));
//!
//! // `:` is fine in a directory but not in the file name
//! assert_eq!(file_name("a/b/foo:bar"), "foo:bar");
//! assert!(is_path_invalid("a/b/foo:bar"));
//! ```
//!
//! ### Normalizing for diagnostics
//!
//! ```rust
//! use sln_path_utils::{normalize_no_throw, PathError};
//!
//! let shown = normalize_no_throw("src/../src/App.csproj")?;
//! assert!(std::path::Path::new(&shown).is_absolute());
//!
//! // Unresolvable input comes back untouched
//! assert_eq!(normalize_no_throw("broken\0path")?, "broken\0path");
//! # Ok::<(), PathError>(())
//! ```

mod classify;
mod error;
mod normalize;
mod separator;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use classify::{is_io_related, FailureKind, IoFailureKind};
pub use error::{PathError, Result};
pub use normalize::{
    fix_file_path, normalize, normalize_no_throw, HostResolver, Normalizer, PathResolver,
};
pub use separator::SeparatorConfig;
pub use validate::{
    file_name, is_invalid_file_name_char, is_invalid_path_char, is_path_invalid, validate_path,
    INVALID_FILE_NAME_CHARS_EXTRA, INVALID_PATH_CHARS,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
