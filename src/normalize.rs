//! Path normalization
//!
//! Resolves paths read from solution files into absolute, canonical strings.
//! [`normalize_no_throw`] is the entry point for diagnostics: it falls back to
//! the raw input when resolution fails for I/O-related reasons.

use crate::classify::{is_io_related, IoFailureKind};
use crate::error::{PathError, Result};
use crate::separator::SeparatorConfig;
use std::path::{is_separator, Component, Path, PathBuf, MAIN_SEPARATOR};
use tracing::{debug, trace};

#[cfg(windows)]
const HOST_MAX_PATH_LEN: usize = 32_767;
#[cfg(not(windows))]
const HOST_MAX_PATH_LEN: usize = 4_096;

/// Turns a possibly relative path into an absolute one
///
/// Implementations must not collapse the failure into a panic; every failure is
/// reported as a [`PathError`] so callers can classify it.
pub trait PathResolver {
    fn resolve(&self, path: &str) -> Result<String>;
}

/// Resolver backed by the host's current directory
///
/// Resolution is lexical: `.` segments are dropped, `..` removes the previous
/// segment and stops at the root, symlinks are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostResolver {
    max_len: usize,
}

impl HostResolver {
    pub const fn new() -> Self {
        HostResolver {
            max_len: HOST_MAX_PATH_LEN,
        }
    }

    /// Use a custom limit for the length of a resolved path
    pub const fn with_max_len(max_len: usize) -> Self {
        HostResolver { max_len }
    }

    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Resolve `path` against an explicit base directory instead of the
    /// current one.
    ///
    /// # Examples
    /// ```
    /// use sln_path_utils::HostResolver;
    /// use std::path::Path;
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let resolved = HostResolver::new()
    ///     .resolve_against(Path::new("/work"), "src/../lib/./a.rs")
    ///     .unwrap();
    /// assert_eq!(resolved, "/work/lib/a.rs");
    /// # }
    /// ```
    pub fn resolve_against(&self, base: &Path, path: &str) -> Result<String> {
        if path.contains('\0') {
            return Err(PathError::InvalidArgument {
                path: path.to_string(),
                message: "path contains a NUL byte".to_string(),
            });
        }

        let joined = base.join(path);
        let mut resolved = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => resolved.push(other.as_os_str()),
            }
        }

        let mut resolved =
            resolved
                .into_os_string()
                .into_string()
                .map_err(|_| PathError::Unsupported {
                    path: path.to_string(),
                    message: "resolved path is not valid UTF-8".to_string(),
                })?;

        // Keep a trailing separator, it marks the input as a directory
        if path.ends_with(is_separator) && !resolved.ends_with(is_separator) {
            resolved.push(MAIN_SEPARATOR);
        }

        if resolved.len() > self.max_len {
            return Err(PathError::Io {
                kind: IoFailureKind::NameTooLong,
                path: path.to_string(),
                message: format!(
                    "resolved path is {} bytes, limit is {}",
                    resolved.len(),
                    self.max_len
                ),
            });
        }

        Ok(resolved)
    }
}

impl Default for HostResolver {
    fn default() -> Self {
        HostResolver::new()
    }
}

impl PathResolver for HostResolver {
    fn resolve(&self, path: &str) -> Result<String> {
        if Path::new(path).is_absolute() {
            return self.resolve_against(Path::new(""), path);
        }
        let cwd = std::env::current_dir().map_err(|e| PathError::from_io(&e, path))?;
        self.resolve_against(&cwd, path)
    }
}

/// Rewrite backslashes in a resolved path to the canonical separator
///
/// Empty input is returned as is, and so is everything on hosts whose native
/// separator is a backslash. Doubled separators are not collapsed.
///
/// # Examples
/// ```
/// use sln_path_utils::{fix_file_path, SeparatorConfig};
///
/// assert_eq!(fix_file_path("src\\App\\App.csproj", SeparatorConfig::POSIX), "src/App/App.csproj");
/// assert_eq!(fix_file_path("src\\App.csproj", SeparatorConfig::WINDOWS), "src\\App.csproj");
/// assert_eq!(fix_file_path("a\\\\b", SeparatorConfig::POSIX), "a//b");
/// ```
pub fn fix_file_path(path: &str, separators: SeparatorConfig) -> String {
    if path.is_empty() || !separators.rewrites_backslashes() {
        return path.to_string();
    }

    let mut buf = [0u8; 4];
    path.replace('\\', separators.canonical.encode_utf8(&mut buf))
}

/// Path normalizer combining a resolver with a separator convention
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<R = HostResolver> {
    resolver: R,
    separators: SeparatorConfig,
}

impl Normalizer<HostResolver> {
    /// Normalizer for the host platform
    pub const fn host() -> Self {
        Normalizer {
            resolver: HostResolver::new(),
            separators: SeparatorConfig::HOST,
        }
    }
}

impl Default for Normalizer<HostResolver> {
    fn default() -> Self {
        Normalizer::host()
    }
}

impl<R: PathResolver> Normalizer<R> {
    pub fn new(resolver: R, separators: SeparatorConfig) -> Self {
        Normalizer {
            resolver,
            separators,
        }
    }

    pub fn separators(&self) -> SeparatorConfig {
        self.separators
    }

    /// Resolve `path` and rewrite its separators.
    ///
    /// Empty input is returned unchanged without consulting the resolver.
    pub fn normalize(&self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Ok(String::new());
        }

        trace!(path_len = path.len(), "Normalizing path");
        // Backslash segments must be real separators before `.`/`..` folding
        let resolved = if self.separators.rewrites_backslashes() {
            self.resolver.resolve(&fix_file_path(path, self.separators))?
        } else {
            self.resolver.resolve(path)?
        };
        Ok(fix_file_path(&resolved, self.separators))
    }

    /// Like [`normalize`](Self::normalize), but returns `path` untouched when
    /// resolution fails with an I/O-related error.
    ///
    /// Errors outside that category are returned as they are.
    pub fn normalize_no_throw(&self, path: &str) -> Result<String> {
        match self.normalize(path) {
            Ok(normalized) => Ok(normalized),
            Err(err) if is_io_related(&err) => {
                debug!(
                    path = %path.escape_debug(),
                    kind = %err.kind(),
                    error = %err,
                    "Path resolution failed, keeping original path"
                );
                Ok(path.to_string())
            }
            Err(err) => Err(err),
        }
    }
}

/// Normalize a path to an absolute, canonical form
///
/// Relative paths are resolved against the current directory, `.` and `..`
/// segments are collapsed and backslashes become `/` on POSIX hosts.
///
/// # Examples
/// ```
/// use sln_path_utils::normalize;
///
/// assert_eq!(normalize("").unwrap(), "");
///
/// let normalized = normalize("relative/../relative/./file").unwrap();
/// assert!(std::path::Path::new(&normalized).is_absolute());
/// assert!(normalized.ends_with("relative/file") || normalized.ends_with("relative\\file"));
/// ```
pub fn normalize(path: &str) -> Result<String> {
    Normalizer::host().normalize(path)
}

/// Normalize a path without failing on I/O-related errors
///
/// Meant for paths that end up in diagnostics: when the path itself is the
/// reason something failed, resolving it must not raise a second error. On an
/// I/O-related failure the input is returned exactly as given.
///
/// # Examples
/// ```
/// use sln_path_utils::normalize_no_throw;
///
/// assert_eq!(normalize_no_throw("").unwrap(), "");
/// assert_eq!(normalize_no_throw("bad\0path").unwrap(), "bad\0path");
/// ```
pub fn normalize_no_throw(path: &str) -> Result<String> {
    Normalizer::host().normalize_no_throw(path)
}
