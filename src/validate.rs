//! Path and file name validation
//!
//! Character checks for paths coming out of solution files. Nothing here touches
//! the filesystem or panics; every function is total over `&str`.

use crate::error::{PathError, Result};
use tracing::debug;

/// Characters that may never appear anywhere in a path.
///
/// Append-only.
pub const INVALID_PATH_CHARS: [char; 33] = [
    '|', '\0', '\u{1}', '\u{2}', '\u{3}', '\u{4}', '\u{5}', '\u{6}', '\u{7}', '\u{8}', '\u{9}',
    '\u{a}', '\u{b}', '\u{c}', '\u{d}', '\u{e}', '\u{f}', '\u{10}', '\u{11}', '\u{12}', '\u{13}',
    '\u{14}', '\u{15}', '\u{16}', '\u{17}', '\u{18}', '\u{19}', '\u{1a}', '\u{1b}', '\u{1c}',
    '\u{1d}', '\u{1e}', '\u{1f}',
];

/// Characters legal in a path but not inside a single path component.
///
/// The file name set is [`INVALID_PATH_CHARS`] plus these. Append-only.
pub const INVALID_FILE_NAME_CHARS_EXTRA: [char; 8] = ['"', '<', '>', ':', '*', '?', '\\', '/'];

const SLASHES: [char; 2] = ['/', '\\'];

/// Check a character against the invalid path set
pub fn is_invalid_path_char(c: char) -> bool {
    INVALID_PATH_CHARS.contains(&c)
}

/// Check a character against the invalid file name set
pub fn is_invalid_file_name_char(c: char) -> bool {
    is_invalid_path_char(c) || INVALID_FILE_NAME_CHARS_EXTRA.contains(&c)
}

/// Extract the final component of a path
///
/// Everything after the last `/` or `\`, or the whole string when there is no
/// separator. `Path::file_name` is not used: it treats malformed input
/// differently per host and cannot see past a stray `:`.
///
/// # Examples
/// ```
/// use sln_path_utils::file_name;
///
/// assert_eq!(file_name("a/b/foo:bar"), "foo:bar");
/// assert_eq!(file_name("src\\App\\App.csproj"), "App.csproj");
/// assert_eq!(file_name("plain"), "plain");
/// assert_eq!(file_name("dir/"), "");
/// ```
pub fn file_name(path: &str) -> &str {
    match path.rfind(&SLASHES[..]) {
        // Both separators are ASCII, so idx + 1 is a char boundary
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Check whether a path contains characters that make it unusable
///
/// Returns `true` if any character of `path` is in the invalid path set, or if
/// its file name contains a character from the invalid file name set.
///
/// # Examples
/// ```
/// use sln_path_utils::is_path_invalid;
///
/// assert!(!is_path_invalid("/valid/path/name.txt"));
/// assert!(is_path_invalid("/valid/path/bad*name.txt"));
/// assert!(is_path_invalid("/has\u{1}control/name.txt"));
/// assert!(is_path_invalid("a/b/foo:bar"));
/// ```
pub fn is_path_invalid(path: &str) -> bool {
    if path.contains(is_invalid_path_char) {
        return true;
    }

    file_name(path).contains(is_invalid_file_name_char)
}

/// Validate a path and report the offending character
///
/// Runs the same checks as [`is_path_invalid`] and agrees with it on every
/// input.
///
/// # Examples
/// ```
/// use sln_path_utils::{validate_path, PathError};
///
/// assert!(validate_path("src/App/App.csproj").is_ok());
/// assert!(matches!(
///     validate_path("src/App?.csproj"),
///     Err(PathError::InvalidFileNameCharacter { character: '?', .. })
/// ));
/// ```
pub fn validate_path(path: &str) -> Result<()> {
    if let Some(character) = path.chars().find(|&c| is_invalid_path_char(c)) {
        debug!(path = %path.escape_debug(), ?character, reason = "invalid_path_char", "Rejected path");
        return Err(PathError::InvalidPathCharacter {
            path: path.to_string(),
            character,
        });
    }

    let name = file_name(path);
    if let Some(character) = name.chars().find(|&c| is_invalid_file_name_char(c)) {
        debug!(path = %path.escape_debug(), ?character, reason = "invalid_file_name_char", "Rejected path");
        return Err(PathError::InvalidFileNameCharacter {
            path: path.to_string(),
            file_name: name.to_string(),
            character,
        });
    }

    Ok(())
}
