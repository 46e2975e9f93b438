//! Property test generators for solution file paths
//!
//! Strategies producing the kinds of paths found in `.sln` project entries,
//! plus paths carrying blacklisted characters in known positions.

use crate::validate::{INVALID_FILE_NAME_CHARS_EXTRA, INVALID_PATH_CHARS};
use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a path component made of safe characters
    pub fn component() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_. -]{0,20}[a-zA-Z0-9_]"
    }

    /// Generate project file extensions found in solution files
    pub fn project_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("csproj".to_string()),
            Just("fsproj".to_string()),
            Just("vbproj".to_string()),
            Just("vcxproj".to_string()),
            Just("sqlproj".to_string()),
            Just("shproj".to_string()),
        ]
    }

    /// Generate a project file name
    pub fn project_file() -> impl Strategy<Value = String> {
        (Self::component(), Self::project_extension())
            .prop_map(|(name, ext)| format!("{}.{}", name, ext))
    }

    /// Generate a relative project path using `separator`
    pub fn project_path(separator: char) -> impl Strategy<Value = String> {
        (
            prop::collection::vec(Self::component(), 0..=4),
            Self::project_file(),
        )
            .prop_map(move |(mut parts, file)| {
                parts.push(file);
                parts.join(&separator.to_string())
            })
    }

    /// Generate a project path as written in a solution file (backslashes)
    pub fn sln_project_path() -> impl Strategy<Value = String> {
        Self::project_path('\\')
    }

    /// Generate a valid path with either separator style
    pub fn valid_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Self::project_path('/'),
            Self::project_path('\\'),
            Self::project_path('/').prop_map(|p| format!("/{}", p)),
        ]
    }

    /// Generate a path with `.` and `..` segments that stay below the start
    pub fn path_with_relative_segments() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                3 => Self::component(),
                1 => Just(".".to_string()),
            ],
            1..=5,
        )
        .prop_map(|parts| {
            let mut out = Vec::new();
            for part in parts {
                out.push(part.clone());
                if part != "." {
                    out.push("..".to_string());
                    out.push(part);
                }
            }
            out.join("/")
        })
    }

    /// Generate one character of the invalid path set
    pub fn invalid_path_char() -> impl Strategy<Value = char> {
        prop::sample::select(INVALID_PATH_CHARS.to_vec())
    }

    /// Generate one character only invalid inside a file name
    pub fn invalid_file_name_only_char() -> impl Strategy<Value = char> {
        prop::sample::select(INVALID_FILE_NAME_CHARS_EXTRA.to_vec())
            .prop_filter("not a separator", |c| *c != '/' && *c != '\\')
    }

    /// Generate a path with an invalid path character somewhere
    pub fn path_with_invalid_char() -> impl Strategy<Value = String> {
        (Self::valid_path(), Self::invalid_path_char(), any::<prop::sample::Index>()).prop_map(
            |(path, bad, index)| {
                let boundaries: Vec<usize> = path
                    .char_indices()
                    .map(|(i, _)| i)
                    .chain(std::iter::once(path.len()))
                    .collect();
                let at = boundaries[index.index(boundaries.len())];
                let mut out = path;
                out.insert(at, bad);
                out
            },
        )
    }

    /// Generate a path whose file name carries a file-name-only invalid character
    pub fn path_with_invalid_file_name() -> impl Strategy<Value = String> {
        (
            Self::project_path('/'),
            Self::component(),
            Self::invalid_file_name_only_char(),
        )
            .prop_map(|(dir, name, bad)| format!("{}/{}{}{}", dir, name, bad, name))
    }

    /// Generate any string, including control characters and separators
    pub fn any_string() -> impl Strategy<Value = String> {
        prop_oneof![
            2 => any::<String>(),
            1 => "[\\x00-\\x1f|:*?\"<>/\\\\a-z]{0,40}",
            1 => Self::valid_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::validate::{file_name, is_path_invalid, validate_path};

    proptest! {
        #[test]
        fn valid_paths_are_valid(path in PathGenerators::valid_path()) {
            prop_assert!(!is_path_invalid(&path), "{:?} should be valid", path);
        }

        #[test]
        fn invalid_char_paths_are_invalid(path in PathGenerators::path_with_invalid_char()) {
            prop_assert!(is_path_invalid(&path), "{:?} should be invalid", path);
        }

        #[test]
        fn invalid_file_name_paths_are_invalid(
            path in PathGenerators::path_with_invalid_file_name()
        ) {
            prop_assert!(is_path_invalid(&path), "{:?} should be invalid", path);
        }

        #[test]
        fn sln_project_paths_are_valid_and_resolve(
            path in PathGenerators::sln_project_path()
        ) {
            prop_assert!(!is_path_invalid(&path), "{:?} should be valid", path);
            let normalized = normalize(&path).unwrap();
            prop_assert!(normalized.ends_with(file_name(&path)));
            prop_assert!(!is_path_invalid(&normalized), "{:?} should be valid", normalized);
        }

        #[test]
        fn relative_segments_normalize_idempotently(
            path in PathGenerators::path_with_relative_segments()
        ) {
            let once = normalize(&path).unwrap();
            let twice = normalize(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn validation_agrees_on_any_string(path in PathGenerators::any_string()) {
            prop_assert_eq!(is_path_invalid(&path), validate_path(&path).is_err());
        }
    }
}
