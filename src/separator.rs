//! Directory separator configuration

use std::path::MAIN_SEPARATOR;

/// Separator convention used when rewriting resolved paths
///
/// `native` is the host's own separator, `canonical` the one emitted into
/// normalized paths. The host value is fixed at build time through
/// [`SeparatorConfig::HOST`]; other values exist so the rewrite can be
/// exercised for a foreign host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorConfig {
    pub native: char,
    pub canonical: char,
}

impl SeparatorConfig {
    /// Convention of the platform this crate was built for
    pub const HOST: SeparatorConfig = SeparatorConfig {
        native: MAIN_SEPARATOR,
        canonical: '/',
    };

    /// A POSIX-style host
    pub const POSIX: SeparatorConfig = SeparatorConfig {
        native: '/',
        canonical: '/',
    };

    /// A Windows-style host
    pub const WINDOWS: SeparatorConfig = SeparatorConfig {
        native: '\\',
        canonical: '/',
    };

    pub const fn new(native: char, canonical: char) -> Self {
        SeparatorConfig { native, canonical }
    }

    /// Whether backslashes left in a resolved path get rewritten.
    ///
    /// On backslash-native hosts the resolver already emits native separators,
    /// so the rewrite is skipped there.
    pub const fn rewrites_backslashes(&self) -> bool {
        self.native != '\\'
    }
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        SeparatorConfig::HOST
    }
}
