//! Import specifier classification
//!
//! Every import statement carries a raw specifier string. Before any
//! probing happens the resolver sorts it into one of three kinds:
//! filesystem paths it owns, bare package names it defers, and foreign
//! identifiers minted by other plugins in the same pipeline. The latter
//! two must never trigger file system traffic.

/// Reserved marker other plugins embed in their synthetic module IDs.
///
/// Pipelines built on the rollup convention prefix generated IDs with a
/// NUL byte so downstream resolvers can recognize and skip them. The
/// marker may appear anywhere in the string.
pub const OWNERSHIP_SENTINEL: char = '\0';

/// A classified import specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    /// Filesystem-relative or absolute path, owned by this resolver
    Path(String),
    /// Bare package-style name, deferred to other resolvers
    Bare(String),
    /// Synthetic ID owned by another plugin, never probed
    Foreign(String),
}

impl Specifier {
    /// Classify a raw specifier string.
    ///
    /// A specifier is a path when its first character is `.` or `/`, or
    /// when its second character is a drive-letter separator (`:`).
    /// Anything containing [`OWNERSHIP_SENTINEL`] is foreign regardless
    /// of shape. Everything else is a bare name.
    pub fn classify(raw: &str) -> Self {
        if raw.contains(OWNERSHIP_SENTINEL) {
            return Self::Foreign(raw.to_string());
        }
        let mut chars = raw.chars();
        let leading_marker = matches!(chars.next(), Some('.') | Some('/'));
        let drive_separator = chars.next() == Some(':');
        if leading_marker || drive_separator {
            Self::Path(raw.to_string())
        } else {
            Self::Bare(raw.to_string())
        }
    }

    /// The raw specifier text
    pub fn as_str(&self) -> &str {
        match self {
            Self::Path(raw) | Self::Bare(raw) | Self::Foreign(raw) => raw,
        }
    }

    /// Whether this resolver owns the specifier
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Whether another plugin owns the specifier
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign(_))
    }
}
