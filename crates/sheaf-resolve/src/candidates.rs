//! Candidate path generation
//!
//! A normalized base path expands into a fixed, ordered list of five
//! probe targets: the path itself, extension-appended variants, and
//! directory index fallbacks. Order is significant; the resolver stops
//! at the first match, so earlier variants always shadow later ones.

use sheaf_fs::{join, AccessRecord};

/// Extensions appended to an extensionless import, in probe order
pub const EXTENSION_VARIANTS: [&str; 2] = [".js", ".mjs"];

/// Index files probed inside a directory import, in probe order
pub const INDEX_VARIANTS: [&str; 2] = ["index.js", "index.mjs"];

/// One probe target in the resolution sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Normalized path to probe
    pub path: String,
    /// Whether a match additionally requires a regular file
    pub require_file: bool,
}

impl Candidate {
    /// Whether an access record satisfies this candidate.
    pub fn matches(&self, record: AccessRecord) -> bool {
        record.exists && (!self.require_file || record.is_file)
    }
}

/// Expand a normalized base path into its five probe targets.
///
/// The exact candidate insists on a regular file; the appended variants
/// accept any existing entry. That looser check is a compatibility
/// quirk kept deliberately, not an invitation to resolve directories.
pub fn candidate_paths(base: &str) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(1 + EXTENSION_VARIANTS.len() + INDEX_VARIANTS.len());
    candidates.push(Candidate {
        path: base.to_string(),
        require_file: true,
    });
    for ext in EXTENSION_VARIANTS {
        candidates.push(Candidate {
            path: format!("{base}{ext}"),
            require_file: false,
        });
    }
    for index in INDEX_VARIANTS {
        candidates.push(Candidate {
            path: join(base, index),
            require_file: false,
        });
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_order_is_fixed() {
        let candidates = candidate_paths("/src/utils");
        let paths: Vec<&str> = candidates.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "/src/utils",
                "/src/utils.js",
                "/src/utils.mjs",
                "/src/utils/index.js",
                "/src/utils/index.mjs",
            ]
        );
    }

    #[test]
    fn test_only_exact_candidate_requires_file() {
        let candidates = candidate_paths("/src/utils");
        assert!(candidates[0].require_file);
        for candidate in &candidates[1..] {
            assert!(!candidate.require_file);
        }
    }

    #[test]
    fn test_exact_candidate_rejects_directories() {
        let candidates = candidate_paths("/src/utils");
        assert!(!candidates[0].matches(AccessRecord::directory()));
        assert!(candidates[0].matches(AccessRecord::file()));
        assert!(!candidates[0].matches(AccessRecord::missing()));
    }

    #[test]
    fn test_appended_candidates_accept_any_existing_entry() {
        let candidates = candidate_paths("/src/utils");
        assert!(candidates[1].matches(AccessRecord::file()));
        assert!(candidates[1].matches(AccessRecord::directory()));
        assert!(!candidates[1].matches(AccessRecord::missing()));
    }

    #[test]
    fn test_root_base_gets_single_slash_join() {
        let candidates = candidate_paths("/");
        assert_eq!(candidates[3].path, "/index.js");
        assert_eq!(candidates[4].path, "/index.mjs");
    }
}
