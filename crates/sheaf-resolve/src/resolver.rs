//! Filesystem-backed module resolution and loading
//!
//! [`FsModuleResolver`] implements the two pipeline hooks: `resolve_id`
//! turns an import specifier plus importer into a concrete module path,
//! and `load` reads that path's content. All storage access goes
//! through an injected [`FileSystem`], so builds can run against disk,
//! memory, or a caching stack without the resolver knowing.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use sheaf_fs::{dirname, normalize_path, resolve_from, FileSystem, FsResult};

use crate::candidates::candidate_paths;
use crate::diagnostics::{CollectedWarnings, WarningSink};
use crate::specifier::Specifier;

/// Extensions the build compiles before bundling; loading one directly
/// means an upstream output was wired in wrong.
static SOURCE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.tsx?$").expect("pattern is valid"));

/// Configuration for [`FsModuleResolver`]
pub struct ResolverOptions {
    /// Working root for imports whose importer is unknown
    pub root: String,
    /// Destination for advisory warnings
    pub warnings: Arc<dyn WarningSink>,
}

impl ResolverOptions {
    /// Options with the process working directory as root and a
    /// buffering warning sink.
    ///
    /// Falls back to the filesystem root when the working directory is
    /// unavailable.
    pub fn new() -> Self {
        let cwd = std::env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "/".to_string());
        Self {
            root: normalize_path(&cwd),
            warnings: Arc::new(CollectedWarnings::new()),
        }
    }

    /// Set the working root
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = normalize_path(&root.into());
        self
    }

    /// Set the warning sink
    pub fn with_warning_sink(mut self, warnings: Arc<dyn WarningSink>) -> Self {
        self.warnings = warnings;
        self
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves filesystem import specifiers against a virtual file system.
///
/// The resolver holds no per-call state; one instance serves a whole
/// build, including concurrent calls from parallel workers.
pub struct FsModuleResolver {
    fs: Arc<dyn FileSystem>,
    root: String,
    warnings: Arc<dyn WarningSink>,
}

impl FsModuleResolver {
    /// Create a resolver with default options
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self::with_options(fs, ResolverOptions::new())
    }

    /// Create a resolver with explicit options
    pub fn with_options(fs: Arc<dyn FileSystem>, options: ResolverOptions) -> Self {
        Self {
            fs,
            root: options.root,
            warnings: options.warnings,
        }
    }

    /// Working root used when an import has no importer
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Resolve an import specifier to a concrete module path.
    ///
    /// # Arguments
    /// * `specifier` - the import text (e.g. "./utils", "/app/lib/math")
    /// * `importer` - the file containing the import, if known; an empty
    ///   string counts as unknown
    ///
    /// # Resolution order
    /// For the base path `P` built from specifier and importer:
    /// 1. `P` itself, when it is a regular file
    /// 2. `P.js`
    /// 3. `P.mjs`
    /// 4. `P/index.js`
    /// 5. `P/index.mjs`
    ///
    /// Probing stops at the first hit. `Ok(None)` means the specifier is
    /// not this resolver's to handle (bare name, foreign ID, or nothing
    /// found) and the pipeline should ask the next resolver. Only file
    /// system faults surface as errors.
    pub fn resolve_id(&self, specifier: &str, importer: Option<&str>) -> FsResult<Option<String>> {
        let specifier = match Specifier::classify(specifier) {
            Specifier::Path(raw) => raw,
            Specifier::Bare(_) | Specifier::Foreign(_) => return Ok(None),
        };

        let base = match importer {
            Some(path) if !path.is_empty() => {
                let importer_path = normalize_path(path);
                resolve_from(dirname(&importer_path), &specifier)
            }
            _ => resolve_from(&self.root, &specifier),
        };

        for candidate in candidate_paths(&base) {
            let record = self.fs.access(&candidate.path)?;
            if candidate.matches(record) {
                return Ok(Some(candidate.path));
            }
        }
        Ok(None)
    }

    /// Read the content of a resolved module path.
    ///
    /// A path still carrying a source-only extension draws one warning
    /// naming its compiled counterpart, then loads anyway; whether the
    /// read succeeds is the file system's call.
    pub fn load(&self, resolved: &str) -> FsResult<String> {
        if SOURCE_ONLY.is_match(resolved) {
            let counterpart = SOURCE_ONLY.replace(resolved, ".js");
            self.warnings.warn(format!(
                "{resolved} is a typescript source file; the bundle should read its compiled counterpart {counterpart}"
            ));
        }
        self.fs.read_to_string(resolved)
    }
}
