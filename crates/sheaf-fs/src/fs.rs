//! File system capability interface
//!
//! The resolution engine never touches storage directly; it is handed a
//! `FileSystem` and probes it with normalized virtual paths. Keeping the
//! interface this small (one existence query, one read) is what lets a
//! build swap between the in-memory, host, and cached implementations
//! without the resolver noticing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by file system operations
#[derive(Debug, Error, Clone)]
pub enum FsError {
    /// No entry exists at the path
    #[error("File not found: {0}")]
    NotFound(String),

    /// An entry exists but is not a regular file
    #[error("Not a regular file: {0}")]
    NotAFile(String),

    /// Underlying storage failure
    #[error("I/O error on {path}: {message}")]
    Io {
        /// Path the operation was addressed to
        path: String,
        /// Host error description
        message: String,
    },
}

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// Existence and type information for one path.
///
/// Ephemeral: callers inspect it and move on; only caching layers retain
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// Whether any entry exists at the path
    pub exists: bool,
    /// Whether the entry is a regular file
    pub is_file: bool,
}

impl AccessRecord {
    /// Record for a path with no entry
    pub fn missing() -> Self {
        Self {
            exists: false,
            is_file: false,
        }
    }

    /// Record for a regular file
    pub fn file() -> Self {
        Self {
            exists: true,
            is_file: true,
        }
    }

    /// Record for a directory
    pub fn directory() -> Self {
        Self {
            exists: true,
            is_file: false,
        }
    }
}

/// Capability interface the resolution engine consumes.
///
/// Implementations are addressed by normalized virtual paths (see
/// [`crate::path::normalize_path`]) and must be safe for concurrent use:
/// a build issues queries from many worker threads against one shared
/// instance. A missing path is a negative [`AccessRecord`], not an error;
/// errors are reserved for storage faults.
pub trait FileSystem: Send + Sync {
    /// Existence/type query for one path.
    ///
    /// Must be cheap and repeatable; resolution probes the same small key
    /// space over and over, which is why builds put [`crate::CachedFileSystem`]
    /// in front of slow storage.
    fn access(&self, path: &str) -> FsResult<AccessRecord>;

    /// Raw content of an existing regular file.
    fn read_to_string(&self, path: &str) -> FsResult<String>;
}
