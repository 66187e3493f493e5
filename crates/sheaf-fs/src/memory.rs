//! In-memory file system
//!
//! A deterministic [`FileSystem`] backed by concurrent maps. Used as the
//! storage for fully in-memory builds and as the test double for the
//! resolution engine.

use dashmap::{DashMap, DashSet};

use crate::fs::{AccessRecord, FileSystem, FsError, FsResult};
use crate::path::{dirname, normalize_path};

/// In-memory file system keyed by normalized virtual paths.
///
/// Directories are implied: adding `/src/utils.js` makes `/src` (and the
/// root) visible as directories. Keys are normalized on the way in, so
/// tests may spell paths with backslashes or redundant segments and still
/// address the same entry.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    /// File contents by normalized path
    files: DashMap<String, String>,
    /// Directories, explicit and implied
    dirs: DashSet<String>,
}

impl MemoryFileSystem {
    /// Create an empty file system
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, registering its ancestor directories
    pub fn add_file(&self, path: &str, content: impl Into<String>) {
        let path = normalize_path(path);
        self.register_ancestors(&path);
        self.files.insert(path, content.into());
    }

    /// Register a directory (and its ancestors) with no files beneath it
    pub fn add_dir(&self, path: &str) {
        let path = normalize_path(path);
        self.register_ancestors(&path);
        self.dirs.insert(path);
    }

    /// Remove a file; returns whether it was present.
    ///
    /// Implied directories are left in place, matching how a real tree
    /// keeps a directory after its last file is deleted.
    pub fn remove_file(&self, path: &str) -> bool {
        self.files.remove(&normalize_path(path)).is_some()
    }

    /// Number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no files have been added
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Drop all files and directories
    pub fn clear(&self) {
        self.files.clear();
        self.dirs.clear();
    }

    fn register_ancestors(&self, path: &str) {
        let mut dir = dirname(path);
        loop {
            if !self.dirs.insert(dir.to_string()) {
                // Already known, so its ancestors are too.
                break;
            }
            let parent = dirname(dir);
            if parent == dir {
                break;
            }
            dir = parent;
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn access(&self, path: &str) -> FsResult<AccessRecord> {
        let path = normalize_path(path);
        if self.files.contains_key(&path) {
            return Ok(AccessRecord::file());
        }
        if self.dirs.contains(&path) {
            return Ok(AccessRecord::directory());
        }
        Ok(AccessRecord::missing())
    }

    fn read_to_string(&self, path: &str) -> FsResult<String> {
        let path = normalize_path(path);
        if let Some(content) = self.files.get(&path) {
            return Ok(content.clone());
        }
        if self.dirs.contains(&path) {
            return Err(FsError::NotAFile(path));
        }
        Err(FsError::NotFound(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/src/utils.js", "export const x = 1;");

        let record = fs.access("/src/utils.js").unwrap();
        assert!(record.exists);
        assert!(record.is_file);
    }

    #[test]
    fn test_implied_directories() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/src/widgets/index.mjs", "");

        for dir in ["/src", "/src/widgets", "/"] {
            let record = fs.access(dir).unwrap();
            assert!(record.exists, "{dir} should exist");
            assert!(!record.is_file, "{dir} should be a directory");
        }
    }

    #[test]
    fn test_missing_path() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/src/utils.js", "");

        let record = fs.access("/src/other.js").unwrap();
        assert!(!record.exists);
        assert!(!record.is_file);
    }

    #[test]
    fn test_keys_are_normalized() {
        let fs = MemoryFileSystem::new();
        fs.add_file("C:\\src\\app.js", "content");

        assert!(fs.access("C:/src/app.js").unwrap().is_file);
        assert_eq!(fs.read_to_string("C:/src/./app.js").unwrap(), "content");
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let fs = MemoryFileSystem::new();
        let err = fs.read_to_string("/nope.js").unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn test_read_directory_is_not_a_file() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/src/utils.js", "");

        let err = fs.read_to_string("/src").unwrap_err();
        assert!(matches!(err, FsError::NotAFile(_)));
    }

    #[test]
    fn test_remove_file_keeps_directory() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/src/utils.js", "");

        assert!(fs.remove_file("/src/utils.js"));
        assert!(!fs.remove_file("/src/utils.js"));
        assert!(!fs.access("/src/utils.js").unwrap().exists);
        assert!(fs.access("/src").unwrap().exists);
    }

    #[test]
    fn test_explicit_directory() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/assets");

        let record = fs.access("/assets").unwrap();
        assert!(record.exists);
        assert!(!record.is_file);
    }

    #[test]
    fn test_clear() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/a.js", "");
        fs.add_file("/b.js", "");
        assert_eq!(fs.len(), 2);

        fs.clear();
        assert!(fs.is_empty());
        assert!(!fs.access("/a.js").unwrap().exists);
    }
}
