//! Caching file system decorator
//!
//! Resolution probes the same small key space over and over (every import
//! of `./utils` re-checks the same five candidates), so builds put this
//! decorator between the resolver and real storage. Access records and
//! file contents are memoized in concurrent maps; hit/miss counters feed
//! build reporting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::fs::{AccessRecord, FileSystem, FsResult};

/// Caching decorator over another file system.
///
/// Negative records (`exists == false`) are cached too: a candidate that
/// was absent once stays absent for the whole build unless
/// [`CachedFileSystem::invalidate`] is called. Watching for changes is
/// out of scope, so invalidation on external writes is the caller's job.
///
/// Callers address the cache by normalized path, as the resolver always
/// does, so distinct spellings of one entry never split its records.
pub struct CachedFileSystem {
    inner: Arc<dyn FileSystem>,
    records: DashMap<String, AccessRecord>,
    contents: DashMap<String, String>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl CachedFileSystem {
    /// Wrap an inner file system
    pub fn new(inner: Arc<dyn FileSystem>) -> Self {
        Self {
            inner,
            records: DashMap::new(),
            contents: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Forget everything cached for one path
    pub fn invalidate(&self, path: &str) {
        self.records.remove(path);
        self.contents.remove(path);
    }

    /// Drop all cached entries and reset the counters
    pub fn clear(&self) {
        self.records.clear();
        self.contents.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Snapshot of the cache counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            records: self.records.len(),
            contents: self.contents.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl FileSystem for CachedFileSystem {
    fn access(&self, path: &str) -> FsResult<AccessRecord> {
        if let Some(record) = self.records.get(path) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(*record);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let record = self.inner.access(path)?;
        self.records.insert(path.to_string(), record);
        Ok(record)
    }

    fn read_to_string(&self, path: &str) -> FsResult<String> {
        if let Some(content) = self.contents.get(path) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(content.clone());
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let content = self.inner.read_to_string(path)?;
        self.contents.insert(path.to_string(), content.clone());
        // A successful read proves the entry is a regular file.
        self.records.insert(path.to_string(), AccessRecord::file());
        Ok(content)
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheStats {
    /// Cached access records
    pub records: usize,
    /// Cached file contents
    pub contents: usize,
    /// Queries served from the cache
    pub hits: usize,
    /// Queries forwarded to the inner file system
    pub misses: usize,
}

impl CacheStats {
    /// Fraction of queries served from the cache (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
