//! Sheaf Virtual File System
//!
//! Storage layer consumed by the sheaf resolution engine:
//! - **Paths**: slash-normalized, absolute virtual paths used as cache keys
//!   (`path` module)
//! - **Capability trait**: cached existence/type queries and content reads
//!   (`fs` module)
//! - **Implementations**: in-memory (`memory`), host adapter (`disk`), and
//!   a caching decorator with invalidation and statistics (`cached`)
//!
//! Virtual paths are plain strings with forward slashes only, so the same
//! key addresses the same entry on every platform. All implementations are
//! safe for concurrent use; a build may probe the file system from many
//! worker threads at once.

#![warn(missing_docs)]

pub mod cached;
pub mod disk;
pub mod fs;
pub mod memory;
pub mod path;

pub use cached::{CacheStats, CachedFileSystem};
pub use disk::DiskFileSystem;
pub use fs::{AccessRecord, FileSystem, FsError, FsResult};
pub use memory::MemoryFileSystem;
pub use path::{dirname, is_absolute_path, join, normalize_path, resolve_from};
