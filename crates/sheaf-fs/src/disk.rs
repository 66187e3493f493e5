//! Host file system adapter
//!
//! Thin [`FileSystem`] over `std::fs`. Virtual paths map directly to host
//! paths; a missing entry is a negative record rather than an error, so
//! resolution probes against real storage behave exactly like probes
//! against the in-memory implementation.

use std::fs;
use std::io;
use std::path::Path;

use crate::fs::{AccessRecord, FileSystem, FsError, FsResult};

/// Adapter over the host file system.
///
/// Stateless; builds normally wrap it in [`crate::CachedFileSystem`] so
/// repeated probes never hit the disk twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileSystem;

impl DiskFileSystem {
    /// Create a new adapter
    pub fn new() -> Self {
        Self
    }

    fn io_error(path: &str, err: io::Error) -> FsError {
        FsError::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

impl FileSystem for DiskFileSystem {
    fn access(&self, path: &str) -> FsResult<AccessRecord> {
        match fs::metadata(Path::new(path)) {
            Ok(meta) => Ok(AccessRecord {
                exists: true,
                is_file: meta.is_file(),
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(AccessRecord::missing()),
            Err(err) => Err(Self::io_error(path, err)),
        }
    }

    fn read_to_string(&self, path: &str) -> FsResult<String> {
        match fs::read_to_string(Path::new(path)) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(FsError::NotFound(path.to_string()))
            }
            Err(err) => {
                // Reading a directory surfaces as a bare I/O error on some
                // platforms; re-probe to report the precise variant.
                match fs::metadata(Path::new(path)) {
                    Ok(meta) if !meta.is_file() => Err(FsError::NotAFile(path.to_string())),
                    _ => Err(Self::io_error(path, err)),
                }
            }
        }
    }
}
