//! Module specifier resolution and loading for sheaf builds
//!
//! This crate implements the bundler-facing half of sheaf:
//! - **Specifier classification**: relative, absolute, bare, or foreign
//!   (`specifier` module)
//! - **Candidate probing**: the fixed extension and index fallback order
//!   (`candidates` module)
//! - **Resolution and loading**: [`FsModuleResolver`] over any
//!   [`FileSystem`] (`resolver` module)
//! - **Plugin chaining**: first-match-wins composition (`plugin` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sheaf_fs::MemoryFileSystem;
//! use sheaf_resolve::FsModuleResolver;
//!
//! let fs = Arc::new(MemoryFileSystem::new());
//! fs.add_file("/app/src/utils.js", "export const x = 1;");
//!
//! let resolver = FsModuleResolver::new(fs);
//! let id = resolver.resolve_id("./utils", Some("/app/src/index.js"))?;
//! assert_eq!(id.as_deref(), Some("/app/src/utils.js"));
//!
//! let source = resolver.load("/app/src/utils.js")?;
//! ```

#![warn(missing_docs)]

pub mod candidates;
pub mod diagnostics;
pub mod plugin;
pub mod resolver;
pub mod specifier;

pub use candidates::{candidate_paths, Candidate, EXTENSION_VARIANTS, INDEX_VARIANTS};
pub use diagnostics::{CollectedWarnings, WarningSink};
pub use plugin::{ResolverChain, ResolverPlugin};
pub use resolver::{FsModuleResolver, ResolverOptions};
pub use specifier::{Specifier, OWNERSHIP_SENTINEL};

// File system types resolvers are written against
pub use sheaf_fs::{AccessRecord, FileSystem, FsError, FsResult};
