//! Read-only virtual filesystem for the embedded web terminal.
//!
//! The tree is described by a build-time manifest; file bodies are
//! fetched lazily over HTTP and cached in memory for the session.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Shell / commands (webterm-shell)
//! Layer 2: FileSystem operations (resolve, readdir, read_file, cd)
//! Layer 1: Primitives (InodeManager arena, ContentStore, ManifestSource)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use webterm_vfs::{FileSystem, HttpFetcher};
//!
//! let fetcher = Arc::new(HttpFetcher::new(
//!     "https://example.com/api/manifest.json",
//!     "https://example.com/content",
//! ));
//! let fs = Arc::new(FileSystem::new(fetcher.clone(), fetcher));
//! fs.init().await;
//! let entries = fs.readdir(None);
//! ```

pub mod builder;
pub mod content;
pub mod error;
pub mod fs;
pub mod inode;

pub use builder::build_from_manifest;
pub use content::{ContentStore, HttpFetcher, ManifestSource, MemoryContentStore, MemoryManifestSource};
pub use error::VfsError;
pub use fs::{FileSystem, HOME_PATH};
pub use inode::{Inode, InodeDir, InodeFile, InodeId, InodeKind, InodeManager, ROOT_INODE};

/// Shared filesystem handle passed to shell commands.
pub type FsHandle = std::sync::Arc<FileSystem>;
