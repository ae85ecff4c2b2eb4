//! The FileSystem facade: navigation, lazy reads, and session state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use crate::builder::build_from_manifest;
use crate::content::{ContentStore, ManifestSource};
use crate::inode::{InodeId, InodeKind, InodeManager, ROOT_INODE};
use crate::VfsError;

/// Well-known home directory. `init` places the session here when the
/// manifest provides it.
pub const HOME_PATH: &str = "/home/guest";

/// Name of the synthetic file installed at the root when the manifest
/// cannot be loaded.
const ERROR_FILE_NAME: &str = "error.txt";

/// Read-only virtual filesystem over a manifest-described tree.
///
/// All operations return sentinel values (`Option` / `bool`) rather
/// than errors; the only fallible work is network fetching, which is
/// caught internally. Construct one per session and share it via
/// `Arc` — there is no global instance.
pub struct FileSystem {
    /// Where the manifest comes from.
    source: Arc<dyn ManifestSource>,
    /// Where file bodies come from.
    store: Arc<dyn ContentStore>,
    /// The inode tree; replaced wholesale by `init`.
    inodes: RwLock<InodeManager>,
    /// Current working directory.
    cwd: RwLock<InodeId>,
    /// Set once `init` has built a tree from a real manifest.
    initialized: AtomicBool,
}

impl FileSystem {
    /// Create a filesystem that is empty until `init` is called.
    ///
    /// # Arguments
    /// * `source` - Manifest source
    /// * `store` - Content store for lazy file reads
    pub fn new(source: Arc<dyn ManifestSource>, store: Arc<dyn ContentStore>) -> Self {
        Self {
            source,
            store,
            inodes: RwLock::new(InodeManager::new()),
            cwd: RwLock::new(ROOT_INODE),
            initialized: AtomicBool::new(false),
        }
    }

    /// Build the inode tree from the manifest.
    ///
    /// Idempotent once successful. Never fails: when the manifest
    /// cannot be fetched or decoded, a minimal tree containing a single
    /// synthetic error file is installed instead, so the shell stays
    /// usable. A later call may retry the fetch.
    pub async fn init(&self) {
        if self.initialized.load(Ordering::SeqCst) {
            return;
        }

        let manager: InodeManager = match self.source.fetch_manifest().await {
            Ok(manifest) => {
                info!(
                    files = manifest.file_count(),
                    bytes = manifest.total_size(),
                    "virtual filesystem built from manifest"
                );
                self.initialized.store(true, Ordering::SeqCst);
                build_from_manifest(&manifest)
            }
            Err(e) => {
                warn!(error = %e, "manifest load failed, installing degraded tree");
                Self::degraded_tree()
            }
        };

        {
            let mut inodes: std::sync::RwLockWriteGuard<'_, InodeManager> =
                self.inodes.write().unwrap();
            *inodes = manager;
        }

        // Land in home when the manifest provides it, else at the root.
        let home: InodeId = {
            let inodes: std::sync::RwLockReadGuard<'_, InodeManager> =
                self.inodes.read().unwrap();
            match Self::walk(&inodes, ROOT_INODE, HOME_PATH) {
                Some(id) if inodes.kind_of(id) == Some(InodeKind::Directory) => id,
                _ => ROOT_INODE,
            }
        };
        *self.cwd.write().unwrap() = home;
    }

    /// Minimal tree for the manifest-load-failure case.
    fn degraded_tree() -> InodeManager {
        let manager: InodeManager = InodeManager::new();
        manager.add_preloaded_file(
            ROOT_INODE,
            ERROR_FILE_NAME,
            "The content tree could not be loaded. Try reloading the page.\n".to_string(),
        );
        manager
    }

    /// Resolve a path to an inode ID.
    ///
    /// Absolute paths resolve from the root, relative paths from the
    /// current directory. `.` is elided, `..` moves to the parent (a
    /// no-op at the root). A file mid-path fails resolution; a file as
    /// the final segment is returned.
    pub fn resolve_path(&self, path: &str) -> Option<InodeId> {
        let start: InodeId = if path.starts_with('/') {
            ROOT_INODE
        } else {
            *self.cwd.read().unwrap()
        };
        let inodes: std::sync::RwLockReadGuard<'_, InodeManager> = self.inodes.read().unwrap();
        Self::walk(&inodes, start, path)
    }

    /// Segment-by-segment traversal from a starting inode.
    fn walk(inodes: &InodeManager, start: InodeId, path: &str) -> Option<InodeId> {
        let mut current: InodeId = start;
        for segment in path.split('/') {
            if segment.is_empty() || segment == "." {
                continue;
            }
            // Only directories may be traversed through.
            if inodes.kind_of(current)? != InodeKind::Directory {
                return None;
            }
            current = if segment == ".." {
                inodes.parent_of(current)?
            } else {
                inodes.child_of(current, segment)?
            };
        }
        Some(current)
    }

    /// List the child names of a directory in manifest order.
    ///
    /// # Arguments
    /// * `path` - Directory to list, or None for the current directory
    ///
    /// # Returns
    /// None if the target is missing or is a file.
    pub fn readdir(&self, path: Option<&str>) -> Option<Vec<String>> {
        let id: InodeId = match path {
            Some(p) => self.resolve_path(p)?,
            None => *self.cwd.read().unwrap(),
        };
        let inodes: std::sync::RwLockReadGuard<'_, InodeManager> = self.inodes.read().unwrap();
        inodes.children_of(id)
    }

    /// Read a file's content, fetching and caching it on first access.
    ///
    /// # Returns
    /// None if the path does not resolve to a file or the fetch fails.
    /// A failed fetch is not cached, so a later call can retry.
    pub async fn read_file(&self, path: &str) -> Option<String> {
        let id: InodeId = self.resolve_path(path)?;

        let (cached, full_path) = {
            let inodes: std::sync::RwLockReadGuard<'_, InodeManager> =
                self.inodes.read().unwrap();
            let cached: Option<String> = inodes.file_content(id)?;
            let full_path: String = inodes.full_path(id)?;
            (cached, full_path)
        };

        if let Some(body) = cached {
            return Some(body);
        }

        // Lock released across the await point.
        match self.store.fetch(&full_path).await {
            Ok(body) => {
                debug!(path = %full_path, bytes = body.len(), "file content fetched");
                let inodes: std::sync::RwLockReadGuard<'_, InodeManager> =
                    self.inodes.read().unwrap();
                inodes.store_file_content(id, body.clone());
                Some(body)
            }
            Err(e) => {
                warn!(path = %full_path, error = %e, "file content fetch failed");
                None
            }
        }
    }

    /// Change the current directory.
    ///
    /// # Returns
    /// false (leaving cwd unchanged) unless the path resolves to a
    /// directory.
    pub fn cd(&self, path: &str) -> bool {
        let Some(id) = self.resolve_path(path) else {
            return false;
        };
        let is_dir: bool = {
            let inodes: std::sync::RwLockReadGuard<'_, InodeManager> =
                self.inodes.read().unwrap();
            inodes.kind_of(id) == Some(InodeKind::Directory)
        };
        if is_dir {
            *self.cwd.write().unwrap() = id;
        }
        is_dir
    }

    /// Get the kind of the inode at a path.
    pub fn stat(&self, path: &str) -> Option<InodeKind> {
        let id: InodeId = self.resolve_path(path)?;
        let inodes: std::sync::RwLockReadGuard<'_, InodeManager> = self.inodes.read().unwrap();
        inodes.kind_of(id)
    }

    /// Insert a file with pre-loaded content into an existing directory.
    ///
    /// # Arguments
    /// * `dir_path` - Path of the target directory
    /// * `name` - New file name
    /// * `content` - File body, cached immediately
    ///
    /// # Returns
    /// The new inode ID, or None if the directory does not exist.
    pub fn add_file(&self, dir_path: &str, name: &str, content: &str) -> Option<InodeId> {
        let dir: InodeId = self.resolve_path(dir_path)?;
        let inodes: std::sync::RwLockReadGuard<'_, InodeManager> = self.inodes.read().unwrap();
        inodes.add_preloaded_file(dir, name, content.to_string())
    }

    /// Current working directory as a path string.
    pub fn cwd_path(&self) -> String {
        let cwd: InodeId = *self.cwd.read().unwrap();
        let inodes: std::sync::RwLockReadGuard<'_, InodeManager> = self.inodes.read().unwrap();
        inodes.full_path(cwd).unwrap_or_else(|| "/".to_string())
    }

    /// The well-known home path.
    pub fn home_path(&self) -> &'static str {
        HOME_PATH
    }
}

impl std::fmt::Debug for FileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSystem")
            .field("cwd", &self.cwd_path())
            .field("initialized", &self.initialized.load(Ordering::SeqCst))
            .finish()
    }
}
