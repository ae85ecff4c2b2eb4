//! File inode implementation.

use std::any::Any;
use std::sync::RwLock;

use super::types::{Inode, InodeId, InodeKind};

/// File inode representing a regular file.
///
/// Content starts out unloaded and is filled exactly once, after a
/// successful fetch; it never reverts to the unloaded state.
#[derive(Debug)]
pub struct InodeFile {
    /// Inode ID.
    id: InodeId,
    /// Parent directory inode ID.
    parent_id: InodeId,
    /// File name.
    name: String,
    /// File size in bytes (from the manifest, informational).
    size: u64,
    /// Cached content, None until fetched.
    content: RwLock<Option<String>>,
}

impl InodeFile {
    /// Create a new file inode with unloaded content.
    ///
    /// # Arguments
    /// * `id` - Inode ID
    /// * `parent_id` - Parent directory inode ID
    /// * `name` - File name
    /// * `size` - File size in bytes
    pub fn new(id: InodeId, parent_id: InodeId, name: String, size: u64) -> Self {
        Self {
            id,
            parent_id,
            name,
            size,
            content: RwLock::new(None),
        }
    }

    /// Create a file inode with content already loaded.
    ///
    /// Used to seed entries without a network round trip.
    pub fn preloaded(id: InodeId, parent_id: InodeId, name: String, content: String) -> Self {
        Self {
            id,
            parent_id,
            name,
            size: content.len() as u64,
            content: RwLock::new(Some(content)),
        }
    }

    /// Get the cached content, if loaded.
    pub fn content(&self) -> Option<String> {
        let content: std::sync::RwLockReadGuard<'_, Option<String>> =
            self.content.read().unwrap();
        content.clone()
    }

    /// Whether the content has been loaded.
    pub fn is_loaded(&self) -> bool {
        let content: std::sync::RwLockReadGuard<'_, Option<String>> =
            self.content.read().unwrap();
        content.is_some()
    }

    /// Fill the content cache. A no-op if already loaded; content only
    /// ever transitions from unloaded to loaded.
    pub fn fill(&self, body: String) {
        let mut content: std::sync::RwLockWriteGuard<'_, Option<String>> =
            self.content.write().unwrap();
        if content.is_none() {
            *content = Some(body);
        }
    }
}

impl Inode for InodeFile {
    fn id(&self) -> InodeId {
        self.id
    }

    fn parent_id(&self) -> InodeId {
        self.parent_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> InodeKind {
        InodeKind::File
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
