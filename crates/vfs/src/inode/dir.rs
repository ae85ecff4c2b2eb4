//! Directory inode implementation.

use std::any::Any;
use std::sync::RwLock;

use indexmap::IndexMap;

use super::types::{Inode, InodeId, InodeKind};

/// Directory inode representing a directory.
///
/// Children are kept in insertion order, which mirrors manifest order
/// and drives listing order.
#[derive(Debug)]
pub struct InodeDir {
    /// Inode ID.
    id: InodeId,
    /// Parent directory inode ID.
    parent_id: InodeId,
    /// Directory name.
    name: String,
    /// Child entries: name → inode ID, insertion-ordered.
    children: RwLock<IndexMap<String, InodeId>>,
}

impl InodeDir {
    /// Create a new directory inode.
    ///
    /// # Arguments
    /// * `id` - Inode ID
    /// * `parent_id` - Parent directory inode ID
    /// * `name` - Directory name
    pub fn new(id: InodeId, parent_id: InodeId, name: String) -> Self {
        Self {
            id,
            parent_id,
            name,
            children: RwLock::new(IndexMap::new()),
        }
    }

    /// Add a child entry to this directory.
    ///
    /// # Arguments
    /// * `name` - Child entry name
    /// * `id` - Child inode ID
    pub fn add_child(&self, name: String, id: InodeId) {
        let mut children: std::sync::RwLockWriteGuard<'_, IndexMap<String, InodeId>> =
            self.children.write().unwrap();
        children.insert(name, id);
    }

    /// Get a child inode ID by name.
    ///
    /// # Arguments
    /// * `name` - Child entry name
    ///
    /// # Returns
    /// The child inode ID if found.
    pub fn get_child(&self, name: &str) -> Option<InodeId> {
        let children: std::sync::RwLockReadGuard<'_, IndexMap<String, InodeId>> =
            self.children.read().unwrap();
        children.get(name).copied()
    }

    /// Get all child names in insertion order.
    pub fn child_names(&self) -> Vec<String> {
        let children: std::sync::RwLockReadGuard<'_, IndexMap<String, InodeId>> =
            self.children.read().unwrap();
        children.keys().cloned().collect()
    }

    /// Get the number of children.
    pub fn child_count(&self) -> usize {
        let children: std::sync::RwLockReadGuard<'_, IndexMap<String, InodeId>> =
            self.children.read().unwrap();
        children.len()
    }
}

impl Inode for InodeDir {
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
        InodeKind::Directory
    }

    fn size(&self) -> u64 {
        0
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
