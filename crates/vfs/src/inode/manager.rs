//! Inode arena for allocating and tracking inodes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::dir::InodeDir;
use super::file::InodeFile;
use super::types::{Inode, InodeId, InodeKind, ROOT_INODE};

/// Arena of inodes addressed by opaque IDs.
///
/// Parent links are stored as IDs rather than references, so the tree
/// has no cyclic ownership; the root's parent ID is its own ID.
pub struct InodeManager {
    /// Next inode ID to allocate.
    next_id: AtomicU64,
    /// All inodes by ID.
    inodes: RwLock<HashMap<InodeId, Arc<dyn Inode>>>,
}

impl InodeManager {
    /// Create a new arena holding only the root directory.
    pub fn new() -> Self {
        let manager = Self {
            next_id: AtomicU64::new(ROOT_INODE + 1),
            inodes: RwLock::new(HashMap::new()),
        };

        let root: Arc<InodeDir> = Arc::new(InodeDir::new(ROOT_INODE, ROOT_INODE, String::new()));

        {
            let mut inodes: std::sync::RwLockWriteGuard<'_, HashMap<InodeId, Arc<dyn Inode>>> =
                manager.inodes.write().unwrap();
            inodes.insert(ROOT_INODE, root);
        }

        manager
    }

    /// Allocate a new inode ID.
    fn allocate_id(&self) -> InodeId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Get an inode by ID.
    pub fn get(&self, id: InodeId) -> Option<Arc<dyn Inode>> {
        let inodes: std::sync::RwLockReadGuard<'_, HashMap<InodeId, Arc<dyn Inode>>> =
            self.inodes.read().unwrap();
        inodes.get(&id).cloned()
    }

    /// Get the root directory.
    pub fn root(&self) -> Arc<dyn Inode> {
        self.get(ROOT_INODE).expect("Root inode must exist")
    }

    /// Get the kind of an inode.
    pub fn kind_of(&self, id: InodeId) -> Option<InodeKind> {
        Some(self.get(id)?.kind())
    }

    /// Get the parent ID of an inode (the root's parent is itself).
    pub fn parent_of(&self, id: InodeId) -> Option<InodeId> {
        Some(self.get(id)?.parent_id())
    }

    /// Look up a child inode ID by name within a directory.
    ///
    /// # Returns
    /// None if `dir` is missing, not a directory, or has no such child.
    pub fn child_of(&self, dir: InodeId, name: &str) -> Option<InodeId> {
        let inode: Arc<dyn Inode> = self.get(dir)?;
        let dir: &InodeDir = inode.as_any().downcast_ref::<InodeDir>()?;
        dir.get_child(name)
    }

    /// Get child names of a directory in insertion (manifest) order.
    pub fn children_of(&self, dir: InodeId) -> Option<Vec<String>> {
        let inode: Arc<dyn Inode> = self.get(dir)?;
        let dir: &InodeDir = inode.as_any().downcast_ref::<InodeDir>()?;
        Some(dir.child_names())
    }

    /// Add a directory inode under an existing directory.
    ///
    /// # Returns
    /// The new inode ID, or None if the parent is missing or not a
    /// directory.
    pub fn add_directory(&self, parent_id: InodeId, name: &str) -> Option<InodeId> {
        let id: InodeId = self.allocate_id();
        let dir: Arc<InodeDir> = Arc::new(InodeDir::new(id, parent_id, name.to_string()));
        self.attach(parent_id, name, id, dir)
    }

    /// Add a file inode with unloaded content under an existing directory.
    ///
    /// # Arguments
    /// * `parent_id` - Parent directory inode ID
    /// * `name` - File name
    /// * `size` - File size in bytes from the manifest
    pub fn add_file(&self, parent_id: InodeId, name: &str, size: u64) -> Option<InodeId> {
        let id: InodeId = self.allocate_id();
        let file: Arc<InodeFile> = Arc::new(InodeFile::new(id, parent_id, name.to_string(), size));
        self.attach(parent_id, name, id, file)
    }

    /// Add a file inode with content already loaded.
    pub fn add_preloaded_file(
        &self,
        parent_id: InodeId,
        name: &str,
        content: String,
    ) -> Option<InodeId> {
        let id: InodeId = self.allocate_id();
        let file: Arc<InodeFile> =
            Arc::new(InodeFile::preloaded(id, parent_id, name.to_string(), content));
        self.attach(parent_id, name, id, file)
    }

    /// Register an inode and link it into its parent's child map.
    fn attach(
        &self,
        parent_id: InodeId,
        name: &str,
        id: InodeId,
        inode: Arc<dyn Inode>,
    ) -> Option<InodeId> {
        let parent: Arc<dyn Inode> = self.get(parent_id)?;
        let parent_dir: &InodeDir = parent.as_any().downcast_ref::<InodeDir>()?;
        parent_dir.add_child(name.to_string(), id);

        let mut inodes: std::sync::RwLockWriteGuard<'_, HashMap<InodeId, Arc<dyn Inode>>> =
            self.inodes.write().unwrap();
        inodes.insert(id, inode);
        Some(id)
    }

    /// Get the cached content of a file inode.
    ///
    /// # Returns
    /// The outer None means the inode is missing or not a file; the
    /// inner Option reports whether the content has been loaded.
    pub fn file_content(&self, id: InodeId) -> Option<Option<String>> {
        let inode: Arc<dyn Inode> = self.get(id)?;
        let file: &InodeFile = inode.as_any().downcast_ref::<InodeFile>()?;
        Some(file.content())
    }

    /// Cache fetched content on a file inode. A no-op for non-files and
    /// for files that are already loaded.
    pub fn store_file_content(&self, id: InodeId, body: String) {
        if let Some(inode) = self.get(id) {
            if let Some(file) = inode.as_any().downcast_ref::<InodeFile>() {
                file.fill(body);
            }
        }
    }

    /// Compute the full path of an inode by walking parent links up to
    /// (but excluding) the sentinel root.
    ///
    /// # Returns
    /// "/" for the root, "/a/b" style paths otherwise; None for an
    /// unknown ID.
    pub fn full_path(&self, id: InodeId) -> Option<String> {
        let mut segments: Vec<String> = Vec::new();
        let mut current: InodeId = id;

        while current != ROOT_INODE {
            let inode: Arc<dyn Inode> = self.get(current)?;
            segments.push(inode.name().to_string());
            current = inode.parent_id();
        }

        if segments.is_empty() {
            return Some("/".to_string());
        }
        segments.reverse();
        Some(format!("/{}", segments.join("/")))
    }

    /// Get the total number of inodes.
    pub fn inode_count(&self) -> usize {
        let inodes: std::sync::RwLockReadGuard<'_, HashMap<InodeId, Arc<dyn Inode>>> =
            self.inodes.read().unwrap();
        inodes.len()
    }
}

impl Default for InodeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InodeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InodeManager")
            .field("inode_count", &self.inode_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_has_root() {
        let manager: InodeManager = InodeManager::new();
        let root: Arc<dyn Inode> = manager.root();
        assert_eq!(root.id(), ROOT_INODE);
        assert_eq!(root.parent_id(), ROOT_INODE);
        assert_eq!(root.kind(), InodeKind::Directory);
        assert_eq!(manager.full_path(ROOT_INODE), Some("/".to_string()));
    }

    #[test]
    fn test_add_and_walk() {
        let manager: InodeManager = InodeManager::new();
        let home: InodeId = manager.add_directory(ROOT_INODE, "home").unwrap();
        let guest: InodeId = manager.add_directory(home, "guest").unwrap();
        let file: InodeId = manager.add_file(guest, "notes.txt", 64).unwrap();

        assert_eq!(manager.child_of(ROOT_INODE, "home"), Some(home));
        assert_eq!(manager.child_of(home, "guest"), Some(guest));
        assert_eq!(manager.parent_of(guest), Some(home));
        assert_eq!(manager.kind_of(file), Some(InodeKind::File));
        assert_eq!(manager.full_path(file), Some("/home/guest/notes.txt".to_string()));
        assert_eq!(manager.inode_count(), 4);
    }

    #[test]
    fn test_attach_rejects_file_parent() {
        let manager: InodeManager = InodeManager::new();
        let file: InodeId = manager.add_file(ROOT_INODE, "a.txt", 1).unwrap();

        assert!(manager.add_file(file, "b.txt", 1).is_none());
        assert!(manager.add_directory(file, "sub").is_none());
    }

    #[test]
    fn test_file_content_cache() {
        let manager: InodeManager = InodeManager::new();
        let file: InodeId = manager.add_file(ROOT_INODE, "a.txt", 5).unwrap();

        assert_eq!(manager.file_content(file), Some(None));
        manager.store_file_content(file, "hello".to_string());
        assert_eq!(manager.file_content(file), Some(Some("hello".to_string())));

        // Directories have no content.
        assert_eq!(manager.file_content(ROOT_INODE), None);
    }

    #[test]
    fn test_preloaded_file() {
        let manager: InodeManager = InodeManager::new();
        let file: InodeId = manager
            .add_preloaded_file(ROOT_INODE, "seed.txt", "body".to_string())
            .unwrap();

        assert_eq!(manager.file_content(file), Some(Some("body".to_string())));
    }

    #[test]
    fn test_child_lookup_on_file_fails() {
        let manager: InodeManager = InodeManager::new();
        let file: InodeId = manager.add_file(ROOT_INODE, "a.txt", 1).unwrap();

        assert_eq!(manager.child_of(file, "anything"), None);
        assert_eq!(manager.children_of(file), None);
    }
}
