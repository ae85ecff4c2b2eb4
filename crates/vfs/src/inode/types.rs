//! Core inode types and traits.

use std::any::Any;

/// Unique identifier for an inode.
pub type InodeId = u64;

/// Root directory inode ID. The root is its own parent, terminating
/// upward traversal.
pub const ROOT_INODE: InodeId = 1;

/// Kind of inode entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InodeKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// Common trait for all inode types.
pub trait Inode: Send + Sync + std::fmt::Debug {
    /// Get the inode ID.
    fn id(&self) -> InodeId;

    /// Get the parent inode ID (the root returns its own ID).
    fn parent_id(&self) -> InodeId;

    /// Get the entry name (empty for the root).
    fn name(&self) -> &str;

    /// Get the inode kind.
    fn kind(&self) -> InodeKind;

    /// Get the size in bytes (from the manifest, informational).
    fn size(&self) -> u64;

    /// Downcast to Any for type-safe downcasting.
    fn as_any(&self) -> &dyn Any;
}
