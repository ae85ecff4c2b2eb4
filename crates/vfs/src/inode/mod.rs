//! Inode types for the virtual filesystem.

mod dir;
mod file;
mod manager;
mod types;

pub use dir::InodeDir;
pub use file::InodeFile;
pub use manager::InodeManager;
pub use types::{Inode, InodeId, InodeKind, ROOT_INODE};
