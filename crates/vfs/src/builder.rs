//! Builder for constructing the inode tree from a manifest.

use webterm_manifest::{Manifest, ManifestNode, NodeKind};

use crate::inode::{InodeId, InodeManager, ROOT_INODE};

/// Build an InodeManager from a manifest.
///
/// Children are attached in manifest order, which becomes listing
/// order. The map key is authoritative for sibling names.
pub fn build_from_manifest(manifest: &Manifest) -> InodeManager {
    let manager: InodeManager = InodeManager::new();

    if let Some(children) = &manifest.root.children {
        for (name, node) in children {
            add_node(&manager, ROOT_INODE, name, node);
        }
    }

    manager
}

/// Recursively instantiate a manifest node under a parent directory.
fn add_node(manager: &InodeManager, parent: InodeId, name: &str, node: &ManifestNode) {
    match node.kind {
        NodeKind::Directory => {
            let Some(id) = manager.add_directory(parent, name) else {
                return;
            };
            if let Some(children) = &node.children {
                for (child_name, child) in children {
                    add_node(manager, id, child_name, child);
                }
            }
        }
        NodeKind::File => {
            manager.add_file(parent, name, node.size.unwrap_or(0));
        }
    }
}
