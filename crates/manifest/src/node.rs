//! Manifest node types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind of a manifest node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// A single node in the content tree.
///
/// Directory nodes must carry `children`; file nodes must not. The
/// `children` map preserves document order, which is the order the
/// filesystem lists entries in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNode {
    /// Entry name (unique among siblings).
    pub name: String,

    /// Node kind ("file" or "directory").
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// File size in bytes (informational, files only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Free-form metadata attached by the generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// Child nodes keyed by name (directories only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<IndexMap<String, ManifestNode>>,
}

impl ManifestNode {
    /// Validate this node and all descendants.
    ///
    /// # Arguments
    /// * `path` - Path of this node from the root, used in error messages
    ///
    /// # Errors
    /// Returns the first structural violation found.
    pub fn validate(&self, path: &str) -> Result<(), ValidationError> {
        match self.kind {
            NodeKind::Directory => {
                let children: &IndexMap<String, ManifestNode> =
                    self.children
                        .as_ref()
                        .ok_or_else(|| ValidationError::DirectoryWithoutChildren {
                            path: path.to_string(),
                        })?;

                for (name, child) in children {
                    let child_path: String = format!("{}/{}", path, name);
                    child.validate(&child_path)?;
                }
                Ok(())
            }
            NodeKind::File => {
                if self.children.is_some() {
                    return Err(ValidationError::FileWithChildren {
                        path: path.to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Count file nodes in this subtree.
    pub fn file_count(&self) -> usize {
        match &self.children {
            None => usize::from(self.kind == NodeKind::File),
            Some(children) => children.values().map(ManifestNode::file_count).sum(),
        }
    }

    /// Sum of `size` over file nodes in this subtree.
    pub fn total_size(&self) -> u64 {
        match &self.children {
            None => self.size.unwrap_or(0),
            Some(children) => children.values().map(ManifestNode::total_size).sum(),
        }
    }
}
