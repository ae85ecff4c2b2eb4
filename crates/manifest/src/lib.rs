//! Content-tree manifest model for the webterm virtual filesystem.
//!
//! The manifest is a single JSON document produced at build time by the
//! site generator: `{ "root": Node }` where each `Node` carries a name,
//! a kind ("file" or "directory"), an optional size, optional metadata,
//! and (for directories) an order-preserving `children` map. File bodies
//! are not part of the manifest; they are fetched lazily by the vfs.

pub mod error;

mod node;

pub use error::{ManifestError, ValidationError};
pub use node::{ManifestNode, NodeKind};

/// The whole content-tree manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    /// Root of the content tree (must be a directory).
    pub root: ManifestNode,
}

impl Manifest {
    /// Decode a manifest from a JSON string and validate it.
    ///
    /// # Errors
    /// Returns an error on malformed JSON or structural violations
    /// (a directory without `children`, a file with `children`).
    pub fn decode(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate the tree structure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.root.kind != NodeKind::Directory {
            return Err(ValidationError::RootNotDirectory {
                name: self.root.name.clone(),
            });
        }
        self.root.validate("")
    }

    /// Number of file nodes in the tree.
    pub fn file_count(&self) -> usize {
        self.root.file_count()
    }

    /// Total size of all file nodes in bytes.
    pub fn total_size(&self) -> u64 {
        self.root.total_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        let json: &str = r#"{
            "root": {
                "name": "/",
                "type": "directory",
                "children": {
                    "readme.md": {"name": "readme.md", "type": "file", "size": 120},
                    "home": {
                        "name": "home",
                        "type": "directory",
                        "children": {
                            "guest": {"name": "guest", "type": "directory", "children": {}}
                        }
                    }
                }
            }
        }"#;

        let manifest: Manifest = Manifest::decode(json).unwrap();
        assert_eq!(manifest.file_count(), 1);
        assert_eq!(manifest.total_size(), 120);
    }

    #[test]
    fn test_decode_preserves_child_order() {
        let json: &str = r#"{
            "root": {
                "name": "/",
                "type": "directory",
                "children": {
                    "zz.txt": {"name": "zz.txt", "type": "file", "size": 1},
                    "aa.txt": {"name": "aa.txt", "type": "file", "size": 1},
                    "mm.txt": {"name": "mm.txt", "type": "file", "size": 1}
                }
            }
        }"#;

        let manifest: Manifest = Manifest::decode(json).unwrap();
        let names: Vec<&String> = manifest.root.children.as_ref().unwrap().keys().collect();
        assert_eq!(names, ["zz.txt", "aa.txt", "mm.txt"]);
    }

    #[test]
    fn test_decode_rejects_file_root() {
        let json: &str = r#"{
            "root": {"name": "oops", "type": "file", "size": 1}
        }"#;
        let result: Result<Manifest, ManifestError> = Manifest::decode(json);
        assert!(matches!(result, Err(ManifestError::Validation(_))));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let result: Result<Manifest, ManifestError> = Manifest::decode("{not json");
        assert!(matches!(result, Err(ManifestError::JsonParse(_))));
    }

    #[test]
    fn test_decode_with_metadata() {
        let json: &str = r#"{
            "root": {
                "name": "/",
                "type": "directory",
                "children": {
                    "post.md": {
                        "name": "post.md",
                        "type": "file",
                        "size": 42,
                        "metadata": {"title": "Hello", "tags": ["intro"]}
                    }
                }
            }
        }"#;

        let manifest: Manifest = Manifest::decode(json).unwrap();
        let post: &ManifestNode = &manifest.root.children.as_ref().unwrap()["post.md"];
        assert!(post.metadata.is_some());
    }
}
