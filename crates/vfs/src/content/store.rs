//! Source traits for manifest and file-content retrieval.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use webterm_manifest::Manifest;

use crate::VfsError;

/// Trait for types that can fetch the content-tree manifest.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch and decode the manifest document.
    async fn fetch_manifest(&self) -> Result<Manifest, VfsError>;
}

/// Trait for types that can retrieve file bodies.
///
/// Implement this trait to integrate with different content backends
/// (HTTP content root, memory, etc.).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Retrieve the body of a file.
    ///
    /// # Arguments
    /// * `path` - Full virtual path of the file from the root
    ///
    /// # Returns
    /// The file body as text.
    async fn fetch(&self, path: &str) -> Result<String, VfsError>;
}

/// In-memory manifest source for testing.
#[derive(Debug)]
pub struct MemoryManifestSource {
    /// Raw manifest JSON, decoded on every fetch.
    json: String,
}

impl MemoryManifestSource {
    /// Create a source that serves the given manifest JSON.
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl ManifestSource for MemoryManifestSource {
    async fn fetch_manifest(&self) -> Result<Manifest, VfsError> {
        Ok(Manifest::decode(&self.json)?)
    }
}

/// In-memory content store for testing.
///
/// Counts fetches so caching behavior can be asserted on.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    /// Bodies keyed by full virtual path.
    content: HashMap<String, String>,
    /// Number of fetch calls served (hits and misses).
    fetches: AtomicUsize,
}

impl MemoryContentStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body to the store.
    ///
    /// # Arguments
    /// * `path` - Full virtual path (e.g. "/home/guest/about.md")
    /// * `body` - File body
    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.content.insert(path.into(), body.into());
    }

    /// Number of fetch calls made against this store.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn fetch(&self, path: &str) -> Result<String, VfsError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.content
            .get(path)
            .cloned()
            .ok_or_else(|| VfsError::ContentFetchFailed {
                path: path.to_string(),
                source: "path not found in memory store".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_fetch() {
        let mut store: MemoryContentStore = MemoryContentStore::new();
        store.insert("/a.txt", "hello");

        let body: String = store.fetch("/a.txt").await.unwrap();
        assert_eq!(body, "hello");
        assert_eq!(store.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_not_found() {
        let store: MemoryContentStore = MemoryContentStore::new();
        let result: Result<String, VfsError> = store.fetch("/missing.txt").await;
        assert!(matches!(result, Err(VfsError::ContentFetchFailed { .. })));
        assert_eq!(store.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_memory_manifest_source() {
        let source: MemoryManifestSource = MemoryManifestSource::new(
            r#"{"root": {"name": "/", "type": "directory", "children": {}}}"#,
        );
        let manifest: Manifest = source.fetch_manifest().await.unwrap();
        assert_eq!(manifest.file_count(), 0);
    }

    #[tokio::test]
    async fn test_memory_manifest_source_bad_json() {
        let source: MemoryManifestSource = MemoryManifestSource::new("{broken");
        let result: Result<Manifest, VfsError> = source.fetch_manifest().await;
        assert!(matches!(result, Err(VfsError::ManifestDecode(_))));
    }
}
