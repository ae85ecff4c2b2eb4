//! HTTP adapter for manifest and content retrieval.
//!
//! The manifest is served as a single JSON document; file bodies live
//! under a fixed content root, keyed by the inode's full virtual path.
//! A GET for "/home/guest/about.md" with content root
//! "https://example.com/content" hits
//! "https://example.com/content/home/guest/about.md".

use async_trait::async_trait;

use webterm_manifest::Manifest;

use super::{ContentStore, ManifestSource};
use crate::VfsError;

/// Reqwest-backed fetcher implementing both source traits.
pub struct HttpFetcher {
    /// Shared HTTP client.
    client: reqwest::Client,
    /// Absolute URL of the manifest document.
    manifest_url: String,
    /// URL prefix for file bodies, without a trailing slash.
    content_root: String,
}

impl HttpFetcher {
    /// Create a new fetcher.
    ///
    /// # Arguments
    /// * `manifest_url` - Absolute URL of the manifest JSON
    /// * `content_root` - URL prefix prepended to virtual paths
    pub fn new(manifest_url: impl Into<String>, content_root: impl Into<String>) -> Self {
        let mut content_root: String = content_root.into();
        while content_root.ends_with('/') {
            content_root.pop();
        }
        Self {
            client: reqwest::Client::new(),
            manifest_url: manifest_url.into(),
            content_root,
        }
    }

    /// GET a URL and return the body text; non-2xx is an error.
    async fn get_text(&self, url: &str) -> Result<String, VfsError> {
        let response: reqwest::Response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| VfsError::ContentFetchFailed {
                path: url.to_string(),
                source: e.into(),
            })?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            return Err(VfsError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| VfsError::ContentFetchFailed {
            path: url.to_string(),
            source: e.into(),
        })
    }
}

#[async_trait]
impl ManifestSource for HttpFetcher {
    async fn fetch_manifest(&self) -> Result<Manifest, VfsError> {
        let body: String = self
            .get_text(&self.manifest_url)
            .await
            .map_err(|e| VfsError::ManifestFetchFailed(Box::new(e)))?;
        Ok(Manifest::decode(&body)?)
    }
}

#[async_trait]
impl ContentStore for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, VfsError> {
        let url: String = format!("{}{}", self.content_root, path);
        self.get_text(&url).await
    }
}
