//! Error types for the vfs crate.
//!
//! These errors exist at the fetch/decode boundary only. The public
//! `FileSystem` operations never surface them; they are caught and
//! converted into sentinel return values.

use thiserror::Error;

use webterm_manifest::ManifestError;

/// Errors that can occur while fetching the manifest or file content.
#[derive(Debug, Error)]
pub enum VfsError {
    #[error("Manifest fetch failed: {0}")]
    ManifestFetchFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Manifest decode failed: {0}")]
    ManifestDecode(#[from] ManifestError),

    #[error("Content fetch failed for {path}: {source}")]
    ContentFetchFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },
}
