//! Content retrieval for the virtual filesystem.

mod http;
mod store;

pub use http::HttpFetcher;
pub use store::{ContentStore, ManifestSource, MemoryContentStore, MemoryManifestSource};
