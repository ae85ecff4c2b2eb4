//! Error types for manifest operations.

use thiserror::Error;

/// Errors that can occur while decoding a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Structural validation errors for manifest nodes.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Directory '{path}' must have a 'children' map")]
    DirectoryWithoutChildren { path: String },

    #[error("File '{path}' cannot have a 'children' map")]
    FileWithChildren { path: String },

    #[error("Manifest root must be a directory, got a file named '{name}'")]
    RootNotDirectory { name: String },
}
