//! Storage-layer errors for suggestion and statistics persistence.

use std::path::PathBuf;

use crate::types::identifiers::BuildId;

/// Errors that can occur in the storage layer.
///
/// Suggestion persistence downgrades `Io`/`Encode` to a warning and acts
/// as a no-op; statistics persistence propagates them. `ArtifactRootMissing`
/// is a precondition violation and always propagates.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("artifact root {path} is missing for build {build_id}")]
    ArtifactRootMissing { build_id: BuildId, path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding failed: {message}")]
    Encode { message: String },
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Encode { message: err.to_string() }
    }
}
