//! Wire format of the per-build suggestions artifact.
//!
//! ```json
//! {
//!   "serverUUID": "<installation id>",
//!   "suggestions": [
//!     { "testNameId": "100", "investigatorId": "239", "reason": "..." }
//!   ]
//! }
//! ```
//!
//! The embedded server UUID pins the file to one installation; artifact
//! directories restored from another server fail the check and the whole
//! file is treated as absent.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use culprit_core::traits::identity::ServerIdentity;
use culprit_core::StorageError;
use serde::{Deserialize, Serialize};

/// One persisted suggestion, keyed by the stable test identity so it
/// survives reruns of the same test. `investigator_id` is either a
/// numeric user id or the filtered sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSuggestionEntry {
    #[serde(rename = "testNameId")]
    pub test_name_id: String,
    #[serde(rename = "investigatorId")]
    pub investigator_id: String,
    pub reason: String,
}

impl PersistedSuggestionEntry {
    pub fn new(
        test_name_id: impl Into<String>,
        investigator_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            test_name_id: test_name_id.into(),
            investigator_id: investigator_id.into(),
            reason: reason.into(),
        }
    }
}

/// Full payload of one artifact file. Fields are optional on the way in
/// so hand-edited or truncated files degrade to "invalid" instead of
/// failing deserialization outright.
#[derive(Debug, Serialize, Deserialize)]
struct ArtifactContent {
    #[serde(rename = "serverUUID")]
    server_uuid: Option<String>,
    suggestions: Option<Vec<PersistedSuggestionEntry>>,
}

/// Reads and writes artifact files, enforcing the server UUID check.
pub struct SuggestionsCodec {
    identity: Arc<dyn ServerIdentity>,
}

impl SuggestionsCodec {
    pub fn new(identity: Arc<dyn ServerIdentity>) -> Self {
        Self { identity }
    }

    pub fn write(
        &self,
        path: &Path,
        suggestions: Vec<PersistedSuggestionEntry>,
    ) -> Result<(), StorageError> {
        let content = ArtifactContent {
            server_uuid: Some(self.identity.server_uuid()),
            suggestions: Some(suggestions),
        };
        let body = serde_json::to_vec(&content)?;
        fs::write(path, body)?;
        Ok(())
    }

    /// Read the entries of one artifact file.
    ///
    /// Never fails: a missing or empty file, unreadable bytes, a parse
    /// error, missing fields, or a foreign server UUID all come back as
    /// an empty list (the cache is simply unusable this round).
    pub fn read(&self, path: &Path) -> Vec<PersistedSuggestionEntry> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "failed to read suggestions artifact"
                );
                return Vec::new();
            }
        };
        if bytes.is_empty() {
            return Vec::new();
        }

        let content: ArtifactContent = match serde_json::from_slice(&bytes) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "unparseable suggestions artifact");
                return Vec::new();
            }
        };
        self.validated(path, content).unwrap_or_default()
    }

    fn validated(
        &self,
        path: &Path,
        content: ArtifactContent,
    ) -> Option<Vec<PersistedSuggestionEntry>> {
        let server_uuid = content.server_uuid?;
        let suggestions = content.suggestions?;

        let expected = self.identity.server_uuid();
        if server_uuid != expected {
            tracing::warn!(
                path = %path.display(),
                expected = %expected,
                found = %server_uuid,
                "suggestions artifact belongs to another server installation"
            );
            return None;
        }
        Some(suggestions)
    }
}
