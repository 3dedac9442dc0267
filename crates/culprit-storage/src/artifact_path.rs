//! Resolves a build's suggestions artifact inside its artifact tree.
//!
//! Layout: `<artifacts-root>/.teamcity/culprit/suggestions.json`. The
//! hidden server directory must already exist; the plugin directory and
//! file are created on demand in write mode only.

use std::fs;
use std::path::PathBuf;

use culprit_core::constants::{ARTIFACT_DIRECTORY, ARTIFACT_FILENAME, HIDDEN_ARTIFACTS_DIRECTORY};
use culprit_core::types::builds::Build;
use culprit_core::StorageError;

/// Resolve for writing, creating the plugin directory and an empty file
/// if needed.
///
/// A missing hidden artifacts directory means the build has no artifact
/// tree at all; that is an environment problem and is returned as
/// [`StorageError::ArtifactRootMissing`] instead of being papered over.
pub fn create(build: &Build) -> Result<PathBuf, StorageError> {
    let hidden = build.artifacts_dir.join(HIDDEN_ARTIFACTS_DIRECTORY);
    if !hidden.is_dir() {
        return Err(StorageError::ArtifactRootMissing { build_id: build.id, path: hidden });
    }

    let plugin_dir = hidden.join(ARTIFACT_DIRECTORY);
    if !plugin_dir.exists() {
        fs::create_dir(&plugin_dir)?;
    }

    let file = plugin_dir.join(ARTIFACT_FILENAME);
    if !file.exists() {
        fs::File::create(&file)?;
    }
    Ok(file)
}

/// Resolve for reading. `None` when any component is absent, which just
/// means no suggestions were ever persisted for this build.
pub fn existing(build: &Build) -> Option<PathBuf> {
    let file = build
        .artifacts_dir
        .join(HIDDEN_ARTIFACTS_DIRECTORY)
        .join(ARTIFACT_DIRECTORY)
        .join(ARTIFACT_FILENAME);
    if file.is_file() {
        Some(file)
    } else {
        tracing::debug!(
            build_id = %build.id,
            path = %file.display(),
            "no suggestions artifact for build"
        );
        None
    }
}
