//! VCS modifications attached to a build.

use smallvec::SmallVec;

use super::users::UserRef;

/// One VCS modification in the build's change delta.
///
/// `committers` are the server users the VCS author resolved to; empty
/// means the author is unknown to the server. Almost always one entry.
#[derive(Debug, Clone)]
pub struct VcsChange {
    /// Display version of the commit, used in log and reason text.
    pub version: String,
    pub committers: SmallVec<[UserRef; 1]>,
    /// Paths changed by this modification, relative to the VCS root.
    pub changed_files: Vec<String>,
}

impl VcsChange {
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into(), committers: SmallVec::new(), changed_files: Vec::new() }
    }

    pub fn by(mut self, committer: UserRef) -> Self {
        self.committers.push(committer);
        self
    }

    pub fn touching(mut self, file: impl Into<String>) -> Self {
        self.changed_files.push(file.into());
        self
    }
}
