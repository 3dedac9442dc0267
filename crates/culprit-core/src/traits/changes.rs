//! Per-modification change analysis interface.

use crate::errors::not_applicable::NotApplicable;
use crate::types::collections::FxHashSet;
use crate::types::users::UserRef;
use crate::types::vcs::VcsChange;

/// A changed file attributed to the user who touched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlame {
    pub user: UserRef,
    pub path: String,
}

/// Attribution analysis of a single VCS modification.
///
/// `Err(NotApplicable)` means the modification cannot be trusted for
/// attribution at all (unknown author, several authors in one commit);
/// `Ok(None)` means there is simply nothing to report for it.
pub trait ChangeAnalyzer: Send + Sync {
    /// The only non-ignored committer of `change`, if there is exactly
    /// one. `Ok(None)` when every committer is in the ignore set.
    fn only_committer(
        &self,
        change: &VcsChange,
        users_to_ignore: &FxHashSet<String>,
    ) -> Result<Option<UserRef>, NotApplicable>;

    /// Whether `change` touched a file mentioned in `problem_text`, and
    /// who to blame for it. At most one file per modification is
    /// reported.
    fn problematic_file(
        &self,
        change: &VcsChange,
        problem_text: &str,
        users_to_ignore: &FxHashSet<String>,
    ) -> Result<Option<FileBlame>, NotApplicable>;
}
