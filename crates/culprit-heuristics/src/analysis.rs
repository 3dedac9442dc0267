//! Default text-matching change analyzer.
//!
//! Attribution rules for a single modification: a commit with no known
//! server user or with several authors cannot be trusted; a file is
//! "problematic" when its name stem occurs in the diagnostic text.

use culprit_core::traits::changes::{ChangeAnalyzer, FileBlame};
use culprit_core::types::collections::FxHashSet;
use culprit_core::types::vcs::VcsChange;
use culprit_core::{NotApplicable, UserRef};

/// Stems shorter than this match too many unrelated diagnostics.
const MIN_FILE_NAME_LENGTH: usize = 4;

/// [`ChangeAnalyzer`] implementation used when the embedder does not
/// supply its own.
pub struct DefaultChangeAnalyzer;

impl ChangeAnalyzer for DefaultChangeAnalyzer {
    fn only_committer(
        &self,
        change: &VcsChange,
        users_to_ignore: &FxHashSet<String>,
    ) -> Result<Option<UserRef>, NotApplicable> {
        if change.committers.is_empty() {
            return Err(NotApplicable::because(format!(
                "commit {} has no known user",
                change.version
            )));
        }
        let mut visible =
            change.committers.iter().filter(|user| !users_to_ignore.contains(&user.username));
        match (visible.next(), visible.next()) {
            (None, _) => Ok(None),
            (Some(only), None) => Ok(Some(only.clone())),
            (Some(_), Some(_)) => Err(NotApplicable::because(format!(
                "commit {} has several authors",
                change.version
            ))),
        }
    }

    fn problematic_file(
        &self,
        change: &VcsChange,
        problem_text: &str,
        users_to_ignore: &FxHashSet<String>,
    ) -> Result<Option<FileBlame>, NotApplicable> {
        if change.committers.len() != 1 {
            return Err(NotApplicable::because(format!(
                "commit {} cannot be attributed to a single user",
                change.version
            )));
        }
        let committer = &change.committers[0];
        if users_to_ignore.contains(&committer.username) {
            return Ok(None);
        }

        let text = problem_text.to_lowercase();
        for path in &change.changed_files {
            if is_problematic_file(path, &text) {
                return Ok(Some(FileBlame { user: committer.clone(), path: path.clone() }));
            }
        }
        Ok(None)
    }
}

fn is_problematic_file(path: &str, problem_text_lowercase: &str) -> bool {
    let stem = file_name_stem(path);
    if stem.len() < MIN_FILE_NAME_LENGTH {
        return false;
    }
    problem_text_lowercase.contains(&stem.to_lowercase())
}

/// File name without directories and without the last extension,
/// whichever separator style the VCS reported.
fn file_name_stem(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}
