//! Broken-file heuristic.
//!
//! Matches each target's diagnostic text against the files changed in
//! the build. Attribution is per target: an untrustworthy modification
//! or an ambiguous match declines that one target and moves on.

use std::sync::Arc;

use culprit_core::traits::changes::{ChangeAnalyzer, FileBlame};
use culprit_core::traits::problem_text::ProblemTextSource;
use culprit_core::{NotApplicable, ResponsibilityRecord, SuggestionSet};

use crate::context::HeuristicContext;
use crate::heuristic::{Heuristic, HeuristicVerdict};

pub struct BrokenFileHeuristic {
    problem_text: Arc<dyn ProblemTextSource>,
    analyzer: Arc<dyn ChangeAnalyzer>,
}

impl BrokenFileHeuristic {
    pub fn new(
        problem_text: Arc<dyn ProblemTextSource>,
        analyzer: Arc<dyn ChangeAnalyzer>,
    ) -> Self {
        Self { problem_text, analyzer }
    }

    /// The one user whose change matched `text`, with their last matched
    /// file. Two different users matching means ambiguous blame.
    fn find_broken_file(
        &self,
        ctx: &HeuristicContext<'_>,
        text: &str,
    ) -> Result<Option<FileBlame>, NotApplicable> {
        let mut found: Option<FileBlame> = None;
        for change in &ctx.build().changes {
            let Some(blame) =
                self.analyzer.problematic_file(change, text, ctx.users_to_ignore())?
            else {
                continue;
            };
            if let Some(existing) = &found {
                if existing.user.id != blame.user.id {
                    return Err(NotApplicable::because(
                        "suspicious files were changed by more than one user",
                    ));
                }
            }
            found = Some(blame);
        }
        Ok(found)
    }

    fn blame_for_text(
        &self,
        ctx: &HeuristicContext<'_>,
        text: &str,
        target: &str,
    ) -> Option<FileBlame> {
        match self.find_broken_file(ctx, text) {
            Ok(found) => found,
            Err(not_applicable) => {
                tracing::debug!(
                    build_id = %ctx.build().id,
                    target = %target,
                    reason = %not_applicable.reason,
                    "file matching declined for target"
                );
                None
            }
        }
    }
}

impl Heuristic for BrokenFileHeuristic {
    fn id(&self) -> &'static str {
        "BrokenFile"
    }

    fn evaluate(&self, ctx: &HeuristicContext<'_>) -> HeuristicVerdict {
        let mut result = SuggestionSet::new();

        for run in ctx.test_runs() {
            let Some(text) = self.problem_text.test_run_text(run) else { continue };
            if let Some(blame) = self.blame_for_text(ctx, &text, &run.test_name) {
                result.add_test_responsibility(run, broken_file_record(blame));
            }
        }

        for problem in ctx.build_problems() {
            let Some(text) = self.problem_text.build_problem_text(problem) else { continue };
            if let Some(blame) = self.blame_for_text(ctx, &text, &problem.problem_type) {
                result.add_problem_responsibility(problem, broken_file_record(blame));
            }
        }

        HeuristicVerdict::applicable(result)
    }
}

fn broken_file_record(blame: FileBlame) -> ResponsibilityRecord {
    let description = format!("changed the suspicious file \"{}\"", blame.path);
    ResponsibilityRecord::new(blame.user, description)
}
