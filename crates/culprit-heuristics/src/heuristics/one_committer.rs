//! Single-committer heuristic.
//!
//! If exactly one person committed into the build, they get every test
//! run and every supported-everywhere problem. Any ambiguity in the
//! change set makes the whole heuristic inapplicable for the build.

use std::sync::Arc;

use culprit_core::problems;
use culprit_core::traits::changes::ChangeAnalyzer;
use culprit_core::types::builds::Build;
use culprit_core::{NotApplicable, ResponsibilityRecord, SuggestionSet, UserRef};

use crate::context::HeuristicContext;
use crate::heuristic::{Heuristic, HeuristicVerdict};

pub struct OneCommitterHeuristic {
    analyzer: Arc<dyn ChangeAnalyzer>,
}

impl OneCommitterHeuristic {
    pub fn new(analyzer: Arc<dyn ChangeAnalyzer>) -> Self {
        Self { analyzer }
    }

    fn only_committer(&self, ctx: &HeuristicContext<'_>) -> Result<Option<UserRef>, NotApplicable> {
        let mut responsible: Option<UserRef> = None;
        for change in &ctx.build().changes {
            let probable = match self.analyzer.only_committer(change, ctx.users_to_ignore())? {
                Some(user) => user,
                None => continue,
            };
            if let Some(existing) = &responsible {
                if existing.id != probable.id {
                    return Err(NotApplicable::because(
                        "there is more than one committer in the build's changes",
                    ));
                }
            }
            responsible = Some(probable);
        }
        Ok(responsible)
    }
}

impl Heuristic for OneCommitterHeuristic {
    fn id(&self) -> &'static str {
        "OneCommitter"
    }

    fn evaluate(&self, ctx: &HeuristicContext<'_>) -> HeuristicVerdict {
        let mut result = SuggestionSet::new();

        let responsible = match self.only_committer(ctx) {
            Ok(Some(user)) => user,
            Ok(None) => return HeuristicVerdict::applicable(result),
            Err(not_applicable) => {
                return HeuristicVerdict::not_applicable(not_applicable.reason)
            }
        };

        if compilation_error_fixed(ctx.build()) {
            tracing::debug!(
                build_id = %ctx.build().id,
                "compilation errors fixed in this build; single-committer signal suppressed"
            );
            return HeuristicVerdict::applicable(result);
        }

        let record = ResponsibilityRecord::new(responsible, "was the only committer to the build");
        for run in ctx.test_runs() {
            result.add_test_responsibility(run, record.clone());
        }
        for problem in ctx.build_problems() {
            if problems::is_supported_everywhere(&problem.problem_type) {
                result.add_problem_responsibility(problem, record.clone());
            }
        }
        HeuristicVerdict::applicable(result)
    }
}

/// The previous finished build failed to compile and this one does not.
/// Whoever fixed the compilation is a better suspect than the sole
/// committer, so the signal is unreliable right after such a fix.
fn compilation_error_fixed(build: &Build) -> bool {
    match &build.previous_finished {
        Some(previous) => {
            build.compilation_error_count == 0 && previous.compilation_error_count > 0
        }
        None => false,
    }
}
