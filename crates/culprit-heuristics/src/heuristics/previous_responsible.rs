//! Previous-responsible heuristic.
//!
//! Whoever was held responsible for the same test or problem type before
//! is the prime suspect again, provided they actually committed into
//! this build.

use std::sync::Arc;

use culprit_core::problems;
use culprit_core::traits::investigations::InvestigationHistory;
use culprit_core::{ResponsibilityRecord, SuggestionSet, UserRef};

use crate::context::HeuristicContext;
use crate::heuristic::{Heuristic, HeuristicVerdict};

pub struct PreviousResponsibleHeuristic {
    investigations: Arc<dyn InvestigationHistory>,
}

impl PreviousResponsibleHeuristic {
    pub fn new(investigations: Arc<dyn InvestigationHistory>) -> Self {
        Self { investigations }
    }

    fn is_valid_candidate(&self, user: &UserRef, ctx: &HeuristicContext<'_>) -> bool {
        if ctx.users_to_ignore().contains(&user.username) {
            tracing::debug!(
                build_id = %ctx.build().id,
                username = %user.username,
                "previous responsible skipped (ignored)"
            );
            return false;
        }
        if !ctx.committer_ids().contains(&user.id) {
            tracing::debug!(
                build_id = %ctx.build().id,
                username = %user.username,
                "previous responsible skipped (not a committer)"
            );
            return false;
        }
        true
    }
}

impl Heuristic for PreviousResponsibleHeuristic {
    fn id(&self) -> &'static str {
        "PreviousResponsible"
    }

    fn evaluate(&self, ctx: &HeuristicContext<'_>) -> HeuristicVerdict {
        let mut result = SuggestionSet::new();
        let project = ctx.project();

        // One audit query for the whole batch, used as the fallback.
        let audit = self.investigations.find_in_audit(ctx.test_runs(), project);

        for run in ctx.test_runs() {
            let candidate = self
                .investigations
                .previous_responsible_for_test(project, run)
                .or_else(|| audit.get(&run.test_name_id).cloned());
            let Some(user) = candidate else { continue };
            if !self.is_valid_candidate(&user, ctx) {
                continue;
            }
            let description =
                format!("was previously responsible for the test {}", run.test_name);
            result.add_test_responsibility(run, ResponsibilityRecord::new(user, description));
        }

        for problem in ctx.build_problems() {
            if !problems::is_supported_everywhere(&problem.problem_type) {
                continue;
            }
            let Some(user) =
                self.investigations.previous_responsible_for_problem(project, problem)
            else {
                continue;
            };
            if !self.is_valid_candidate(&user, ctx) {
                continue;
            }
            let description =
                format!("was previously responsible for the problem {}", problem.problem_type);
            result.add_problem_responsibility(
                problem,
                ResponsibilityRecord::new(user, description),
            );
        }

        HeuristicVerdict::applicable(result)
    }
}
