//! Priority-order fold over the heuristics.

use std::sync::Arc;

use culprit_core::traits::changes::ChangeAnalyzer;
use culprit_core::traits::investigations::InvestigationHistory;
use culprit_core::traits::problem_text::ProblemTextSource;
use culprit_core::traits::settings::BuildSettings;
use culprit_core::traits::users::UserDirectory;
use culprit_core::types::collections::FxHashMap;
use culprit_core::types::identifiers::TestNameId;
use culprit_core::SuggestionSet;

use crate::context::HeuristicContext;
use crate::heuristic::{Heuristic, HeuristicVerdict};
use crate::heuristics::{
    BrokenFileHeuristic, DefaultUserHeuristic, OneCommitterHeuristic, PreviousResponsibleHeuristic,
};
use crate::policy::{AllowAll, AssignmentPolicy};

/// Result of one evaluation: the surviving suggestions plus the tests
/// the policy vetoed, keyed by stable test identity so the store can
/// persist them with the filtered sentinel.
#[derive(Debug, Default)]
pub struct EvaluationOutcome {
    pub suggestions: SuggestionSet,
    pub filtered_tests: FxHashMap<TestNameId, String>,
}

/// Runs the heuristics in descending priority and folds their claims.
///
/// After each applicable pass the context narrows to the unclaimed
/// targets, so a later heuristic can never displace an earlier claim and
/// the fold stops as soon as every target is taken.
pub struct ResponsibleUserFinder {
    heuristics: Vec<Box<dyn Heuristic>>,
    policy: Arc<dyn AssignmentPolicy>,
}

impl ResponsibleUserFinder {
    /// `heuristics` must already be in descending priority order.
    pub fn new(heuristics: Vec<Box<dyn Heuristic>>) -> Self {
        Self { heuristics, policy: Arc::new(AllowAll) }
    }

    pub fn with_policy(mut self, policy: Arc<dyn AssignmentPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn find_responsible_user(&self, ctx: HeuristicContext<'_>) -> EvaluationOutcome {
        let all_runs = ctx.test_runs().to_vec();
        let total_targets = ctx.target_count();

        let mut combined = SuggestionSet::new();
        let mut scope = ctx;
        for heuristic in &self.heuristics {
            match heuristic.evaluate(&scope) {
                HeuristicVerdict::Applicable(suggestions) => {
                    if !suggestions.is_empty() {
                        combined.merge(suggestions);
                        scope = scope.narrowed(&combined);
                    }
                }
                HeuristicVerdict::NotApplicable { reason } => {
                    tracing::debug!(
                        heuristic_id = heuristic.id(),
                        build_id = %scope.build().id,
                        reason = %reason,
                        "heuristic not applicable"
                    );
                }
            }
            if combined.len() == total_targets {
                break;
            }
        }

        let mut filtered_tests: FxHashMap<TestNameId, String> = FxHashMap::default();
        for run in all_runs {
            let exclusion = match combined.for_test_run(run) {
                Some(record) => self.policy.exclusion_reason(run, record),
                None => None,
            };
            if let Some(reason) = exclusion {
                combined.remove_test_run(run.id);
                filtered_tests.insert(run.test_name_id, reason);
            }
        }

        EvaluationOutcome { suggestions: combined, filtered_tests }
    }
}

/// The fixed production line-up in descending trust order: the sole
/// committer is the strongest signal, file matching next, history next,
/// the configured default last.
pub fn create_default_finder(
    users: Arc<dyn UserDirectory>,
    settings: Arc<dyn BuildSettings>,
    investigations: Arc<dyn InvestigationHistory>,
    analyzer: Arc<dyn ChangeAnalyzer>,
    problem_text: Arc<dyn ProblemTextSource>,
) -> ResponsibleUserFinder {
    ResponsibleUserFinder::new(vec![
        Box::new(OneCommitterHeuristic::new(analyzer.clone())),
        Box::new(BrokenFileHeuristic::new(problem_text, analyzer)),
        Box::new(PreviousResponsibleHeuristic::new(investigations)),
        Box::new(DefaultUserHeuristic::new(users, settings)),
    ])
}
