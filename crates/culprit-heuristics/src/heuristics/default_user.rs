//! Default-responsible fallback heuristic.

use std::sync::Arc;

use culprit_core::traits::settings::BuildSettings;
use culprit_core::traits::users::UserDirectory;
use culprit_core::{config, problems, ResponsibilityRecord, SuggestionSet};

use crate::context::HeuristicContext;
use crate::heuristic::{Heuristic, HeuristicVerdict};

/// Assigns the configured default responsible user to everything the
/// evidence-based heuristics left unexplained. Snapshot-dependency
/// problems are skipped unless configuration opts them in, since they
/// were not caused by this build's own changes.
pub struct DefaultUserHeuristic {
    users: Arc<dyn UserDirectory>,
    settings: Arc<dyn BuildSettings>,
}

impl DefaultUserHeuristic {
    pub fn new(users: Arc<dyn UserDirectory>, settings: Arc<dyn BuildSettings>) -> Self {
        Self { users, settings }
    }
}

impl Heuristic for DefaultUserHeuristic {
    fn id(&self) -> &'static str {
        "DefaultUser"
    }

    fn evaluate(&self, ctx: &HeuristicContext<'_>) -> HeuristicVerdict {
        let mut result = SuggestionSet::new();
        let build = ctx.build();

        let Some(username) = config::default_responsible(self.settings.as_ref(), build) else {
            return HeuristicVerdict::applicable(result);
        };

        let Some(user) = self.users.find_by_username(&username) else {
            tracing::warn!(
                build_id = %build.id,
                build_type = ?build.build_type_id,
                username = %username,
                "configured default responsible does not exist; heuristic ignored"
            );
            return HeuristicVerdict::applicable(result);
        };

        let record = ResponsibilityRecord::default_responsible(user);
        let include_snapshot_errors =
            config::should_include_snapshot_errors(self.settings.as_ref(), build);

        for problem in ctx.build_problems() {
            if include_snapshot_errors
                || !problems::is_snapshot_dependency_error(&problem.problem_type)
            {
                result.add_problem_responsibility(problem, record.clone());
            }
        }
        for run in ctx.test_runs() {
            result.add_test_responsibility(run, record.clone());
        }

        HeuristicVerdict::applicable(result)
    }
}
