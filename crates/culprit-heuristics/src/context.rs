//! Per-build input bundle for one evaluation pass.

use culprit_core::types::builds::{Build, BuildProblem, Project, TestRun};
use culprit_core::types::collections::FxHashSet;
use culprit_core::types::identifiers::UserId;
use culprit_core::SuggestionSet;

/// Everything a heuristic may look at for one build.
///
/// Immutable during a pass. The finder produces successively narrower
/// contexts over the still-unclaimed targets via [`Self::narrowed`]; the
/// underlying build data is only borrowed, never copied.
pub struct HeuristicContext<'a> {
    build: &'a Build,
    project: &'a Project,
    test_runs: Vec<&'a TestRun>,
    build_problems: Vec<&'a BuildProblem>,
    users_to_ignore: FxHashSet<String>,
    committer_ids: FxHashSet<UserId>,
}

impl<'a> HeuristicContext<'a> {
    pub fn new(
        build: &'a Build,
        project: &'a Project,
        test_runs: &'a [TestRun],
        build_problems: &'a [BuildProblem],
        users_to_ignore: FxHashSet<String>,
    ) -> Self {
        let committer_ids = build
            .changes
            .iter()
            .flat_map(|change| change.committers.iter())
            .map(|user| user.id)
            .collect();
        Self {
            build,
            project,
            test_runs: test_runs.iter().collect(),
            build_problems: build_problems.iter().collect(),
            users_to_ignore,
            committer_ids,
        }
    }

    pub fn build(&self) -> &'a Build {
        self.build
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    pub fn test_runs(&self) -> &[&'a TestRun] {
        &self.test_runs
    }

    pub fn build_problems(&self) -> &[&'a BuildProblem] {
        &self.build_problems
    }

    pub fn users_to_ignore(&self) -> &FxHashSet<String> {
        &self.users_to_ignore
    }

    /// Ids of everyone who committed into this build's change delta.
    pub fn committer_ids(&self) -> &FxHashSet<UserId> {
        &self.committer_ids
    }

    pub fn target_count(&self) -> usize {
        self.test_runs.len() + self.build_problems.len()
    }

    /// A context over the targets `claimed` has not taken yet.
    pub fn narrowed(&self, claimed: &SuggestionSet) -> HeuristicContext<'a> {
        HeuristicContext {
            build: self.build,
            project: self.project,
            test_runs: self
                .test_runs
                .iter()
                .copied()
                .filter(|run| !claimed.contains_test_run(run.id))
                .collect(),
            build_problems: self
                .build_problems
                .iter()
                .copied()
                .filter(|problem| !claimed.contains_build_problem(problem.id))
                .collect(),
            users_to_ignore: self.users_to_ignore.clone(),
            committer_ids: self.committer_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use culprit_core::types::identifiers::{BuildId, ProblemId, TestNameId, TestRunId};
    use culprit_core::types::vcs::VcsChange;
    use culprit_core::{ResponsibilityRecord, UserId, UserRef};

    #[test]
    fn committer_ids_are_collected_from_all_changes() {
        let build = Build::new(BuildId(1), "/tmp/a").with_changes(vec![
            VcsChange::new("r1").by(UserRef::new(UserId(10), "alice")),
            VcsChange::new("r2").by(UserRef::new(UserId(11), "bob")),
        ]);
        let project = Project::new("Root");
        let ctx = HeuristicContext::new(&build, &project, &[], &[], FxHashSet::default());
        assert!(ctx.committer_ids().contains(&UserId(10)));
        assert!(ctx.committer_ids().contains(&UserId(11)));
    }

    #[test]
    fn narrowed_drops_claimed_targets_only() {
        let build = Build::new(BuildId(1), "/tmp/a");
        let project = Project::new("Root");
        let runs = vec![
            TestRun::new(TestRunId(1), TestNameId(1), "a"),
            TestRun::new(TestRunId(2), TestNameId(2), "b"),
        ];
        let problems = vec![BuildProblem::new(ProblemId(3), "TC_EXIT_CODE")];
        let ctx = HeuristicContext::new(&build, &project, &runs, &problems, FxHashSet::default());

        let mut claimed = SuggestionSet::new();
        claimed.add_test_responsibility(
            &runs[0],
            ResponsibilityRecord::new(UserRef::new(UserId(1), "alice"), "claimed"),
        );

        let narrowed = ctx.narrowed(&claimed);
        assert_eq!(narrowed.test_runs().len(), 1);
        assert_eq!(narrowed.test_runs()[0].id, TestRunId(2));
        assert_eq!(narrowed.build_problems().len(), 1);
        assert_eq!(narrowed.target_count(), 2);
    }
}
