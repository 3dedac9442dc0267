//! Suggestion accumulator with first-claim merge semantics.

use crate::types::builds::{BuildProblem, TestRun};
use crate::types::collections::FxHashMap;
use crate::types::identifiers::{ProblemId, TestRunId};
use crate::types::responsibility::ResponsibilityRecord;

/// Maps each failure target of one build to at most one
/// [`ResponsibilityRecord`].
///
/// `add_*` calls are first-claim: once a target is taken, later calls for
/// it are no-ops. `merge` is the opposite: the merged-in set overwrites
/// on collision. The orchestrator folds heuristics highest-priority-first
/// and narrows each pass to unclaimed targets, so the externally visible
/// rule is always "highest priority heuristic to claim a target wins".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionSet {
    test_runs: FxHashMap<TestRunId, ResponsibilityRecord>,
    build_problems: FxHashMap<ProblemId, ResponsibilityRecord>,
}

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a test run for `record` unless already claimed.
    pub fn add_test_responsibility(&mut self, run: &TestRun, record: ResponsibilityRecord) {
        self.test_runs.entry(run.id).or_insert(record);
    }

    /// Claim a build problem for `record` unless already claimed.
    pub fn add_problem_responsibility(
        &mut self,
        problem: &BuildProblem,
        record: ResponsibilityRecord,
    ) {
        self.build_problems.entry(problem.id).or_insert(record);
    }

    /// Overwrite-merge: `other`'s entries win on collision. Callers must
    /// already know `other` takes precedence.
    pub fn merge(&mut self, other: SuggestionSet) {
        self.test_runs.extend(other.test_runs);
        self.build_problems.extend(other.build_problems);
    }

    pub fn for_test_run(&self, run: &TestRun) -> Option<&ResponsibilityRecord> {
        self.test_runs.get(&run.id)
    }

    pub fn for_build_problem(&self, problem: &BuildProblem) -> Option<&ResponsibilityRecord> {
        self.build_problems.get(&problem.id)
    }

    pub fn contains_test_run(&self, id: TestRunId) -> bool {
        self.test_runs.contains_key(&id)
    }

    pub fn contains_build_problem(&self, id: ProblemId) -> bool {
        self.build_problems.contains_key(&id)
    }

    /// Drop a test-run claim, returning it. Used by downstream policy
    /// filtering, never by heuristics.
    pub fn remove_test_run(&mut self, id: TestRunId) -> Option<ResponsibilityRecord> {
        self.test_runs.remove(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.test_runs.is_empty() && self.build_problems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.test_runs.len() + self.build_problems.len()
    }

    /// All records across both target kinds, unordered.
    pub fn all_records(&self) -> impl Iterator<Item = &ResponsibilityRecord> {
        self.test_runs.values().chain(self.build_problems.values())
    }

    /// Read-only view of the test-run mapping.
    pub fn test_run_responsibilities(&self) -> &FxHashMap<TestRunId, ResponsibilityRecord> {
        &self.test_runs
    }

    /// Read-only view of the build-problem mapping.
    pub fn build_problem_responsibilities(&self) -> &FxHashMap<ProblemId, ResponsibilityRecord> {
        &self.build_problems
    }
}
