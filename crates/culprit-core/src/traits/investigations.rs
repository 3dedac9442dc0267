//! Investigation and audit history interface.

use crate::types::builds::{BuildProblem, Project, TestRun};
use crate::types::collections::FxHashMap;
use crate::types::identifiers::TestNameId;
use crate::types::users::UserRef;

/// Read-only access to who was held responsible before.
pub trait InvestigationHistory: Send + Sync {
    /// Most recent responsible user recorded against this exact test in
    /// the project's investigation history.
    fn previous_responsible_for_test(&self, project: &Project, run: &TestRun) -> Option<UserRef>;

    /// Most recent responsible user recorded for this problem's type.
    fn previous_responsible_for_problem(
        &self,
        project: &Project,
        problem: &BuildProblem,
    ) -> Option<UserRef>;

    /// Batched audit lookup: the last user each of the given tests was
    /// assigned to, keyed by stable test identity. One query for the
    /// whole batch.
    fn find_in_audit(&self, runs: &[&TestRun], project: &Project)
        -> FxHashMap<TestNameId, UserRef>;
}
