//! Downstream assignment policy.
//!
//! Heuristics decide who is responsible; the policy decides whether that
//! suggestion may leave the engine (e.g. an assignee allowlist). Vetoed
//! test suggestions are recorded with their exclusion reason instead of
//! being assigned.

use culprit_core::types::builds::TestRun;
use culprit_core::ResponsibilityRecord;

pub trait AssignmentPolicy: Send + Sync {
    /// Why `record` must not be suggested for `run`, or `None` to let it
    /// through.
    fn exclusion_reason(&self, run: &TestRun, record: &ResponsibilityRecord) -> Option<String>;
}

/// Policy that never filters anything.
pub struct AllowAll;

impl AssignmentPolicy for AllowAll {
    fn exclusion_reason(&self, _run: &TestRun, _record: &ResponsibilityRecord) -> Option<String> {
        None
    }
}
