//! Build-server object model as seen by the engine.
//!
//! These are plain data snapshots handed over by the embedding server at
//! evaluation time, not live handles.

use std::path::PathBuf;

use super::identifiers::{BuildId, ProblemId, TestNameId, TestRunId};
use super::vcs::VcsChange;

/// Project a build belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl Project {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self { name: id.clone(), id }
    }
}

/// The slice of a previous finished build that heuristics look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishedBuildSummary {
    pub id: BuildId,
    pub compilation_error_count: u32,
}

/// One build under evaluation.
#[derive(Debug, Clone)]
pub struct Build {
    pub id: BuildId,
    /// Id of the build configuration; absent when it has been deleted.
    pub build_type_id: Option<String>,
    /// Composite builds aggregate snapshot dependencies and have no own steps.
    pub is_composite: bool,
    /// Root of this build's artifact directory on the server.
    pub artifacts_dir: PathBuf,
    /// Changes since the previous build, committers attached.
    pub changes: Vec<VcsChange>,
    pub compilation_error_count: u32,
    pub previous_finished: Option<FinishedBuildSummary>,
}

impl Build {
    pub fn new(id: BuildId, artifacts_dir: impl Into<PathBuf>) -> Self {
        Self {
            id,
            build_type_id: None,
            is_composite: false,
            artifacts_dir: artifacts_dir.into(),
            changes: Vec::new(),
            compilation_error_count: 0,
            previous_finished: None,
        }
    }

    pub fn with_build_type(mut self, build_type_id: impl Into<String>) -> Self {
        self.build_type_id = Some(build_type_id.into());
        self
    }

    pub fn with_changes(mut self, changes: Vec<VcsChange>) -> Self {
        self.changes = changes;
        self
    }

    pub fn composite(mut self) -> Self {
        self.is_composite = true;
        self
    }
}

/// One failed test run inside a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRun {
    pub id: TestRunId,
    /// Identity of the test itself, stable across runs and builds.
    pub test_name_id: TestNameId,
    pub test_name: String,
}

impl TestRun {
    pub fn new(id: TestRunId, test_name_id: TestNameId, test_name: impl Into<String>) -> Self {
        Self { id, test_name_id, test_name: test_name.into() }
    }
}

/// One build problem (non-test failure) inside a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildProblem {
    pub id: ProblemId,
    /// Server problem type string, see [`crate::problems`].
    pub problem_type: String,
}

impl BuildProblem {
    pub fn new(id: ProblemId, problem_type: impl Into<String>) -> Self {
        Self { id, problem_type: problem_type.into() }
    }
}
