//! Diagnostic text extraction interface.

use crate::types::builds::{BuildProblem, TestRun};

/// Supplies the free-form diagnostic text file-matching runs against.
pub trait ProblemTextSource: Send + Sync {
    /// Failure output of a test run (message plus stacktrace). `None`
    /// when the server retained nothing for it.
    fn test_run_text(&self, run: &TestRun) -> Option<String>;

    /// Description of a build problem.
    fn build_problem_text(&self, problem: &BuildProblem) -> Option<String>;
}
