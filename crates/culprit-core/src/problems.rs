//! Build-problem type classification.
//!
//! The server reports build problems with a free-form type string; the
//! engine only reasons about two fixed groups of them.

/// Compilation failure reported by the build runner.
pub const COMPILATION_ERROR_TYPE: &str = "TC_COMPILATION_ERROR";

/// Non-zero exit code of a build step.
pub const EXIT_CODE_TYPE: &str = "TC_EXIT_CODE";

/// Failure propagated from a snapshot dependency that stopped the build.
pub const SNAPSHOT_DEPENDENCY_ERROR_TYPE: &str = "SNAPSHOT_DEPENDENCY_ERROR";

/// Failure propagated from a snapshot dependency the build proceeded past.
pub const SNAPSHOT_DEPENDENCY_ERROR_BUILD_PROCEEDS_TYPE: &str =
    "SNAPSHOT_DEPENDENCY_ERROR_BUILD_PROCEEDS";

/// Problem types every heuristic may assign, not just the default fallback.
pub fn is_supported_everywhere(problem_type: &str) -> bool {
    problem_type == COMPILATION_ERROR_TYPE || problem_type == EXIT_CODE_TYPE
}

/// Problem types inherited from snapshot dependencies rather than caused
/// by this build's own changes.
pub fn is_snapshot_dependency_error(problem_type: &str) -> bool {
    problem_type == SNAPSHOT_DEPENDENCY_ERROR_TYPE
        || problem_type == SNAPSHOT_DEPENDENCY_ERROR_BUILD_PROCEEDS_TYPE
}
