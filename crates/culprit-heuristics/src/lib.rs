//! # culprit-heuristics
//!
//! Heuristic evaluation engine for the culprit workspace.
//! Four fixed heuristics inspect a build's failures and change history,
//! and the finder folds their verdicts under a strict priority order.

pub mod analysis;
pub mod context;
pub mod finder;
pub mod heuristic;
pub mod heuristics;
pub mod policy;

pub use analysis::DefaultChangeAnalyzer;
pub use context::HeuristicContext;
pub use finder::{create_default_finder, EvaluationOutcome, ResponsibleUserFinder};
pub use heuristic::{Heuristic, HeuristicVerdict};
pub use policy::{AllowAll, AssignmentPolicy};
