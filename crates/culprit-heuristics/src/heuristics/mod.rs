//! The four assignment heuristics, one module each.

pub mod broken_file;
pub mod default_user;
pub mod one_committer;
pub mod previous_responsible;

pub use broken_file::BrokenFileHeuristic;
pub use default_user::DefaultUserHeuristic;
pub use one_committer::OneCommitterHeuristic;
pub use previous_responsible::PreviousResponsibleHeuristic;
