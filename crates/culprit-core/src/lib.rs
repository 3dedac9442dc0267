//! # culprit-core
//!
//! Foundation crate for the culprit assignment engine.
//! Defines the build/failure object model, collaborator traits, errors,
//! configuration accessors, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod problems;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use errors::not_applicable::NotApplicable;
pub use errors::storage_error::StorageError;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::identifiers::{BuildId, ProblemId, TestNameId, TestRunId, UserId};
pub use types::responsibility::ResponsibilityRecord;
pub use types::suggestions::SuggestionSet;
pub use types::users::UserRef;
