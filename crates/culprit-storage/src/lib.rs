//! # culprit-storage
//!
//! Durable side of the culprit workspace: each build's suggestions are
//! cached as a versioned JSON artifact inside the build's artifact
//! directory, and aggregate usage counters live in one process-wide
//! statistics file.

pub mod artifact_path;
pub mod statistics;
pub mod store;
pub mod suggestions_file;

pub use statistics::{Statistics, StatisticsDao, StatisticsReporter};
pub use store::SuggestionStore;
pub use suggestions_file::{PersistedSuggestionEntry, SuggestionsCodec};
