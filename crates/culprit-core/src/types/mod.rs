//! Shared data types: identifiers, users, builds, VCS changes,
//! responsibility records, and the suggestion accumulator.

pub mod builds;
pub mod collections;
pub mod identifiers;
pub mod responsibility;
pub mod suggestions;
pub mod users;
pub mod vcs;
