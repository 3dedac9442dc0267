//! Error types shared across the workspace.

pub mod not_applicable;
pub mod storage_error;

pub use not_applicable::NotApplicable;
pub use storage_error::StorageError;
