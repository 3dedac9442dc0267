//! Configuration lookup interface.
//!
//! Raw key/value access only; the typed accessors with precedence rules
//! live in [`crate::config`].

use crate::types::builds::Build;

/// Read-only access to build and server configuration.
pub trait BuildSettings: Send + Sync {
    /// Value of a build-feature parameter for this build.
    fn feature_parameter(&self, build: &Build, key: &str) -> Option<String>;

    /// Boolean parameter scoped to the build's configuration.
    fn build_type_boolean(&self, build: &Build, key: &str) -> Option<bool>;

    /// Server-wide boolean property.
    fn global_boolean(&self, key: &str) -> Option<bool>;
}
