//! User references handed over by the server's user model.

use serde::{Deserialize, Serialize};

use super::identifiers::UserId;

/// A resolved server user.
///
/// Identity is the numeric id; `username` is the login the configuration
/// refers to, `display_name` is optional presentation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: UserId,
    pub username: String,
    pub display_name: Option<String>,
}

impl UserRef {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self { id, username: username.into(), display_name: None }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Name used in human-facing descriptions; falls back to the login.
    pub fn descriptive_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}
