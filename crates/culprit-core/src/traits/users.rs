//! User directory interface.

use crate::types::identifiers::UserId;
use crate::types::users::UserRef;

/// Read-only access to the server's user model.
pub trait UserDirectory: Send + Sync {
    /// Resolve a user by exact login name.
    fn find_by_username(&self, username: &str) -> Option<UserRef>;

    /// Resolve a user by server-wide id.
    fn find_by_id(&self, id: UserId) -> Option<UserRef>;

    /// The guest account; filtered suggestions surfaced to the UI are
    /// attributed to it.
    fn guest(&self) -> UserRef;
}
