//! Server identity interface.

/// A value unique to one server installation.
///
/// Persisted artifacts stamp it so that files restored from another
/// installation's backup are recognized and discarded.
pub trait ServerIdentity: Send + Sync {
    fn server_uuid(&self) -> String;
}
