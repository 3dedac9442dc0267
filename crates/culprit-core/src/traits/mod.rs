//! Collaborator interfaces implemented by the embedding build server.
//!
//! The engine never talks to the server directly; everything it needs is
//! behind these traits so tests can swap in the in-memory stubs from
//! [`test_support`].

pub mod changes;
pub mod identity;
pub mod investigations;
pub mod problem_text;
pub mod settings;
pub mod test_support;
pub mod users;

pub use changes::{ChangeAnalyzer, FileBlame};
pub use identity::ServerIdentity;
pub use investigations::InvestigationHistory;
pub use problem_text::ProblemTextSource;
pub use settings::BuildSettings;
pub use users::UserDirectory;
