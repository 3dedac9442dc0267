//! Candidate person-to-blame assignments.

use crate::constants::{ASSIGN_DESCRIPTION_PREFIX, DEFAULT_RESPONSIBLE_DESCRIPTION};

use super::users::UserRef;

/// A candidate assignment: a user plus the human-readable reason they
/// were picked.
///
/// Equality is by user id and description only; display fields of the
/// user do not participate.
#[derive(Debug, Clone, Eq)]
pub struct ResponsibilityRecord {
    pub user: UserRef,
    pub description: String,
}

impl ResponsibilityRecord {
    pub fn new(user: UserRef, description: impl Into<String>) -> Self {
        Self { user, description: description.into() }
    }

    /// The fallback record produced by the default-responsible heuristic.
    pub fn default_responsible(user: UserRef) -> Self {
        Self::new(user, DEFAULT_RESPONSIBLE_DESCRIPTION)
    }

    /// Whether this record came from the default-responsible fallback
    /// rather than an evidence-based heuristic.
    pub fn is_default_responsible(&self) -> bool {
        self.description == DEFAULT_RESPONSIBLE_DESCRIPTION
    }

    /// Comment text for an automatically filed investigation.
    pub fn assign_description(&self, build_link: &str) -> String {
        format!(
            "{} {} who {} (initial build: {}).",
            ASSIGN_DESCRIPTION_PREFIX,
            self.user.descriptive_name(),
            self.description,
            build_link
        )
    }
}

impl PartialEq for ResponsibilityRecord {
    fn eq(&self, other: &Self) -> bool {
        self.user.id == other.user.id && self.description == other.description
    }
}
