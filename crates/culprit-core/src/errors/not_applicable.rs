//! "Not applicable" signal raised by change analysis.
//!
//! Carries the reason a modification could not be attributed to a single
//! user. Heuristics recover from it locally; it never crosses the
//! orchestrator boundary as an error.

/// A change (or a whole build's change set) cannot be attributed reliably.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct NotApplicable {
    pub reason: String,
}

impl NotApplicable {
    pub fn because(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
