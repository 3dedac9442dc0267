//! The heuristic capability contract.

use culprit_core::SuggestionSet;

use crate::context::HeuristicContext;

/// Outcome of one heuristic pass.
///
/// `Applicable` carries the claims the heuristic makes (possibly none);
/// `NotApplicable` means the build's evidence cannot be trusted at all
/// for this strategy, with the reason for the log.
#[derive(Debug)]
pub enum HeuristicVerdict {
    Applicable(SuggestionSet),
    NotApplicable { reason: String },
}

impl HeuristicVerdict {
    pub fn applicable(suggestions: SuggestionSet) -> Self {
        Self::Applicable(suggestions)
    }

    pub fn not_applicable(reason: impl Into<String>) -> Self {
        Self::NotApplicable { reason: reason.into() }
    }
}

/// One assignment strategy.
///
/// Implementations are pure over the context plus their injected
/// read-only collaborators; the finder decides order and precedence.
pub trait Heuristic: Send + Sync {
    fn id(&self) -> &'static str;

    fn evaluate(&self, ctx: &HeuristicContext<'_>) -> HeuristicVerdict;
}
