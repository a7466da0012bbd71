//! RecoveryAction enum: what to do when a best-effort operation fails.

use std::fmt;

use super::RetrievalError;

/// Recommended recovery action for a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Fall back to a degraded but functional alternative.
    Fallback,
    /// Escalate: the failure points at a bug, not at missing data.
    Escalate,
    /// Ignore the error; the operation was best-effort.
    Ignore,
}

impl RecoveryAction {
    /// Determine the recommended recovery action for a retrieval failure.
    pub fn for_retrieval_error(error: &RetrievalError) -> Self {
        match error {
            // Backend went away: carry on with the evidence already gathered
            RetrievalError::Unavailable { .. } => Self::Fallback,
            // A term the backend cannot search for is just skipped
            RetrievalError::InvalidQuery(_) => Self::Ignore,
            // Anything else is unexpected
            RetrievalError::SearchFailed { .. } => Self::Escalate,
        }
    }

    /// Whether the caller may keep going after this action.
    pub fn is_recoverable(self) -> bool {
        !matches!(self, Self::Escalate)
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback => write!(f, "Fallback"),
            Self::Escalate => write!(f, "Escalate"),
            Self::Ignore => write!(f, "Ignore"),
        }
    }
}
