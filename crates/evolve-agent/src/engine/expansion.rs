//! Best-effort evidence expansion for the refine step.
//!
//! Each missing term becomes a supplementary search. Failures are classified
//! with `RecoveryAction`: recoverable ones skip the term, `Escalate` stops the
//! expansion. The evidence gathered so far is kept in both cases.

use tracing::{error, warn};

use evolve_core::errors::RecoveryAction;
use evolve_core::models::Evidence;
use evolve_core::traits::Retriever;

/// What one expansion pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ExpansionOutcome {
    pub added: usize,
    pub skipped: usize,
    pub aborted: bool,
}

/// Search each term with depth `k` and append the hits to `evidence`.
pub(crate) fn expand<'a, I>(
    retriever: &dyn Retriever,
    terms: I,
    k: usize,
    evidence: &mut Vec<Evidence>,
) -> ExpansionOutcome
where
    I: IntoIterator<Item = &'a String>,
{
    let mut outcome = ExpansionOutcome::default();
    for term in terms {
        match retriever.search(term, k) {
            Ok(extra) => {
                outcome.added += extra.len();
                evidence.extend(extra);
            }
            Err(e) => {
                let action = RecoveryAction::for_retrieval_error(&e);
                if action.is_recoverable() {
                    warn!(term = %term, error = %e, action = %action, "supplementary retrieval failed: skipping term");
                    outcome.skipped += 1;
                } else {
                    error!(term = %term, error = %e, action = %action, "supplementary retrieval failed: abandoning expansion");
                    outcome.aborted = true;
                    break;
                }
            }
        }
    }
    outcome
}
