//! Explicit states of one `ask` call.
//!
//! Proposing → Scoring → Accepted
//!                     ↘ Refining → Proposing (next iteration)
//!                                ↘ Refused (budget exhausted)
//!
//! `Accepted` and `Refused` are terminal and are the only states that notify
//! memory, so each `ask` notifies exactly once.

use evolve_core::models::{Draft, Evidence};

/// Iterations are zero-based here; trace lines and answers report them one-based.
#[derive(Debug)]
pub(crate) enum LoopState {
    Proposing {
        iteration: u32,
        evidence: Vec<Evidence>,
    },
    Scoring {
        iteration: u32,
        candidates: Vec<Draft>,
    },
    Refining {
        iteration: u32,
        candidates: Vec<Draft>,
    },
    Accepted {
        iteration: u32,
        draft: Draft,
    },
    Refused {
        iterations: u32,
    },
}
