use serde::{Deserialize, Serialize};

use super::Evidence;

/// Outcome of one `ask` call. Refusals are ordinary answers with `accepted = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAnswer {
    pub answer: String,
    pub citations: Vec<Evidence>,
    pub confidence: f64,
    pub accepted: bool,
    /// Iterations run before the loop accepted or gave up.
    pub iterations: u32,
}

impl AgentAnswer {
    pub fn is_refusal(&self) -> bool {
        !self.accepted
    }
}
