use serde::{Deserialize, Serialize};

use super::Evidence;

/// A candidate answer with the evidence it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub answer: String,
    /// Order-preserving prefix of the evidence used to synthesize `answer`.
    pub citations: Vec<Evidence>,
    /// Verifier score in [0, 1]. Zero until scored.
    pub confidence: f64,
}

impl Draft {
    /// Unscored draft.
    pub fn new(answer: impl Into<String>, citations: Vec<Evidence>) -> Self {
        Self {
            answer: answer.into(),
            citations,
            confidence: 0.0,
        }
    }

    /// Answer text followed by every citation snippet; the text a verifier checks.
    pub fn grounding_text(&self) -> String {
        let evidence_text = self
            .citations
            .iter()
            .map(|e| e.snippet.as_str())
            .collect::<Vec<_>>()
            .join(" \n");
        format!("{} {}", self.answer, evidence_text)
    }
}
