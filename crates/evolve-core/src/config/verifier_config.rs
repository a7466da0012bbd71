use serde::{Deserialize, Serialize};

/// Weights for the coverage verifier. Bigrams reward phrase-level grounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    pub bigram_weight: f64,
    pub unigram_weight: f64,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            bigram_weight: 0.6,
            unigram_weight: 0.4,
        }
    }
}
