use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Explanation of a verifier score: which query terms the draft covers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageAnalysis {
    pub score: f64,
    pub covered_terms: BTreeSet<String>,
    pub missing_terms: BTreeSet<String>,
}

impl CoverageAnalysis {
    /// Fraction of query unigrams covered. Zero when the query had no terms.
    pub fn unigram_coverage(&self) -> f64 {
        let total = self.covered_terms.len() + self.missing_terms.len();
        self.covered_terms.len() as f64 / total.max(1) as f64
    }
}
