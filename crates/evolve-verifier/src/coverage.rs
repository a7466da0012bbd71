//! Keyword coverage scoring.
//!
//! score = min(1, bigram_weight * bigram_coverage + unigram_weight * unigram_coverage)
//!
//! Coverage is measured against the draft's answer text plus every cited
//! snippet. A query without indexable terms scores 0.

use std::collections::BTreeSet;

use tracing::trace;

use evolve_core::config::VerifierConfig;
use evolve_core::models::{CoverageAnalysis, Draft};
use evolve_core::text::{bigram_set, term_set};
use evolve_core::traits::{CoverageAnalyzer, Verifier};

/// Scores drafts by query-term coverage and explains which terms are missing.
#[derive(Debug, Clone, Default)]
pub struct CoverageVerifier {
    config: VerifierConfig,
}

impl CoverageVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    fn coverage_score(
        &self,
        query_terms: &BTreeSet<String>,
        answer_terms: &BTreeSet<String>,
        query: &str,
        grounding_text: &str,
    ) -> f64 {
        if query_terms.is_empty() {
            return 0.0;
        }
        let unigram = ratio(query_terms.intersection(answer_terms).count(), query_terms.len());

        let query_bigrams = bigram_set(query);
        let bigram = if query_bigrams.is_empty() {
            0.0
        } else {
            let answer_bigrams = bigram_set(grounding_text);
            ratio(
                query_bigrams.intersection(&answer_bigrams).count(),
                query_bigrams.len(),
            )
        };

        let score = (self.config.bigram_weight * bigram + self.config.unigram_weight * unigram)
            .clamp(0.0, 1.0);
        trace!(unigram, bigram, score, "coverage scored");
        score
    }
}

impl Verifier for CoverageVerifier {
    fn score(&self, query: &str, draft: &Draft) -> f64 {
        let text = draft.grounding_text();
        self.coverage_score(&term_set(query), &term_set(&text), query, &text)
    }

    fn as_analyzer(&self) -> Option<&dyn CoverageAnalyzer> {
        Some(self)
    }
}

impl CoverageAnalyzer for CoverageVerifier {
    fn analyze(&self, query: &str, draft: &Draft) -> CoverageAnalysis {
        let text = draft.grounding_text();
        let query_terms = term_set(query);
        let answer_terms = term_set(&text);
        let score = self.coverage_score(&query_terms, &answer_terms, query, &text);

        let (covered_terms, missing_terms): (BTreeSet<String>, BTreeSet<String>) = query_terms
            .into_iter()
            .partition(|term| answer_terms.contains(term));

        CoverageAnalysis {
            score,
            covered_terms,
            missing_terms,
        }
    }
}

fn ratio(hits: usize, total: usize) -> f64 {
    hits as f64 / total.max(1) as f64
}
