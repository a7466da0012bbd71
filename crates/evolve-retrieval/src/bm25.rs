//! BM25 scoring primitives.
//!
//! IDF uses the 0.5-smoothed form `ln(1 + (N - df + 0.5) / (df + 0.5))`,
//! which stays non-negative for any `df <= N`.

use evolve_core::config::RetrievalConfig;

/// BM25 tuning constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Length normalisation strength.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

impl From<&RetrievalConfig> for Bm25Params {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            k1: config.k1,
            b: config.b,
        }
    }
}

/// Inverse document frequency of a term found in `df` of `num_docs` documents.
pub fn idf(num_docs: usize, df: usize) -> f64 {
    let n = num_docs as f64;
    let df = df as f64;
    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// Contribution of one query term to a document's score.
///
/// `avg_doc_len` of zero is treated as 1 so an empty corpus cannot divide by zero.
pub fn term_score(idf: f64, tf: u32, doc_len: usize, avg_doc_len: f64, params: Bm25Params) -> f64 {
    if tf == 0 {
        return 0.0;
    }
    let tf = tf as f64;
    let avg = if avg_doc_len > 0.0 { avg_doc_len } else { 1.0 };
    let norm = 1.0 - params.b + params.b * (doc_len as f64 / avg);
    idf * tf * (params.k1 + 1.0) / (tf + params.k1 * norm)
}
