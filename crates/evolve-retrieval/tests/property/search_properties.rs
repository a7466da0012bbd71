//! Property-based tests for evolve-retrieval.
//!
//! - Result length never exceeds k
//! - Scores are positive and non-increasing
//! - Every hit contains at least one query term

use proptest::prelude::*;

use evolve_core::config::RetrievalConfig;
use evolve_core::text::{term_set, tokenize};
use evolve_retrieval::LexicalIndex;

fn arb_corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-f]{3,5}( [a-f]{3,5}){0,12}", 0..12)
}

proptest! {
    #[test]
    fn prop_results_bounded_and_sorted(
        corpus in arb_corpus(),
        query in "[a-f]{3,5}( [a-f]{3,5}){0,4}",
        k in 0usize..8,
    ) {
        let docs: Vec<(String, String)> = corpus
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("doc{i}"), text.clone()))
            .collect();
        let index = LexicalIndex::from_documents(docs, &RetrievalConfig::default());
        let hits = index.rank(&query, k);

        prop_assert!(hits.len() <= k);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for hit in &hits {
            prop_assert!(hit.score > 0.0);
        }
    }

    #[test]
    fn prop_hits_share_a_query_term(
        corpus in arb_corpus(),
        query in "[a-f]{3,5}( [a-f]{3,5}){0,4}",
    ) {
        let docs: Vec<(String, String)> = corpus
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("doc{i}"), text.clone()))
            .collect();
        let index = LexicalIndex::from_documents(docs, &RetrievalConfig::default());
        let query_terms = term_set(&query);

        for hit in index.rank(&query, 20) {
            let pos: usize = hit.source.trim_start_matches("doc").parse().unwrap();
            let doc_terms = tokenize(&corpus[pos]);
            prop_assert!(doc_terms.iter().any(|t| query_terms.contains(t)));
        }
    }
}
