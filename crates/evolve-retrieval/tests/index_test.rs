//! Lexical index construction and BM25 ranking.

use evolve_core::config::RetrievalConfig;
use evolve_core::traits::Retriever;
use evolve_retrieval::LexicalIndex;
use test_fixtures::{
    alpha_evolve_corpus, corpus_with, empty_corpus, init_tracing, mixed_corpus, write_file,
    ALPHA_EVOLVE_DOC, ANSWERABLE_QUESTION, UNANSWERABLE_QUESTION,
};

fn build(dir: &std::path::Path) -> LexicalIndex {
    init_tracing();
    LexicalIndex::build(dir, &RetrievalConfig::default())
}

// ---- Empty inputs never fail ----

#[test]
fn missing_corpus_directory_builds_empty_index() {
    let index = build(std::path::Path::new("/definitely/not/a/corpus"));
    assert!(index.is_empty());
    assert!(index.rank(ANSWERABLE_QUESTION, 5).is_empty());
}

#[test]
fn empty_corpus_returns_nothing() {
    let dir = empty_corpus();
    let index = build(dir.path());
    assert_eq!(index.len(), 0);
    assert!(index.search(UNANSWERABLE_QUESTION, 6).unwrap().is_empty());
}

#[test]
fn query_without_indexable_terms_returns_nothing() {
    let dir = mixed_corpus();
    let index = build(dir.path());
    assert!(index.rank("", 5).is_empty());
    assert!(index.rank("is a an ?? !!", 5).is_empty());
}

#[test]
fn out_of_vocabulary_terms_are_dropped() {
    let dir = mixed_corpus();
    let index = build(dir.path());
    assert!(index.rank("zeppelin quasar", 5).is_empty());
    // Known term still ranks even with unknown neighbours.
    let hits = index.rank("zeppelin coffee", 5);
    assert_eq!(hits.len(), 1);
    assert!(hits[0].source.ends_with("coffee.txt"));
}

#[test]
fn zero_k_returns_nothing() {
    let dir = mixed_corpus();
    let index = build(dir.path());
    assert!(index.rank("coffee", 0).is_empty());
}

// ---- Indexing rules ----

#[test]
fn indexes_nested_txt_files_only() {
    let dir = corpus_with(&[
        ("a.txt", "lasers on mars"),
        ("deep/er/b.TXT", "lasers under the sea"),
        ("notes.md", "lasers in markdown"),
        ("data.json", "{\"lasers\": true}"),
    ]);
    let index = build(dir.path());
    assert_eq!(index.len(), 2);
    let hits = index.rank("lasers", 10);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|e| !e.source.ends_with(".md")));
}

#[test]
fn tokenless_documents_are_skipped() {
    let dir = corpus_with(&[
        ("empty.txt", ""),
        ("punct.txt", "?? !! -- a an"),
        ("real.txt", "mangoes ripen slowly"),
    ]);
    let index = build(dir.path());
    assert_eq!(index.len(), 1);
}

#[test]
fn malformed_utf8_is_decoded_lossily() {
    let dir = empty_corpus();
    write_file(dir.path(), "broken.txt", b"caf\xff lasers rock\n");
    let index = build(dir.path());
    assert_eq!(index.len(), 1);
    assert_eq!(index.rank("lasers", 3).len(), 1);
}

#[test]
fn snippet_is_first_non_empty_line_truncated() {
    let long_line = "word ".repeat(100);
    let text = format!("\n\n   {}\nsecond line", long_line);
    let index = LexicalIndex::from_documents([("doc", text.as_str())], &RetrievalConfig::default());
    let hits = index.rank("word", 1);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].snippet.chars().count(), 280);
    assert!(!hits[0].snippet.contains("second"));
}

#[test]
fn custom_extensions_are_honoured() {
    let dir = corpus_with(&[("a.md", "lasers on mars"), ("b.txt", "lasers on venus")]);
    let config = RetrievalConfig {
        extensions: vec!["md".to_string()],
        ..RetrievalConfig::default()
    };
    let index = LexicalIndex::build(dir.path(), &config);
    assert_eq!(index.len(), 1);
}

#[test]
fn statistics_track_documents_and_vocabulary() {
    let index = LexicalIndex::from_documents(
        [("a", "alpha beta gamma"), ("b", "alpha delta")],
        &RetrievalConfig::default(),
    );
    let stats = index.stats();
    assert_eq!(stats.documents, 2);
    assert_eq!(stats.vocabulary, 4);
    assert!((stats.avg_doc_len - 2.5).abs() < 1e-12);
    assert_eq!(index.doc_freq("alpha"), 2);
    assert_eq!(index.doc_freq("delta"), 1);
    assert_eq!(index.doc_freq("omega"), 0);
}

// ---- Ranking ----

#[test]
fn alpha_evolve_document_is_found() {
    let dir = alpha_evolve_corpus();
    let index = build(dir.path());
    let hits = index.rank(ANSWERABLE_QUESTION, 6);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].snippet, ALPHA_EVOLVE_DOC);
    assert!(hits[0].score > 0.0);
}

#[test]
fn single_document_score_matches_bm25() {
    let index = LexicalIndex::from_documents([("only", "lasers lasers mars")], &RetrievalConfig::default());
    let hits = index.rank("lasers", 1);
    // N = 1, df = 1, tf = 2, dl = avgdl = 3
    let idf = (1.0f64 + 0.5 / 1.5).ln();
    let expected = idf * 2.0 * 2.5 / (2.0 + 1.5);
    assert!((hits[0].score - expected).abs() < 1e-12);
}

#[test]
fn more_matching_terms_rank_higher() {
    let index = LexicalIndex::from_documents(
        [
            ("one", "mars colony plans"),
            ("both", "mars lasers research"),
            ("none", "coffee highlands rainfall"),
        ],
        &RetrievalConfig::default(),
    );
    let hits = index.rank("lasers on mars", 5);
    assert_eq!(hits.len(), 2, "documents without matches are omitted");
    assert_eq!(hits[0].source, "both");
    assert_eq!(hits[1].source, "one");
}

#[test]
fn ties_keep_discovery_order() {
    let index = LexicalIndex::from_documents(
        [("second", "lasers mars"), ("first", "lasers mars"), ("third", "lasers mars")],
        &RetrievalConfig::default(),
    );
    let sources: Vec<String> = index.rank("lasers", 5).into_iter().map(|e| e.source).collect();
    assert_eq!(sources, vec!["second", "first", "third"]);
}

#[test]
fn results_are_truncated_to_k() {
    let docs: Vec<(String, String)> = (0..10)
        .map(|i| (format!("doc{i}"), format!("lasers topic{i}")))
        .collect();
    let index = LexicalIndex::from_documents(docs, &RetrievalConfig::default());
    assert_eq!(index.rank("lasers", 3).len(), 3);
    assert_eq!(index.rank("lasers", 50).len(), 10);
}
