//! Test fixtures for the Alpha Evolve workspace: temporary corpora, JSONL
//! datasets, and a tracing subscriber wired to the test harness output.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// The one-line document the acceptance scenarios are built around.
pub const ALPHA_EVOLVE_DOC: &str =
    "Alpha Evolve is an anti-hallucination agent that retrieves evidence.";

/// A question the corpus from `alpha_evolve_corpus` can answer.
pub const ANSWERABLE_QUESTION: &str = "What is alpha evolve?";

/// A question no fixture corpus can answer.
pub const UNANSWERABLE_QUESTION: &str = "How to grow mangoes on Mars with lasers?";

/// Install a test-writer subscriber once. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Write `(relative_path, contents)` files into a fresh temp directory.
///
/// # Panics
/// Panics if the directory or any file can't be created.
pub fn corpus_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (rel, contents) in files {
        write_file(dir.path(), rel, contents.as_bytes());
    }
    dir
}

/// Write raw bytes (possibly invalid UTF-8) relative to `root`, creating parents.
pub fn write_file(root: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(&path, bytes).expect("write fixture file");
    path
}

/// Corpus holding only `ALPHA_EVOLVE_DOC`.
pub fn alpha_evolve_corpus() -> TempDir {
    corpus_with(&[("alpha.txt", ALPHA_EVOLVE_DOC)])
}

/// An empty corpus directory.
pub fn empty_corpus() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// A small multi-document corpus about unrelated topics.
pub fn mixed_corpus() -> TempDir {
    corpus_with(&[
        ("alpha.txt", ALPHA_EVOLVE_DOC),
        (
            "rust.txt",
            "Rust is a systems programming language focused on memory safety.\nOwnership replaces garbage collection.",
        ),
        (
            "bm25.txt",
            "BM25 ranks documents by term frequency and inverse document frequency.\nLength normalisation keeps long documents honest.",
        ),
        (
            "nested/coffee.txt",
            "Coffee plants grow best in tropical highlands with steady rainfall.",
        ),
    ])
}

/// Write a JSONL dataset of `(question, should_refuse)` rows into `dir`.
pub fn write_dataset(dir: &Path, rows: &[(&str, bool)]) -> PathBuf {
    let body = rows
        .iter()
        .map(|(question, should_refuse)| {
            serde_json::json!({ "question": question, "should_refuse": should_refuse }).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");
    write_file(dir, "eval.jsonl", body.as_bytes())
}
