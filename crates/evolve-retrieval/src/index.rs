//! `LexicalIndex`: BM25 ranking over an in-memory document set.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, info};

use evolve_core::config::RetrievalConfig;
use evolve_core::errors::RetrievalResult;
use evolve_core::models::Evidence;
use evolve_core::text::tokenize;
use evolve_core::traits::Retriever;

use crate::bm25::{self, Bm25Params};
use crate::corpus;

/// One indexed document. Discovery order is preserved by its position in the index.
#[derive(Debug, Clone)]
struct IndexedDocument {
    source: String,
    length: usize,
    snippet: String,
    term_freqs: HashMap<String, u32>,
}

/// Summary of an index, logged after a build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexStats {
    pub documents: usize,
    pub vocabulary: usize,
    pub avg_doc_len: f64,
}

/// Read-only BM25 index. Built once; safe to share across threads.
#[derive(Debug, Clone)]
pub struct LexicalIndex {
    docs: Vec<IndexedDocument>,
    doc_freqs: HashMap<String, usize>,
    idf: HashMap<String, f64>,
    avg_doc_len: f64,
    params: Bm25Params,
}

impl LexicalIndex {
    /// Index every matching file under `corpus_dir`.
    /// A missing or empty directory produces an empty index.
    pub fn build(corpus_dir: &Path, config: &RetrievalConfig) -> Self {
        let documents = corpus::load(corpus_dir, config)
            .into_iter()
            .map(|doc| (doc.path.display().to_string(), doc.text));
        let index = Self::from_documents(documents, config);
        let stats = index.stats();
        info!(
            corpus = %corpus_dir.display(),
            documents = stats.documents,
            vocabulary = stats.vocabulary,
            avg_doc_len = format!("{:.1}", stats.avg_doc_len),
            "Lexical index built"
        );
        index
    }

    /// Index `(source, text)` pairs in the given order. Tokenless texts are skipped.
    pub fn from_documents<I, S, T>(documents: I, config: &RetrievalConfig) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: AsRef<str>,
    {
        let mut docs = Vec::new();
        let mut doc_freqs: HashMap<String, usize> = HashMap::new();
        let mut total_len = 0usize;

        for (source, text) in documents {
            let source = source.into();
            let text = text.as_ref();
            let tokens = tokenize(text);
            if tokens.is_empty() {
                debug!(source = %source, "skipping document without indexable terms");
                continue;
            }

            let mut term_freqs: HashMap<String, u32> = HashMap::new();
            for token in &tokens {
                *term_freqs.entry(token.clone()).or_insert(0) += 1;
            }
            let distinct: HashSet<&String> = term_freqs.keys().collect();
            for term in distinct {
                *doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }

            total_len += tokens.len();
            docs.push(IndexedDocument {
                source,
                length: tokens.len(),
                snippet: make_snippet(text, config.snippet_chars),
                term_freqs,
            });
        }

        let num_docs = docs.len();
        let avg_doc_len = if num_docs > 0 {
            total_len as f64 / num_docs as f64
        } else {
            0.0
        };
        let idf = doc_freqs
            .iter()
            .map(|(term, &df)| (term.clone(), bm25::idf(num_docs, df)))
            .collect();

        Self {
            docs,
            doc_freqs,
            idf,
            avg_doc_len,
            params: Bm25Params::from(config),
        }
    }

    /// An index with no documents.
    pub fn empty(config: &RetrievalConfig) -> Self {
        Self::from_documents(std::iter::empty::<(String, String)>(), config)
    }

    /// Top `k` documents for `query`, highest score first.
    ///
    /// Query terms outside the vocabulary are dropped. Documents that match no
    /// term are omitted. Equal scores keep discovery order.
    pub fn rank(&self, query: &str, k: usize) -> Vec<Evidence> {
        if self.docs.is_empty() || k == 0 {
            return Vec::new();
        }
        let query_terms: Vec<String> = tokenize(query)
            .into_iter()
            .filter(|t| self.doc_freqs.contains_key(t))
            .collect();
        if query_terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .docs
            .iter()
            .enumerate()
            .filter_map(|(pos, doc)| {
                let score: f64 = query_terms
                    .iter()
                    .map(|term| {
                        let tf = doc.term_freqs.get(term).copied().unwrap_or(0);
                        let idf = self.idf.get(term).copied().unwrap_or(0.0);
                        bm25::term_score(idf, tf, doc.length, self.avg_doc_len, self.params)
                    })
                    .sum();
                (score > 0.0).then_some((pos, score))
            })
            .collect();

        // Stable: equal scores keep discovery order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(pos, score)| {
                let doc = &self.docs[pos];
                Evidence::new(doc.source.clone(), doc.snippet.clone(), score)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    pub fn vocabulary_size(&self) -> usize {
        self.doc_freqs.len()
    }

    /// Number of documents containing `term` (already normalised).
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.len(),
            vocabulary: self.vocabulary_size(),
            avg_doc_len: self.avg_doc_len,
        }
    }
}

impl Retriever for LexicalIndex {
    fn search(&self, query: &str, k: usize) -> RetrievalResult<Vec<Evidence>> {
        Ok(self.rank(query, k))
    }
}

/// First line of the trimmed text, cut to `max_chars` characters.
fn make_snippet(text: &str, max_chars: usize) -> String {
    text.trim()
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .take(max_chars)
        .collect()
}
