//! # evolve-retrieval
//!
//! Keyword retrieval for the grounding loop: a BM25 index built once over a
//! directory of plain-text files, read-only afterwards.
//!
//! ## Modules
//! - `bm25`: IDF and per-term contribution formulas
//! - `corpus`: file discovery and lossy text loading
//! - `index`: `LexicalIndex`, the `Retriever` implementation

pub mod bm25;
pub mod corpus;
pub mod index;

pub use bm25::Bm25Params;
pub use index::{IndexStats, LexicalIndex};
