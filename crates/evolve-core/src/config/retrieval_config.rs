//! Lexical index configuration.

use serde::{Deserialize, Serialize};

/// BM25 tuning and corpus discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Document length normalisation strength.
    pub b: f64,
    /// Maximum snippet length in characters.
    pub snippet_chars: usize,
    /// File extensions (without the dot, case-insensitive) that get indexed.
    pub extensions: Vec<String>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            k1: 1.5,
            b: 0.75,
            snippet_chars: 280,
            extensions: vec!["txt".to_string()],
        }
    }
}

impl RetrievalConfig {
    /// Whether a file extension is one the index should read.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
