use serde::{Deserialize, Serialize};

/// A ranked piece of retrieved text. Only retrievers create these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Identifier of the document the snippet came from (a file path for the lexical index).
    pub source: String,
    /// First non-empty line of the document, truncated.
    pub snippet: String,
    /// Ranking relevance. Not a probability.
    pub score: f64,
}

impl Evidence {
    pub fn new(source: impl Into<String>, snippet: impl Into<String>, score: f64) -> Self {
        Self {
            source: source.into(),
            snippet: snippet.into(),
            score,
        }
    }

    /// First line of the trimmed snippet, used when synthesizing answers.
    pub fn lead_line(&self) -> &str {
        self.snippet.trim().lines().next().unwrap_or("")
    }
}
