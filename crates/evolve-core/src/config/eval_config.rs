use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Evaluation run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Acceptance threshold for a single evaluation run.
    pub threshold: f64,
    /// JSONL dataset of `{question, should_refuse?}` rows.
    pub dataset: PathBuf,
    /// Corpus directory the agent indexes.
    pub corpus: PathBuf,
    /// Comma-separated thresholds; when set, a sweep replaces the single run.
    pub sweep: Option<String>,
    /// Where to write the JSON report. `None` means stdout.
    pub out: Option<PathBuf>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            dataset: PathBuf::from("data/eval.jsonl"),
            corpus: PathBuf::from("data/corpus"),
            sweep: None,
            out: None,
        }
    }
}
