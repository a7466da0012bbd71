//! Evaluation report types and JSON output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use evolve_core::errors::{EvalError, EvalResult};
use evolve_core::models::Evidence;

use crate::confusion::ConfusionCounts;

/// Per-row outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalExample {
    pub question: String,
    /// `score >= threshold`
    pub accepted: bool,
    pub should_refuse: bool,
    pub score: f64,
    /// Share of the question's terms found in the answer and citations.
    pub coverage: f64,
    /// Sorted.
    pub covered_terms: Vec<String>,
    /// Sorted.
    pub missing_terms: Vec<String>,
    pub answer: String,
    pub citations: Vec<Evidence>,
}

/// Aggregate metrics for one evaluation pass at one threshold.
///
/// Intervals are 95 % Wilson bounds serialised as `[low, high]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub total: u32,
    pub accept_rate: f64,
    pub refusal_rate: f64,
    pub avg_score: f64,
    pub avg_query_coverage: f64,
    pub precision_accept: f64,
    pub precision_accept_ci: (f64, f64),
    pub recall_accept: f64,
    pub recall_accept_ci: (f64, f64),
    pub false_accept_rate: f64,
    pub false_accept_rate_ci: (f64, f64),
    pub confusion: ConfusionCounts,
    pub examples: Vec<EvalExample>,
}

impl EvalReport {
    pub fn to_json_pretty(&self) -> EvalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty JSON report to `path`, creating parent directories.
    pub fn write_json(&self, path: &Path) -> EvalResult<()> {
        write_text(path, &self.to_json_pretty()?)
    }
}

pub(crate) fn write_text(path: &Path, text: &str) -> EvalResult<()> {
    let io_err = |source| EvalError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, text).map_err(io_err)
}
