//! Threshold sweeps: one evaluation per threshold, each over a fresh agent.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use evolve_agent::AlphaEvolveAgent;
use evolve_core::errors::{EvalError, EvalResult};

use crate::dataset::EvalRecord;
use crate::harness::evaluate;
use crate::report::{write_text, EvalReport};

/// Column header of the sweep table, tab-separated.
pub const TABLE_HEADER: &str =
    "threshold\tprecision\tprecision_ci\trecall\trecall_ci\tFAR\tFAR_ci\taccept_rate\trefusal_rate";

/// Parse a comma-separated threshold list such as `"0.5, 0.6,0.7"`.
///
/// Empty items are skipped. Any other unparsable or non-finite item is an
/// error, as is a list with no thresholds at all.
pub fn parse_thresholds(list: &str) -> EvalResult<Vec<f64>> {
    let thresholds = list
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>()
                .ok()
                .filter(|t| t.is_finite())
                .ok_or_else(|| EvalError::InvalidSweep {
                    item: item.to_string(),
                })
        })
        .collect::<EvalResult<Vec<f64>>>()?;
    if thresholds.is_empty() {
        return Err(EvalError::EmptySweep);
    }
    Ok(thresholds)
}

/// One row of a sweep: the threshold and its full report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepEntry {
    pub threshold: f64,
    #[serde(flatten)]
    pub report: EvalReport,
}

/// All per-threshold reports, serialised under a `sweep` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub sweep: Vec<SweepEntry>,
}

impl SweepReport {
    /// Tab-separated metric rows, one per threshold, without the header.
    pub fn table_rows(&self) -> Vec<String> {
        self.sweep.iter().map(table_row).collect()
    }

    /// Header plus rows, newline-joined.
    pub fn to_table(&self) -> String {
        std::iter::once(TABLE_HEADER.to_string())
            .chain(self.table_rows())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json_pretty(&self) -> EvalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty JSON report to `path`, creating parent directories.
    pub fn write_json(&self, path: &Path) -> EvalResult<()> {
        write_text(path, &self.to_json_pretty()?)
    }
}

/// Evaluate `data` once per threshold. `factory` builds the agent for each
/// threshold so no state carries over between runs.
pub fn sweep<F>(mut factory: F, data: &[EvalRecord], thresholds: &[f64]) -> SweepReport
where
    F: FnMut(f64) -> AlphaEvolveAgent,
{
    let sweep = thresholds
        .iter()
        .map(|&threshold| {
            let mut agent = factory(threshold);
            let report = evaluate(&mut agent, data, threshold);
            SweepEntry { threshold, report }
        })
        .collect::<Vec<_>>();
    info!(thresholds = sweep.len(), rows = data.len(), "Sweep complete");
    SweepReport { sweep }
}

fn table_row(entry: &SweepEntry) -> String {
    let r = &entry.report;
    format!(
        "{:.2}\t{:.3}\t{}\t{:.3}\t{}\t{:.3}\t{}\t{:.3}\t{:.3}",
        entry.threshold,
        r.precision_accept,
        format_ci(r.precision_accept_ci),
        r.recall_accept,
        format_ci(r.recall_accept_ci),
        r.false_accept_rate,
        format_ci(r.false_accept_rate_ci),
        r.accept_rate,
        r.refusal_rate,
    )
}

fn format_ci((low, high): (f64, f64)) -> String {
    format!("({low:.3}, {high:.3})")
}
