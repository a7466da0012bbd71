//! Accept/refuse confusion counts against `should_refuse` ground truth.
//!
//! "Positive" means the agent accepted. A false-positive accept is an
//! answer the dataset says should have been refused.

use serde::{Deserialize, Serialize};

/// Counts for one evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// Accepted, answerable.
    pub tp_accept: u32,
    /// Accepted, should have refused.
    pub fp_accept: u32,
    /// Refused, should have refused.
    pub tn_refuse: u32,
    /// Refused, answerable.
    pub fn_refuse: u32,
    /// `tp_accept + fn_refuse`
    pub total_positives: u32,
    /// `fp_accept + tn_refuse`
    pub total_negatives: u32,
}

impl ConfusionCounts {
    pub fn record(&mut self, accepted: bool, should_refuse: bool) {
        match (accepted, should_refuse) {
            (true, false) => self.tp_accept += 1,
            (true, true) => self.fp_accept += 1,
            (false, true) => self.tn_refuse += 1,
            (false, false) => self.fn_refuse += 1,
        }
        if should_refuse {
            self.total_negatives += 1;
        } else {
            self.total_positives += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.tp_accept + self.fp_accept + self.tn_refuse + self.fn_refuse
    }

    /// Accepted-and-answerable share of all accepts.
    pub fn precision(&self) -> f64 {
        ratio(self.tp_accept, self.tp_accept + self.fp_accept)
    }

    /// Accepted share of the answerable rows.
    pub fn recall(&self) -> f64 {
        ratio(self.tp_accept, self.total_positives)
    }

    /// Accepted share of the rows that should have been refused.
    pub fn false_accept_rate(&self) -> f64 {
        ratio(self.fp_accept, self.total_negatives)
    }
}

/// `num / den`, or 0 when the denominator is 0.
pub(crate) fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        f64::from(num) / f64::from(den)
    }
}
