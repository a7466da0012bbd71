//! Control loop configuration.

use serde::{Deserialize, Serialize};

/// Default acceptance threshold, also used when a non-finite one is supplied.
pub const DEFAULT_ACCEPT_THRESHOLD: f64 = 0.7;

/// Upper bound on the citations a single draft carries.
pub const MAX_CITATIONS: usize = 4;

/// Configuration for the propose → verify → refine loop.
///
/// Out-of-range counts are not rejected; the `effective_*` accessors coerce
/// them into their usable range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Maximum refinement iterations per `ask`.
    pub max_iters: u32,
    /// Candidate drafts generated per iteration.
    pub ideas_per_iteration: u32,
    /// Minimum verifier score for a draft to be accepted.
    pub accept_threshold: f64,
    /// Record one trace line per iteration.
    pub trace: bool,
    /// Suffix each synthesized line with a `[n]` marker.
    pub inline_citations: bool,
    /// Evidence fetched for the raw query.
    pub initial_k: usize,
    /// Evidence items a single draft may cite, within `1..=MAX_CITATIONS`.
    pub max_citations: usize,
    /// Missing terms used for supplementary retrieval during refinement.
    pub expansion_terms: usize,
    /// Evidence fetched per supplementary query.
    pub expansion_k: usize,
    /// Capacity of the ring memory built by `build_agent`.
    pub memory_capacity: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iters: 3,
            ideas_per_iteration: 2,
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
            trace: false,
            inline_citations: true,
            initial_k: 6,
            max_citations: MAX_CITATIONS,
            expansion_terms: 2,
            expansion_k: 2,
            memory_capacity: 128,
        }
    }
}

impl AgentConfig {
    pub fn effective_max_iters(&self) -> u32 {
        self.max_iters.max(1)
    }

    pub fn effective_ideas(&self) -> u32 {
        self.ideas_per_iteration.max(1)
    }

    pub fn effective_threshold(&self) -> f64 {
        if self.accept_threshold.is_finite() {
            self.accept_threshold
        } else {
            DEFAULT_ACCEPT_THRESHOLD
        }
    }

    pub fn effective_max_citations(&self) -> usize {
        self.max_citations.clamp(1, MAX_CITATIONS)
    }

    /// Copy of this config with every coercion applied.
    pub fn normalized(&self) -> Self {
        Self {
            max_iters: self.effective_max_iters(),
            ideas_per_iteration: self.effective_ideas(),
            accept_threshold: self.effective_threshold(),
            max_citations: self.effective_max_citations(),
            ..self.clone()
        }
    }
}
