use crate::models::{CoverageAnalysis, Draft};

/// Scores how well a draft is grounded in its citations.
pub trait Verifier: Send + Sync {
    /// Grounding score in [0, 1].
    fn score(&self, query: &str, draft: &Draft) -> f64;

    /// Capability check: verifiers that can explain their score return themselves here.
    /// The control loop only steers refinement by missing terms when this is `Some`.
    fn as_analyzer(&self) -> Option<&dyn CoverageAnalyzer> {
        None
    }
}

/// A verifier that can also report which query terms are covered or missing.
pub trait CoverageAnalyzer: Verifier {
    fn analyze(&self, query: &str, draft: &Draft) -> CoverageAnalysis;
}
