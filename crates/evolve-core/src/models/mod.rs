mod answer;
mod coverage;
mod draft;
mod evidence;

pub use answer::AgentAnswer;
pub use coverage::CoverageAnalysis;
pub use draft::Draft;
pub use evidence::Evidence;
