//! # evolve-verifier
//!
//! Coverage-based grounding verification. A draft scores well when the query's
//! words and adjacent word pairs reappear in the answer and its cited snippets.

pub mod coverage;

pub use coverage::CoverageVerifier;
