//! # evolve-core
//!
//! Foundation crate for the Alpha Evolve grounding loop.
//! Defines the shared model (Evidence, Draft, AgentAnswer), the collaborator
//! traits (Retriever, Verifier, CoverageAnalyzer, Memory), errors, config,
//! and the tokenizer used by both retrieval and verification.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EvolveConfig;
pub use errors::{EvolveError, EvolveResult, RecoveryAction, RetrievalError, RetrievalResult};
pub use models::{AgentAnswer, CoverageAnalysis, Draft, Evidence};
pub use traits::{CoverageAnalyzer, Memory, Retriever, Verifier};
