mod memory;
mod retriever;
mod verifier;

pub use memory::Memory;
pub use retriever::Retriever;
pub use verifier::{CoverageAnalyzer, Verifier};
