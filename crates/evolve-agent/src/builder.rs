//! Standard wiring: lexical index + coverage verifier + ring memory.

use std::path::Path;
use std::sync::Arc;

use evolve_core::config::EvolveConfig;
use evolve_retrieval::LexicalIndex;
use evolve_verifier::CoverageVerifier;

use crate::engine::AlphaEvolveAgent;
use crate::memory::RingMemory;

/// Build an agent over `corpus_dir` with a fresh ring memory sized from config.
pub fn build_agent(corpus_dir: &Path, config: &EvolveConfig) -> AlphaEvolveAgent {
    let memory = Arc::new(RingMemory::new(config.agent.memory_capacity));
    build_agent_with_memory(corpus_dir, config, memory)
}

/// Build an agent that writes outcomes into a caller-held memory.
pub fn build_agent_with_memory(
    corpus_dir: &Path,
    config: &EvolveConfig,
    memory: Arc<RingMemory>,
) -> AlphaEvolveAgent {
    let retriever = LexicalIndex::build(corpus_dir, &config.retrieval);
    let verifier = CoverageVerifier::new(config.verifier.clone());
    AlphaEvolveAgent::new(Box::new(retriever), Box::new(verifier), config.agent.clone())
        .with_memory(memory)
}
