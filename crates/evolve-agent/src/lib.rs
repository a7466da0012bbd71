//! # evolve-agent
//!
//! The Alpha Evolve control loop: retrieve evidence, propose extractive
//! drafts, score them with a verifier, accept the first one over threshold or
//! refine retrieval around the terms the best draft missed, and refuse when
//! the iteration budget runs out.
//!
//! ## Modules
//! - `engine`: `AlphaEvolveAgent` and its explicit loop state machine
//! - `memory`: `RingMemory`, a bounded FIFO `Memory` implementation
//! - `builder`: `build_agent` wiring index + verifier + memory from config

pub mod builder;
pub mod engine;
pub mod memory;

pub use builder::{build_agent, build_agent_with_memory};
pub use engine::AlphaEvolveAgent;
pub use memory::{MemoryEntry, RingMemory};
