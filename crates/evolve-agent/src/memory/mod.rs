//! Memory collaborators for the control loop.

pub mod ring;

pub use ring::{MemoryEntry, RingMemory};
