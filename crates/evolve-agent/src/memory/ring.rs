//! Bounded FIFO memory of grounding outcomes.
//!
//! Keeps the most recent `capacity` entries; the oldest is evicted first.
//! The buffer sits behind a mutex so the caller can hold an `Arc` to the same
//! memory the agent writes into.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

use evolve_core::traits::Memory;

/// One remembered `ask` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub query: String,
    pub answer: String,
    pub accepted: bool,
}

/// In-memory ring buffer of recent outcomes.
pub struct RingMemory {
    entries: Mutex<VecDeque<MemoryEntry>>,
    capacity: usize,
}

impl RingMemory {
    /// Create a ring holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `(accepted, total)` over the entries currently held.
    pub fn stats(&self) -> (usize, usize) {
        match self.entries.lock() {
            Ok(entries) => (entries.iter().filter(|e| e.accepted).count(), entries.len()),
            Err(_) => (0, 0),
        }
    }

    /// Snapshot of the held entries, oldest first.
    pub fn entries(&self) -> Vec<MemoryEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.stats().1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RingMemory {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Memory for RingMemory {
    fn remember(&self, query: &str, answer: &str, accepted: bool) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(_) => {
                // Poisoned lock: drop the write
                warn!(query, "ring memory lock poisoned: outcome not recorded");
                return;
            }
        };
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(MemoryEntry {
            query: query.to_string(),
            answer: answer.to_string(),
            accepted,
        });
    }
}
