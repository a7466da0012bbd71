use std::sync::Arc;

use evolve_agent::{MemoryEntry, RingMemory};
use evolve_core::traits::Memory;

#[test]
fn ring_evicts_oldest_first() {
    let memory = RingMemory::new(2);
    memory.remember("q1", "a1", true);
    memory.remember("q2", "a2", false);
    memory.remember("q3", "a3", true);

    let entries = memory.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].query, "q2");
    assert_eq!(entries[1].query, "q3");
    assert_eq!(memory.stats(), (1, 2));
}

#[test]
fn zero_capacity_holds_one_entry() {
    let memory = RingMemory::new(0);
    assert_eq!(memory.capacity(), 1);
    memory.remember("q1", "a1", false);
    memory.remember("q2", "a2", false);
    assert_eq!(memory.len(), 1);
    assert_eq!(memory.entries()[0].query, "q2");
}

#[test]
fn default_ring_starts_empty() {
    let memory = RingMemory::default();
    assert!(memory.is_empty());
    assert_eq!(memory.capacity(), 64);
    assert_eq!(memory.stats(), (0, 0));
}

#[test]
fn shared_handle_sees_writes_through_trait_object() {
    let memory = Arc::new(RingMemory::new(4));
    let as_trait: Arc<dyn Memory> = memory.clone();
    as_trait.remember("what is bm25?", "Based on available evidence, ...", true);

    assert_eq!(
        memory.entries(),
        vec![MemoryEntry {
            query: "what is bm25?".into(),
            answer: "Based on available evidence, ...".into(),
            accepted: true,
        }]
    );
}

#[test]
fn entries_serialize_for_inspection() {
    let entry = MemoryEntry {
        query: "q".into(),
        answer: "a".into(),
        accepted: false,
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["accepted"], false);
    assert_eq!(json["query"], "q");
}
