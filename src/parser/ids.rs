//! Identifier generation for model nodes.
//!
//! Every section, entry, content item and skill carries a stable unique id
//! used for list-key diffing in the editor, not for structural meaning. The
//! generator is owned by the builder and injectable so tests can produce
//! deterministic ids.

use uuid::Uuid;

/// Source of stable unique identifiers for model nodes.
pub trait IdGenerator {
    /// Produce the next identifier.
    fn next_id(&mut self) -> String;
}

/// Random v4 UUID identifiers, the default for interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic counter-based identifiers for tests and snapshots.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Create a generator starting at `id-1`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("id-{}", self.next)
    }
}
