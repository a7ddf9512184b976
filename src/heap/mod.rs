//! Priority structures over graph vertices.
//!
//! - `indexed_heap`: array-backed binary min-heap with decrease-key, keyed by
//!   each vertex's frontier cost.
//! - `invariants`: debug-only checks of heap order and slot bookkeeping.

pub mod indexed_heap;
pub(crate) mod invariants;

pub use indexed_heap::GhostIndexedMinHeap;
