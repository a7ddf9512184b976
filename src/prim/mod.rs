//! Prim's algorithm over a [`GhostSpanningGraph`](crate::GhostSpanningGraph).
//!
//! The engine never touches heap slots directly: it only pops and offers
//! candidate costs through [`GhostIndexedMinHeap::relax`](crate::GhostIndexedMinHeap::relax).

pub mod engine;
pub mod summary;

pub use engine::{compute_mst, PrimEngine};
pub use summary::MstSummary;
