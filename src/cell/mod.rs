//! Token-branded interior mutability.
//!
//! The spanning-tree engine only needs one cell kind: a slot whose reads are
//! gated by `&GhostToken<'brand>` and whose writes are gated by
//! `&mut GhostToken<'brand>`. Vertices keep their frontier bookkeeping in it so
//! the heap can update cost and position while the graph's adjacency lists are
//! shared-borrowed.

pub mod ghost_cell;

pub use ghost_cell::GhostCell;
