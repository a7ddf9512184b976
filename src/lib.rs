//! # `ghost-prim` - Minimum spanning trees over ghost-token graphs
//!
//! Computes the total cost of a minimum spanning tree of a connected, undirected,
//! weighted graph with Prim's algorithm, driven by an indexed binary min-heap
//! that supports decrease-key.
//!
//! ## Architecture
//!
//! 1. **Graph model** ([`GhostSpanningGraph`]): a registry from caller keys to
//!    branded [`VertexId`] handles plus a dense vertex arena. Each undirected
//!    connection is stored as two directed [`Edge`]s.
//! 2. **Indexed min-heap** ([`GhostIndexedMinHeap`]): an array of handles ordered
//!    by each vertex's frontier cost. The cost and the vertex's heap slot live in
//!    a token-gated [`GhostCell`] on the vertex, so decrease-key re-sifts in place.
//! 3. **Prim engine** ([`PrimEngine`], [`compute_mst`]): seeds from the heap
//!    minimum, then pops and relaxes until the heap is empty.
//!
//! ## Ghost tokens
//!
//! A [`GhostToken`] brands every handle and frontier cell of one computation.
//! Reading frontier state needs `&GhostToken<'brand>`; the heap's writes need
//! `&mut GhostToken<'brand>`. That split is what lets the engine walk a vertex's
//! adjacency lists (shared borrow of the graph) while the heap rewrites frontier
//! costs of its neighbours.
//!
//! ## Example
//!
//! ```rust
//! use ghost_prim::{compute_mst, GhostSpanningGraph, GhostToken};
//!
//! let total = GhostToken::new(|mut token| {
//!     let mut graph = GhostSpanningGraph::new();
//!     graph.connect('A', 'B', 1.0).unwrap();
//!     graph.connect('B', 'C', 2.0).unwrap();
//!     graph.connect('C', 'D', 1.0).unwrap();
//!     graph.connect('A', 'D', 5.0).unwrap();
//!     graph.connect('B', 'D', 4.0).unwrap();
//!     compute_mst(&graph, &mut token).unwrap()
//! });
//! assert_eq!(total, 4.0);
//! ```
//!
//! ## Disconnected graphs
//!
//! The engine assumes connectivity. On a disconnected graph the first vertex of
//! every further component is settled at `+inf`, so the total is `+inf`.
//! [`MstSummary::stranded_roots`] reports how often that happened.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod edge_list;
pub mod error;
pub mod graph;
pub mod heap;
pub mod prim;
pub mod token;

#[cfg(feature = "parallel")]
pub mod batch;

pub use cell::GhostCell;
pub use edge_list::{EdgeList, EdgeRecord, ParseError};
pub use error::{MstError, Result};
pub use graph::{Edge, Frontier, GhostSpanningGraph, Vertex, VertexId};
pub use heap::GhostIndexedMinHeap;
pub use prim::{compute_mst, MstSummary, PrimEngine};
pub use token::GhostToken;

// Compile-time assertions for memory layout.
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // Brands cost nothing at runtime.
    assert!(mem::size_of::<VertexId<'static>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<GhostCell<'static, Frontier>>() == mem::size_of::<Frontier>());
};
