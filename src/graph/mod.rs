//! Undirected weighted graph model for spanning-tree computations.
//!
//! Vertices live in a dense arena and are addressed by branded [`VertexId`]
//! handles. Every undirected connection is stored as a pair of directed arcs
//! ([`Edge`]) so that "all edges touching `v`" is the chain of `v`'s outgoing
//! and incoming lists.

pub mod edge;
pub mod spanning_graph;
pub mod vertex;

pub use edge::Edge;
pub use spanning_graph::GhostSpanningGraph;
pub use vertex::{Frontier, Vertex, VertexId};
