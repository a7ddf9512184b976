//! Vertices, their arena handles, and their frontier bookkeeping.

use core::fmt;

use crate::graph::Edge;
use crate::token::InvariantLifetime;
use crate::GhostCell;

/// A branded handle into a [`GhostSpanningGraph`](crate::GhostSpanningGraph)'s vertex arena.
///
/// Handles are only minted by the graph, never by callers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<'brand> {
    index: usize,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> VertexId<'brand> {
    #[inline(always)]
    pub(crate) const fn new(index: usize) -> Self {
        Self {
            index,
            _brand: InvariantLifetime::new(),
        }
    }

    /// Returns the raw arena index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for VertexId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.index)
    }
}

impl fmt::Display for VertexId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

/// Per-vertex state owned by the frontier heap while a computation runs.
///
/// `cost` is the cheapest known edge into the growing tree (`+inf` until one is
/// seen). `slot` is the vertex's position in the heap array; `None` means the
/// vertex is not in the heap (never inserted, or already settled). `owner` is
/// the generation of the heap that last claimed the vertex; `0` means none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frontier {
    /// Cheapest known edge cost connecting this vertex to the tree.
    pub cost: f64,
    /// Current heap slot, or `None` once removed.
    pub slot: Option<usize>,
    /// Generation of the owning heap.
    pub owner: u64,
}

impl Frontier {
    /// State of a vertex no computation has touched yet.
    pub const UNREACHED: Self = Self {
        cost: f64::INFINITY,
        slot: None,
        owner: 0,
    };

    /// Returns `true` while the vertex sits in the heap.
    #[inline(always)]
    pub const fn is_present(&self) -> bool {
        self.slot.is_some()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::UNREACHED
    }
}

/// A graph vertex: the caller's key, its two arc lists, and its frontier cell.
pub struct Vertex<'brand, K> {
    key: K,
    pub(crate) edges_out: Vec<Edge<'brand>>,
    pub(crate) edges_in: Vec<Edge<'brand>>,
    pub(crate) frontier: GhostCell<'brand, Frontier>,
}

impl<'brand, K> Vertex<'brand, K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            edges_out: Vec::new(),
            edges_in: Vec::new(),
            frontier: GhostCell::new(Frontier::UNREACHED),
        }
    }

    /// The caller-assigned key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Arcs leaving this vertex.
    pub fn edges_out(&self) -> &[Edge<'brand>] {
        &self.edges_out
    }

    /// Reverse arcs pointing at this vertex.
    pub fn edges_in(&self) -> &[Edge<'brand>] {
        &self.edges_in
    }

    /// Number of arcs in both lists.
    pub fn degree(&self) -> usize {
        self.edges_out.len() + self.edges_in.len()
    }
}

impl<'brand, K: fmt::Debug> fmt::Debug for Vertex<'brand, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("key", &self.key)
            .field("edges_out", &self.edges_out.len())
            .field("edges_in", &self.edges_in.len())
            .finish()
    }
}
