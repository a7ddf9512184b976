//! `GhostSpanningGraph` - the vertex registry plus arena of an undirected graph.
//!
//! Construction follows the edge-list model: callers declare `from to cost`
//! connections and vertices are fetched-or-created by key as they are mentioned.
//! After construction the structure is read-only except for the per-vertex
//! frontier cells, which are token-gated and owned by the heap during a run.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `get_or_create_vertex` | \(O(1)\) expected | One hash lookup |
//! | `connect` | \(O(1)\) amortized | Two lookups, four arc pushes |
//! | `incident_edges` | \(O(\deg)\) | Chains both arc lists |
//! | `reset_frontier` | \(O(n)\) | Touches every frontier cell |

use core::borrow::Borrow;
use core::hash::Hash;
use std::collections::HashMap;

use crate::error::{MstError, Result};
use crate::graph::{Edge, Frontier, Vertex, VertexId};
use crate::{GhostCell, GhostToken};

/// An undirected weighted graph whose vertex handles and frontier cells are branded.
pub struct GhostSpanningGraph<'brand, K> {
    registry: HashMap<K, VertexId<'brand>>,
    vertices: Vec<Vertex<'brand, K>>,
    connections: usize,
    generation: GhostCell<'brand, u64>,
}

impl<'brand, K> GhostSpanningGraph<'brand, K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
            vertices: Vec::new(),
            connections: 0,
            generation: GhostCell::new(0),
        }
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            registry: HashMap::with_capacity(vertex_count),
            vertices: Vec::with_capacity(vertex_count),
            connections: 0,
            generation: GhostCell::new(0),
        }
    }

    /// Returns the handle registered for `key`, creating a fresh vertex if needed.
    ///
    /// New vertices start unreached: frontier cost `+inf`, no heap slot, no arcs.
    pub fn get_or_create_vertex(&mut self, key: K) -> VertexId<'brand> {
        if let Some(&id) = self.registry.get(&key) {
            return id;
        }
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(key.clone()));
        self.registry.insert(key, id);
        id
    }

    /// Declares an undirected connection of `cost` between `from` and `to`.
    ///
    /// Both endpoints are created on demand. Repeated calls add parallel edges;
    /// nothing is de-duplicated.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidCost`] for a negative, infinite or NaN cost, in
    /// which case the graph is left untouched.
    pub fn connect(&mut self, from: K, to: K, cost: f64) -> Result<()> {
        check_cost(cost)?;
        let from = self.get_or_create_vertex(from);
        let to = self.get_or_create_vertex(to);
        self.link(from, to, cost);
        Ok(())
    }

    /// Same as [`connect`](Self::connect) for vertices that already exist.
    ///
    /// # Errors
    /// [`MstError::InvalidCost`] as for `connect`, or [`MstError::UnknownVertex`]
    /// if either handle is out of range for this graph.
    pub fn connect_ids(
        &mut self,
        from: VertexId<'brand>,
        to: VertexId<'brand>,
        cost: f64,
    ) -> Result<()> {
        check_cost(cost)?;
        self.vertex(from)?;
        self.vertex(to)?;
        self.link(from, to, cost);
        Ok(())
    }

    fn link(&mut self, from: VertexId<'brand>, to: VertexId<'brand>, cost: f64) {
        let forward = Edge { from, to, cost };
        let backward = forward.reversed();

        self.vertices[from.index()].edges_out.push(forward);
        self.vertices[to.index()].edges_in.push(forward);
        self.vertices[to.index()].edges_out.push(backward);
        self.vertices[from.index()].edges_in.push(backward);
        self.connections += 1;
    }

    /// Looks up the handle of an existing vertex.
    pub fn lookup<Q>(&self, key: &Q) -> Option<VertexId<'brand>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.registry.get(key).copied()
    }
}

impl<'brand, K> GhostSpanningGraph<'brand, K> {
    /// Iterates over every registered vertex in arena order.
    pub fn all_vertices(&self) -> impl ExactSizeIterator<Item = VertexId<'brand>> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns the vertex behind `id`.
    ///
    /// # Errors
    /// [`MstError::UnknownVertex`] if `id` does not index this graph's arena.
    pub fn vertex(&self, id: VertexId<'brand>) -> Result<&Vertex<'brand, K>> {
        self.vertices
            .get(id.index())
            .ok_or(MstError::UnknownVertex { index: id.index() })
    }

    /// Returns the caller key of `id`, if it belongs to this graph.
    pub fn key(&self, id: VertexId<'brand>) -> Option<&K> {
        self.vertices.get(id.index()).map(Vertex::key)
    }

    /// Iterates over every arc touching `vertex`: outgoing first, then incoming.
    ///
    /// Each undirected connection therefore shows up twice, once per list.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn incident_edges(&self, vertex: VertexId<'brand>) -> impl Iterator<Item = &Edge<'brand>> + '_ {
        assert!(
            vertex.index() < self.vertices.len(),
            "vertex {vertex} out of bounds"
        );
        let v = &self.vertices[vertex.index()];
        v.edges_out.iter().chain(v.edges_in.iter())
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected connections (parallel edges included).
    pub fn edge_count(&self) -> usize {
        self.connections
    }

    /// Returns `true` if no vertex has been registered.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the frontier cell of `id`.
    #[inline]
    pub(crate) fn frontier_cell(&self, id: VertexId<'brand>) -> Result<&GhostCell<'brand, Frontier>> {
        self.vertex(id).map(|v| &v.frontier)
    }

    /// Frontier cell of a handle already known to be in range (e.g. a heap slot).
    #[inline(always)]
    pub(crate) fn frontier_of(&self, id: VertexId<'brand>) -> &GhostCell<'brand, Frontier> {
        &self.vertices[id.index()].frontier
    }

    /// Reads the frontier state of `id`.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    pub fn frontier(&self, token: &GhostToken<'brand>, id: VertexId<'brand>) -> Frontier {
        assert!(id.index() < self.vertices.len(), "vertex {id} out of bounds");
        self.vertices[id.index()].frontier.get(token)
    }

    /// Cheapest known cost connecting `id` to the tree (`+inf` if none yet).
    pub fn frontier_cost(&self, token: &GhostToken<'brand>, id: VertexId<'brand>) -> f64 {
        self.frontier(token, id).cost
    }

    /// Returns `true` while `id` is still in the heap.
    pub fn is_in_frontier(&self, token: &GhostToken<'brand>, id: VertexId<'brand>) -> bool {
        self.frontier(token, id).is_present()
    }

    /// Hands out a fresh heap generation. Generations start at 1.
    pub(crate) fn claim_frontier(&self, token: &mut GhostToken<'brand>) -> u64 {
        let generation = self.generation.borrow_mut(token);
        *generation += 1;
        *generation
    }

    /// Returns every vertex to the unreached state so the graph can be run again.
    ///
    /// Any heap still alive over this graph loses its vertices and reports
    /// [`MstError::StaleHeap`] from then on.
    pub fn reset_frontier(&self, token: &mut GhostToken<'brand>) {
        for v in &self.vertices {
            v.frontier.set(token, Frontier::UNREACHED);
        }
    }
}

impl<'brand, K> Default for GhostSpanningGraph<'brand, K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'brand, K> core::fmt::Debug for GhostSpanningGraph<'brand, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GhostSpanningGraph")
            .field("vertices", &self.vertices.len())
            .field("edges", &self.connections)
            .finish()
    }
}

fn check_cost(cost: f64) -> Result<()> {
    // NaN fails both comparisons, so test for the accepted range.
    if cost >= 0.0 && cost.is_finite() {
        Ok(())
    } else {
        Err(MstError::InvalidCost { cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_stable() {
        GhostToken::new(|token| {
            let mut g = GhostSpanningGraph::new();
            let a = g.get_or_create_vertex(7);
            let b = g.get_or_create_vertex(9);
            assert_ne!(a, b);
            assert_eq!(g.get_or_create_vertex(7), a);
            assert_eq!(g.vertex_count(), 2);
            assert_eq!(g.key(b), Some(&9));
            assert_eq!(g.frontier(&token, a), Frontier::UNREACHED);
        });
    }

    #[test]
    fn connect_stores_paired_arcs() {
        let mut g = GhostSpanningGraph::new();
        g.connect("a", "b", 4.0).unwrap();
        let a = g.lookup("a").unwrap();
        let b = g.lookup("b").unwrap();

        let va = g.vertex(a).unwrap();
        let vb = g.vertex(b).unwrap();
        assert_eq!(va.edges_out(), &[Edge { from: a, to: b, cost: 4.0 }]);
        assert_eq!(vb.edges_in(), &[Edge { from: a, to: b, cost: 4.0 }]);
        assert_eq!(vb.edges_out(), &[Edge { from: b, to: a, cost: 4.0 }]);
        assert_eq!(va.edges_in(), &[Edge { from: b, to: a, cost: 4.0 }]);

        let far: Vec<_> = g.incident_edges(a).map(|e| e.opposite(a)).collect();
        assert_eq!(far, vec![b, b]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = GhostSpanningGraph::new();
        g.connect(1, 2, 3.0).unwrap();
        g.connect(1, 2, 7.0).unwrap();
        let one = g.lookup(&1).unwrap();
        assert_eq!(g.vertex(one).unwrap().degree(), 4);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn invalid_costs_are_rejected() {
        let mut g: GhostSpanningGraph<'_, u32> = GhostSpanningGraph::new();
        assert_eq!(
            g.connect(1, 2, -0.5),
            Err(MstError::InvalidCost { cost: -0.5 })
        );
        assert!(matches!(
            g.connect(1, 2, f64::NAN),
            Err(MstError::InvalidCost { .. })
        ));
        assert_eq!(
            g.connect(1, 2, f64::INFINITY),
            Err(MstError::InvalidCost { cost: f64::INFINITY })
        );
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn connect_ids_checks_handles() {
        let mut small = GhostSpanningGraph::new();
        let a = small.get_or_create_vertex('a');
        let mut big = GhostSpanningGraph::new();
        big.get_or_create_vertex('x');
        let y = big.get_or_create_vertex('y');

        assert_eq!(
            small.connect_ids(a, y, 1.0),
            Err(MstError::UnknownVertex { index: 1 })
        );
        small.connect_ids(a, a, 0.0).unwrap();
        assert_eq!(small.edge_count(), 1);
    }

    #[test]
    fn reset_frontier_restores_unreached() {
        GhostToken::new(|mut token| {
            let mut g = GhostSpanningGraph::new();
            g.connect(0u8, 1u8, 1.0).unwrap();
            let zero = g.lookup(&0).unwrap();
            g.frontier_cell(zero).unwrap().set(
                &mut token,
                Frontier {
                    cost: 1.0,
                    slot: Some(0),
                    owner: 1,
                },
            );
            assert!(g.is_in_frontier(&token, zero));

            g.reset_frontier(&mut token);
            assert_eq!(g.frontier(&token, zero), Frontier::UNREACHED);
            assert!(!g.is_in_frontier(&token, zero));
            assert!(g.frontier_cost(&token, zero).is_infinite());
        });
    }
}
