//! The Prim loop.
//!
//! Invariant while running: for every vertex still in the heap, its frontier
//! cost is the cheapest edge to any settled vertex (`+inf` if none). Popping the
//! minimum therefore always settles the cheapest crossing edge.
//!
//! Disconnected graphs are not detected up front. Each extra component's first
//! vertex is popped at `+inf`, which is added to the total exactly as the plain
//! algorithm would; the count is surfaced in [`MstSummary::stranded_roots`].

use tracing::{debug, trace, warn};

use crate::error::{MstError, Result};
use crate::graph::{GhostSpanningGraph, VertexId};
use crate::heap::GhostIndexedMinHeap;
use crate::prim::MstSummary;
use crate::GhostToken;

/// Drives one spanning-tree computation at a time over a borrowed graph.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimEngine;

impl PrimEngine {
    /// Creates an engine.
    pub const fn new() -> Self {
        Self
    }

    /// Runs Prim's algorithm to completion.
    ///
    /// The graph's frontier state is reset first, so running twice on the same
    /// graph gives the same summary.
    ///
    /// # Errors
    /// Only heap precondition failures, which indicate a bug rather than bad input.
    pub fn run<'brand, K>(
        &self,
        graph: &GhostSpanningGraph<'brand, K>,
        token: &mut GhostToken<'brand>,
    ) -> Result<MstSummary> {
        self.run_with_cancel(graph, token, || false)
    }

    /// Runs Prim's algorithm, polling `should_stop` before every pop.
    ///
    /// # Errors
    /// [`MstError::Cancelled`] as soon as `should_stop` returns `true`.
    pub fn run_with_cancel<'brand, K, F>(
        &self,
        graph: &GhostSpanningGraph<'brand, K>,
        token: &mut GhostToken<'brand>,
        mut should_stop: F,
    ) -> Result<MstSummary>
    where
        F: FnMut() -> bool,
    {
        let mut summary = MstSummary {
            total_cost: 0.0,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            settled: 0,
            stranded_roots: 0,
        };

        graph.reset_frontier(token);
        let mut heap = GhostIndexedMinHeap::initialize(graph, token);
        if heap.is_empty() {
            return Ok(summary);
        }

        if should_stop() {
            return Err(MstError::Cancelled { settled: 0 });
        }
        // The seed is whichever vertex heap order puts first; its `+inf` is not an edge.
        let seed = heap.pop(token)?;
        summary.settled = 1;
        debug!(seed = seed.index(), vertices = summary.vertex_count, "prim seeded");
        expand(&mut heap, token, seed)?;

        while !heap.is_empty() {
            if should_stop() {
                debug!(settled = summary.settled, "prim cancelled");
                return Err(MstError::Cancelled {
                    settled: summary.settled,
                });
            }
            let next = heap.pop(token)?;
            let cost = graph.frontier_cost(token, next);
            if cost.is_infinite() {
                summary.stranded_roots += 1;
            }
            summary.total_cost += cost;
            summary.settled += 1;
            trace!(vertex = next.index(), cost, "settled");
            expand(&mut heap, token, next)?;
        }

        if summary.stranded_roots > 0 {
            warn!(
                components = summary.stranded_roots + 1,
                "graph is disconnected; total cost is not a spanning-tree cost"
            );
        }
        debug!(total = summary.total_cost, settled = summary.settled, "prim finished");
        Ok(summary)
    }
}

// Offers every edge touching `settled` to its far endpoint.
fn expand<'brand, K>(
    heap: &mut GhostIndexedMinHeap<'_, 'brand, K>,
    token: &mut GhostToken<'brand>,
    settled: VertexId<'brand>,
) -> Result<()> {
    let graph = heap.graph();
    for edge in graph.incident_edges(settled) {
        heap.relax(token, edge.opposite(settled), edge.cost)?;
    }
    Ok(())
}

/// Returns the total cost of a minimum spanning tree of `graph`.
///
/// The graph is assumed connected; see [`PrimEngine::run`] for the full summary.
///
/// # Errors
/// Heap precondition failures only.
pub fn compute_mst<'brand, K>(
    graph: &GhostSpanningGraph<'brand, K>,
    token: &mut GhostToken<'brand>,
) -> Result<f64> {
    PrimEngine::new().run(graph, token).map(|s| s.total_cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_vertex_graphs_cost_nothing() {
        GhostToken::new(|mut token| {
            let mut g: GhostSpanningGraph<'_, u8> = GhostSpanningGraph::new();
            assert_eq!(compute_mst(&g, &mut token), Ok(0.0));

            g.get_or_create_vertex(1);
            let s = PrimEngine::new().run(&g, &mut token).unwrap();
            assert_eq!(s.total_cost, 0.0);
            assert_eq!(s.settled, 1);
            assert!(s.is_spanning());
        });
    }

    #[test]
    fn every_vertex_ends_settled() {
        GhostToken::new(|mut token| {
            let mut g = GhostSpanningGraph::new();
            g.connect('a', 'b', 1.0).unwrap();
            g.connect('b', 'c', 2.0).unwrap();
            g.connect('a', 'c', 9.0).unwrap();

            let s = PrimEngine::new().run(&g, &mut token).unwrap();
            assert_eq!(s.total_cost, 3.0);
            assert_eq!(s.settled, 3);
            assert_eq!(s.edge_count, 3);
            for v in g.all_vertices() {
                assert!(!g.is_in_frontier(&token, v));
            }
        });
    }

    #[test]
    fn disconnected_graph_is_reported_not_fixed() {
        GhostToken::new(|mut token| {
            let mut g = GhostSpanningGraph::new();
            g.connect(1, 2, 1.0).unwrap();
            g.connect(3, 4, 1.0).unwrap();

            let s = PrimEngine::new().run(&g, &mut token).unwrap();
            assert_eq!(s.stranded_roots, 1);
            assert!(!s.is_spanning());
            assert!(s.total_cost.is_infinite());
        });
    }

    #[test]
    fn cancellation_stops_between_pops() {
        GhostToken::new(|mut token| {
            let mut g = GhostSpanningGraph::new();
            for i in 0..10u32 {
                g.connect(i, i + 1, 1.0).unwrap();
            }
            let mut polls = 0;
            let err = PrimEngine::new()
                .run_with_cancel(&g, &mut token, || {
                    polls += 1;
                    polls > 4
                })
                .unwrap_err();
            assert_eq!(err, MstError::Cancelled { settled: 4 });
        });
    }
}
