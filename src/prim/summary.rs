//! Run summaries, serializable for reporting.

use serde::Serialize;

/// Outcome of one spanning-tree run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MstSummary {
    /// Sum of the frontier costs of every vertex after the seed.
    ///
    /// `+inf` if the graph was disconnected (see `stranded_roots`).
    pub total_cost: f64,
    /// Vertices in the graph.
    pub vertex_count: usize,
    /// Undirected connections in the graph, parallel edges included.
    pub edge_count: usize,
    /// Vertices settled by the run.
    pub settled: usize,
    /// Vertices after the seed that were popped with no connecting edge.
    ///
    /// Non-zero means the graph has `stranded_roots + 1` components and
    /// `total_cost` is not a spanning-tree cost.
    pub stranded_roots: usize,
}

impl MstSummary {
    /// Returns `true` if every vertex was reached from the seed.
    pub fn is_spanning(&self) -> bool {
        self.stranded_roots == 0
    }
}
