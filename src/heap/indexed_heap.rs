//! `GhostIndexedMinHeap` - a binary min-heap of vertices with decrease-key.
//!
//! The heap array stores [`VertexId`] handles only. Each vertex's key (its
//! frontier cost) and its current array slot live in the vertex's token-gated
//! [`Frontier`] cell, and every swap rewrites the slots of both elements, so a
//! cost update can be followed by an \(O(\log n)\) re-sift without searching.
//!
//! All comparisons are strict (`<`): equal keys never move.
//!
//! Building a heap claims every vertex of the graph under a fresh generation
//! stamped into each cell. Only the most recent heap (and only until the next
//! [`reset_frontier`](GhostSpanningGraph::reset_frontier)) may mutate the
//! cells; an older heap gets [`MstError::StaleHeap`] instead.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `initialize` | \(O(n)\) |
//! | `pop` | \(O(\log n)\) |
//! | `decrease_key` | \(O(\log n)\) |
//! | `validate` | \(O(n)\) |

use core::fmt;

use crate::error::{MstError, Result};
use crate::graph::{Frontier, GhostSpanningGraph, VertexId};
use crate::heap::invariants::heap_assert;
use crate::GhostToken;

/// A min-heap over the vertices of one graph, ordered by frontier cost.
pub struct GhostIndexedMinHeap<'g, 'brand, K> {
    graph: &'g GhostSpanningGraph<'brand, K>,
    slots: Vec<VertexId<'brand>>,
    owner: u64,
}

impl<'g, 'brand, K> GhostIndexedMinHeap<'g, 'brand, K> {
    /// Builds a heap holding every vertex of `graph`.
    ///
    /// Each vertex gets the slot it was placed in, then heap order is restored
    /// bottom-up (sift-down from the last internal node to the root). Frontier
    /// costs are taken as they are; a fresh graph has them all at `+inf`.
    ///
    /// Any heap previously built over `graph` becomes stale.
    pub fn initialize(graph: &'g GhostSpanningGraph<'brand, K>, token: &mut GhostToken<'brand>) -> Self {
        let owner = graph.claim_frontier(token);
        let slots: Vec<_> = graph.all_vertices().collect();
        for (slot, &id) in slots.iter().enumerate() {
            let frontier = graph.frontier_of(id).borrow_mut(token);
            frontier.slot = Some(slot);
            frontier.owner = owner;
        }

        let mut heap = Self {
            graph,
            slots,
            owner,
        };
        for node in (0..heap.slots.len() / 2).rev() {
            heap.sift_down(token, node);
        }
        heap_assert(&heap, token);
        heap
    }

    /// Returns the number of vertices still in the heap.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` once every vertex has been popped.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the graph this heap orders.
    pub fn graph(&self) -> &'g GhostSpanningGraph<'brand, K> {
        self.graph
    }

    /// Returns the minimum vertex and its cost without removing it.
    pub fn peek(&self, token: &GhostToken<'brand>) -> Option<(VertexId<'brand>, f64)> {
        let &top = self.slots.first()?;
        Some((top, self.graph.frontier_of(top).borrow(token).cost))
    }

    /// Removes and returns the vertex with the smallest frontier cost.
    ///
    /// The popped vertex loses its slot and is settled for good: later
    /// [`decrease_key`](Self::decrease_key) calls on it are no-ops.
    ///
    /// # Errors
    /// - [`MstError::EmptyHeap`] if nothing is left.
    /// - [`MstError::StaleHeap`] if another heap or a reset has taken the cells over.
    pub fn pop(&mut self, token: &mut GhostToken<'brand>) -> Result<VertexId<'brand>> {
        let &first = self.slots.first().ok_or(MstError::EmptyHeap)?;
        self.check_owner(&self.graph.frontier_of(first).get(token), first)?;

        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let top = self.slots.pop().ok_or(MstError::EmptyHeap)?;

        if let Some(&moved) = self.slots.first() {
            self.graph.frontier_of(moved).borrow_mut(token).slot = Some(0);
            self.sift_down(token, 0);
        }
        self.graph.frontier_of(top).borrow_mut(token).slot = None;

        heap_assert(self, token);
        Ok(top)
    }

    /// Lowers the frontier cost of `vertex` to `cost` and sifts it up.
    ///
    /// Returns `Ok(false)` without touching anything if `vertex` has already been
    /// popped; settled costs are frozen.
    ///
    /// # Errors
    /// - [`MstError::UnknownVertex`] if `vertex` is not in this heap's graph.
    /// - [`MstError::StaleHeap`] if `vertex` belongs to a newer heap or was reset.
    /// - [`MstError::CostNotDecreasing`] if `cost` is not strictly below the
    ///   current cost (NaN included).
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn decrease_key(
        &mut self,
        token: &mut GhostToken<'brand>,
        vertex: VertexId<'brand>,
        cost: f64,
    ) -> Result<bool> {
        let graph = self.graph;
        let cell = graph.frontier_cell(vertex)?;
        let frontier = cell.get(token);
        self.check_owner(&frontier, vertex)?;
        let Frontier {
            cost: current, slot, ..
        } = frontier;
        let Some(slot) = slot else {
            return Ok(false);
        };
        // Negated so NaN is rejected too.
        if !(cost < current) {
            return Err(MstError::CostNotDecreasing {
                current,
                requested: cost,
            });
        }
        if self.slots.get(slot) != Some(&vertex) {
            return Err(MstError::HeapInvariant { slot });
        }

        cell.borrow_mut(token).cost = cost;
        self.sift_up(token, slot);

        heap_assert(self, token);
        Ok(true)
    }

    /// Offers `cost` as a new connection into `vertex`.
    ///
    /// Applies [`decrease_key`](Self::decrease_key) only when `vertex` is still in
    /// the heap and `cost` beats its current frontier cost; otherwise does nothing.
    /// Returns whether the key changed.
    ///
    /// # Errors
    /// [`MstError::UnknownVertex`] if `vertex` is not in this heap's graph,
    /// [`MstError::StaleHeap`] if this heap no longer owns it.
    pub fn relax(
        &mut self,
        token: &mut GhostToken<'brand>,
        vertex: VertexId<'brand>,
        cost: f64,
    ) -> Result<bool> {
        let frontier = self.graph.frontier_cell(vertex)?.get(token);
        self.check_owner(&frontier, vertex)?;
        if frontier.is_present() && cost < frontier.cost {
            self.decrease_key(token, vertex, cost)
        } else {
            Ok(false)
        }
    }

    /// Checks heap order and that every element's recorded slot is its real slot.
    ///
    /// # Errors
    /// [`MstError::HeapInvariant`] naming the first offending slot, or
    /// [`MstError::StaleHeap`] if an element has been claimed elsewhere.
    pub fn validate(&self, token: &GhostToken<'brand>) -> Result<()> {
        for (slot, &id) in self.slots.iter().enumerate() {
            let frontier = self.graph.frontier_cell(id)?.get(token);
            self.check_owner(&frontier, id)?;
            if frontier.slot != Some(slot) {
                return Err(MstError::HeapInvariant { slot });
            }
            if slot > 0 && self.less(token, slot, (slot - 1) / 2) {
                return Err(MstError::HeapInvariant { slot });
            }
        }
        Ok(())
    }

    /// Iterates over the heap array in slot order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = VertexId<'brand>> + '_ {
        self.slots.iter().copied()
    }

    #[inline]
    fn check_owner(&self, frontier: &Frontier, vertex: VertexId<'brand>) -> Result<()> {
        if frontier.owner == self.owner {
            Ok(())
        } else {
            Err(MstError::StaleHeap {
                index: vertex.index(),
            })
        }
    }

    #[inline(always)]
    fn cost(&self, token: &GhostToken<'brand>, slot: usize) -> f64 {
        self.graph.frontier_of(self.slots[slot]).borrow(token).cost
    }

    // Strict: ties compare as "not less".
    #[inline(always)]
    fn less(&self, token: &GhostToken<'brand>, a: usize, b: usize) -> bool {
        self.cost(token, a) < self.cost(token, b)
    }

    fn swap(&mut self, token: &mut GhostToken<'brand>, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.graph.frontier_of(self.slots[a]).borrow_mut(token).slot = Some(a);
        self.graph.frontier_of(self.slots[b]).borrow_mut(token).slot = Some(b);
    }

    fn sift_up(&mut self, token: &mut GhostToken<'brand>, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(token, node, parent) {
                self.swap(token, node, parent);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, token: &mut GhostToken<'brand>, mut node: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(token, right, left) {
                smaller = right;
            }

            if self.less(token, smaller, node) {
                self.swap(token, node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }
}

impl<'g, 'brand, K> fmt::Debug for GhostIndexedMinHeap<'g, 'brand, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GhostIndexedMinHeap")
            .field("len", &self.len())
            .field("owner", &self.owner)
            .finish()
    }
}
