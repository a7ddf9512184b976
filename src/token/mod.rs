//! `GhostToken` - the permission controller for a spanning-tree computation.
//!
//! A token is a zero-sized type created only through [`GhostToken::new`]. Its
//! invariant `'brand` lifetime stamps every [`VertexId`](crate::graph::VertexId)
//! and every frontier [`GhostCell`](crate::GhostCell) created inside the closure,
//! so handles and frontier state from one computation cannot leak into another.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is intentionally **not** `Copy`/`Clone`.
//! Reading frontier state requires `&GhostToken<'brand>`; writing it (what the
//! heap does on `pop` and `decrease_key`) requires `&mut GhostToken<'brand>`,
//! and Rust guarantees the two never coexist.

/// Invariant lifetime definitions for branding.
pub mod invariant;

pub use invariant::InvariantLifetime;

/// A zero-sized token that controls access to the frontier cells of one graph.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and executes a closure with it.
    ///
    /// Every graph built inside the closure is branded with the fresh lifetime.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ghost_prim::{compute_mst, GhostSpanningGraph, GhostToken};
    ///
    /// let total = GhostToken::new(|mut token| {
    ///     let mut graph = GhostSpanningGraph::new();
    ///     graph.connect("a", "b", 2.0).unwrap();
    ///     graph.connect("b", "c", 1.0).unwrap();
    ///     compute_mst(&graph, &mut token).unwrap()
    /// });
    /// assert_eq!(total, 3.0);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }
}

// NOTE:
// The token carries no data. Sharing `&GhostToken<'brand>` across threads only
// enables token-gated reads, which are already constrained by `T: Sync` on the
// cells themselves, so `Sync` is sound. Exclusive writes still need `&mut`.
unsafe impl<'brand> Sync for GhostToken<'brand> {}
