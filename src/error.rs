//! Error types for graph construction, heap bookkeeping and the Prim engine.
//!
//! Every variant is a precondition violation or a caller-requested abort; none of
//! them is transient, so nothing here is retryable.

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MstError>;

/// The error type for spanning-tree computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MstError {
    /// `connect` was given a negative, infinite or NaN cost.
    InvalidCost {
        /// The rejected cost.
        cost: f64,
    },
    /// `pop` was called on an empty heap.
    EmptyHeap,
    /// `decrease_key` was asked to raise (or keep) a frontier cost.
    CostNotDecreasing {
        /// The vertex's current frontier cost.
        current: f64,
        /// The requested cost.
        requested: f64,
    },
    /// A vertex handle does not belong to the graph it was used with.
    UnknownVertex {
        /// The raw arena index of the handle.
        index: usize,
    },
    /// The heap-order property or the slot/index lockstep was found broken.
    HeapInvariant {
        /// The heap slot where the violation was detected.
        slot: usize,
    },
    /// A heap touched a vertex claimed by a newer heap or by a frontier reset.
    StaleHeap {
        /// The raw arena index of the vertex.
        index: usize,
    },
    /// The caller's stop predicate fired between two pops.
    Cancelled {
        /// Number of vertices settled before the abort.
        settled: usize,
    },
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCost { cost } => {
                write!(f, "edge cost must be a finite non-negative number, got {cost}")
            }
            Self::EmptyHeap => f.write_str("pop called on an empty heap"),
            Self::CostNotDecreasing { current, requested } => write!(
                f,
                "decrease_key requires a lower cost: current {current}, requested {requested}"
            ),
            Self::UnknownVertex { index } => {
                write!(f, "vertex handle {index} is not part of this graph")
            }
            Self::HeapInvariant { slot } => {
                write!(f, "heap invariant violated at slot {slot}")
            }
            Self::StaleHeap { index } => {
                write!(f, "vertex {index} is owned by a newer heap over the same graph")
            }
            Self::Cancelled { settled } => {
                write!(f, "computation cancelled after settling {settled} vertices")
            }
        }
    }
}

impl std::error::Error for MstError {}
