//! Directed arcs; an undirected connection is a pair of them.

use core::fmt;

use crate::graph::VertexId;

/// One direction of an undirected connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'brand> {
    /// Tail of the arc.
    pub from: VertexId<'brand>,
    /// Head of the arc.
    pub to: VertexId<'brand>,
    /// Non-negative edge cost, identical on both arcs of a pair.
    pub cost: f64,
}

impl<'brand> Edge<'brand> {
    /// Returns the arc pointing the other way with the same cost.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            cost: self.cost,
        }
    }

    /// Returns the endpoint that is not `vertex`.
    ///
    /// For a self-loop both endpoints are `vertex` and it is returned.
    #[inline]
    pub fn opposite(&self, vertex: VertexId<'brand>) -> VertexId<'brand> {
        if self.from == vertex {
            self.to
        } else {
            self.from
        }
    }
}

impl fmt::Display for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_and_reversed() {
        let a = VertexId::new(0);
        let b = VertexId::new(1);
        let e = Edge { from: a, to: b, cost: 2.5 };

        assert_eq!(e.opposite(a), b);
        assert_eq!(e.opposite(b), a);
        assert_eq!(e.reversed().from, b);
        assert_eq!(e.reversed().cost, 2.5);
        assert_eq!(e.to_string(), "v0 -> v1 (2.5)");

        let lp = Edge { from: a, to: a, cost: 1.0 };
        assert_eq!(lp.opposite(a), a);
    }
}
