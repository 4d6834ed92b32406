use std::{fmt::Debug, hash::Hash};

use derivative::Derivative;

/// A weighted connection from `start` to `finish`.  Two edges are equal only
/// when all three fields match.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, W: Clone"),
    Debug(bound = "T: Debug, W: Debug"),
    Hash(bound = "T: Hash, W: Hash"),
    PartialEq(bound = "T: PartialEq, W: PartialEq"),
    Eq(bound = "T: Eq, W: Eq")
)]
pub struct Edge<T, W = u32> {
    pub start: T,
    pub finish: T,
    pub weight: W,
}

impl<T, W> Edge<T, W> {
    pub fn new(start: T, finish: T, weight: W) -> Self {
        Self {
            start,
            finish,
            weight,
        }
    }

    /// Projects the edge onto its start vertex's adjacency list.
    pub fn adjacent(&self) -> AdjacentEdge<T, W>
    where
        T: Clone,
        W: Copy,
    {
        AdjacentEdge::new(self.finish.clone(), self.weight)
    }

    /// The same edge seen from the other end.
    pub fn reversed(self) -> Self {
        Self {
            start: self.finish,
            finish: self.start,
            weight: self.weight,
        }
    }
}

/// An entry in a vertex's adjacency list: the vertex at the far end and the
/// weight of the connection.
///
/// Equality compares both fields, so parallel connections with different
/// weights are distinct entries.  Use [`crate::Graph::is_adjacent`] to ask
/// whether two vertices are connected regardless of weight.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, W: Clone"),
    Debug(bound = "T: Debug, W: Debug"),
    Hash(bound = "T: Hash, W: Hash"),
    PartialEq(bound = "T: PartialEq, W: PartialEq"),
    Eq(bound = "T: Eq, W: Eq")
)]
pub struct AdjacentEdge<T, W = u32> {
    pub finish: T,
    pub weight: W,
}

impl<T, W> AdjacentEdge<T, W> {
    pub fn new(finish: T, weight: W) -> Self {
        Self { finish, weight }
    }

    /// Attaches a start vertex, giving back a full [`Edge`].
    pub fn with_start(self, start: T) -> Edge<T, W> {
        Edge::new(start, self.finish, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_edge_equality_uses_all_fields() {
        assert_eq!(Edge::new("A", "B", 10), Edge::new("A", "B", 10));
        assert_ne!(Edge::new("A", "B", 10), Edge::new("B", "A", 10));
        assert_ne!(Edge::new("A", "B", 10), Edge::new("A", "B", 20));
    }

    #[test]
    fn test_adjacent_edges_with_different_weights_are_distinct() {
        let set: HashSet<_> = [
            AdjacentEdge::new("B", 1),
            AdjacentEdge::new("B", 2),
            AdjacentEdge::new("B", 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_projection() {
        let edge = Edge::new("A", "B", 7);
        let adj = edge.adjacent();
        assert_eq!(adj, AdjacentEdge::new("B", 7));
        assert_eq!(adj.with_start("A"), edge);
        assert_eq!(edge.reversed(), Edge::new("B", "A", 7));
    }
}
