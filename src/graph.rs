//! The [`Graph`] type: an adjacency-list graph keyed by vertex value.
//!
//! Every connection is stored from both ends, so the graph behaves as an
//! undirected graph.  There is no way to remove vertices or edges, and adding
//! an existing edge again with a different weight adds a parallel connection
//! rather than updating the weight.
//!
//! Vertices and adjacency lists both enumerate in insertion order, which is
//! what makes the traversals in [`crate::search`] deterministic.
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
};

use derivative::Derivative;
use num_traits::One;

use crate::{
    collections::OrderedSet,
    edge::{AdjacentEdge, Edge},
    error::GraphError,
    tracing_support::trace,
};

/// Types usable as vertices.  A vertex is identified by its value.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// Types usable as edge weights.  [`One::one`] is the weight given to edges
/// added without one.
pub trait Weight: Copy + Eq + Hash + Debug + One {}

impl<W> Weight for W where W: Copy + Eq + Hash + Debug + One {}

pub type AdjacencySet<T, W> = OrderedSet<AdjacentEdge<T, W>>;

#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, W: Clone"),
    Debug(bound = "T: Debug, W: Debug"),
    Default(bound = "")
)]
pub struct Graph<T, W = u32> {
    vertices: OrderedSet<T>,
    adjacency: HashMap<T, AdjacencySet<T, W>>,
    num_edges: usize,
}

impl<T, W> Graph<T, W>
where
    T: Vertex,
    W: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from unweighted `(start, finish)` pairs.
    pub fn from_unweighted_edges(edges: impl IntoIterator<Item = (T, T)>) -> Self {
        let mut graph = Self::new();
        for (start, finish) in edges {
            graph.add_edge_without_weight(start, finish);
        }
        graph
    }

    /// Adds a vertex with no connections.  Returns `false`, leaving the graph
    /// unchanged, if the vertex already exists.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        trace!(?vertex, "add_vertex");
        self.adjacency.insert(vertex.clone(), OrderedSet::new());
        self.vertices.add(vertex)
    }

    /// Connects `start` and `finish` in both directions with the given weight,
    /// adding either vertex if it is missing.  Returns `true` if the edge is
    /// new; re-adding an identical edge changes nothing.
    pub fn add_edge(&mut self, start: T, finish: T, weight: W) -> bool {
        self.add_vertex(start.clone());
        self.add_vertex(finish.clone());

        let added = self
            .adjacency_mut(&start)
            .add(AdjacentEdge::new(finish.clone(), weight));
        self.adjacency_mut(&finish)
            .add(AdjacentEdge::new(start.clone(), weight));
        if added {
            trace!(?start, ?finish, ?weight, "add_edge");
            self.num_edges += 1;
        }
        added
    }

    /// Same as [`Self::add_edge`] with a weight of one.
    pub fn add_edge_without_weight(&mut self, start: T, finish: T) -> bool {
        self.add_edge(start, finish, W::one())
    }

    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns true if `start` has a connection to `finish` of any weight.
    pub fn is_adjacent(&self, start: &T, finish: &T) -> bool {
        self.adjacency
            .get(start)
            .is_some_and(|edges| edges.iter().any(|edge| edge.finish == *finish))
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.vertices.iter()
    }

    /// Iterates over every adjacency entry as an [`Edge`].  Each connection
    /// therefore appears twice, once from each end: vertices are visited in
    /// insertion order, and each vertex's edges in the order they were added.
    pub fn edges(&self) -> impl Iterator<Item = Edge<T, W>> + '_ {
        self.vertices.iter().flat_map(move |start| {
            self.adjacency[start]
                .iter()
                .map(move |edge| edge.clone().with_start(start.clone()))
        })
    }

    /// Iterates over the connections leaving `vertex`, in insertion order.
    pub fn adjacent_edges<'g>(
        &'g self,
        vertex: &T,
    ) -> Result<impl Iterator<Item = &'g AdjacentEdge<T, W>> + use<'g, T, W>, GraphError> {
        self.adjacency(vertex).map(|edges| edges.iter())
    }

    /// Iterates over the vertices connected to `vertex`.  A vertex reached by
    /// several parallel connections is yielded once per connection.
    pub fn neighbors<'g>(
        &'g self,
        vertex: &T,
    ) -> Result<impl Iterator<Item = &'g T> + use<'g, T, W>, GraphError> {
        self.adjacent_edges(vertex)
            .map(|edges| edges.map(|edge| &edge.finish))
    }

    /// Same as [`Self::neighbors`] for a vertex known to be in the graph.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not in the graph.
    pub(crate) fn neighbors_of<'g>(
        &'g self,
        vertex: &T,
    ) -> impl Iterator<Item = &'g T> + use<'g, T, W> {
        self.adjacency[vertex].iter().map(|edge| &edge.finish)
    }

    /// Gets the number of adjacency entries of `vertex`.
    pub fn degree(&self, vertex: &T) -> Result<usize, GraphError> {
        self.adjacency(vertex).map(OrderedSet::len)
    }

    pub fn for_each_vertex(&self, visitor: impl FnMut(&T)) {
        self.vertices().for_each(visitor);
    }

    pub fn for_each_edge(&self, visitor: impl FnMut(Edge<T, W>)) {
        self.edges().for_each(visitor);
    }

    /// Calls `visitor` for each connection leaving `vertex`.  Fails with
    /// [`GraphError::VertexNotFound`] if the vertex is not in the graph.
    pub fn for_each_adjacent_edge(
        &self,
        vertex: &T,
        visitor: impl FnMut(&AdjacentEdge<T, W>),
    ) -> Result<(), GraphError> {
        self.adjacent_edges(vertex)?.for_each(visitor);
        Ok(())
    }

    pub fn amount_vertexes(&self) -> usize {
        self.vertices.len()
    }

    /// Gets the number of distinct edges added.  Each undirected edge counts
    /// once; parallel edges with different weights count separately.
    pub fn amount_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn adjacency(&self, vertex: &T) -> Result<&AdjacencySet<T, W>, GraphError> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    fn adjacency_mut(&mut self, vertex: &T) -> &mut AdjacencySet<T, W> {
        self.adjacency.entry(vertex.clone()).or_default()
    }
}

impl<T, W> Display for Graph<T, W>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Graph: ")?;
        for vertex in &self.vertices {
            write!(f, "Vertex: {vertex} ")?;
        }
        Ok(())
    }
}

impl<T, W> Extend<(T, T, W)> for Graph<T, W>
where
    T: Vertex,
    W: Weight,
{
    fn extend<I: IntoIterator<Item = (T, T, W)>>(&mut self, iter: I) {
        for (start, finish, weight) in iter {
            self.add_edge(start, finish, weight);
        }
    }
}

impl<T, W> FromIterator<(T, T, W)> for Graph<T, W>
where
    T: Vertex,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (T, T, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
