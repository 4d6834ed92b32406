//! Breadth-first and depth-first traversal.
//!
//! [`Bfs`] and [`Dfs`] are lazy iterators over the vertices reachable from a
//! start vertex.  A vertex's neighbors are only expanded when the iterator is
//! advanced past it, so stopping after a vertex never explores beyond it.
//!
//! [`bfs`] and [`dfs`] drive those iterators with a visitor callback that
//! returns `true` to stop the traversal.

use crate::{
    collections::{OrderedSet, Queue},
    error::GraphError,
    graph::{Graph, Vertex, Weight},
    tracing_support::{info_span, trace},
};

/// Breadth-first traversal.  Vertices come out in non-decreasing hop
/// distance from the start, ties broken by discovery order.  Each vertex is
/// yielded at most once.
pub struct Bfs<'g, T, W> {
    graph: &'g Graph<T, W>,
    visited: OrderedSet<T>,
    queue: Queue<T>,
    pending: Option<T>,
}

impl<'g, T, W> Bfs<'g, T, W>
where
    T: Vertex,
    W: Weight,
{
    pub fn new(graph: &'g Graph<T, W>, start: T) -> Result<Self, GraphError> {
        if !graph.contains_vertex(&start) {
            return Err(GraphError::vertex_not_found(&start));
        }
        Ok(Self {
            graph,
            visited: OrderedSet::new(),
            queue: [start].into_iter().collect(),
            pending: None,
        })
    }

    fn expand(&mut self, vertex: T) {
        let graph = self.graph;
        for neighbor in graph.neighbors_of(&vertex) {
            if !self.visited.contains(neighbor) {
                self.queue.enqueue(neighbor.clone());
            }
        }
        self.visited.add(vertex);
    }
}

impl<'g, T, W> Iterator for Bfs<'g, T, W>
where
    T: Vertex,
    W: Weight,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(vertex) = self.pending.take() {
            self.expand(vertex);
        }
        while let Some(vertex) = self.queue.dequeue() {
            // A vertex can be queued again before it is first expanded.
            if self.visited.contains(&vertex) {
                continue;
            }
            trace!(?vertex, "bfs visit");
            self.pending = Some(vertex.clone());
            return Some(vertex);
        }
        None
    }
}

/// Depth-first pre-order traversal.  Neighbors are explored in the order
/// their edges were added, using an explicit stack rather than recursion.
pub struct Dfs<'g, T, W> {
    graph: &'g Graph<T, W>,
    visited: OrderedSet<T>,
    stack: Vec<T>,
    pending: Option<T>,
}

impl<'g, T, W> Dfs<'g, T, W>
where
    T: Vertex,
    W: Weight,
{
    pub fn new(graph: &'g Graph<T, W>, start: T) -> Result<Self, GraphError> {
        if !graph.contains_vertex(&start) {
            return Err(GraphError::vertex_not_found(&start));
        }
        Ok(Self {
            graph,
            visited: OrderedSet::new(),
            stack: vec![start],
            pending: None,
        })
    }

    fn expand(&mut self, vertex: &T) {
        let graph = self.graph;
        let unvisited: Vec<_> = graph
            .neighbors_of(vertex)
            .filter(|neighbor| !self.visited.contains(neighbor))
            .cloned()
            .collect();
        // Reversed so the first-added neighbor is popped first.
        self.stack.extend(unvisited.into_iter().rev());
    }
}

impl<'g, T, W> Iterator for Dfs<'g, T, W>
where
    T: Vertex,
    W: Weight,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(vertex) = self.pending.take() {
            self.expand(&vertex);
        }
        while let Some(vertex) = self.stack.pop() {
            if self.visited.add(vertex.clone()) {
                trace!(?vertex, "dfs visit");
                self.pending = Some(vertex.clone());
                return Some(vertex);
            }
        }
        None
    }
}

/// Which traversal to run.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Search {
    #[default]
    BreadthFirst,
    DepthFirst,
}

impl Search {
    /// Runs this traversal from `start`, calling `walk` on each vertex until
    /// it returns `true`.  See [`bfs`] and [`dfs`].
    pub fn walk<T, W>(
        self,
        graph: &Graph<T, W>,
        start: T,
        walk: impl FnMut(&T) -> bool,
    ) -> Result<bool, GraphError>
    where
        T: Vertex,
        W: Weight,
    {
        match self {
            Search::BreadthFirst => bfs(graph, start, walk),
            Search::DepthFirst => dfs(graph, start, walk),
        }
    }
}

/// Visits the vertices reachable from `start` breadth-first, calling `walk`
/// on each.  The traversal ends when `walk` returns `true`, in which case
/// the stopping vertex's neighbors are never explored, or when every
/// reachable vertex has been visited.
///
/// Returns whether `walk` stopped the traversal.  Fails if `start` is not in
/// the graph, before `walk` is ever called.
pub fn bfs<T, W>(
    graph: &Graph<T, W>,
    start: T,
    walk: impl FnMut(&T) -> bool,
) -> Result<bool, GraphError>
where
    T: Vertex,
    W: Weight,
{
    let _span = info_span!("bfs", ?start).entered();
    Ok(drive(Bfs::new(graph, start)?, walk))
}

/// Visits the vertices reachable from `start` depth-first, calling `walk` on
/// each, with the same stopping rules as [`bfs`].
pub fn dfs<T, W>(
    graph: &Graph<T, W>,
    start: T,
    walk: impl FnMut(&T) -> bool,
) -> Result<bool, GraphError>
where
    T: Vertex,
    W: Weight,
{
    let _span = info_span!("dfs", ?start).entered();
    Ok(drive(Dfs::new(graph, start)?, walk))
}

fn drive<T>(vertices: impl Iterator<Item = T>, mut walk: impl FnMut(&T) -> bool) -> bool
where
    T: Vertex,
{
    for vertex in vertices {
        if walk(&vertex) {
            trace!(?vertex, "stopped");
            return true;
        }
    }
    false
}

impl<T, W> Graph<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Performs a breadth-first search starting from the given vertex.
    pub fn bfs(&self, start: T) -> Result<Bfs<'_, T, W>, GraphError> {
        Bfs::new(self, start)
    }

    /// Performs a depth-first search starting from the given vertex.
    pub fn dfs(&self, start: T) -> Result<Dfs<'_, T, W>, GraphError> {
        Dfs::new(self, start)
    }
}
