//! Recovering paths from traversals.
//!
//! Traversals only report the order in which vertices were visited.  Two ways
//! of turning that into a path are provided here:
//!
//! - [`trace_back`] walks a recorded visitation order backwards, each time
//!   taking the most recently visited vertex adjacent to the current one.
//!   This needs nothing but the order, but costs a linear adjacency scan per
//!   step, and a breadth-first order does not always give a shortest path.
//! - [`bfs_parents`] records the discovering vertex of each vertex during a
//!   breadth-first traversal, from which [`Parents::path_to`] follows parent
//!   links back to the start.  Paths found this way are shortest in hops.

use std::collections::HashMap;

use crate::{
    collections::Queue,
    error::GraphError,
    graph::{Graph, Vertex, Weight},
    search::Search,
    tracing_support::{info_span, trace},
};

/// Reconstructs a path ending at `target` from a visitation order that
/// starts at the traversal's start vertex.
///
/// Only the part of `order` before the last occurrence of `target` is
/// searched, so a self-loop on `target` never repeats it in the path.
/// Adjacency is checked without regard to weight.  Returns `None` if
/// `target` was never visited.
pub fn trace_back<T, W>(graph: &Graph<T, W>, order: &[T], target: &T) -> Option<Vec<T>>
where
    T: Vertex,
    W: Weight,
{
    let end = order.iter().rposition(|vertex| vertex == target)?;
    let mut path = vec![target.clone()];
    for vertex in order[..end].iter().rev() {
        let current = &path[path.len() - 1];
        if graph.is_adjacent(vertex, current) {
            path.push(vertex.clone());
        }
    }
    path.reverse();
    Some(path)
}

/// Runs `search` from `start` until it reaches `target`, then reconstructs
/// the path with [`trace_back`].  Returns `Ok(None)` if `target` is not
/// reachable from `start`.
pub fn find_path<T, W>(
    graph: &Graph<T, W>,
    start: T,
    target: &T,
    search: Search,
) -> Result<Option<Vec<T>>, GraphError>
where
    T: Vertex,
    W: Weight,
{
    let _span = info_span!("find_path", ?start, ?target, ?search).entered();
    let mut order = Vec::new();
    let found = search.walk(graph, start, |vertex| {
        order.push(vertex.clone());
        vertex == target
    })?;
    if !found {
        trace!(visited = order.len(), "target not reachable");
        return Ok(None);
    }
    Ok(trace_back(graph, &order, target))
}

/// The breadth-first spanning tree of the vertices reachable from a start
/// vertex, stored as a parent link per vertex.
#[derive(Clone, Debug)]
pub struct Parents<T> {
    start: T,
    parents: HashMap<T, T>,
}

impl<T> Parents<T>
where
    T: Vertex,
{
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Returns true if `vertex` is reachable from the start vertex.
    pub fn reaches(&self, vertex: &T) -> bool {
        *vertex == self.start || self.parents.contains_key(vertex)
    }

    /// Gets the vertex from which `vertex` was discovered.  The start vertex
    /// and unreachable vertices have none.
    pub fn parent(&self, vertex: &T) -> Option<&T> {
        self.parents.get(vertex)
    }

    /// Gets a shortest path from the start vertex to `target`, or `None` if
    /// `target` is unreachable.
    pub fn path_to(&self, target: &T) -> Option<Vec<T>> {
        if !self.reaches(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(parent) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Traverses the graph breadth-first from `start`, recording the parent of
/// each reachable vertex.
pub fn bfs_parents<T, W>(graph: &Graph<T, W>, start: T) -> Result<Parents<T>, GraphError>
where
    T: Vertex,
    W: Weight,
{
    let _span = info_span!("bfs_parents", ?start).entered();
    if !graph.contains_vertex(&start) {
        return Err(GraphError::vertex_not_found(&start));
    }
    let mut parents = HashMap::new();
    let mut queue: Queue<T> = [start.clone()].into_iter().collect();
    while let Some(vertex) = queue.dequeue() {
        for neighbor in graph.neighbors(&vertex)? {
            if *neighbor != start && !parents.contains_key(neighbor) {
                parents.insert(neighbor.clone(), vertex.clone());
                queue.enqueue(neighbor.clone());
            }
        }
    }
    trace!(reached = parents.len() + 1, "bfs_parents done");
    Ok(Parents { start, parents })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_graph() -> Graph<&'static str> {
        Graph::from_unweighted_edges([
            ("A", "B"),
            ("A", "C"),
            ("C", "F"),
            ("C", "G"),
            ("G", "M"),
            ("G", "N"),
            ("B", "D"),
            ("B", "E"),
            ("D", "H"),
            ("D", "I"),
            ("D", "J"),
            ("E", "K"),
            ("E", "L"),
        ])
    }

    #[test]
    fn test_trace_back_bfs_order() {
        let graph = tree_graph();
        let order = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"];
        assert_eq!(
            trace_back(&graph, &order, &"K"),
            Some(vec!["A", "B", "E", "K"])
        );
    }

    #[test]
    fn test_trace_back_dfs_order() {
        let graph = tree_graph();
        let order = ["A", "B", "D", "H", "I", "J", "E", "K"];
        assert_eq!(
            trace_back(&graph, &order, &"K"),
            Some(vec!["A", "B", "E", "K"])
        );
    }

    #[test]
    fn test_trace_back_ignores_weight() {
        let graph: Graph<&str> = [("A", "B", 5), ("B", "C", 9)].into_iter().collect();
        assert_eq!(
            trace_back(&graph, &["A", "B", "C"], &"C"),
            Some(vec!["A", "B", "C"])
        );
    }

    #[test]
    fn test_trace_back_missing_target() {
        let graph = tree_graph();
        assert_eq!(trace_back(&graph, &["A", "B"], &"K"), None);
        assert_eq!(trace_back(&graph, &[], &"K"), None);
    }

    #[test]
    fn test_trace_back_start_is_target() {
        let graph = tree_graph();
        assert_eq!(trace_back(&graph, &["A"], &"A"), Some(vec!["A"]));
    }

    #[test]
    fn test_trace_back_self_loop_on_target() {
        let graph = Graph::<u8>::from_unweighted_edges([(4, 5), (5, 5)]);
        assert_eq!(trace_back(&graph, &[5], &5), Some(vec![5]));
        assert_eq!(trace_back(&graph, &[4, 5], &5), Some(vec![4, 5]));
        assert_eq!(
            find_path(&graph, 5, &5, Search::DepthFirst),
            Ok(Some(vec![5]))
        );
    }

    #[test]
    fn test_find_path() {
        let graph = tree_graph();
        for search in [Search::BreadthFirst, Search::DepthFirst] {
            assert_eq!(
                find_path(&graph, "A", &"K", search),
                Ok(Some(vec!["A", "B", "E", "K"]))
            );
        }
    }

    #[test]
    fn test_find_path_unreachable() {
        let mut graph = tree_graph();
        graph.add_vertex("Z");
        assert_eq!(find_path(&graph, "A", &"Z", Search::DepthFirst), Ok(None));
        assert!(find_path(&graph, "Q", &"A", Search::BreadthFirst).is_err());
    }

    #[test]
    fn test_bfs_parents() {
        let graph = tree_graph();
        let parents = bfs_parents(&graph, "A").unwrap();
        assert_eq!(parents.start(), &"A");
        assert_eq!(parents.parent(&"A"), None);
        assert_eq!(parents.parent(&"K"), Some(&"E"));
        assert_eq!(parents.path_to(&"K"), Some(vec!["A", "B", "E", "K"]));
        assert_eq!(parents.path_to(&"A"), Some(vec!["A"]));
        assert_eq!(parents.path_to(&"Q"), None);
    }

    #[test]
    fn test_bfs_parents_finds_shortest_path() {
        // Backward tracing over the order A, B, C takes the detour through B.
        let graph = Graph::<&str>::from_unweighted_edges([("A", "B"), ("A", "C"), ("B", "C")]);
        let order: Vec<_> = graph.bfs("A").unwrap().collect();
        assert_eq!(trace_back(&graph, &order, &"C"), Some(vec!["A", "B", "C"]));
        let parents = bfs_parents(&graph, "A").unwrap();
        assert_eq!(parents.path_to(&"C"), Some(vec!["A", "C"]));
    }

    #[test]
    fn test_bfs_parents_with_cycle_through_start() {
        let graph = Graph::<u8>::from_unweighted_edges([(1, 2), (2, 3), (3, 1)]);
        let parents = bfs_parents(&graph, 1).unwrap();
        assert_eq!(parents.parent(&1), None);
        assert_eq!(parents.path_to(&3), Some(vec![1, 3]));
        assert!(parents.reaches(&2));
    }
}
