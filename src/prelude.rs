pub use crate::edge::{AdjacentEdge, Edge};
pub use crate::error::GraphError;
pub use crate::graph::{Graph, Vertex, Weight};
pub use crate::path::{Parents, bfs_parents, find_path, trace_back};
pub use crate::search::{Bfs, Dfs, Search, bfs, dfs};
