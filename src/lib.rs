pub mod collections;
pub mod edge;
pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod search;
pub mod tracing_support;

pub use edge::{AdjacentEdge, Edge};
pub use error::GraphError;
pub use graph::{Graph, Vertex, Weight};
pub use search::{Bfs, Dfs, Search, bfs, dfs};
