//! town-graph-core: In-memory town/road graph with shortest-path queries.
//!
//! Towns are plain named values; roads are undirected, named and weighted,
//! and at most one road may join any pair of towns. Shortest paths are
//! computed with Dijkstra's algorithm over non-negative integer distances.
//! No I/O here: name resolution and file import live in town-graph-manager.

mod error;
mod graph;
mod road;
mod town;
mod traversal;

pub use error::GraphError;
pub use graph::Graph;
pub use road::{Road, DEFAULT_WEIGHT};
pub use town::Town;
pub use traversal::{dijkstra, shortest_route, Hop, Route, ShortestPathTree};
