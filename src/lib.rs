#![doc(html_root_url = "https://docs.rs/graph-forest/0.1.0")]
//! Undirected graphs on an adjacency matrix, a disjoint-set forest, and the
//! two classic algorithms built from them.
//!
//! | type | what it is |
//! | :--- | :--------- |
//! | [`AdjacencyMatrixUndirectedGraph`](struct.AdjacencyMatrixUndirectedGraph.html) | mutable undirected graph, implements [`Graph`](trait.Graph.html) |
//! | [`ForestDisjointSets`](struct.ForestDisjointSets.html) | union-find over any hashable element |
//! | [`KruskalMsp`](struct.KruskalMsp.html) | minimum spanning tree (Kruskal) |
//! | [`ConnectedComponentsComputer`](struct.ConnectedComponentsComputer.html) | connected components |
//!
//! The forest performs path compression and union by rank. Both
//! algorithms seed a fresh forest with one set per node on every call, so a
//! computer can be reused across graphs.
//!
//! Nothing here is thread-safe: the graph shares edge objects through `Rc`
//! and the forest compresses paths through `Cell`s. Callers that need
//! concurrent access must serialize it themselves.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! graph-forest = "0.1"
//! ```
//!
//! Enable the `serde` feature for `Serialize`/`Deserialize` on nodes,
//! edges and the forest.
//!
//! # Examples
//!
//! Kruskal’s algorithm to find the minimum spanning tree of a graph:
//!
//! ```
//! use graph_forest::*;
//! use std::collections::HashSet;
//!
//! // Graph to use:
//! //
//! //  0 ------ 1 ------ 2
//! //  |    6   |    5   |
//! //  | 8      | 1      | 4
//! //  |        |        |
//! //  3 ------ 4 ------ 5
//! //  |    7   |    2   |
//! //  | 3      | 12     | 11
//! //  |        |        |
//! //  6 ------ 7 ------ 8
//! //       9        10
//! fn edge(src: u32, dst: u32, weight: f64) -> GraphEdge<u32> {
//!     GraphEdge::weighted(GraphNode::new(src), GraphNode::new(dst), false, weight)
//! }
//!
//! fn main() {
//!     let mut graph = AdjacencyMatrixUndirectedGraph::with_capacity(9);
//!     for label in 0 .. 9 {
//!         graph.add_node(GraphNode::new(label));
//!     }
//!
//!     let edges = vec![
//!         edge(0, 1, 6.0), edge(0, 3, 8.0), edge(1, 2, 5.0), edge(1, 4, 1.0),
//!         edge(2, 5, 4.0), edge(3, 4, 7.0), edge(3, 6, 3.0), edge(4, 5, 2.0),
//!         edge(4, 7, 12.0), edge(5, 8, 11.0), edge(6, 7, 9.0), edge(7, 8, 10.0),
//!     ];
//!     for e in edges {
//!         graph.add_edge(e).unwrap();
//!     }
//!
//!     let tree = KruskalMsp::new().compute_msp(&graph).unwrap();
//!
//!     assert_eq! {
//!         tree,
//!         vec![ edge(1, 4, 1.0), edge(4, 5, 2.0), edge(3, 6, 3.0),
//!               edge(2, 5, 4.0), edge(0, 1, 6.0), edge(3, 4, 7.0),
//!               edge(6, 7, 9.0), edge(7, 8, 10.0), ]
//!             .into_iter().collect::<HashSet<_>>()
//!     };
//!
//!     let components = ConnectedComponentsComputer::new()
//!         .compute_connected_components(&graph)
//!         .unwrap();
//!     assert_eq!(components.len(), 1);
//! }
//! ```

#![warn(missing_docs)]

mod error;
mod node;
mod traits;
mod matrix;
mod forest;
mod kruskal;
mod components;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use node::*;
pub use traits::*;
pub use matrix::*;
pub use forest::*;
pub use kruskal::*;
pub use components::*;
