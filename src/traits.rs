use std::collections::HashSet;
use std::hash::Hash;

use super::{GraphEdge, GraphError, GraphNode};

/// A mutable graph over nodes labelled by `L`.
///
/// Nodes are identified by label, and each node has a dense index in
/// `0 .. node_count()`. Implementations decide how indices are assigned and
/// whether they survive mutation; see the implementing type's docs.
///
/// Query methods that only make sense for directed graphs
/// ([`predecessor_nodes_of`](#tymethod.predecessor_nodes_of),
/// [`ingoing_edges_of`](#tymethod.ingoing_edges_of)) fail with
/// [`GraphError::Unsupported`] on undirected implementations.
pub trait Graph<L: Clone + Eq + Hash> {
    /// The number of nodes.
    fn node_count(&self) -> usize;

    /// The number of edges.
    fn edge_count(&self) -> usize;

    /// Removes every node and edge.
    fn clear(&mut self);

    /// Does this graph hold directed edges?
    fn is_directed(&self) -> bool;

    /// All nodes of the graph.
    fn nodes(&self) -> HashSet<GraphNode<L>>;

    /// Adds a node.
    ///
    /// Returns `false`, leaving the graph unchanged, if a node with the same
    /// label is already present.
    fn add_node(&mut self, node: GraphNode<L>) -> bool;

    /// Removes a node together with its edges.
    ///
    /// Returns `false` if the node was not present.
    fn remove_node(&mut self, node: &GraphNode<L>) -> bool;

    /// Is the node in the graph?
    fn contains_node(&self, node: &GraphNode<L>) -> bool;

    /// Finds the node carrying `label`.
    fn node_of(&self, label: &L) -> Option<&GraphNode<L>>;

    /// The index of the node carrying `label`.
    fn node_index_of(&self, label: &L) -> Result<usize, GraphError>;

    /// The node at `index`.
    fn node_at_index(&self, index: usize) -> Result<&GraphNode<L>, GraphError>;

    /// Nodes joined to `node` by an edge.
    fn adjacent_nodes_of(&self, node: &GraphNode<L>)
        -> Result<HashSet<GraphNode<L>>, GraphError>;

    /// Nodes with an edge leading into `node`.
    fn predecessor_nodes_of(&self, node: &GraphNode<L>)
        -> Result<HashSet<GraphNode<L>>, GraphError>;

    /// All edges of the graph, each reported once.
    fn edges(&self) -> HashSet<GraphEdge<L>>;

    /// Adds an edge between two nodes already in the graph.
    ///
    /// Returns `Ok(false)`, leaving the graph unchanged, if the endpoints are
    /// already joined.
    fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool, GraphError>;

    /// Removes an edge.
    ///
    /// Returns `false` if there was nothing to remove.
    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> bool;

    /// Is there an edge between the edge's endpoints?
    fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool, GraphError>;

    /// Edges incident to `node`.
    fn edges_of(&self, node: &GraphNode<L>)
        -> Result<HashSet<GraphEdge<L>>, GraphError>;

    /// Edges leading into `node`.
    fn ingoing_edges_of(&self, node: &GraphNode<L>)
        -> Result<HashSet<GraphEdge<L>>, GraphError>;

    /// Is the graph devoid of nodes?
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
