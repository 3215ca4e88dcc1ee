//! Undirected graph stored as an adjacency matrix.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::rc::Rc;

use tracing::trace;

use super::error::render;
use super::{Graph, GraphEdge, GraphError, GraphNode};

/// An undirected graph backed by a square adjacency matrix.
///
/// Nodes are indexed from `0` to `node_count() - 1` in insertion order, and
/// the matrix always has side `node_count()`. Slot `[i][j]` is empty when
/// the nodes at indices `i` and `j` are not joined; otherwise it holds the
/// edge, and slot `[j][i]` holds the very same edge object.
///
/// # Index invalidation
///
/// Removing a node removes its row and column, and every node whose index
/// was greater than the removed one moves down by one. Indices obtained
/// before a [`remove_node`](#method.remove_node) must not be reused after
/// it:
///
/// ```
/// use graph_forest::{AdjacencyMatrixUndirectedGraph, Graph, GraphNode};
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// graph.add_node(GraphNode::new("a"));
/// graph.add_node(GraphNode::new("b"));
/// graph.add_node(GraphNode::new("c"));
/// assert_eq!(graph.node_index_of(&"c"), Ok(2));
///
/// graph.remove_node(&GraphNode::new("a"));
/// assert_eq!(graph.node_index_of(&"c"), Ok(1));
/// ```
pub struct AdjacencyMatrixUndirectedGraph<L> {
    nodes_index: HashMap<GraphNode<L>, usize>,
    nodes: Vec<GraphNode<L>>,
    matrix: Vec<Vec<Option<Rc<GraphEdge<L>>>>>,
}
// Invariants:
//  - self.nodes[self.nodes_index[n]] == n for every node n
//  - self.matrix.len() == self.nodes.len(), and so does every row
//  - self.matrix[i][j] and self.matrix[j][i] are both None, or are the same Rc

impl<L> Default for AdjacencyMatrixUndirectedGraph<L> {
    fn default() -> Self {
        AdjacencyMatrixUndirectedGraph {
            nodes_index: HashMap::new(),
            nodes: Vec::new(),
            matrix: Vec::new(),
        }
    }
}

impl<L: Debug> Debug for AdjacencyMatrixUndirectedGraph<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let labels = self.nodes.iter().map(GraphNode::label);
        write!(formatter, "AdjacencyMatrixUndirectedGraph(")?;
        formatter.debug_list().entries(labels).finish()?;
        write!(formatter, ", {} edges)", self.slot_count() / 2)
    }
}

impl<L> AdjacencyMatrixUndirectedGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        AdjacencyMatrixUndirectedGraph {
            nodes_index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            matrix: Vec::with_capacity(capacity),
        }
    }

    /// Returns the edge stored in matrix slot `[i][j]`, if any.
    ///
    /// Out-of-range indices yield `None`.
    pub fn edge_at(&self, i: usize, j: usize) -> Option<&GraphEdge<L>> {
        self.matrix.get(i)?.get(j)?.as_deref()
    }

    // HELPERS

    fn slot_count(&self) -> usize {
        self.matrix.iter()
            .map(|row| row.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }
}

impl<L: Clone + Eq + Hash + Debug> AdjacencyMatrixUndirectedGraph<L> {
    fn index_of(&self, node: &GraphNode<L>) -> Result<usize, GraphError> {
        self.nodes_index.get(node).copied().ok_or_else(|| {
            GraphError::NodeNotFound { node: render(node.label()) }
        })
    }

    fn endpoint_indices(&self, edge: &GraphEdge<L>) -> Option<(usize, usize)> {
        let i = self.nodes_index.get(edge.node1())?;
        let j = self.nodes_index.get(edge.node2())?;
        Some((*i, *j))
    }

    fn missing_endpoint(edge: &GraphEdge<L>) -> GraphError {
        GraphError::MissingEndpoint { edge: render(edge) }
    }
}

impl<L: Clone + Eq + Hash + Debug> Graph<L> for AdjacencyMatrixUndirectedGraph<L> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.slot_count() / 2
    }

    fn clear(&mut self) {
        self.nodes_index.clear();
        self.nodes.clear();
        self.matrix.clear();
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> HashSet<GraphNode<L>> {
        self.nodes.iter().cloned().collect()
    }

    fn add_node(&mut self, node: GraphNode<L>) -> bool {
        if self.nodes_index.contains_key(&node) {
            return false;
        }

        let index = self.nodes.len();
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; index + 1]);
        self.nodes_index.insert(node.clone(), index);
        self.nodes.push(node);

        true
    }

    fn remove_node(&mut self, node: &GraphNode<L>) -> bool {
        let removed = match self.nodes_index.remove(node) {
            Some(index) => index,
            None => return false,
        };

        self.nodes.remove(removed);
        self.matrix.remove(removed);
        for row in &mut self.matrix {
            row.remove(removed);
        }

        for shifted in &self.nodes[removed ..] {
            if let Some(index) = self.nodes_index.get_mut(shifted) {
                *index -= 1;
            }
        }

        trace!(removed, shifted = self.nodes.len() - removed,
               "removed node and reindexed successors");
        true
    }

    fn contains_node(&self, node: &GraphNode<L>) -> bool {
        self.nodes_index.contains_key(node)
    }

    fn node_of(&self, label: &L) -> Option<&GraphNode<L>> {
        self.nodes.iter().find(|node| node.label() == label)
    }

    fn node_index_of(&self, label: &L) -> Result<usize, GraphError> {
        self.nodes.iter()
            .position(|node| node.label() == label)
            .ok_or_else(|| GraphError::LabelNotFound { label: render(label) })
    }

    fn node_at_index(&self, index: usize) -> Result<&GraphNode<L>, GraphError> {
        self.nodes.get(index).ok_or(GraphError::IndexOutOfBounds {
            index,
            node_count: self.nodes.len(),
        })
    }

    fn adjacent_nodes_of(&self, node: &GraphNode<L>)
            -> Result<HashSet<GraphNode<L>>, GraphError> {
        let row = &self.matrix[self.index_of(node)?];

        Ok(row.iter()
            .zip(&self.nodes)
            .filter(|(slot, _)| slot.is_some())
            .map(|(_, adjacent)| adjacent.clone())
            .collect())
    }

    fn predecessor_nodes_of(&self, _node: &GraphNode<L>)
            -> Result<HashSet<GraphNode<L>>, GraphError> {
        Err(GraphError::Unsupported { operation: "predecessor_nodes_of" })
    }

    fn edges(&self) -> HashSet<GraphEdge<L>> {
        let mut edges = HashSet::new();

        for (i, row) in self.matrix.iter().enumerate() {
            // Only the upper triangle, so each edge object is seen once.
            for slot in &row[i ..] {
                if let Some(edge) = slot {
                    edges.insert(GraphEdge::clone(edge));
                }
            }
        }

        edges
    }

    fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool, GraphError> {
        let (i, j) = self.endpoint_indices(&edge)
            .ok_or_else(|| Self::missing_endpoint(&edge))?;

        if edge.is_directed() {
            return Err(GraphError::DirectedEdge { edge: render(&edge) });
        }

        if self.matrix[i][j].is_some() {
            return Ok(false);
        }

        let edge = Rc::new(edge);
        self.matrix[i][j] = Some(Rc::clone(&edge));
        self.matrix[j][i] = Some(edge);

        Ok(true)
    }

    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> bool {
        let (i, j) = match self.endpoint_indices(edge) {
            Some(indices) => indices,
            None => return false,
        };

        if self.matrix[i][j].is_none() {
            return false;
        }

        self.matrix[i][j] = None;
        self.matrix[j][i] = None;
        true
    }

    fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool, GraphError> {
        let (i, j) = self.endpoint_indices(edge)
            .ok_or_else(|| Self::missing_endpoint(edge))?;

        Ok(self.matrix[i][j].is_some())
    }

    fn edges_of(&self, node: &GraphNode<L>)
            -> Result<HashSet<GraphEdge<L>>, GraphError> {
        let row = &self.matrix[self.index_of(node)?];

        Ok(row.iter()
            .flatten()
            .map(|edge| GraphEdge::clone(edge))
            .collect())
    }

    fn ingoing_edges_of(&self, _node: &GraphNode<L>)
            -> Result<HashSet<GraphEdge<L>>, GraphError> {
        Err(GraphError::Unsupported { operation: "ingoing_edges_of" })
    }
}
