//! Graph builders shared by the unit tests.

use std::collections::HashSet;

use crate::{AdjacencyMatrixUndirectedGraph, Graph, GraphEdge, GraphError, GraphNode};

pub(crate) type Label = &'static str;

/// Sends spans and events to the test harness's captured output.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub(crate) fn node(label: Label) -> GraphNode<Label> {
    GraphNode::new(label)
}

pub(crate) fn edge(a: Label, b: Label, weight: f64) -> GraphEdge<Label> {
    GraphEdge::weighted(node(a), node(b), false, weight)
}

pub(crate) fn graph_of(labels: &[Label], edges: &[(Label, Label, f64)])
        -> AdjacencyMatrixUndirectedGraph<Label> {
    let mut graph = AdjacencyMatrixUndirectedGraph::with_capacity(labels.len());
    for &label in labels {
        graph.add_node(node(label));
    }
    for &(a, b, weight) in edges {
        graph.add_edge(edge(a, b, weight)).unwrap();
    }
    graph
}

/// Claims to be directed but otherwise behaves like the wrapped graph.
pub(crate) struct DirectedView(pub(crate) AdjacencyMatrixUndirectedGraph<Label>);

impl Graph<Label> for DirectedView {
    fn node_count(&self) -> usize { self.0.node_count() }

    fn edge_count(&self) -> usize { self.0.edge_count() }

    fn clear(&mut self) { self.0.clear() }

    fn is_directed(&self) -> bool { true }

    fn nodes(&self) -> HashSet<GraphNode<Label>> { self.0.nodes() }

    fn add_node(&mut self, node: GraphNode<Label>) -> bool {
        self.0.add_node(node)
    }

    fn remove_node(&mut self, node: &GraphNode<Label>) -> bool {
        self.0.remove_node(node)
    }

    fn contains_node(&self, node: &GraphNode<Label>) -> bool {
        self.0.contains_node(node)
    }

    fn node_of(&self, label: &Label) -> Option<&GraphNode<Label>> {
        self.0.node_of(label)
    }

    fn node_index_of(&self, label: &Label) -> Result<usize, GraphError> {
        self.0.node_index_of(label)
    }

    fn node_at_index(&self, index: usize) -> Result<&GraphNode<Label>, GraphError> {
        self.0.node_at_index(index)
    }

    fn adjacent_nodes_of(&self, node: &GraphNode<Label>)
            -> Result<HashSet<GraphNode<Label>>, GraphError> {
        self.0.adjacent_nodes_of(node)
    }

    fn predecessor_nodes_of(&self, node: &GraphNode<Label>)
            -> Result<HashSet<GraphNode<Label>>, GraphError> {
        self.0.adjacent_nodes_of(node)
    }

    fn edges(&self) -> HashSet<GraphEdge<Label>> { self.0.edges() }

    fn add_edge(&mut self, edge: GraphEdge<Label>) -> Result<bool, GraphError> {
        self.0.add_edge(edge)
    }

    fn remove_edge(&mut self, edge: &GraphEdge<Label>) -> bool {
        self.0.remove_edge(edge)
    }

    fn contains_edge(&self, edge: &GraphEdge<Label>) -> Result<bool, GraphError> {
        self.0.contains_edge(edge)
    }

    fn edges_of(&self, node: &GraphNode<Label>)
            -> Result<HashSet<GraphEdge<Label>>, GraphError> {
        self.0.edges_of(node)
    }

    fn ingoing_edges_of(&self, node: &GraphNode<Label>)
            -> Result<HashSet<GraphEdge<Label>>, GraphError> {
        self.0.edges_of(node)
    }
}
