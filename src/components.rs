//! Connected components of undirected graphs.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, instrument};

use super::{AlgorithmError, ForestDisjointSets, Graph, GraphNode};

/// Partitions the nodes of an undirected graph into connected components.
///
/// Like [`KruskalMsp`](struct.KruskalMsp.html), the computer keeps its
/// disjoint-set forest between calls but reseeds it every time.
///
/// # Examples
///
/// ```
/// use graph_forest::*;
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// for label in 0 .. 4 {
///     graph.add_node(GraphNode::new(label));
/// }
/// graph.add_edge(GraphEdge::new(GraphNode::new(0), GraphNode::new(1), false)).unwrap();
/// graph.add_edge(GraphEdge::new(GraphNode::new(2), GraphNode::new(3), false)).unwrap();
///
/// let mut computer = ConnectedComponentsComputer::new();
/// let components = computer.compute_connected_components(&graph).unwrap();
/// assert_eq!(components.len(), 2);
/// assert!(components.iter().all(|component| component.len() == 2));
/// ```
#[derive(Debug)]
pub struct ConnectedComponentsComputer<L> {
    disjoint_sets: ForestDisjointSets<GraphNode<L>>,
}

impl<L> Default for ConnectedComponentsComputer<L> {
    fn default() -> Self {
        ConnectedComponentsComputer {
            disjoint_sets: ForestDisjointSets::new(),
        }
    }
}

impl<L: Clone + Eq + Hash + Debug> ConnectedComponentsComputer<L> {
    /// Creates a computer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the connected components of `graph`.
    ///
    /// Each component is the set of nodes reachable from one another; every
    /// node lands in exactly one component, and an isolated node forms a
    /// component on its own. The order of the components is unspecified.
    ///
    /// # Errors
    ///
    /// [`AlgorithmError::DirectedGraph`] if the graph is directed.
    #[instrument(
        name = "components.compute",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), edges = graph.edge_count()),
    )]
    pub fn compute_connected_components<G>(&mut self, graph: &G)
            -> Result<Vec<HashSet<GraphNode<L>>>, AlgorithmError>
            where G: Graph<L> + ?Sized {
        let nodes = self.merge_reachable(graph)?;

        let mut components: HashMap<&GraphNode<L>, HashSet<GraphNode<L>>> =
            HashMap::with_capacity(self.disjoint_sets.set_count());
        for node in nodes {
            let representative = self.disjoint_sets.find_set(&node)?;
            components.entry(representative).or_default().insert(node);
        }

        debug!(components = components.len(), "connected components computed");
        Ok(components.into_values().collect())
    }

    /// Counts the connected components of `graph`.
    ///
    /// # Errors
    ///
    /// [`AlgorithmError::DirectedGraph`] if the graph is directed.
    pub fn component_count<G>(&mut self, graph: &G) -> Result<usize, AlgorithmError>
            where G: Graph<L> + ?Sized {
        self.merge_reachable(graph)?;
        Ok(self.disjoint_sets.set_count())
    }

    // Seeds one set per node and unions across every undirected edge,
    // returning the nodes it seeded.
    fn merge_reachable<G>(&mut self, graph: &G)
            -> Result<HashSet<GraphNode<L>>, AlgorithmError>
            where G: Graph<L> + ?Sized {
        if graph.is_directed() {
            return Err(AlgorithmError::DirectedGraph);
        }

        let nodes = graph.nodes();
        self.disjoint_sets.clear();
        for node in &nodes {
            self.disjoint_sets.make_set(node.clone())?;
        }

        for edge in graph.edges().iter().filter(|edge| !edge.is_directed()) {
            self.disjoint_sets.union(edge.node1(), edge.node2())?;
        }

        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{graph_of, init_tracing, node, DirectedView, Label};

    fn component(labels: &[Label]) -> HashSet<GraphNode<Label>> {
        labels.iter().map(|&label| node(label)).collect()
    }

    fn sorted(components: Vec<HashSet<GraphNode<Label>>>) -> Vec<Vec<Label>> {
        let mut result: Vec<Vec<Label>> = components.into_iter()
            .map(|component| {
                let mut labels: Vec<Label> = component.iter()
                    .map(|node| *node.label())
                    .collect();
                labels.sort();
                labels
            })
            .collect();
        result.sort();
        result
    }

    #[test]
    fn two_pairs() {
        init_tracing();
        let graph = graph_of(&["a", "b", "c", "d"],
                             &[("a", "b", 1.0), ("c", "d", 1.0)]);
        let components = ConnectedComponentsComputer::new()
            .compute_connected_components(&graph)
            .unwrap();

        assert_eq!(components.len(), 2);
        assert!(components.contains(&component(&["a", "b"])));
        assert!(components.contains(&component(&["c", "d"])));
    }

    #[test]
    fn transitive_reachability() {
        let graph = graph_of(&["a", "b", "c", "d", "e", "f"],
                             &[("a", "b", 1.0), ("c", "b", 1.0), ("c", "d", 1.0),
                               ("e", "f", 1.0)]);
        let components = ConnectedComponentsComputer::new()
            .compute_connected_components(&graph)
            .unwrap();

        assert_eq!(sorted(components),
                   vec![vec!["a", "b", "c", "d"], vec!["e", "f"]]);
    }

    #[test]
    fn isolated_nodes_are_singletons() {
        let graph = graph_of(&["a", "b", "c"], &[]);
        let mut computer = ConnectedComponentsComputer::new();
        let components = computer.compute_connected_components(&graph).unwrap();

        assert_eq!(sorted(components), vec![vec!["a"], vec!["b"], vec!["c"]]);
        assert_eq!(computer.component_count(&graph), Ok(3));
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = graph_of(&[], &[]);
        let mut computer = ConnectedComponentsComputer::new();
        assert!(computer.compute_connected_components(&graph).unwrap().is_empty());
        assert_eq!(computer.component_count(&graph), Ok(0));
    }

    #[test]
    fn directed_graph_is_rejected() {
        let view = DirectedView(graph_of(&["a"], &[]));
        let mut computer = ConnectedComponentsComputer::new();
        assert_eq!(computer.compute_connected_components(&view),
                   Err(AlgorithmError::DirectedGraph));
        assert_eq!(computer.component_count(&view),
                   Err(AlgorithmError::DirectedGraph));
    }

    #[test]
    fn computer_is_reusable() {
        let mut computer = ConnectedComponentsComputer::new();
        let joined = graph_of(&["a", "b"], &[("a", "b", 1.0)]);
        let apart = graph_of(&["a", "b"], &[]);

        assert_eq!(computer.component_count(&joined), Ok(1));
        assert_eq!(computer.component_count(&apart), Ok(2));
        assert_eq!(sorted(computer.compute_connected_components(&joined).unwrap()),
                   vec![vec!["a", "b"]]);
    }
}
