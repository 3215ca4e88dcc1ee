//! Minimum spanning tree by Kruskal's algorithm.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, instrument, trace};

use super::error::render;
use super::{AlgorithmError, ForestDisjointSets, Graph, GraphEdge, GraphNode};

/// Computes minimum spanning trees of undirected graphs with non-negative
/// weights.
///
/// The computer owns the disjoint-set forest and edge buffer it works with,
/// and clears both at the start of every call, so nothing carries over from
/// one graph to the next.
///
/// # Examples
///
/// ```
/// use graph_forest::*;
///
/// let mut graph = AdjacencyMatrixUndirectedGraph::new();
/// for label in &["a", "b", "c"] {
///     graph.add_node(GraphNode::new(*label));
/// }
/// let edge = |a, b, w| GraphEdge::weighted(GraphNode::new(a), GraphNode::new(b), false, w);
/// graph.add_edge(edge("a", "b", 1.0)).unwrap();
/// graph.add_edge(edge("b", "c", 2.0)).unwrap();
/// graph.add_edge(edge("a", "c", 3.0)).unwrap();
///
/// let tree = KruskalMsp::new().compute_msp(&graph).unwrap();
/// assert_eq!(tree.len(), 2);
/// assert!(!tree.contains(&edge("a", "c", 3.0)));
/// assert_eq!(total_weight(&tree), 3.0);
/// ```
#[derive(Debug)]
pub struct KruskalMsp<L> {
    disjoint_sets: ForestDisjointSets<GraphNode<L>>,
    edges: Vec<GraphEdge<L>>,
}

impl<L> Default for KruskalMsp<L> {
    fn default() -> Self {
        KruskalMsp {
            disjoint_sets: ForestDisjointSets::new(),
            edges: Vec::new(),
        }
    }
}

impl<L: Clone + Eq + Hash + Debug> KruskalMsp<L> {
    /// Creates a computer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a minimum spanning tree of `graph`.
    ///
    /// The tree is returned as the set of its edges. If the graph is not
    /// connected the result spans each connected part separately, i.e. it
    /// is a minimum spanning forest. Edges whose weight is NaN are
    /// considered after all others.
    ///
    /// # Errors
    ///
    /// [`AlgorithmError::DirectedGraph`] if the graph is directed, and
    /// [`AlgorithmError::NegativeWeight`] if any edge weighs less than zero.
    /// Both are checked before any work is done.
    #[instrument(
        name = "kruskal.compute",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), edges = graph.edge_count()),
    )]
    pub fn compute_msp<G>(&mut self, graph: &G)
            -> Result<HashSet<GraphEdge<L>>, AlgorithmError>
            where G: Graph<L> + ?Sized {
        if graph.is_directed() {
            return Err(AlgorithmError::DirectedGraph);
        }

        let edges = graph.edges();
        if let Some(edge) = edges.iter().find(|edge| edge.weight() < 0.0) {
            return Err(AlgorithmError::NegativeWeight {
                edge: render(edge),
                weight: edge.weight(),
            });
        }

        let mut tree = HashSet::new();
        if edges.is_empty() {
            return Ok(tree);
        }

        self.disjoint_sets.clear();
        for node in graph.nodes() {
            self.disjoint_sets.make_set(node)?;
        }

        self.edges.clear();
        self.edges.extend(edges);
        self.edges.sort_by(|a, b| compare_weights(a.weight(), b.weight()));

        let wanted = graph.node_count().saturating_sub(1);
        for edge in &self.edges {
            if tree.len() == wanted {
                break;
            }

            if self.disjoint_sets.union(edge.node1(), edge.node2())? {
                trace!(edge = ?edge, "accepted");
                tree.insert(edge.clone());
            }
        }

        debug!(accepted = tree.len(),
               spanning = tree.len() == wanted,
               "minimum spanning tree computed");
        Ok(tree)
    }
}

// HELPERS

// Ascending, with -0.0 before 0.0 and every NaN after every number,
// whatever its sign bit.
fn compare_weights(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Sums the weights of `edges`.
pub fn total_weight<'a, L, I>(edges: I) -> f64
        where L: 'a, I: IntoIterator<Item = &'a GraphEdge<L>> {
    edges.into_iter().map(GraphEdge::weight).sum()
}
