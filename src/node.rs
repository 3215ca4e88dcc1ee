//! Node and edge value types.

use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

/// A graph node, identified by its label.
///
/// Two nodes are equal exactly when their labels are equal, so a graph
/// cannot hold two distinct nodes with the same label.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode<L> {
    label: L,
}

impl<L> GraphNode<L> {
    /// Creates a node carrying `label`.
    pub fn new(label: L) -> Self {
        GraphNode { label }
    }

    /// The node's label.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Consumes the node, returning its label.
    pub fn into_label(self) -> L {
        self.label
    }
}

impl<L: Debug> Debug for GraphNode<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "GraphNode({:?})", self.label)
    }
}

impl<L: Display> Display for GraphNode<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.label, formatter)
    }
}

impl<L> From<L> for GraphNode<L> {
    fn from(label: L) -> Self {
        GraphNode::new(label)
    }
}

/// A weighted edge between two nodes.
///
/// Equality is structural: two edges are equal when they agree on
/// directedness and weight and join the same endpoints. For undirected
/// edges the endpoint order does not matter, so `A-B` equals `B-A`.
///
/// Weights are compared bit for bit: an edge of weight `0.0` differs from
/// one of weight `-0.0`, and a NaN-weighted edge equals itself. Look up an
/// edge in a set with the exact weight it was stored with.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphEdge<L> {
    node1: GraphNode<L>,
    node2: GraphNode<L>,
    directed: bool,
    weight: f64,
}

impl<L> GraphEdge<L> {
    /// Creates an edge of weight `1.0`.
    pub fn new(node1: GraphNode<L>, node2: GraphNode<L>, directed: bool) -> Self {
        Self::weighted(node1, node2, directed, 1.0)
    }

    /// Creates an edge of the given weight.
    ///
    /// The weight is not validated here; algorithms that need non-negative
    /// weights reject them when they run.
    pub fn weighted(node1: GraphNode<L>,
                    node2: GraphNode<L>,
                    directed: bool,
                    weight: f64) -> Self {
        GraphEdge { node1, node2, directed, weight }
    }

    /// The first endpoint (the source, for a directed edge).
    pub fn node1(&self) -> &GraphNode<L> {
        &self.node1
    }

    /// The second endpoint (the target, for a directed edge).
    pub fn node2(&self) -> &GraphNode<L> {
        &self.node2
    }

    /// The edge's weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Is this a directed edge?
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Given one endpoint, returns the other.
    ///
    /// Returns `None` if `node` is not an endpoint of this edge.
    pub fn opposite(&self, node: &GraphNode<L>) -> Option<&GraphNode<L>>
            where L: PartialEq {
        if *node == self.node1 {
            Some(&self.node2)
        } else if *node == self.node2 {
            Some(&self.node1)
        } else {
            None
        }
    }
}

impl<L: Debug> Debug for GraphEdge<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(formatter, "GraphEdge({:?} {} {:?}, {})",
               self.node1.label, arrow, self.node2.label, self.weight)
    }
}

impl<L: PartialEq> PartialEq for GraphEdge<L> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed
            || self.weight.to_bits() != other.weight.to_bits() {
            return false;
        }

        let same = self.node1 == other.node1 && self.node2 == other.node2;
        let swapped = self.node1 == other.node2 && self.node2 == other.node1;

        same || (!self.directed && swapped)
    }
}

impl<L: Eq> Eq for GraphEdge<L> { }

impl<L: Hash> Hash for GraphEdge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        self.weight.to_bits().hash(state);

        if self.directed {
            self.node1.hash(state);
            self.node2.hash(state);
        } else {
            // Must agree with `eq`, which ignores endpoint order.
            let mix = node_hash(&self.node1).wrapping_add(node_hash(&self.node2));
            state.write_u64(mix);
        }
    }
}

fn node_hash<L: Hash>(node: &GraphNode<L>) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.hash(&mut hasher);
    hasher.finish()
}
