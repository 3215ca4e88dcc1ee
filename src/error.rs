//! Error types for graph storage, the disjoint-set forest and the
//! algorithms built on them.
//!
//! Labels and elements are captured through their `Debug` rendering so that
//! the error types stay non-generic.

use std::fmt::{self, Debug};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Returns the stable machine-readable representation of this code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Returns the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) fn render<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}

/// An error produced by [`Graph`](crate::Graph) operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced an endpoint that is not a node of the graph.
    #[error("edge {edge} references a node that is not in the graph")]
    MissingEndpoint {
        /// The offending edge.
        edge: String,
    },
    /// A directed edge was given to undirected storage.
    #[error("edge {edge} is directed, but the graph is undirected")]
    DirectedEdge {
        /// The offending edge.
        edge: String,
    },
    /// No node carries the requested label.
    #[error("no node is labelled {label}")]
    LabelNotFound {
        /// The label that was looked up.
        label: String,
    },
    /// The node is not in the graph.
    #[error("node {node} is not in the graph")]
    NodeNotFound {
        /// The node that was looked up.
        node: String,
    },
    /// A node index was outside `[0, node_count)`.
    #[error("index {index} is out of bounds for {node_count} nodes")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of nodes at the time of the call.
        node_count: usize,
    },
    /// The operation only makes sense on directed graphs.
    #[error("{operation} is not supported by an undirected graph")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced an endpoint that is not a node of the graph.
        MissingEndpoint => MissingEndpoint { .. } => "GRAPH_MISSING_ENDPOINT",
        /// A directed edge was given to undirected storage.
        DirectedEdge => DirectedEdge { .. } => "GRAPH_DIRECTED_EDGE",
        /// No node carries the requested label.
        LabelNotFound => LabelNotFound { .. } => "GRAPH_LABEL_NOT_FOUND",
        /// The node is not in the graph.
        NodeNotFound => NodeNotFound { .. } => "GRAPH_NODE_NOT_FOUND",
        /// A node index was out of bounds.
        IndexOutOfBounds => IndexOutOfBounds { .. } => "GRAPH_INDEX_OUT_OF_BOUNDS",
        /// The operation only makes sense on directed graphs.
        Unsupported => Unsupported { .. } => "GRAPH_UNSUPPORTED",
    }
}

/// An error produced by [`ForestDisjointSets`](crate::ForestDisjointSets).
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// `make_set` was called for an element that already has a set.
    #[error("element {element} is already present")]
    AlreadyPresent {
        /// The duplicate element.
        element: String,
    },
    /// The element was never added with `make_set`.
    #[error("element {element} is not present")]
    NotPresent {
        /// The missing element.
        element: String,
    },
    /// A deserialized forest breaks the forest's structural invariants.
    #[error("invalid forest: {reason}")]
    Invalid {
        /// The broken invariant.
        reason: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element is already present.
        AlreadyPresent => AlreadyPresent { .. } => "DISJOINT_SET_ALREADY_PRESENT",
        /// The element is not present.
        NotPresent => NotPresent { .. } => "DISJOINT_SET_NOT_PRESENT",
        /// The forest is structurally invalid.
        Invalid => Invalid { .. } => "DISJOINT_SET_INVALID",
    }
}

/// An error produced by [`KruskalMsp`](crate::KruskalMsp) and
/// [`ConnectedComponentsComputer`](crate::ConnectedComponentsComputer).
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AlgorithmError {
    /// The algorithm is only defined for undirected graphs.
    #[error("graph must be undirected")]
    DirectedGraph,
    /// Kruskal requires non-negative weights.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// The offending edge.
        edge: String,
        /// Its weight.
        weight: f64,
    },
    /// The internal forest rejected an operation, e.g. for an edge whose
    /// endpoint the graph does not enumerate.
    #[error(transparent)]
    DisjointSet(#[from] DisjointSetError),
    /// A graph query failed while the algorithm ran.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`AlgorithmError`] variants.
    enum AlgorithmErrorCode for AlgorithmError {
        /// The graph is directed.
        DirectedGraph => DirectedGraph => "ALGORITHM_DIRECTED_GRAPH",
        /// An edge has negative weight.
        NegativeWeight => NegativeWeight { .. } => "ALGORITHM_NEGATIVE_WEIGHT",
        /// The internal forest rejected an operation.
        DisjointSet => DisjointSet { .. } => "ALGORITHM_DISJOINT_SET",
        /// A graph query failed.
        Graph => Graph { .. } => "ALGORITHM_GRAPH",
    }
}
