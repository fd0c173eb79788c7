//! Error taxonomy shared by the graph and its algorithms.
//!
//! Every failure here is local and recoverable by the caller. Degenerate
//! outcomes (an unreachable vertex, a spanning forest instead of a tree) are
//! *not* errors: they are reported through the returned values.

use core::fmt;

/// Which argument of an operation named a vertex that is not in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexRole {
    /// The source of a shortest-path query.
    Source,
    /// The destination of a shortest-path query.
    Destination,
    /// The start vertex of Prim's algorithm.
    Start,
    /// A vertex passed to a plain lookup.
    Vertex,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VertexRole::Source => "source",
            VertexRole::Destination => "destination",
            VertexRole::Start => "start",
            VertexRole::Vertex => "vertex",
        })
    }
}

/// The error type for graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex argument is not present in the graph.
    VertexNotFound {
        /// The argument that was rejected.
        role: VertexRole,
    },
    /// A minimum spanning tree was requested for a directed graph.
    DirectedGraph,
    /// A spanning tree query was made before any spanning tree was computed.
    MstNotComputed,
    /// Decoded data violates the invariants of the type it was decoded into.
    Malformed {
        /// The violated invariant.
        reason: &'static str,
    },
}

impl GraphError {
    /// Shorthand for [`GraphError::VertexNotFound`].
    pub(crate) const fn missing(role: VertexRole) -> Self {
        GraphError::VertexNotFound { role }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexNotFound { role } => {
                write!(f, "{role} vertex not found in graph")
            }
            GraphError::DirectedGraph => {
                f.write_str("minimum spanning trees require an undirected graph")
            }
            GraphError::MstNotComputed => f.write_str("MST has not been computed yet"),
            GraphError::Malformed { reason } => write!(f, "malformed encoding: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
