//! Edge and weight types.

use core::cmp::Ordering;
use core::fmt;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Numeric edge weight.
///
/// Any IEEE float qualifies; `f64` is the default everywhere. Positive
/// infinity stands for "no path".
pub trait Weight: Float + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> Weight for T where T: Float + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// Compares weights for removal matching. NaN matches NaN.
#[inline]
pub(crate) fn same_weight<W: Weight>(a: W, b: W) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Total order over weights for sorting: numeric order, NaN after everything.
pub(crate) fn cmp_weight<W: Weight>(a: &W, b: &W) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// An owned outgoing edge: the far endpoint and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V, W = f64> {
    /// The vertex this edge points to.
    pub target: V,
    /// The edge weight.
    pub weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    /// Creates a new edge.
    pub fn new(target: V, weight: W) -> Self {
        Self { target, weight }
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for WeightedEdge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.target, self.weight)
    }
}

/// A borrowed outgoing edge, as yielded by [`WeightedGraph::neighbors`].
///
/// [`WeightedGraph::neighbors`]: super::WeightedGraph::neighbors
#[derive(Debug, PartialEq)]
pub struct EdgeRef<'a, V, W = f64> {
    /// The vertex this edge points to.
    pub target: &'a V,
    /// The edge weight.
    pub weight: W,
}

impl<V, W: Copy> Clone for EdgeRef<'_, V, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, W: Copy> Copy for EdgeRef<'_, V, W> {}

impl<V: Clone, W: Copy> EdgeRef<'_, V, W> {
    /// Clones the target into an owned [`WeightedEdge`].
    pub fn to_owned_edge(&self) -> WeightedEdge<V, W> {
        WeightedEdge::new(self.target.clone(), self.weight)
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for EdgeRef<'_, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.target, self.weight)
    }
}

/// Adjacency entry as stored by the graph: dense target index plus weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EdgeSlot<W> {
    pub(crate) target: usize,
    pub(crate) weight: W,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_adjacency_listing() {
        let edge = WeightedEdge::new("B", 1.5);
        assert_eq!(edge.to_string(), "B (1.5)");

        let target = "C";
        let r = EdgeRef { target: &target, weight: 2.0 };
        assert_eq!(r.to_string(), "C (2)");
        assert_eq!(r.to_owned_edge(), WeightedEdge::new("C", 2.0));
    }

    #[test]
    fn same_weight_treats_nan_as_equal() {
        assert!(same_weight(1.0, 1.0));
        assert!(same_weight(f64::NAN, f64::NAN));
        assert!(!same_weight(1.0, 2.0));
    }

    #[test]
    fn cmp_weight_sorts_nan_last() {
        let mut ws = vec![2.0, f64::NAN, -1.0, f64::INFINITY, 0.5];
        ws.sort_by(cmp_weight);
        assert_eq!(&ws[..4], &[-1.0, 0.5, 2.0, f64::INFINITY]);
        assert!(ws[4].is_nan());
    }
}
