//! Serde representation of [`WeightedGraph`].
//!
//! ```json
//! { "directed": false, "vertices": ["A", "B"], "edges": [["A", "B", 1.5]] }
//! ```
//!
//! Undirected edges appear once. Deserialization replays `add_vertex` and
//! `add_edge`, so a decoded graph satisfies the same invariants as a built one
//! and keeps the encoded vertex and edge order.

use super::{Weight, WeightedGraph};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::Hash;

#[derive(Serialize)]
struct GraphReprRef<'a, V, W> {
    directed: bool,
    vertices: &'a [V],
    edges: Vec<(&'a V, &'a V, W)>,
}

#[derive(Deserialize)]
struct GraphRepr<V, W> {
    directed: bool,
    #[serde(default = "Vec::new")]
    vertices: Vec<V>,
    #[serde(default = "Vec::new")]
    edges: Vec<(V, V, W)>,
}

impl<V, W> Serialize for WeightedGraph<V, W>
where
    V: Serialize,
    W: Serialize + Copy,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphReprRef {
            directed: self.directed,
            vertices: &self.vertices,
            edges: self.edges().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, V, W> Deserialize<'de> for WeightedGraph<V, W>
where
    V: Deserialize<'de> + Eq + Hash + Clone,
    W: Deserialize<'de> + Weight,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GraphRepr::<V, W>::deserialize(deserializer)?;
        let mut graph = WeightedGraph::with_capacity(repr.directed, repr.vertices.len());
        for vertex in repr.vertices {
            graph.add_vertex(vertex);
        }
        for (from, to, weight) in repr.edges {
            graph.add_edge(from, to, weight);
        }
        Ok(graph)
    }
}
