// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Adjacency-list graphs for vertex coloring.
//!
//! An instance arrives as an `AdjacencyList`: an ordered sequence of
//! `(label, neighbor labels)` entries exactly as the caller declared them.
//! `AdjacencyList::validate` turns it into a `Graph`, the immutable form
//! consumed by every coloring algorithm.
//!
//! The declared order of the entries is significant. Greedy coloring walks the
//! vertices in that order, DSATUR breaks its final tie by it, and the exact
//! search branches on it. `Graph` therefore assigns `VertexIndex(i)` to the
//! `i`-th declared vertex and never reorders anything. Neighbor lists are kept
//! as given, including their order and any repeated entries; adjacency is not
//! symmetrized. A proper coloring is only meaningful when the instance
//! declares every edge from both ends.

use crate::{error::ValidationError, index::VertexIndex};
use rustc_hash::FxHashMap;

/// A graph as supplied by the caller, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    entries: Vec<(String, Vec<String>)>,
}

impl AdjacencyList {
    /// Creates an empty adjacency list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty adjacency list with room for `num_vertices` entries.
    #[inline]
    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_vertices),
        }
    }

    /// Declares the next vertex together with its neighbor labels.
    pub fn push_vertex<L, I, N>(&mut self, label: L, neighbors: I) -> &mut Self
    where
        L: Into<String>,
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.entries.push((
            label.into(),
            neighbors.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Returns the number of declared vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no vertex has been declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the declared entries in order.
    #[inline]
    pub fn entries(&self) -> &[(String, Vec<String>)] {
        &self.entries
    }

    /// Checks the instance and builds the validated `Graph`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyGraph` if no vertex is declared.
    /// - `ValidationError::DuplicateVertex` if a label is declared twice.
    /// - `ValidationError::UndeclaredVertex` for the first neighbor reference,
    ///   in declared order, that names no declared vertex.
    pub fn validate(self) -> Result<Graph, ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::EmptyGraph);
        }

        let num_vertices = self.entries.len();
        let mut index_of: FxHashMap<String, VertexIndex> =
            FxHashMap::with_capacity_and_hasher(num_vertices, Default::default());

        for (i, (label, _)) in self.entries.iter().enumerate() {
            if index_of.insert(label.clone(), VertexIndex::new(i)).is_some() {
                return Err(ValidationError::DuplicateVertex {
                    vertex: label.clone(),
                });
            }
        }

        let total_entries = self.entries.iter().map(|(_, n)| n.len()).sum();
        let mut neighbor_offsets = Vec::with_capacity(num_vertices + 1);
        let mut neighbors = Vec::with_capacity(total_entries);
        let mut labels = Vec::with_capacity(num_vertices);

        neighbor_offsets.push(0);
        for (label, declared) in self.entries {
            for neighbor in &declared {
                match index_of.get(neighbor) {
                    Some(&u) => neighbors.push(u),
                    None => {
                        return Err(ValidationError::UndeclaredVertex {
                            vertex: label,
                            neighbor: neighbor.clone(),
                        });
                    }
                }
            }
            neighbor_offsets.push(neighbors.len());
            labels.push(label);
        }

        Ok(Graph {
            labels,
            neighbor_offsets,
            neighbors,
            index_of,
        })
    }
}

impl<L, I, N> FromIterator<(L, I)> for AdjacencyList
where
    L: Into<String>,
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (L, I)>,
    {
        let mut list = AdjacencyList::new();
        for (label, neighbors) in iter {
            list.push_vertex(label, neighbors);
        }
        list
    }
}

/// A validated, immutable graph.
///
/// Adjacency is stored flattened: the neighbors of vertex `v` are
/// `neighbors[neighbor_offsets[v]..neighbor_offsets[v + 1]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    labels: Vec<String>,
    neighbor_offsets: Vec<usize>,
    neighbors: Vec<VertexIndex>,
    index_of: FxHashMap<String, VertexIndex>,
}

impl Graph {
    /// Returns the number of vertices. Always at least one.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// Returns the total length of all neighbor lists.
    #[inline]
    pub fn num_adjacency_entries(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the label of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn label(&self, vertex: VertexIndex) -> &str {
        let index = vertex.get();
        debug_assert!(
            index < self.num_vertices(),
            "called `Graph::label` with vertex index out of bounds: the len is {} but the index is {}",
            self.num_vertices(),
            index
        );

        &self.labels[index]
    }

    /// Returns all labels in declared order.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Looks up the index of a vertex by its label.
    #[inline]
    pub fn index_of(&self, label: &str) -> Option<VertexIndex> {
        self.index_of.get(label).copied()
    }

    /// Returns the neighbors of `vertex` in declared order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn neighbors(&self, vertex: VertexIndex) -> &[VertexIndex] {
        let index = vertex.get();
        debug_assert!(
            index < self.num_vertices(),
            "called `Graph::neighbors` with vertex index out of bounds: the len is {} but the index is {}",
            self.num_vertices(),
            index
        );

        &self.neighbors[self.neighbor_offsets[index]..self.neighbor_offsets[index + 1]]
    }

    /// Returns the static degree of `vertex`, i.e. the length of its declared neighbor list.
    #[inline]
    pub fn degree(&self, vertex: VertexIndex) -> usize {
        self.neighbors(vertex).len()
    }

    /// Iterates over all vertices in declared order.
    #[inline]
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexIndex> + use<> {
        (0..self.num_vertices()).map(VertexIndex::new)
    }

    /// Iterates over every declared adjacency `(vertex, neighbor)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.vertices()
            .flat_map(move |v| self.neighbors(v).iter().map(move |&u| (v, u)))
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Graph ({} vertices, {} adjacency entries)",
            self.num_vertices(),
            self.num_adjacency_entries()
        )?;
        for v in self.vertices() {
            let names: Vec<&str> = self.neighbors(v).iter().map(|&u| self.label(u)).collect();
            writeln!(f, "   {:<10} -> [{}]", self.label(v), names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vi(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    fn triangle() -> AdjacencyList {
        [
            ("A", vec!["B", "C"]),
            ("B", vec!["A", "C"]),
            ("C", vec!["A", "B"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_validate_builds_flattened_adjacency() {
        let graph = triangle().validate().expect("triangle is valid");

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_adjacency_entries(), 6);
        assert_eq!(graph.neighbors(vi(0)), &[vi(1), vi(2)]);
        assert_eq!(graph.neighbors(vi(2)), &[vi(0), vi(1)]);
        assert_eq!(graph.degree(vi(1)), 2);
        assert_eq!(graph.label(vi(1)), "B");
        assert_eq!(graph.index_of("C"), Some(vi(2)));
        assert_eq!(graph.index_of("Z"), None);
    }

    #[test]
    fn test_declared_order_is_preserved() {
        let graph: Graph = [("zeta", vec!["alpha"]), ("alpha", vec!["zeta"])]
            .into_iter()
            .collect::<AdjacencyList>()
            .validate()
            .unwrap();

        assert_eq!(graph.labels(), &["zeta".to_string(), "alpha".to_string()]);
        assert_eq!(graph.index_of("zeta"), Some(vi(0)));
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        let err = AdjacencyList::new().validate().unwrap_err();
        assert_eq!(err, ValidationError::EmptyGraph);
        assert_eq!(err.to_string(), "empty graph");
    }

    #[test]
    fn test_undeclared_neighbor_is_rejected() {
        let mut list = AdjacencyList::new();
        list.push_vertex("A", ["B"]).push_vertex("B", ["A", "X"]);

        match list.validate() {
            Err(ValidationError::UndeclaredVertex { vertex, neighbor }) => {
                assert_eq!(vertex, "B");
                assert_eq!(neighbor, "X");
            }
            other => panic!("expected UndeclaredVertex, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_vertex_is_rejected() {
        let mut list = AdjacencyList::new();
        list.push_vertex("A", Vec::<String>::new())
            .push_vertex("A", Vec::<String>::new());

        assert_eq!(
            list.validate().unwrap_err(),
            ValidationError::DuplicateVertex {
                vertex: "A".to_string()
            }
        );
    }

    #[test]
    fn test_isolated_vertex_is_valid() {
        let mut list = AdjacencyList::new();
        list.push_vertex("solo", Vec::<String>::new());
        let graph = list.validate().unwrap();

        assert_eq!(graph.num_vertices(), 1);
        assert!(graph.neighbors(vi(0)).is_empty());
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_repeated_neighbors_count_towards_degree() {
        let mut list = AdjacencyList::new();
        list.push_vertex("A", ["B", "B"]).push_vertex("B", ["A"]);
        let graph = list.validate().unwrap();

        assert_eq!(graph.degree(vi(0)), 2);
        assert_eq!(graph.degree(vi(1)), 1);
    }

    #[test]
    fn test_edges_follow_declared_order() {
        let graph = triangle().validate().unwrap();
        let edges: Vec<_> = graph.edges().map(|(a, b)| (a.get(), b.get())).collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_display_lists_neighbors_by_label() {
        let graph = triangle().validate().unwrap();
        let text = format!("{}", graph);
        assert!(text.starts_with("Graph (3 vertices, 6 adjacency entries)"));
        assert!(text.contains("A          -> [B, C]"));
    }
}
