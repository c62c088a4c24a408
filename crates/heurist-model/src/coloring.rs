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

//! Vertex colorings.
//!
//! A `Coloring` assigns a non-negative color index to every vertex of a
//! `Graph`, indexed by `VertexIndex`. It is produced in full by a single
//! algorithm invocation; partial colorings used during backtracking never
//! leave the search that owns them.

use crate::{graph::Graph, index::VertexIndex};

/// A complete assignment of colors to vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Coloring {
    /// `colors[v]` is the color of vertex `v`.
    colors: Vec<usize>,
}

impl Coloring {
    /// Creates a coloring from per-vertex colors in declared vertex order.
    #[inline]
    pub fn new(colors: Vec<usize>) -> Self {
        Self { colors }
    }

    /// Creates a coloring that assigns nothing.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of colored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no vertex is colored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn color(&self, vertex: VertexIndex) -> usize {
        debug_assert!(
            vertex.get() < self.len(),
            "called `Coloring::color` with vertex index out of bounds: the len is {} but the index is {}",
            self.len(),
            vertex.get()
        );

        self.colors[vertex.get()]
    }

    /// Returns all colors in declared vertex order.
    #[inline]
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Returns the number of colors used, i.e. the largest color index plus one.
    #[inline]
    pub fn num_colors(&self) -> usize {
        self.colors.iter().max().map_or(0, |&c| c + 1)
    }

    /// Returns `true` if this coloring covers `graph` and no declared
    /// adjacency joins two vertices of the same color. Self-loops are ignored.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        self.len() == graph.num_vertices()
            && graph
                .edges()
                .all(|(v, u)| v == u || self.color(v) != self.color(u))
    }

    /// Iterates over `(label, color)` pairs in declared vertex order.
    pub fn labeled<'a>(&'a self, graph: &'a Graph) -> LabeledColoring<'a> {
        debug_assert_eq!(
            self.len(),
            graph.num_vertices(),
            "called `Coloring::labeled` with a graph of a different size"
        );

        LabeledColoring {
            coloring: self,
            graph,
        }
    }
}

/// A coloring paired with the graph it colors, for label-aware output.
#[derive(Debug, Clone, Copy)]
pub struct LabeledColoring<'a> {
    coloring: &'a Coloring,
    graph: &'a Graph,
}

impl<'a> LabeledColoring<'a> {
    /// Iterates over `(label, color)` pairs in declared vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        let coloring = self.coloring;
        let graph = self.graph;
        graph.vertices().map(move |v| (graph.label(v), coloring.color(v)))
    }
}

impl std::fmt::Display for LabeledColoring<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Coloring Summary")?;
        writeln!(f, "   Colors Used: {}", self.coloring.num_colors())?;
        writeln!(f)?;
        writeln!(f, "   {:<10} | {:<6}", "Vertex", "Color")?;
        writeln!(f, "   {:-<10}-+-{:-<6}", "", "")?;
        for (label, color) in self.iter() {
            writeln!(f, "   {:<10} | {:<6}", label, color)?;
        }
        Ok(())
    }
}
