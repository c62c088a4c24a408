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

//! Sequential greedy coloring.
//!
//! Vertices are colored one by one in declared order. Each vertex receives the
//! smallest color not already used by one of its colored neighbors. The result
//! is always proper but may use arbitrarily more colors than necessary.

use crate::palette::ColorSet;
use heurist_model::{coloring::Coloring, graph::Graph};

/// Colors `graph` with the first-fit rule in declared vertex order.
///
/// Runs in `O(V + E)` time.
pub fn greedy_color(graph: &Graph) -> Coloring {
    let mut colors: Vec<Option<usize>> = vec![None; graph.num_vertices()];
    let mut taken = ColorSet::with_capacity(graph.num_vertices());

    for vertex in graph.vertices() {
        let color = taken.first_fit(
            graph
                .neighbors(vertex)
                .iter()
                .filter_map(|neighbor| colors[neighbor.get()]),
        );
        colors[vertex.get()] = Some(color);
    }

    Coloring::new(colors.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heurist_model::graph::AdjacencyList;

    fn graph(entries: &[(&str, &[&str])]) -> Graph {
        entries
            .iter()
            .map(|(label, neighbors)| (*label, neighbors.iter().copied()))
            .collect::<AdjacencyList>()
            .validate()
            .expect("test graph must be valid")
    }

    #[test]
    fn test_triangle_uses_three_colors() {
        let g = graph(&[("A", &["B", "C"]), ("B", &["A", "C"]), ("C", &["A", "B"])]);
        let coloring = greedy_color(&g);
        assert_eq!(coloring.colors(), &[0, 1, 2]);
        assert_eq!(coloring.num_colors(), 3);
        assert!(coloring.is_proper(&g));
    }

    #[test]
    fn test_declared_order_drives_the_result() {
        // Path A - B - C - D declared as A, D, B, C: D and A both get 0,
        // B is adjacent to A (0) so gets 1, C is adjacent to B (1) and D (0) so gets 2.
        let g = graph(&[
            ("A", &["B"]),
            ("D", &["C"]),
            ("B", &["A", "C"]),
            ("C", &["B", "D"]),
        ]);
        let coloring = greedy_color(&g);
        assert_eq!(coloring.colors(), &[0, 0, 1, 2]);
        assert!(coloring.is_proper(&g));
    }

    #[test]
    fn test_isolated_vertices_share_color_zero() {
        let g = graph(&[("X", &[]), ("Y", &[]), ("Z", &[])]);
        let coloring = greedy_color(&g);
        assert_eq!(coloring.colors(), &[0, 0, 0]);
        assert_eq!(coloring.num_colors(), 1);
    }

    #[test]
    fn test_default_example_graph() {
        let g = graph(&[
            ("A", &["B", "C", "D"]),
            ("B", &["A", "C", "E"]),
            ("C", &["A", "B", "D", "E"]),
            ("D", &["A", "C", "E"]),
            ("E", &["B", "C", "D"]),
        ]);
        let coloring = greedy_color(&g);
        assert_eq!(coloring.colors(), &[0, 1, 2, 1, 0]);
        assert!(coloring.is_proper(&g));
    }
}
