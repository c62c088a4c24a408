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

use heurist_coloring::bnb::exact_color;
use heurist_coloring::dsatur::dsatur_color;
use heurist_coloring::greedy::greedy_color;
use heurist_model::graph::{AdjacencyList, Graph};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds a symmetric random graph with labels `v0..v{n-1}`.
fn random_graph(rng: &mut ChaCha8Rng, num_vertices: usize, density: f64) -> Graph {
    let mut adjacency = vec![Vec::new(); num_vertices];
    for u in 0..num_vertices {
        for v in (u + 1)..num_vertices {
            if rng.random_bool(density) {
                adjacency[u].push(v);
                adjacency[v].push(u);
            }
        }
    }

    let mut list = AdjacencyList::with_capacity(num_vertices);
    for (u, neighbors) in adjacency.into_iter().enumerate() {
        list.push_vertex(
            format!("v{}", u),
            neighbors.into_iter().map(|v| format!("v{}", v)),
        );
    }
    list.validate().expect("random graph is valid")
}

#[test]
fn test_all_colorings_are_proper_on_random_graphs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let n = rng.random_range(1..=8);
        let density = rng.random_range(0.1..0.9);
        let graph = random_graph(&mut rng, n, density);

        for coloring in [greedy_color(&graph), dsatur_color(&graph), exact_color(&graph)] {
            assert_eq!(coloring.len(), n);
            assert!(coloring.is_proper(&graph));
        }
    }
}

#[test]
fn test_exact_never_uses_more_colors_than_heuristics() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.random_range(1..=8);
        let density = rng.random_range(0.2..0.8);
        let graph = random_graph(&mut rng, n, density);

        let exact = exact_color(&graph).num_colors();
        assert!(exact <= greedy_color(&graph).num_colors());
        assert!(exact <= dsatur_color(&graph).num_colors());
        assert!(exact >= 1);
    }
}

#[test]
fn test_complete_graph_needs_one_color_per_vertex() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for n in 1..=7 {
        let graph = random_graph(&mut rng, n, 1.0);
        assert_eq!(greedy_color(&graph).num_colors(), n);
        assert_eq!(dsatur_color(&graph).num_colors(), n);
        assert_eq!(exact_color(&graph).num_colors(), n);
    }
}

#[test]
fn test_edgeless_graph_needs_one_color() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let graph = random_graph(&mut rng, 6, 0.0);
    assert_eq!(greedy_color(&graph).num_colors(), 1);
    assert_eq!(dsatur_color(&graph).num_colors(), 1);
    assert_eq!(exact_color(&graph).num_colors(), 1);
}
