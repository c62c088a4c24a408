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

//! Exact graph coloring by backtracking branch-and-bound
//!
//! Vertices are assigned in declared order. At each vertex the search first
//! tries every color already introduced on the current path (reuse branch) and
//! only then a single brand-new color (expansion branch). The best color count
//! found so far is the bound: a node whose used-color count already meets it
//! is discarded, and the expansion branch is skipped whenever it would meet it.
//! A complete assignment replaces the incumbent only when it uses strictly
//! fewer colors, so among optimal colorings the first one found is returned.
//!
//! The search is exponential. It has no internal size guard; callers gate it
//! with `heurist_search::guard::SizeLimit` and may stop it early through a
//! `TreeSearchMonitor`.

use crate::{
    monitor::{
        no_op::NoOperationMonitor,
        tree_search_monitor::{PruneReason, SearchNode, TreeSearchMonitor},
    },
    result::ExactColoringOutcome,
    stats::ColoringSearchStatistics,
};
use heurist_model::{coloring::Coloring, graph::Graph, index::VertexIndex};
use heurist_search::command::SearchCommand;
use std::ops::ControlFlow;

/// Returns a coloring of `graph` with the minimum number of colors.
///
/// Returns an empty coloring if the search produced no complete assignment.
/// Intended for small graphs only.
pub fn exact_color(graph: &Graph) -> Coloring {
    BacktrackingColoringSolver::new()
        .solve(graph, NoOperationMonitor::new())
        .into_coloring()
        .unwrap_or_else(Coloring::empty)
}

/// A reusable branch-and-bound engine for exact graph coloring.
///
/// The solver only owns the working assignment buffer, so that repeated
/// solves do not reallocate. All per-run state lives in a private search
/// session that is discarded when `solve` returns.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingColoringSolver {
    assignment: Vec<Option<usize>>,
}

impl BacktrackingColoringSolver {
    /// Creates a new solver.
    #[inline]
    pub fn new() -> Self {
        Self {
            assignment: Vec::new(),
        }
    }

    /// Creates a new solver with room for a graph of `num_vertices` vertices.
    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            assignment: Vec::with_capacity(num_vertices),
        }
    }

    /// Searches for a minimum coloring of `graph`, reporting to `monitor`.
    pub fn solve<S>(&mut self, graph: &Graph, mut monitor: S) -> ExactColoringOutcome
    where
        S: TreeSearchMonitor,
    {
        self.reset(graph.num_vertices());
        BacktrackingSearchSession::new(self, graph, &mut monitor).run()
    }

    #[inline]
    fn reset(&mut self, num_vertices: usize) {
        self.assignment.clear();
        self.assignment.resize(num_vertices, None);
    }
}

/// The state of a single search run.
struct BacktrackingSearchSession<'a, S> {
    solver: &'a mut BacktrackingColoringSolver,
    graph: &'a Graph,
    monitor: &'a mut S,
    best_num_colors: usize,
    best_coloring: Option<Coloring>,
    stats: ColoringSearchStatistics,
    start_time: std::time::Instant,
}

impl<S> std::fmt::Debug for BacktrackingSearchSession<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BacktrackingSearchSession")
            .field("num_vertices", &self.graph.num_vertices())
            .field("best_num_colors", &self.best_num_colors)
            .field("best_coloring", &self.best_coloring)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, S> BacktrackingSearchSession<'a, S>
where
    S: TreeSearchMonitor,
{
    #[inline]
    fn new(
        solver: &'a mut BacktrackingColoringSolver,
        graph: &'a Graph,
        monitor: &'a mut S,
    ) -> Self {
        Self {
            solver,
            graph,
            monitor,
            best_num_colors: usize::MAX,
            best_coloring: None,
            stats: ColoringSearchStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> ExactColoringOutcome {
        self.monitor.on_enter_search(self.graph, &self.stats);

        let flow = self.explore(SearchNode {
            depth: 0,
            colors_used: 0,
        });

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        match flow {
            ControlFlow::Continue(()) => ExactColoringOutcome::optimal(
                self.best_coloring.unwrap_or_else(Coloring::empty),
                self.stats,
            ),
            ControlFlow::Break(reason) => {
                ExactColoringOutcome::aborted(self.best_coloring, reason, self.stats)
            }
        }
    }

    /// Explores the subtree rooted at `node`. Breaks with the abort reason if
    /// a monitor asked to stop.
    fn explore(&mut self, node: SearchNode) -> ControlFlow<String> {
        if let SearchCommand::Terminate(reason) = self.monitor.search_command(node, &self.stats) {
            return ControlFlow::Break(reason);
        }

        // No completion of this node can use fewer colors than it already does.
        if node.colors_used >= self.best_num_colors {
            self.prune(node, PruneReason::BoundDominated);
            return ControlFlow::Continue(());
        }

        if node.depth == self.graph.num_vertices() {
            self.handle_complete_coloring(node);
            return ControlFlow::Continue(());
        }

        let vertex = VertexIndex::new(node.depth);

        for color in 0..node.colors_used {
            if self.conflicts(vertex, color) {
                self.stats.on_pruning_conflict();
                self.monitor
                    .on_prune(node, PruneReason::ColorConflict, &self.stats);
                continue;
            }
            self.branch(node, vertex, color, node.colors_used)?;
        }

        if node.colors_used + 1 >= self.best_num_colors {
            self.prune(node, PruneReason::BoundDominated);
            return ControlFlow::Continue(());
        }

        self.branch(node, vertex, node.colors_used, node.colors_used + 1)
    }

    /// Assigns `color` to `vertex`, explores the child and undoes the assignment.
    #[inline]
    fn branch(
        &mut self,
        parent: SearchNode,
        vertex: VertexIndex,
        color: usize,
        colors_used: usize,
    ) -> ControlFlow<String> {
        let child = SearchNode {
            depth: parent.depth + 1,
            colors_used,
        };

        self.solver.assignment[vertex.get()] = Some(color);
        self.stats.on_node_explored();
        self.stats.on_depth_update(child.depth as u64);
        self.monitor.on_descend(child, vertex, color, &self.stats);

        let flow = self.explore(child);

        self.solver.assignment[vertex.get()] = None;
        self.stats.on_backtrack();
        self.monitor.on_backtrack(child, &self.stats);

        flow
    }

    #[inline]
    fn conflicts(&self, vertex: VertexIndex, color: usize) -> bool {
        debug_assert!(
            vertex.get() < self.graph.num_vertices(),
            "called `BacktrackingSearchSession::conflicts` with vertex index out of bounds: the len is {} but the index is {}",
            self.graph.num_vertices(),
            vertex.get()
        );

        self.graph
            .neighbors(vertex)
            .iter()
            .any(|neighbor| self.solver.assignment[neighbor.get()] == Some(color))
    }

    #[inline]
    fn prune(&mut self, node: SearchNode, reason: PruneReason) {
        self.stats.on_pruning_bound();
        self.monitor.on_prune(node, reason, &self.stats);
    }

    /// Installs the current complete assignment as the new incumbent.
    ///
    /// Only called on nodes that passed the bound check, so the assignment
    /// uses strictly fewer colors than the previous incumbent.
    #[inline]
    fn handle_complete_coloring(&mut self, node: SearchNode) {
        debug_assert!(
            self.solver.assignment.iter().all(Option::is_some),
            "called `BacktrackingSearchSession::handle_complete_coloring` with an incomplete assignment"
        );

        let coloring = Coloring::new(self.solver.assignment.iter().flatten().copied().collect());
        self.best_num_colors = node.colors_used;
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&coloring, &self.stats);
        self.best_coloring = Some(coloring);
    }
}
