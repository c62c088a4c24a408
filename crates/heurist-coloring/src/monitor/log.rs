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

use crate::{
    monitor::tree_search_monitor::{PruneReason, SearchNode, TreeSearchMonitor},
    stats::ColoringSearchStatistics,
};
use heurist_model::{coloring::Coloring, graph::Graph, index::VertexIndex};
use std::time::{Duration, Instant};

/// Prints a fixed-width progress table of the exact coloring search to stdout.
///
/// A line is printed on descent at most once per `log_interval`, and the clock
/// is only read when `nodes_explored & clock_check_mask == 0`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_num_colors: Option<usize>,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_num_colors: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<12} | {:<7} | {:<11} | {:<11} | {:<12} | {:<12}",
            "Elapsed", "Nodes", "Depth", "Best Colors", "Colors Used", "Backtracks", "Pruned"
        );
        println!("{}", "-".repeat(95));
    }

    #[inline(always)]
    fn log_line(&mut self, node: SearchNode, stats: &ColoringSearchStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best = match self.best_num_colors {
            Some(colors) => colors.to_string(),
            None => "Inf".to_string(),
        };
        let pruned = stats.prunings_bound.saturating_add(stats.prunings_conflict);

        println!(
            "{:<9} | {:<12} | {:<7} | {:<11} | {:<11} | {:<12} | {:<12}",
            format!("{:.1}s", elapsed),
            stats.nodes_explored,
            node.depth,
            best,
            node.colors_used,
            stats.backtracks,
            pruned
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl TreeSearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, graph: &Graph, _statistics: &ColoringSearchStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_num_colors = None;
        println!(
            "Exact coloring: {} vertices, {} adjacency entries",
            graph.num_vertices(),
            graph.num_adjacency_entries()
        );
        self.print_header();
    }

    fn on_exit_search(&mut self, statistics: &ColoringSearchStatistics) {
        println!("{}", "-".repeat(95));
        println!(
            "Search finished after {} nodes, best coloring uses {} colors.",
            statistics.nodes_explored,
            self.best_num_colors
                .map_or_else(|| "-".to_string(), |c| c.to_string())
        );
    }

    fn on_descend(
        &mut self,
        node: SearchNode,
        _vertex: VertexIndex,
        _color: usize,
        statistics: &ColoringSearchStatistics,
    ) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(node, statistics);
        }
    }

    fn on_backtrack(&mut self, _node: SearchNode, _statistics: &ColoringSearchStatistics) {}

    fn on_prune(
        &mut self,
        _node: SearchNode,
        _reason: PruneReason,
        _statistics: &ColoringSearchStatistics,
    ) {
    }

    fn on_solution_found(&mut self, coloring: &Coloring, _statistics: &ColoringSearchStatistics) {
        self.best_num_colors = Some(coloring.num_colors());
    }
}
