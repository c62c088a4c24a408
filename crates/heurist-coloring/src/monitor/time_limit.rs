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
use heurist_search::command::SearchCommand;
use std::time::{Duration, Instant};

/// A monitor that terminates the search after a specified duration.
///
/// Checks the clock only every `check_interval` nodes to minimize overhead.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor {
    time_limit: Duration,
    start_time: Option<Instant>,
    check_interval: u64,
    ops_since_last_check: u64,
}

impl TimeLimitMonitor {
    /// Creates a new `TimeLimitMonitor` with the specified duration and check interval.
    /// `check_interval` specifies how many nodes to visit between time checks.
    /// A higher value reduces overhead but may lead to slightly exceeding the time limit.
    pub fn new(duration: Duration, check_interval: u64) -> Self {
        Self {
            time_limit: duration,
            start_time: None,
            check_interval: check_interval.max(1),
            ops_since_last_check: 0,
        }
    }

    /// Returns the configured time limit.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl TreeSearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _graph: &Graph, _statistics: &ColoringSearchStatistics) {
        self.start_time = Some(Instant::now());
        self.ops_since_last_check = 0;
    }

    fn on_exit_search(&mut self, _statistics: &ColoringSearchStatistics) {
        self.start_time = None;
    }

    fn search_command(
        &mut self,
        _node: SearchNode,
        _statistics: &ColoringSearchStatistics,
    ) -> SearchCommand {
        self.ops_since_last_check = self.ops_since_last_check.saturating_add(1);

        if self.ops_since_last_check >= self.check_interval {
            self.ops_since_last_check = 0;

            if let Some(start) = self.start_time
                && start.elapsed() > self.time_limit
            {
                return SearchCommand::Terminate(format!(
                    "Time limit of {:.3} seconds exceeded",
                    self.time_limit.as_secs_f64()
                ));
            }
        }

        SearchCommand::Continue
    }

    fn on_descend(
        &mut self,
        _node: SearchNode,
        _vertex: VertexIndex,
        _color: usize,
        _statistics: &ColoringSearchStatistics,
    ) {
    }

    fn on_backtrack(&mut self, _node: SearchNode, _statistics: &ColoringSearchStatistics) {}

    fn on_prune(
        &mut self,
        _node: SearchNode,
        _reason: PruneReason,
        _statistics: &ColoringSearchStatistics,
    ) {
    }

    fn on_solution_found(
        &mut self,
        _coloring: &Coloring,
        _statistics: &ColoringSearchStatistics,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heurist_model::graph::AdjacencyList;

    fn single_vertex_graph() -> Graph {
        [("A", Vec::<&str>::new())]
            .into_iter()
            .collect::<AdjacencyList>()
            .validate()
            .unwrap()
    }

    #[test]
    fn test_zero_limit_terminates_at_first_check() {
        let stats = ColoringSearchStatistics::default();
        let mut monitor = TimeLimitMonitor::new(Duration::ZERO, 1);
        monitor.on_enter_search(&single_vertex_graph(), &stats);
        std::thread::sleep(Duration::from_millis(2));
        assert!(
            monitor
                .search_command(SearchNode::default(), &stats)
                .is_terminate()
        );
    }

    #[test]
    fn test_generous_limit_continues() {
        let stats = ColoringSearchStatistics::default();
        let mut monitor = TimeLimitMonitor::new(Duration::from_secs(3600), 1);
        monitor.on_enter_search(&single_vertex_graph(), &stats);
        for _ in 0..10 {
            assert_eq!(
                monitor.search_command(SearchNode::default(), &stats),
                SearchCommand::Continue
            );
        }
    }

    #[test]
    fn test_clock_checked_only_every_interval() {
        let stats = ColoringSearchStatistics::default();
        let mut monitor = TimeLimitMonitor::new(Duration::ZERO, 3);
        monitor.on_enter_search(&single_vertex_graph(), &stats);
        std::thread::sleep(Duration::from_millis(2));
        assert!(!monitor.search_command(SearchNode::default(), &stats).is_terminate());
        assert!(!monitor.search_command(SearchNode::default(), &stats).is_terminate());
        assert!(monitor.search_command(SearchNode::default(), &stats).is_terminate());
    }

    #[test]
    fn test_no_termination_outside_of_search() {
        let stats = ColoringSearchStatistics::default();
        let mut monitor = TimeLimitMonitor::new(Duration::ZERO, 1);
        assert!(!monitor.search_command(SearchNode::default(), &stats).is_terminate());
    }
}
