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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait and `PruneReason` for observing and
//! controlling the exact coloring search. A monitor can stop the search by
//! returning `SearchCommand::Terminate` from `search_command`, which is
//! consulted once per visited node.
//!
//! Lifecycle
//! - enter -> {command -> descend -> ... -> backtrack | prune} -> solution -> exit
//! - `ColoringSearchStatistics` is provided to every callback.

use crate::stats::ColoringSearchStatistics;
use heurist_model::{coloring::Coloring, graph::Graph, index::VertexIndex};
use heurist_search::command::SearchCommand;

/// Reasons for pruning a branch of the coloring search.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The color is already held by a neighbor of the vertex.
    ColorConflict,
    /// The branch cannot use fewer colors than the best coloring found so far.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::ColorConflict => write!(f, "ColorConflict"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// A snapshot of the current search node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchNode {
    /// Number of vertices colored on the current path.
    pub depth: usize,
    /// Number of distinct colors introduced on the current path.
    pub colors_used: usize,
}

impl std::fmt::Display for SearchNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchNode(depth: {}, colors_used: {})",
            self.depth, self.colors_used
        )
    }
}

/// Trait for monitoring and controlling the exact coloring search.
pub trait TreeSearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, graph: &Graph, statistics: &ColoringSearchStatistics);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &ColoringSearchStatistics);
    /// Called to determine the next action of the search.
    fn search_command(
        &mut self,
        _node: SearchNode,
        _statistics: &ColoringSearchStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called after `vertex` was assigned `color`. `node` is the child node.
    fn on_descend(
        &mut self,
        node: SearchNode,
        vertex: VertexIndex,
        color: usize,
        statistics: &ColoringSearchStatistics,
    );
    /// Called after the assignment leading to `node` was undone.
    fn on_backtrack(&mut self, node: SearchNode, statistics: &ColoringSearchStatistics);
    /// Called when a branch is discarded.
    fn on_prune(
        &mut self,
        node: SearchNode,
        reason: PruneReason,
        statistics: &ColoringSearchStatistics,
    );
    /// Called when a complete coloring with fewer colors than any before is found.
    fn on_solution_found(&mut self, coloring: &Coloring, statistics: &ColoringSearchStatistics);
}

impl std::fmt::Debug for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}
