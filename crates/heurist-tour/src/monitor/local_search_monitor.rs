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

//! Monitoring interface for 2-opt runs.
//!
//! Callbacks cover the lifecycle of the engine: start and end, the beginning
//! of every neighborhood scan, every evaluated candidate and every accepted
//! improvement. Monitors may stop the run by returning
//! `SearchCommand::Terminate` from `search_command`, which the engine consults
//! before each scan. The default continues, so most monitors only observe.

use crate::{stats::TwoOptStatistics, two_opt::TwoOptMove};
use heurist_core::num::Coordinate;
use heurist_model::tour::Tour;
use heurist_search::command::SearchCommand;

/// A monitor for 2-opt local search.
pub trait LocalSearchMonitor<T>
where
    T: Coordinate,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called at the start of the local search.
    fn on_start(&mut self, initial_tour: &Tour<T>);

    /// Called at the end of the local search.
    fn on_end(&mut self, best_tour: &Tour<T>, statistics: &TwoOptStatistics);

    /// Called at the beginning of each neighborhood scan.
    fn on_pass(&mut self, current_cost: T, statistics: &TwoOptStatistics);

    /// Called after the cost of a candidate tour was computed.
    fn on_candidate(&mut self, mv: TwoOptMove, cost: T, statistics: &TwoOptStatistics);

    /// Called when a candidate replaced the current tour.
    fn on_improvement(&mut self, mv: TwoOptMove, cost: T, statistics: &TwoOptStatistics);

    /// Determines the command for the next scan of the local search.
    fn search_command(&mut self, _statistics: &TwoOptStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<T> std::fmt::Debug for dyn LocalSearchMonitor<T> + '_
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalSearchMonitor {{ name: {} }}", self.name())
    }
}

impl<T> std::fmt::Display for dyn LocalSearchMonitor<T> + '_
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalSearchMonitor: {}", self.name())
    }
}
