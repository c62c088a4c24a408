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
    monitor::local_search_monitor::LocalSearchMonitor, stats::TwoOptStatistics,
    two_opt::TwoOptMove,
};
use heurist_core::num::Coordinate;
use heurist_model::tour::Tour;
use heurist_search::command::SearchCommand;

/// Stops a 2-opt run once it has started `max_passes` neighborhood scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassLimitMonitor {
    max_passes: u64,
}

impl PassLimitMonitor {
    #[inline]
    pub fn new(max_passes: u64) -> Self {
        Self { max_passes }
    }

    #[inline]
    pub fn max_passes(&self) -> u64 {
        self.max_passes
    }
}

impl<T> LocalSearchMonitor<T> for PassLimitMonitor
where
    T: Coordinate,
{
    fn name(&self) -> &str {
        "PassLimitMonitor"
    }

    fn on_start(&mut self, _initial_tour: &Tour<T>) {}

    fn on_end(&mut self, _best_tour: &Tour<T>, _statistics: &TwoOptStatistics) {}

    fn on_pass(&mut self, _current_cost: T, _statistics: &TwoOptStatistics) {}

    fn on_candidate(&mut self, _mv: TwoOptMove, _cost: T, _statistics: &TwoOptStatistics) {}

    fn on_improvement(&mut self, _mv: TwoOptMove, _cost: T, _statistics: &TwoOptStatistics) {}

    fn search_command(&mut self, statistics: &TwoOptStatistics) -> SearchCommand {
        if statistics.passes >= self.max_passes {
            return SearchCommand::Terminate(format!(
                "Pass limit of {} reached",
                self.max_passes
            ));
        }
        SearchCommand::Continue
    }
}
