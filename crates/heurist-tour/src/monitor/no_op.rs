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

/// A monitor that ignores every event and never stops the search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl<T> LocalSearchMonitor<T> for NoOperationMonitor
where
    T: Coordinate,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_start(&mut self, _initial_tour: &Tour<T>) {}

    #[inline(always)]
    fn on_end(&mut self, _best_tour: &Tour<T>, _statistics: &TwoOptStatistics) {}

    #[inline(always)]
    fn on_pass(&mut self, _current_cost: T, _statistics: &TwoOptStatistics) {}

    #[inline(always)]
    fn on_candidate(&mut self, _mv: TwoOptMove, _cost: T, _statistics: &TwoOptStatistics) {}

    #[inline(always)]
    fn on_improvement(&mut self, _mv: TwoOptMove, _cost: T, _statistics: &TwoOptStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::two_opt::TwoOptEngine;
    use heurist_model::city::Cities;
    use heurist_model::index::CityIndex;
    use heurist_search::command::SearchCommand;

    #[test]
    fn test_never_terminates() {
        let mut monitor = NoOperationMonitor::new();
        let stats = TwoOptStatistics::default();
        assert_eq!(
            LocalSearchMonitor::<f64>::search_command(&mut monitor, &stats),
            SearchCommand::Continue
        );
        assert_eq!(LocalSearchMonitor::<f64>::name(&monitor), "NoOperationMonitor");
    }

    #[test]
    fn test_engine_reaches_local_optimum() {
        let cities =
            Cities::from_pairs([(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        let stops = [0, 1, 2, 3, 0].into_iter().map(CityIndex::new).collect();
        let crossed = Tour::from_stops(&cities, stops);

        let mut monitor = NoOperationMonitor::new();
        let outcome = TwoOptEngine::new().run(&cities, &crossed, &mut monitor);
        assert!(outcome.is_local_optimum());
        assert!(outcome.tour().cost() < crossed.cost());
    }
}
