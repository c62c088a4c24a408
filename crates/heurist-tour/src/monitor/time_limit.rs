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
use std::time::{Duration, Instant};

/// A monitor that terminates a 2-opt run after a specified duration.
///
/// The clock is read once per neighborhood scan.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor {
    time_limit: Duration,
    start_time: Option<Instant>,
}

impl TimeLimitMonitor {
    pub fn new(time_limit: Duration) -> Self {
        Self {
            time_limit,
            start_time: None,
        }
    }

    /// Returns the configured time limit.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl<T> LocalSearchMonitor<T> for TimeLimitMonitor
where
    T: Coordinate,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_start(&mut self, _initial_tour: &Tour<T>) {
        self.start_time = Some(Instant::now());
    }

    fn on_end(&mut self, _best_tour: &Tour<T>, _statistics: &TwoOptStatistics) {
        self.start_time = None;
    }

    fn on_pass(&mut self, _current_cost: T, _statistics: &TwoOptStatistics) {}

    fn on_candidate(&mut self, _mv: TwoOptMove, _cost: T, _statistics: &TwoOptStatistics) {}

    fn on_improvement(&mut self, _mv: TwoOptMove, _cost: T, _statistics: &TwoOptStatistics) {}

    fn search_command(&mut self, _statistics: &TwoOptStatistics) -> SearchCommand {
        if let Some(start) = self.start_time
            && start.elapsed() > self.time_limit
        {
            return SearchCommand::Terminate(format!(
                "Time limit of {:.3} seconds exceeded",
                self.time_limit.as_secs_f64()
            ));
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heurist_model::index::CityIndex;

    fn triangle_tour() -> Tour<f64> {
        let stops = [0, 1, 2, 0].into_iter().map(CityIndex::new).collect();
        Tour::with_cost(stops, 3.0)
    }

    #[test]
    fn test_zero_limit_terminates_after_start() {
        let stats = TwoOptStatistics::default();
        let mut monitor = TimeLimitMonitor::new(Duration::ZERO);
        monitor.on_start(&triangle_tour());
        std::thread::sleep(Duration::from_millis(2));

        let command = LocalSearchMonitor::<f64>::search_command(&mut monitor, &stats);
        assert_eq!(
            command,
            SearchCommand::Terminate("Time limit of 0.000 seconds exceeded".to_string())
        );
    }

    #[test]
    fn test_generous_limit_continues() {
        let stats = TwoOptStatistics::default();
        let mut monitor = TimeLimitMonitor::new(Duration::from_secs(3600));
        monitor.on_start(&triangle_tour());
        for _ in 0..10 {
            assert_eq!(
                LocalSearchMonitor::<f64>::search_command(&mut monitor, &stats),
                SearchCommand::Continue
            );
        }
    }

    #[test]
    fn test_no_termination_outside_of_search() {
        let stats = TwoOptStatistics::default();
        let mut monitor = TimeLimitMonitor::new(Duration::ZERO);
        assert!(!LocalSearchMonitor::<f64>::search_command(&mut monitor, &stats).is_terminate());

        monitor.on_start(&triangle_tour());
        monitor.on_end(&triangle_tour(), &stats);
        std::thread::sleep(Duration::from_millis(2));
        assert!(!LocalSearchMonitor::<f64>::search_command(&mut monitor, &stats).is_terminate());
    }

    #[test]
    fn test_stops_two_opt_before_first_pass() {
        use crate::two_opt::TwoOptEngine;
        use heurist_model::city::Cities;

        let cities =
            Cities::from_pairs([(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        let stops = [0, 1, 2, 3, 0].into_iter().map(CityIndex::new).collect();
        let crossed = Tour::from_stops(&cities, stops);

        let mut monitor = TimeLimitMonitor::new(Duration::ZERO);
        let outcome = {
            let mut engine = TwoOptEngine::new();
            let mut slow = SleepThenDelegate { inner: &mut monitor };
            engine.run(&cities, &crossed, &mut slow)
        };

        assert!(!outcome.is_local_optimum());
        assert!(outcome.termination_reason().is_aborted());
        assert_eq!(outcome.statistics().passes, 0);
        assert_eq!(outcome.tour().stops(), crossed.stops());
    }

    /// Sleeps on start so that a zero limit has certainly expired.
    struct SleepThenDelegate<'a> {
        inner: &'a mut TimeLimitMonitor,
    }

    impl LocalSearchMonitor<f64> for SleepThenDelegate<'_> {
        fn name(&self) -> &str {
            "SleepThenDelegate"
        }
        fn on_start(&mut self, initial_tour: &Tour<f64>) {
            self.inner.on_start(initial_tour);
            std::thread::sleep(Duration::from_millis(2));
        }
        fn on_end(&mut self, best_tour: &Tour<f64>, statistics: &TwoOptStatistics) {
            self.inner.on_end(best_tour, statistics);
        }
        fn on_pass(&mut self, _current_cost: f64, _statistics: &TwoOptStatistics) {}
        fn on_candidate(&mut self, _mv: TwoOptMove, _cost: f64, _statistics: &TwoOptStatistics) {}
        fn on_improvement(&mut self, _mv: TwoOptMove, _cost: f64, _statistics: &TwoOptStatistics) {}
        fn search_command(&mut self, statistics: &TwoOptStatistics) -> SearchCommand {
            <TimeLimitMonitor as LocalSearchMonitor<f64>>::search_command(&mut *self.inner, statistics)
        }
    }
}
