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
use std::time::{Duration, Instant};

/// Prints a fixed-width progress table of a 2-opt run to stdout.
///
/// A line is printed at the start of a scan at most once per `log_interval`,
/// and the clock is only read when `passes & clock_check_mask == 0`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_cost: Option<f64>,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_cost: None,
        }
    }

    /// Lowest tour cost seen in the current run.
    #[inline]
    pub fn best_cost(&self) -> Option<f64> {
        self.best_cost
    }

    fn record_cost<T>(&mut self, cost: T)
    where
        T: Coordinate,
    {
        if let Some(cost) = cost.to_f64() {
            self.best_cost = Some(match self.best_cost {
                Some(best) => best.min(cost),
                None => cost,
            });
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<10} | {:<14} | {:<12} | {:<14} | {:<14}",
            "Elapsed", "Passes", "Candidates", "Improvements", "Current Cost", "Best Cost"
        );
        println!("{}", "-".repeat(88));
    }

    #[inline(always)]
    fn log_line<T>(&mut self, current_cost: T, stats: &TwoOptStatistics)
    where
        T: Coordinate,
    {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best = match self.best_cost {
            Some(cost) => format!("{:.4}", cost),
            None => "Inf".to_string(),
        };

        println!(
            "{:<9} | {:<10} | {:<14} | {:<12} | {:<14.4} | {:<14}",
            format!("{:.1}s", elapsed),
            stats.passes,
            stats.candidates_evaluated,
            stats.improvements,
            current_cost,
            best
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 63)
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

impl<T> LocalSearchMonitor<T> for LogMonitor
where
    T: Coordinate,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, initial_tour: &Tour<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_cost = None;
        self.record_cost(initial_tour.cost());
        println!(
            "2-opt: {} cities, initial cost {:.4}",
            initial_tour.num_cities(),
            initial_tour.cost()
        );
        self.print_header();
    }

    fn on_end(&mut self, best_tour: &Tour<T>, statistics: &TwoOptStatistics) {
        println!("{}", "-".repeat(88));
        println!(
            "Search finished after {} passes, final cost {:.4}.",
            statistics.passes,
            best_tour.cost()
        );
    }

    fn on_pass(&mut self, current_cost: T, statistics: &TwoOptStatistics) {
        if (statistics.passes & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(current_cost, statistics);
        }
    }

    fn on_candidate(&mut self, _mv: TwoOptMove, _cost: T, _statistics: &TwoOptStatistics) {}

    fn on_improvement(&mut self, _mv: TwoOptMove, cost: T, _statistics: &TwoOptStatistics) {
        self.record_cost(cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heurist_model::index::CityIndex;

    fn square_tour(cost: f64) -> Tour<f64> {
        let stops = [0, 1, 2, 3, 0].into_iter().map(CityIndex::new).collect();
        Tour::with_cost(stops, cost)
    }

    #[test]
    fn test_tracks_best_cost() {
        let stats = TwoOptStatistics::default();
        let mut monitor = LogMonitor::default();
        assert_eq!(monitor.best_cost(), None);

        LocalSearchMonitor::<f64>::on_start(&mut monitor, &square_tour(10.0));
        assert_eq!(monitor.best_cost(), Some(10.0));

        monitor.on_improvement(TwoOptMove::new(1, 3), 7.5, &stats);
        assert_eq!(monitor.best_cost(), Some(7.5));

        monitor.on_improvement(TwoOptMove::new(1, 2), 8.0, &stats);
        assert_eq!(monitor.best_cost(), Some(7.5));
    }

    #[test]
    fn test_restart_resets_best_cost() {
        let stats = TwoOptStatistics::default();
        let mut monitor = LogMonitor::default();
        LocalSearchMonitor::<f64>::on_start(&mut monitor, &square_tour(4.0));
        monitor.on_improvement(TwoOptMove::new(1, 3), 3.0, &stats);

        LocalSearchMonitor::<f64>::on_start(&mut monitor, &square_tour(12.0));
        assert_eq!(monitor.best_cost(), Some(12.0));
    }

    #[test]
    fn test_display() {
        let monitor = LogMonitor::new(Duration::from_secs(2), 255);
        assert_eq!(
            monitor.to_string(),
            "LogMonitor(log_interval: 2s, clock_check_mask: 255)"
        );
    }
}
