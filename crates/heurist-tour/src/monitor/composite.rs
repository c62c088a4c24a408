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

//! Fan-out monitor for 2-opt runs.
//!
//! `CompositeLocalSearchMonitor` forwards every event to its children in
//! insertion order. `search_command` returns the first non-`Continue` answer.

use crate::{
    monitor::local_search_monitor::LocalSearchMonitor, stats::TwoOptStatistics,
    two_opt::TwoOptMove,
};
use heurist_core::num::Coordinate;
use heurist_model::tour::Tour;
use heurist_search::command::SearchCommand;

/// A local search monitor that aggregates multiple monitors.
pub struct CompositeLocalSearchMonitor<'a, T>
where
    T: Coordinate,
{
    monitors: Vec<Box<dyn LocalSearchMonitor<T> + 'a>>,
}

impl<T> Default for CompositeLocalSearchMonitor<'_, T>
where
    T: Coordinate,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeLocalSearchMonitor<'a, T>
where
    T: Coordinate,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: LocalSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn LocalSearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn LocalSearchMonitor<T> + 'a>> for CompositeLocalSearchMonitor<'a, T>
where
    T: Coordinate,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn LocalSearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<T> std::fmt::Debug for CompositeLocalSearchMonitor<'_, T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeLocalSearchMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

impl<T> LocalSearchMonitor<T> for CompositeLocalSearchMonitor<'_, T>
where
    T: Coordinate,
{
    fn name(&self) -> &str {
        "CompositeLocalSearchMonitor"
    }

    fn on_start(&mut self, initial_tour: &Tour<T>) {
        for monitor in &mut self.monitors {
            monitor.on_start(initial_tour);
        }
    }

    fn on_end(&mut self, best_tour: &Tour<T>, statistics: &TwoOptStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_end(best_tour, statistics);
        }
    }

    fn on_pass(&mut self, current_cost: T, statistics: &TwoOptStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_pass(current_cost, statistics);
        }
    }

    fn on_candidate(&mut self, mv: TwoOptMove, cost: T, statistics: &TwoOptStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_candidate(mv, cost, statistics);
        }
    }

    fn on_improvement(&mut self, mv: TwoOptMove, cost: T, statistics: &TwoOptStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_improvement(mv, cost, statistics);
        }
    }

    fn search_command(&mut self, statistics: &TwoOptStatistics) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(statistics);
            if cmd.is_terminate() {
                return cmd;
            }
        }
        SearchCommand::Continue
    }
}
