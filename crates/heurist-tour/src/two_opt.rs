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

//! 2-opt local search
//!
//! A 2-opt move `(i, j)` reverses the stops in the half-open range `[i, j)`
//! of the closed tour. For a closed tour of length `L` the engine scans
//! `i` in `1..=L-3` and `j` in `i+1..=L-2`, so the fixed start and end stops
//! never move. The policy is first improvement then restart: the first
//! candidate that is strictly cheaper replaces the current tour and the scan
//! starts again from `i = 1`. The run ends when a complete scan finds no
//! improving move.
//!
//! Each candidate is priced by recomputing the full tour cost rather than the
//! four-edge delta. The summation order is then identical for every candidate,
//! which keeps the accepted moves, and therefore the output, reproducible.
//!
//! Closed tours with fewer than 4 stops are returned unchanged.

use crate::{
    monitor::{local_search_monitor::LocalSearchMonitor, no_op::NoOperationMonitor},
    result::TwoOptOutcome,
    stats::TwoOptStatistics,
};
use heurist_core::num::Coordinate;
use heurist_model::{
    city::Cities,
    index::CityIndex,
    tour::{Tour, tour_cost},
};
use heurist_search::command::SearchCommand;
use std::time::Instant;

/// Improves `tour` with 2-opt moves until no strictly improving move remains.
///
/// The returned tour is never more expensive than `tour`, and applying the
/// function to its own output returns that output unchanged.
pub fn two_opt_improve<T>(cities: &Cities<T>, tour: &Tour<T>) -> Tour<T>
where
    T: Coordinate,
{
    TwoOptEngine::new()
        .run(cities, tour, &mut NoOperationMonitor::new())
        .into_tour()
}

/// A 2-opt move: reverse the stops at positions `i..j` of a closed tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwoOptMove {
    pub i: usize,
    pub j: usize,
}

impl TwoOptMove {
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert!(
            i < j,
            "called `TwoOptMove::new` with an empty range: i is {} but j is {}",
            i,
            j
        );

        Self { i, j }
    }

    /// Applies the move to `stops` in place.
    #[inline]
    pub fn apply(&self, stops: &mut [CityIndex]) {
        debug_assert!(
            self.j <= stops.len(),
            "called `TwoOptMove::apply` with range out of bounds: the len is {} but j is {}",
            stops.len(),
            self.j
        );

        stops[self.i..self.j].reverse();
    }
}

impl std::fmt::Display for TwoOptMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "2-opt({}, {})", self.i, self.j)
    }
}

/// A reusable 2-opt engine.
///
/// Keeps two stop buffers, the current tour and the candidate under
/// evaluation, which swap roles on every accepted move.
#[derive(Debug, Clone, Default)]
pub struct TwoOptEngine {
    current: Vec<CityIndex>,
    candidate: Vec<CityIndex>,
}

impl TwoOptEngine {
    /// Creates a new engine with minimal initial capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            candidate: Vec::new(),
        }
    }

    /// Creates a new engine with buffers sized for `num_cities` cities.
    #[inline]
    pub fn preallocated(num_cities: usize) -> Self {
        Self {
            current: Vec::with_capacity(num_cities + 1),
            candidate: Vec::with_capacity(num_cities + 1),
        }
    }

    /// Runs 2-opt from `initial`, reporting to `monitor`.
    ///
    /// `initial` must be a closed tour over `cities`. The cost stored in it
    /// is recomputed so that every comparison uses the same summation order.
    pub fn run<T, M>(
        &mut self,
        cities: &Cities<T>,
        initial: &Tour<T>,
        monitor: &mut M,
    ) -> TwoOptOutcome<T>
    where
        T: Coordinate,
        M: LocalSearchMonitor<T>,
    {
        debug_assert!(
            initial.is_closed(),
            "called `TwoOptEngine::run` with an open tour of {} stops",
            initial.stops().len()
        );

        let start_time = Instant::now();
        let mut stats = TwoOptStatistics::default();

        self.current.clear();
        self.current.extend_from_slice(initial.stops());
        let mut current_cost = tour_cost(cities, &self.current);

        monitor.on_start(initial);

        let len = self.current.len();
        let termination = if len < 4 {
            None
        } else {
            loop {
                if let SearchCommand::Terminate(reason) = monitor.search_command(&stats) {
                    break Some(reason);
                }

                stats.on_pass();
                monitor.on_pass(current_cost, &stats);

                match self.scan(cities, current_cost, &mut stats, monitor) {
                    Some(cost) => current_cost = cost,
                    None => break None,
                }
            }
        };

        stats.set_total_time(start_time.elapsed());
        let best = Tour::with_cost(self.current.clone(), current_cost);
        monitor.on_end(&best, &stats);

        match termination {
            None => TwoOptOutcome::local_optimum(best, stats),
            Some(reason) => TwoOptOutcome::aborted(best, reason, stats),
        }
    }

    /// Scans the neighborhood of the current tour and applies the first
    /// strictly improving move. Returns the new cost, or `None` if the
    /// current tour is a local optimum.
    fn scan<T, M>(
        &mut self,
        cities: &Cities<T>,
        current_cost: T,
        stats: &mut TwoOptStatistics,
        monitor: &mut M,
    ) -> Option<T>
    where
        T: Coordinate,
        M: LocalSearchMonitor<T>,
    {
        let len = self.current.len();

        for i in 1..=len - 3 {
            for j in (i + 1)..=len - 2 {
                let mv = TwoOptMove::new(i, j);

                self.candidate.clear();
                self.candidate.extend_from_slice(&self.current);
                mv.apply(&mut self.candidate);

                let cost = tour_cost(cities, &self.candidate);
                stats.on_candidate();
                monitor.on_candidate(mv, cost, stats);

                if cost < current_cost {
                    std::mem::swap(&mut self.current, &mut self.candidate);
                    stats.on_improvement();
                    monitor.on_improvement(mv, cost, stats);
                    return Some(cost);
                }
            }
        }

        None
    }
}
