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

//! Exhaustive tour search
//!
//! The start city is fixed and every ordering of the remaining cities is
//! enumerated in lexicographic order of their declared positions. Only a
//! strictly cheaper tour replaces the incumbent, so among optimal tours the
//! first one enumerated is returned. The search visits `(n - 1)!` tours and
//! must be gated by the caller.

use crate::stats::ExhaustiveTourStatistics;
use heurist_core::num::Coordinate;
use heurist_model::{
    city::Cities,
    index::CityIndex,
    tour::{Tour, tour_cost},
};
use std::time::Instant;

/// Returns a minimum cost tour together with its cost.
pub fn exact_tour<T>(cities: &Cities<T>) -> (Tour<T>, T)
where
    T: Coordinate,
{
    let outcome = ExhaustiveTourSolver::new().solve(cities);
    let cost = outcome.tour.cost();
    (outcome.tour, cost)
}

/// The optimal tour and the statistics of the search that proved it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhaustiveTourOutcome<T> {
    tour: Tour<T>,
    statistics: ExhaustiveTourStatistics,
}

impl<T> ExhaustiveTourOutcome<T>
where
    T: Coordinate,
{
    /// Returns the optimal tour.
    #[inline]
    pub fn tour(&self) -> &Tour<T> {
        &self.tour
    }

    /// Consumes the outcome and returns the optimal tour.
    #[inline]
    pub fn into_tour(self) -> Tour<T> {
        self.tour
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &ExhaustiveTourStatistics {
        &self.statistics
    }
}

/// A reusable exhaustive tour solver.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveTourSolver {
    permutation: Vec<CityIndex>,
    stops: Vec<CityIndex>,
}

impl ExhaustiveTourSolver {
    #[inline]
    pub fn new() -> Self {
        Self {
            permutation: Vec::new(),
            stops: Vec::new(),
        }
    }

    /// Enumerates every tour over `cities` and returns the cheapest.
    pub fn solve<T>(&mut self, cities: &Cities<T>) -> ExhaustiveTourOutcome<T>
    where
        T: Coordinate,
    {
        let start_time = Instant::now();
        let mut stats = ExhaustiveTourStatistics::default();
        let start = cities.start();

        self.permutation.clear();
        self.permutation.extend(cities.indices().skip(1));

        let mut best: Option<(Vec<CityIndex>, T)> = None;
        loop {
            self.stops.clear();
            self.stops.push(start);
            self.stops.extend_from_slice(&self.permutation);
            self.stops.push(start);

            let cost = tour_cost(cities, &self.stops);
            stats.on_permutation();

            let improves = match &best {
                Some((_, best_cost)) => cost < *best_cost,
                None => true,
            };
            if improves {
                stats.on_improvement();
                best = Some((self.stops.clone(), cost));
            }

            if !next_permutation(&mut self.permutation) {
                break;
            }
        }

        stats.set_total_time(start_time.elapsed());

        // The loop body runs at least once, so `best` is always set.
        let tour = match best {
            Some((stops, cost)) => Tour::with_cost(stops, cost),
            None => Tour::with_cost(vec![start, start], T::zero()),
        };

        ExhaustiveTourOutcome {
            tour,
            statistics: stats,
        }
    }
}

/// Rearranges `items` into the next permutation in lexicographic order.
/// Returns `false`, leaving `items` in descending order, if it was the last one.
fn next_permutation<I>(items: &mut [I]) -> bool
where
    I: Ord,
{
    if items.len() < 2 {
        return false;
    }

    let Some(pivot) = (0..items.len() - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        return false;
    };

    // A larger element exists to the right of the pivot by construction.
    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
