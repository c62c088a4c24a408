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

//! Nearest neighbor tour construction.
//!
//! Starting at the first declared city, the tour repeatedly moves to the
//! closest unvisited city. Candidates are scanned in declared order and only a
//! strictly shorter distance replaces the current choice, so ties go to the
//! city declared first. The tour is closed by returning to the start.

use fixedbitset::FixedBitSet;
use heurist_core::num::Coordinate;
use heurist_model::{city::Cities, index::CityIndex, tour::Tour};

/// Builds a closed tour with the nearest neighbor rule. Runs in `O(n^2)` time.
pub fn nearest_neighbor_tour<T>(cities: &Cities<T>) -> Tour<T>
where
    T: Coordinate,
{
    let n = cities.len();
    let start = cities.start();

    let mut visited = FixedBitSet::with_capacity(n);
    visited.insert(start.get());

    let mut stops = Vec::with_capacity(n + 1);
    stops.push(start);

    let mut current = start;
    while let Some(next) = closest_unvisited(cities, &visited, current) {
        visited.insert(next.get());
        stops.push(next);
        current = next;
    }

    stops.push(start);
    Tour::from_stops(cities, stops)
}

#[inline]
fn closest_unvisited<T>(
    cities: &Cities<T>,
    visited: &FixedBitSet,
    from: CityIndex,
) -> Option<CityIndex>
where
    T: Coordinate,
{
    let mut best: Option<(CityIndex, T)> = None;

    for candidate in visited.zeroes().map(CityIndex::new) {
        let distance = cities.distance(from, candidate);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(city, _)| city)
}
