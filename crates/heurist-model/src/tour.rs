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

//! Closed tours and their cost.
//!
//! A `Tour<T>` is the closed cycle `start, c1, c2, ..., start` over the indices
//! of a `Cities<T>` instance, together with its total Euclidean length. Every
//! city appears exactly once among the interior stops, so a tour over `n`
//! cities has `n + 1` stops.

use crate::{
    city::{Cities, City},
    index::CityIndex,
};
use heurist_core::num::Coordinate;

/// Returns the sum of Euclidean distances between consecutive stops.
///
/// The sum is accumulated left to right. Fewer than two stops cost zero.
pub fn tour_cost<T>(cities: &Cities<T>, stops: &[CityIndex]) -> T
where
    T: Coordinate,
{
    stops
        .windows(2)
        .fold(T::zero(), |acc, leg| acc + cities.distance(leg[0], leg[1]))
}

/// A closed tour and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour<T> {
    stops: Vec<CityIndex>,
    cost: T,
}

impl<T> Tour<T>
where
    T: Coordinate,
{
    /// Creates a tour from closed stops and computes its cost.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the stops do not start and end at the same city.
    pub fn from_stops(cities: &Cities<T>, stops: Vec<CityIndex>) -> Self {
        debug_assert!(
            stops.first() == stops.last(),
            "called `Tour::from_stops` with an open sequence: first is {:?} but last is {:?}",
            stops.first(),
            stops.last()
        );

        let cost = tour_cost(cities, &stops);
        Self { stops, cost }
    }

    /// Creates a tour from closed stops whose cost is already known.
    #[inline]
    pub fn with_cost(stops: Vec<CityIndex>, cost: T) -> Self {
        Self { stops, cost }
    }

    /// Returns the closed sequence of stops.
    #[inline]
    pub fn stops(&self) -> &[CityIndex] {
        &self.stops
    }

    /// Consumes the tour and returns its stops.
    #[inline]
    pub fn into_stops(self) -> Vec<CityIndex> {
        self.stops
    }

    /// Returns the total length of the tour.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Returns the number of distinct cities visited.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Returns `true` if the first and last stop coincide.
    #[inline]
    pub fn is_closed(&self) -> bool {
        !self.stops.is_empty() && self.stops.first() == self.stops.last()
    }

    /// Returns `true` if the tour is closed and its interior visits each of
    /// the `num_cities` cities exactly once.
    pub fn visits_each_city_once(&self, num_cities: usize) -> bool {
        if !self.is_closed() || self.stops.len() != num_cities + 1 {
            return false;
        }

        let mut seen = vec![false; num_cities];
        for stop in &self.stops[..num_cities] {
            let i = stop.get();
            if i >= num_cities || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Resolves the stops to their coordinates.
    pub fn coordinates<'a>(
        &'a self,
        cities: &'a Cities<T>,
    ) -> impl Iterator<Item = City<T>> + 'a {
        self.stops.iter().map(move |&c| *cities.city(c))
    }
}

impl<T> std::fmt::Display for Tour<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tour(cost: {:.4}): ", self.cost)?;
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", stop.get())?;
        }
        Ok(())
    }
}
