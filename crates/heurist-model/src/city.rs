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

//! Cities for the metric traveling salesman problem.
//!
//! A `City<T>` is an immutable point in the plane. `Cities<T>` is the validated,
//! ordered sequence handed to the tour engines; the first declared city is the
//! fixed start of every tour, and the declared order is the scan order used for
//! nearest-neighbor tie-breaking.

use crate::{error::ValidationError, index::CityIndex};
use heurist_core::num::Coordinate;

/// An immutable 2-D coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City<T> {
    x: T,
    y: T,
}

impl<T> City<T>
where
    T: Coordinate,
{
    /// Creates a city at `(x, y)`.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns the Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &City<T>) -> T {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl<T> From<(T, T)> for City<T>
where
    T: Coordinate,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> std::fmt::Display for City<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A validated, ordered sequence of at least two cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Cities<T> {
    cities: Vec<City<T>>,
}

impl<T> Cities<T>
where
    T: Coordinate,
{
    /// Validates and wraps the given cities.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooFewCities` if fewer than two cities are given.
    pub fn new(cities: Vec<City<T>>) -> Result<Self, ValidationError> {
        if cities.len() < 2 {
            return Err(ValidationError::TooFewCities {
                found: cities.len(),
            });
        }
        Ok(Self { cities })
    }

    /// Validates cities given as `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooFewCities` if fewer than two pairs are given.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self::new(pairs.into_iter().map(City::from).collect())
    }

    /// Returns the number of cities. Always at least two.
    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns the city at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn city(&self, index: CityIndex) -> &City<T> {
        debug_assert!(
            index.get() < self.len(),
            "called `Cities::city` with city index out of bounds: the len is {} but the index is {}",
            self.len(),
            index.get()
        );

        &self.cities[index.get()]
    }

    /// Returns the Euclidean distance between two cities.
    #[inline]
    pub fn distance(&self, a: CityIndex, b: CityIndex) -> T {
        self.city(a).distance(self.city(b))
    }

    /// Returns the fixed start city of every tour.
    #[inline]
    pub fn start(&self) -> CityIndex {
        CityIndex::new(0)
    }

    /// Iterates over city indices in declared order.
    #[inline]
    pub fn indices(&self) -> impl ExactSizeIterator<Item = CityIndex> + use<T> {
        (0..self.cities.len()).map(CityIndex::new)
    }

    /// Returns the cities as a slice in declared order.
    #[inline]
    pub fn as_slice(&self) -> &[City<T>] {
        &self.cities
    }
}
