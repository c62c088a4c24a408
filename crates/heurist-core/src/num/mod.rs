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

//! # Coordinate Numeric Trait
//!
//! City positions, edge lengths and tour costs are real numbers. Rather than
//! hard-wiring `f64`, the tour crates are generic over `T: Coordinate`, a
//! trait alias that collects the `num_traits` capabilities they rely on:
//!
//! - `Float` for `sqrt`/`hypot`, infinities and comparisons.
//! - `FromPrimitive`/`ToPrimitive` to convert costs for ratio reporting.
//! - `Debug + Display` for reports and assertions.
//! - `Send + Sync` so independent instances can be processed on separate
//!   threads by a caller.
//!
//! Both `f32` and `f64` satisfy the alias.

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// A trait alias for the real-valued scalar used for coordinates and costs.
pub trait Coordinate:
    Float + FromPrimitive + ToPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> Coordinate for T where
    T: Float + FromPrimitive + ToPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
