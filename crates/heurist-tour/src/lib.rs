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

//! Heurist-Tour: closed tours over Euclidean cities
//!
//! All algorithms take a validated `heurist_model::city::Cities<T>` and fix the
//! first declared city as the start and end of every tour.
//!
//! Core flow
//! - Build an initial tour with `nearest_neighbor::nearest_neighbor_tour`.
//! - Improve it with `two_opt::two_opt_improve`, or drive a
//!   `two_opt::TwoOptEngine` directly to attach `LocalSearchMonitor`s.
//! - For small instances, compute the optimum with `exact::exact_tour`
//!   behind a `heurist_search::guard::SizeLimit`.
//!
//! Module map
//! - `nearest_neighbor`: greedy construction.
//! - `two_opt`: first-improvement 2-opt with full cost recomputation.
//! - `exact`: lexicographic enumeration of every tour.
//! - `monitor`: local search monitors (log, time limit, pass limit, composite, no-op).
//! - `result`: 2-opt outcomes with termination reasons.
//! - `stats`: lightweight counters and timing.

pub mod exact;
pub mod monitor;
pub mod nearest_neighbor;
pub mod result;
pub mod stats;
pub mod two_opt;
