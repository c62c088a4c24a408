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

//! Heurist-Coloring: vertex coloring heuristics and an exact baseline
//!
//! Every algorithm consumes a validated `heurist_model::graph::Graph` and
//! returns a proper `Coloring`. All of them visit vertices in the graph's
//! declared order, which makes every tie-break reproducible.
//!
//! Core flow
//! - Build a `Graph` through `AdjacencyList::validate` or the instance loader.
//! - Call `greedy::greedy_color` or `dsatur::dsatur_color` for a fast upper bound.
//! - Gate `bnb::exact_color` behind a `heurist_search::guard::SizeLimit`; the
//!   exact search is exponential and has no size check of its own.
//!
//! Module map
//! - `greedy`: sequential first-fit coloring.
//! - `dsatur`: saturation-degree ordering with full saturation recounts.
//! - `bnb`: backtracking branch-and-bound with reuse-then-expand branching.
//! - `monitor`: tree-search monitors (log, time limit, composite, no-op).
//! - `result`: exact search outcomes with termination reasons.
//! - `stats`: lightweight counters and timing.

pub mod bnb;
pub mod dsatur;
pub mod greedy;
pub mod monitor;
mod palette;
pub mod result;
pub mod stats;
