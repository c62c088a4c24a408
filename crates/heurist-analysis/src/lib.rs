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

//! Heurist-Analysis: heuristics against exact baselines
//!
//! Runs every coloring and tour algorithm on an instance, times each call with
//! a monotonic clock, and reports the approximation ratio of each heuristic
//! against the exact value whenever the exact solver was admitted by its
//! `SizeLimit` and ran to completion.
//!
//! Core flow
//! - Configure an `config::AnalysisConfig` (size guards, optional time limit).
//! - Call `runner::Analyzer::analyze` with an `InstanceSet`.
//! - Print the `report::AnalysisReport`, or persist it with `export::write_json`.

pub mod config;
pub mod export;
pub mod ratio;
pub mod record;
pub mod report;
pub mod runner;
