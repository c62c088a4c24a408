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

//! Per-algorithm result records.

use serde::Serialize;
use std::time::Duration;

/// The problem family an algorithm solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Coloring,
    Tsp,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Coloring => write!(f, "GCP"),
            Problem::Tsp => write!(f, "TSP"),
        }
    }
}

/// Every algorithm the analyzer can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Greedy,
    Dsatur,
    ExactColoring,
    NearestNeighbor,
    TwoOpt,
    ExactTour,
}

impl Algorithm {
    /// Returns the problem family this algorithm belongs to.
    #[inline]
    pub fn problem(self) -> Problem {
        match self {
            Algorithm::Greedy | Algorithm::Dsatur | Algorithm::ExactColoring => Problem::Coloring,
            Algorithm::NearestNeighbor | Algorithm::TwoOpt | Algorithm::ExactTour => Problem::Tsp,
        }
    }

    /// Returns `true` for the exponential baselines.
    #[inline]
    pub fn is_exact(self) -> bool {
        matches!(self, Algorithm::ExactColoring | Algorithm::ExactTour)
    }

    /// Returns the human-readable name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy",
            Algorithm::Dsatur => "DSATUR",
            Algorithm::ExactColoring => "Exact (Backtracking)",
            Algorithm::NearestNeighbor => "Nearest Neighbor",
            Algorithm::TwoOpt => "2-opt",
            Algorithm::ExactTour => "Exact (Brute Force)",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The objective value of a solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolutionValue {
    /// Number of colors of a coloring.
    Colors(usize),
    /// Total Euclidean length of a closed tour.
    Cost(f64),
}

impl SolutionValue {
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            SolutionValue::Colors(colors) => colors as f64,
            SolutionValue::Cost(cost) => cost,
        }
    }
}

impl std::fmt::Display for SolutionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionValue::Colors(colors) => write!(f, "{}", colors),
            SolutionValue::Cost(cost) => write!(f, "{:.2}", cost),
        }
    }
}

/// The solution itself, detached from the instance it was computed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Solution {
    /// `(label, color)` pairs in declared vertex order.
    Coloring(Vec<(String, usize)>),
    /// Closed sequence of city positions.
    Tour(Vec<usize>),
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solution::Coloring(pairs) => {
                for (i, (label, color)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}={}", label, color)?;
                }
            }
            Solution::Tour(stops) => {
                for (i, stop) in stops.iter().enumerate() {
                    if i > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "{}", stop)?;
                }
            }
        }
        Ok(())
    }
}

/// Result of one algorithm invocation on one instance.
///
/// Records are built once by the analyzer and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRecord {
    algorithm: Algorithm,
    elapsed: Duration,
    value: SolutionValue,
    ratio: Option<f64>,
    solution: Solution,
}

impl AlgorithmRecord {
    pub fn new(
        algorithm: Algorithm,
        elapsed: Duration,
        value: SolutionValue,
        ratio: Option<f64>,
        solution: Solution,
    ) -> Self {
        Self {
            algorithm,
            elapsed,
            value,
            ratio,
            solution,
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Wall-clock time of the algorithm call alone.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn value(&self) -> SolutionValue {
        self.value
    }

    /// Ratio against the exact value, if the exact value is known and positive.
    #[inline]
    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    #[inline]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }
}
