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

use crate::stats::ColoringSearchStatistics;
use heurist_model::coloring::Coloring;
use heurist_search::result::TerminationReason;

/// Result of the exact coloring search after termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactColoringOutcome {
    coloring: Option<Coloring>,
    termination_reason: TerminationReason,
    statistics: ColoringSearchStatistics,
}

impl ExactColoringOutcome {
    /// The search space was exhausted; `coloring` uses the minimum number of colors.
    #[inline]
    pub fn optimal(coloring: Coloring, statistics: ColoringSearchStatistics) -> Self {
        Self {
            coloring: Some(coloring),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// A monitor stopped the search. `coloring` is the best one found so far, if any.
    #[inline]
    pub fn aborted<R>(
        coloring: Option<Coloring>,
        reason: R,
        statistics: ColoringSearchStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        Self {
            coloring,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the best coloring found, if any.
    #[inline]
    pub fn coloring(&self) -> Option<&Coloring> {
        self.coloring.as_ref()
    }

    /// Consumes the outcome and returns the best coloring found, if any.
    #[inline]
    pub fn into_coloring(self) -> Option<Coloring> {
        self.coloring
    }

    /// Returns `true` if the returned coloring is proven to be optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::OptimalityProven)
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &ColoringSearchStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for ExactColoringOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.coloring {
            Some(coloring) => write!(
                f,
                "ExactColoringOutcome(colors: {}, reason: {})",
                coloring.num_colors(),
                self.termination_reason
            ),
            None => write!(
                f,
                "ExactColoringOutcome(no coloring, reason: {})",
                self.termination_reason
            ),
        }
    }
}
