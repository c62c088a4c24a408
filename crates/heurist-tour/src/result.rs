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

use crate::stats::TwoOptStatistics;
use heurist_core::num::Coordinate;
use heurist_model::tour::Tour;
use heurist_search::result::TerminationReason;

/// Result of a 2-opt run after termination.
///
/// The tour is always valid: when a monitor aborts the run, it is the best
/// tour reached so far, which is never worse than the initial one.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome<T> {
    tour: Tour<T>,
    termination_reason: TerminationReason,
    statistics: TwoOptStatistics,
}

impl<T> TwoOptOutcome<T>
where
    T: Coordinate,
{
    /// Creates a new local optimum outcome.
    #[inline]
    pub fn local_optimum(tour: Tour<T>, statistics: TwoOptStatistics) -> Self {
        Self {
            tour,
            termination_reason: TerminationReason::LocalOptimumReached,
            statistics,
        }
    }

    /// Creates a new aborted outcome.
    #[inline]
    pub fn aborted<R>(tour: Tour<T>, reason: R, statistics: TwoOptStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            tour,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the best tour found.
    #[inline]
    pub fn tour(&self) -> &Tour<T> {
        &self.tour
    }

    /// Consumes the outcome and returns the best tour found.
    #[inline]
    pub fn into_tour(self) -> Tour<T> {
        self.tour
    }

    /// Returns `true` if no improving 2-opt move remains.
    #[inline]
    pub fn is_local_optimum(&self) -> bool {
        matches!(
            self.termination_reason,
            TerminationReason::LocalOptimumReached
        )
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the statistics.
    #[inline]
    pub fn statistics(&self) -> &TwoOptStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for TwoOptOutcome<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TwoOptOutcome(cost: {:.4}, reason: {}, improvements: {})",
            self.tour.cost(),
            self.termination_reason,
            self.statistics.improvements
        )
    }
}
