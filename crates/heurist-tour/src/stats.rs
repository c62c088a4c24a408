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

//! Statistics reporting for tour searches.
//!
//! `TwoOptStatistics` tracks the passes, evaluated candidates and accepted
//! improvements of a 2-opt run, and `ExhaustiveTourStatistics` the number of
//! enumerated permutations of an exact run. Updates use saturating arithmetic
//! so the counters can be bumped from hot loops without overflow checks.

use std::time::Duration;

/// Counters of a 2-opt run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TwoOptStatistics {
    /// Number of neighborhood scans started. Every accepted move starts a new one.
    pub passes: u64,
    /// Number of candidate tours whose cost was computed.
    pub candidates_evaluated: u64,
    /// Number of accepted improving moves.
    pub improvements: u64,
    /// Total time taken by the local search.
    pub time_total: Duration,
}

impl TwoOptStatistics {
    #[inline]
    pub fn on_pass(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    #[inline]
    pub fn on_candidate(&mut self) {
        self.candidates_evaluated = self.candidates_evaluated.saturating_add(1);
    }

    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Candidates that did not improve the current tour.
    #[inline]
    pub fn rejected_candidates(&self) -> u64 {
        self.candidates_evaluated.saturating_sub(self.improvements)
    }
}

impl std::fmt::Display for TwoOptStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "2-opt Statistics:")?;
        writeln!(f, "   Passes:               {}", self.passes)?;
        writeln!(f, "   Candidates Evaluated: {}", self.candidates_evaluated)?;
        writeln!(f, "   Improvements:         {}", self.improvements)?;
        writeln!(f, "   Rejected Candidates:  {}", self.rejected_candidates())?;
        writeln!(f, "   Total Time:           {:?}", self.time_total)?;
        Ok(())
    }
}

/// Counters of an exhaustive tour search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ExhaustiveTourStatistics {
    /// Number of complete tours whose cost was computed.
    pub permutations: u64,
    /// Number of times a strictly cheaper tour replaced the incumbent.
    pub improvements: u64,
    /// Total time taken by the search.
    pub time_total: Duration,
}

impl ExhaustiveTourStatistics {
    #[inline]
    pub fn on_permutation(&mut self) {
        self.permutations = self.permutations.saturating_add(1);
    }

    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for ExhaustiveTourStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Exhaustive Tour Statistics:")?;
        writeln!(f, "   Permutations:  {}", self.permutations)?;
        writeln!(f, "   Improvements:  {}", self.improvements)?;
        writeln!(f, "   Total Time:    {:?}", self.time_total)?;
        Ok(())
    }
}
