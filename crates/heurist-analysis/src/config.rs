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

//! Settings of an analysis run: size guards, time limits and progress logging.

use heurist_search::guard::SizeLimit;
use std::time::Duration;

/// Largest graph the exact coloring search runs on by default.
pub const DEFAULT_EXACT_COLORING_VERTICES: usize = 8;

/// Largest city set the exhaustive tour search runs on by default.
pub const DEFAULT_EXACT_TOUR_CITIES: usize = 10;

/// Settings of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    exact_coloring_limit: SizeLimit,
    exact_tour_limit: SizeLimit,
    exact_time_limit: Option<Duration>,
    two_opt_time_limit: Option<Duration>,
    log_search_progress: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            exact_coloring_limit: SizeLimit::new(DEFAULT_EXACT_COLORING_VERTICES),
            exact_tour_limit: SizeLimit::new(DEFAULT_EXACT_TOUR_CITIES),
            exact_time_limit: None,
            two_opt_time_limit: None,
            log_search_progress: false,
        }
    }
}

impl AnalysisConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex bound for the exact coloring search.
    #[inline]
    pub fn with_exact_coloring_limit(mut self, limit: SizeLimit) -> Self {
        self.exact_coloring_limit = limit;
        self
    }

    /// Sets the city bound for the exhaustive tour search.
    #[inline]
    pub fn with_exact_tour_limit(mut self, limit: SizeLimit) -> Self {
        self.exact_tour_limit = limit;
        self
    }

    /// Aborts the exact coloring search after `limit`. An aborted search
    /// yields no exact value, so no ratio is reported for that instance.
    #[inline]
    pub fn with_exact_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.exact_time_limit = limit;
        self
    }

    /// Stops 2-opt after `limit`. The best tour reached so far is reported.
    #[inline]
    pub fn with_two_opt_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.two_opt_time_limit = limit;
        self
    }

    /// Prints progress tables of the exact coloring search and of 2-opt.
    #[inline]
    pub fn with_search_logging(mut self, enabled: bool) -> Self {
        self.log_search_progress = enabled;
        self
    }

    #[inline]
    pub fn exact_coloring_limit(&self) -> SizeLimit {
        self.exact_coloring_limit
    }

    #[inline]
    pub fn exact_tour_limit(&self) -> SizeLimit {
        self.exact_tour_limit
    }

    #[inline]
    pub fn exact_time_limit(&self) -> Option<Duration> {
        self.exact_time_limit
    }

    #[inline]
    pub fn two_opt_time_limit(&self) -> Option<Duration> {
        self.two_opt_time_limit
    }

    #[inline]
    pub fn log_search_progress(&self) -> bool {
        self.log_search_progress
    }
}

impl std::fmt::Display for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AnalysisConfig(exact_coloring: {}, exact_tour: {}, time_limit: ",
            self.exact_coloring_limit, self.exact_tour_limit
        )?;
        write_limit(f, self.exact_time_limit)?;
        write!(f, ", two_opt_time_limit: ")?;
        write_limit(f, self.two_opt_time_limit)?;
        write!(f, ", log: {})", self.log_search_progress)
    }
}

fn write_limit(f: &mut std::fmt::Formatter<'_>, limit: Option<Duration>) -> std::fmt::Result {
    match limit {
        Some(limit) => write!(f, "{:.3}s", limit.as_secs_f64()),
        None => write!(f, "none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = AnalysisConfig::default();
        assert!(config.exact_coloring_limit().admits(8));
        assert!(!config.exact_coloring_limit().admits(9));
        assert!(config.exact_tour_limit().admits(10));
        assert!(!config.exact_tour_limit().admits(11));
        assert_eq!(config.exact_time_limit(), None);
        assert_eq!(config.two_opt_time_limit(), None);
        assert!(!config.log_search_progress());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalysisConfig::new()
            .with_exact_coloring_limit(SizeLimit::unbounded())
            .with_exact_tour_limit(SizeLimit::new(4))
            .with_exact_time_limit(Some(Duration::from_millis(250)))
            .with_two_opt_time_limit(Some(Duration::from_secs(2)))
            .with_search_logging(true);

        assert!(config.exact_coloring_limit().admits(1_000));
        assert!(!config.exact_tour_limit().admits(5));
        assert_eq!(config.exact_time_limit(), Some(Duration::from_millis(250)));
        assert_eq!(config.two_opt_time_limit(), Some(Duration::from_secs(2)));
        assert_eq!(
            config.to_string(),
            "AnalysisConfig(exact_coloring: SizeLimit(unbounded), exact_tour: SizeLimit(<= 4), \
             time_limit: 0.250s, two_opt_time_limit: 2.000s, log: true)"
        );
        assert!(config.log_search_progress());
    }

    #[test]
    fn test_display() {
        let config = AnalysisConfig::default();
        assert_eq!(
            config.to_string(),
            "AnalysisConfig(exact_coloring: SizeLimit(<= 8), exact_tour: SizeLimit(<= 10), \
             time_limit: none, two_opt_time_limit: none, log: false)"
        );
    }
}
