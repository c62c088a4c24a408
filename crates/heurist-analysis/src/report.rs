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

//! Tabular reports over algorithm records.
//!
//! Times are printed in seconds with five decimals, costs with two, ratios
//! with three. Missing values are printed as `-`.

use crate::record::{Algorithm, AlgorithmRecord, Problem, SolutionValue};
use heurist_search::guard::SizeLimit;
use std::time::Duration;

/// What happened to the exact baseline of an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactStatus {
    /// The exact solver ran to completion; its record is part of the report.
    Solved,
    /// The instance was larger than the configured guard allows.
    Skipped { size: usize, limit: SizeLimit },
    /// The exact solver was stopped by a monitor before proving optimality.
    Aborted(String),
}

impl ExactStatus {
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, ExactStatus::Solved)
    }
}

impl std::fmt::Display for ExactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExactStatus::Solved => write!(f, "solved"),
            ExactStatus::Skipped { size, limit } => {
                write!(f, "skipped, size {} exceeds {}", size, limit)
            }
            ExactStatus::Aborted(reason) => write!(f, "aborted, {}", reason),
        }
    }
}

/// All records of one instance, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceReport {
    problem: Problem,
    name: String,
    size: usize,
    records: Vec<AlgorithmRecord>,
    exact: ExactStatus,
}

impl InstanceReport {
    pub fn new<N>(
        problem: Problem,
        name: N,
        size: usize,
        records: Vec<AlgorithmRecord>,
        exact: ExactStatus,
    ) -> Self
    where
        N: Into<String>,
    {
        debug_assert!(
            records.iter().all(|r| r.algorithm().problem() == problem),
            "called `InstanceReport::new` with records of another problem than {}",
            problem
        );

        Self {
            problem,
            name: name.into(),
            size,
            records,
            exact,
        }
    }

    #[inline]
    pub fn problem(&self) -> Problem {
        self.problem
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vertices or cities.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn records(&self) -> &[AlgorithmRecord] {
        &self.records
    }

    #[inline]
    pub fn exact_status(&self) -> &ExactStatus {
        &self.exact
    }

    /// Returns the record of `algorithm`, if it ran on this instance.
    pub fn record(&self, algorithm: Algorithm) -> Option<&AlgorithmRecord> {
        self.records.iter().find(|r| r.algorithm() == algorithm)
    }

    /// Returns the records of the non-exact algorithms.
    pub fn heuristic_records(&self) -> impl Iterator<Item = &AlgorithmRecord> {
        self.records.iter().filter(|r| !r.algorithm().is_exact())
    }

    fn size_unit(&self) -> &'static str {
        match self.problem {
            Problem::Coloring => "vertices",
            Problem::Tsp => "cities",
        }
    }

    fn value_header(&self) -> &'static str {
        match self.problem {
            Problem::Coloring => "Colors",
            Problem::Tsp => "Total Cost",
        }
    }
}

impl std::fmt::Display for InstanceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "RESULTS - {} ({}), {} {}",
            self.problem,
            self.name,
            self.size,
            self.size_unit()
        )?;
        writeln!(
            f,
            "{:<22} | {:<12} | {:<12} | {:<7}",
            "Algorithm",
            "Time (s)",
            self.value_header(),
            "ρ"
        )?;
        writeln!(f, "{}", "-".repeat(63))?;
        for record in &self.records {
            writeln!(
                f,
                "{:<22} | {:<12} | {:<12} | {:<7}",
                record.algorithm().label(),
                format_seconds(record.elapsed()),
                record.value().to_string(),
                format_ratio(record.ratio())
            )?;
        }
        if !self.exact.is_solved() {
            writeln!(f, "Exact: {}", self.exact)?;
        }

        writeln!(f)?;
        writeln!(f, "Solutions")?;
        for record in &self.records {
            writeln!(f, "   {:<22} {}", record.algorithm().label(), record.solution())?;
        }
        Ok(())
    }
}

/// Reports of every analyzed instance, TSP instances first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisReport {
    instances: Vec<InstanceReport>,
}

impl AnalysisReport {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, report: InstanceReport) {
        self.instances.push(report);
    }

    #[inline]
    pub fn instances(&self) -> &[InstanceReport] {
        &self.instances
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns the heuristics-only overview table.
    #[inline]
    pub fn summary(&self) -> SummaryTable<'_> {
        SummaryTable { report: self }
    }
}

impl FromIterator<InstanceReport> for AnalysisReport {
    fn from_iter<I: IntoIterator<Item = InstanceReport>>(iter: I) -> Self {
        Self {
            instances: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for instance in &self.instances {
            writeln!(f, "{}", instance)?;
        }
        write!(f, "{}", self.summary())
    }
}

/// One line per heuristic run across all instances.
#[derive(Debug, Clone, Copy)]
pub struct SummaryTable<'a> {
    report: &'a AnalysisReport,
}

impl SummaryTable<'_> {
    fn rows(&self) -> impl Iterator<Item = (String, &AlgorithmRecord)> {
        self.report.instances.iter().flat_map(|instance| {
            instance.heuristic_records().map(move |record| {
                let label = format!(
                    "{} ({}) - {}",
                    instance.problem(),
                    instance.name(),
                    record.algorithm()
                );
                (label, record)
            })
        })
    }
}

impl std::fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .rows()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0)
            .max("Algorithm".len());

        writeln!(f, "SUMMARY")?;
        writeln!(
            f,
            "{:<width$} | {:<12} | {:<12} | {:<7} | {:<12}",
            "Algorithm",
            "Time (s)",
            "Cost (TSP)",
            "ρ",
            "Colors (GCP)",
            width = width
        )?;
        writeln!(f, "{}", "-".repeat(width + 57))?;
        for (label, record) in self.rows() {
            let (cost, colors) = match record.value() {
                SolutionValue::Cost(_) => (record.value().to_string(), "-".to_string()),
                SolutionValue::Colors(_) => ("-".to_string(), record.value().to_string()),
            };
            writeln!(
                f,
                "{:<width$} | {:<12} | {:<12} | {:<7} | {:<12}",
                label,
                format_seconds(record.elapsed()),
                cost,
                format_ratio(record.ratio()),
                colors,
                width = width
            )?;
        }
        Ok(())
    }
}

fn format_seconds(elapsed: Duration) -> String {
    format!("{:.5}s", elapsed.as_secs_f64())
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(ratio) => format!("{:.3}", ratio),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Solution;

    fn coloring_report() -> InstanceReport {
        let records = vec![
            AlgorithmRecord::new(
                Algorithm::Greedy,
                Duration::from_micros(12),
                SolutionValue::Colors(4),
                Some(4.0 / 3.0),
                Solution::Coloring(vec![("A".into(), 0)]),
            ),
            AlgorithmRecord::new(
                Algorithm::ExactColoring,
                Duration::from_millis(2),
                SolutionValue::Colors(3),
                Some(1.0),
                Solution::Coloring(vec![("A".into(), 0)]),
            ),
        ];
        InstanceReport::new(Problem::Coloring, "g", 5, records, ExactStatus::Solved)
    }

    fn tour_report() -> InstanceReport {
        let records = vec![AlgorithmRecord::new(
            Algorithm::NearestNeighbor,
            Duration::from_micros(3),
            SolutionValue::Cost(17.888),
            None,
            Solution::Tour(vec![0, 1, 0]),
        )];
        let exact = ExactStatus::Skipped {
            size: 12,
            limit: SizeLimit::new(10),
        };
        InstanceReport::new(Problem::Tsp, "big", 12, records, exact)
    }

    #[test]
    fn test_formatting_helpers() {
        assert_eq!(format_seconds(Duration::from_micros(12)), "0.00001s");
        assert_eq!(format_seconds(Duration::from_millis(1500)), "1.50000s");
        assert_eq!(format_ratio(Some(4.0 / 3.0)), "1.333");
        assert_eq!(format_ratio(Some(1.0)), "1.000");
        assert_eq!(format_ratio(None), "-");
    }

    #[test]
    fn test_instance_table_rows() {
        let text = coloring_report().to_string();
        assert!(text.starts_with("RESULTS - GCP (g), 5 vertices\n"));
        assert!(text.contains("| Colors "));
        assert!(text.contains("Greedy                 | 0.00001s     | 4            | 1.333"));
        assert!(text.contains("Exact (Backtracking)   | 0.00200s     | 3            | 1.000"));
        assert!(!text.contains("Exact: "));
    }

    #[test]
    fn test_skipped_exact_is_noted() {
        let text = tour_report().to_string();
        assert!(text.contains("| Total Cost "));
        assert!(text.contains("17.89"));
        assert!(text.contains("Exact: skipped, size 12 exceeds SizeLimit(<= 10)"));
        assert!(text.contains("Nearest Neighbor       0 -> 1 -> 0"));
    }

    #[test]
    fn test_summary_lists_heuristics_only() {
        let report: AnalysisReport = [coloring_report(), tour_report()].into_iter().collect();
        let summary = report.summary().to_string();

        assert!(summary.contains("GCP (g) - Greedy"));
        assert!(summary.contains("TSP (big) - Nearest Neighbor"));
        assert!(!summary.contains("Exact"));

        let greedy = summary.lines().find(|l| l.starts_with("GCP (g)")).unwrap();
        let cells: Vec<&str> = greedy.split('|').map(str::trim).collect();
        assert_eq!(cells, vec!["GCP (g) - Greedy", "0.00001s", "-", "1.333", "4"]);

        let nn = summary.lines().find(|l| l.starts_with("TSP (big)")).unwrap();
        let cells: Vec<&str> = nn.split('|').map(str::trim).collect();
        assert_eq!(cells, vec!["TSP (big) - Nearest Neighbor", "0.00000s", "17.89", "-", "-"]);
    }

    #[test]
    fn test_record_lookup() {
        let report = coloring_report();
        assert!(report.record(Algorithm::Greedy).is_some());
        assert!(report.record(Algorithm::Dsatur).is_none());
        assert_eq!(report.heuristic_records().count(), 1);
    }
}
