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

//! Runs every algorithm on an instance and collects timed records.

use crate::config::AnalysisConfig;
use crate::ratio::{approximation_ratio, ratio_against};
use crate::record::{Algorithm, AlgorithmRecord, Problem, Solution, SolutionValue};
use crate::report::{AnalysisReport, ExactStatus, InstanceReport};
use heurist_coloring::bnb::BacktrackingColoringSolver;
use heurist_coloring::dsatur::dsatur_color;
use heurist_coloring::greedy::greedy_color;
use heurist_coloring::monitor::composite::CompositeTreeSearchMonitor;
use heurist_coloring::monitor::log::LogMonitor as TreeLogMonitor;
use heurist_coloring::monitor::time_limit::TimeLimitMonitor;
use heurist_model::city::Cities;
use heurist_model::coloring::Coloring;
use heurist_model::graph::Graph;
use heurist_model::loading::InstanceSet;
use heurist_model::tour::Tour;
use heurist_tour::exact::ExhaustiveTourSolver;
use heurist_tour::monitor::composite::CompositeLocalSearchMonitor;
use heurist_tour::monitor::log::LogMonitor as LocalLogMonitor;
use heurist_tour::monitor::time_limit::TimeLimitMonitor as LocalTimeLimitMonitor;
use heurist_tour::nearest_neighbor::nearest_neighbor_tour;
use heurist_tour::two_opt::TwoOptEngine;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

// Admitted instances are small, so the clock is read on every node.
const EXACT_TIME_CHECK_INTERVAL: u64 = 1;

/// Times `f` with a monotonic clock.
#[inline]
fn timed<R, F>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

fn coloring_solution(coloring: &Coloring, graph: &Graph) -> Solution {
    Solution::Coloring(
        coloring
            .labeled(graph)
            .iter()
            .map(|(label, color)| (label.to_string(), color))
            .collect(),
    )
}

fn tour_solution(tour: &Tour<f64>) -> Solution {
    Solution::Tour(tour.stops().iter().map(|stop| stop.get()).collect())
}

/// Compares heuristics with exact baselines under an [`AnalysisConfig`].
///
/// The analyzer holds no state between calls; instances may be analyzed in
/// any order, or concurrently from separate analyzers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    #[inline]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes every instance of the set, TSP instances first.
    pub fn analyze(&self, instances: &InstanceSet) -> AnalysisReport {
        info!(
            coloring = instances.coloring().len(),
            tsp = instances.tours().len(),
            config = %self.config,
            "analysis_started"
        );

        let coloring = instances
            .coloring()
            .iter()
            .map(|instance| self.analyze_coloring(&instance.name, &instance.graph));
        let tours = instances
            .tours()
            .iter()
            .map(|instance| self.analyze_tour(&instance.name, &instance.cities));

        tours.chain(coloring).collect()
    }

    /// Runs greedy, DSATUR and, if admitted, the exact search on `graph`.
    pub fn analyze_coloring(&self, name: &str, graph: &Graph) -> InstanceReport {
        let (greedy, greedy_time) = timed(|| greedy_color(graph));
        log_run(name, Algorithm::Greedy, greedy.num_colors() as f64, greedy_time);

        let (dsatur, dsatur_time) = timed(|| dsatur_color(graph));
        log_run(name, Algorithm::Dsatur, dsatur.num_colors() as f64, dsatur_time);

        let (exact, status) = self.run_exact_coloring(name, graph);
        let optimum = exact.as_ref().map(|(coloring, _)| coloring.num_colors());

        let mut records = vec![
            AlgorithmRecord::new(
                Algorithm::Greedy,
                greedy_time,
                SolutionValue::Colors(greedy.num_colors()),
                ratio_against(greedy.num_colors(), optimum),
                coloring_solution(&greedy, graph),
            ),
            AlgorithmRecord::new(
                Algorithm::Dsatur,
                dsatur_time,
                SolutionValue::Colors(dsatur.num_colors()),
                ratio_against(dsatur.num_colors(), optimum),
                coloring_solution(&dsatur, graph),
            ),
        ];
        if let Some((coloring, elapsed)) = exact {
            let colors = coloring.num_colors();
            records.push(AlgorithmRecord::new(
                Algorithm::ExactColoring,
                elapsed,
                SolutionValue::Colors(colors),
                approximation_ratio(colors, colors),
                coloring_solution(&coloring, graph),
            ));
        }

        InstanceReport::new(
            Problem::Coloring,
            name,
            graph.num_vertices(),
            records,
            status,
        )
    }

    /// Runs nearest neighbor, 2-opt on the nearest neighbor tour and, if
    /// admitted, the exhaustive search on `cities`.
    pub fn analyze_tour(&self, name: &str, cities: &Cities<f64>) -> InstanceReport {
        let (nn, nn_time) = timed(|| nearest_neighbor_tour(cities));
        log_run(name, Algorithm::NearestNeighbor, nn.cost(), nn_time);

        let (improved, two_opt_time) = self.run_two_opt(name, cities, &nn);
        log_run(name, Algorithm::TwoOpt, improved.cost(), two_opt_time);

        let n = cities.len();
        let limit = self.config.exact_tour_limit();
        let exact = if limit.admits(n) {
            let mut solver = ExhaustiveTourSolver::new();
            let (outcome, elapsed) = timed(|| solver.solve(cities));
            debug!(instance = name, stats = %outcome.statistics(), "exact_tour_statistics");
            log_run(name, Algorithm::ExactTour, outcome.tour().cost(), elapsed);
            Some((outcome.into_tour(), elapsed))
        } else {
            info!(instance = name, size = n, limit = %limit, "exact_solver_skipped");
            None
        };
        let optimum = exact.as_ref().map(|(tour, _)| tour.cost());

        let mut records = vec![
            AlgorithmRecord::new(
                Algorithm::NearestNeighbor,
                nn_time,
                SolutionValue::Cost(nn.cost()),
                ratio_against(nn.cost(), optimum),
                tour_solution(&nn),
            ),
            AlgorithmRecord::new(
                Algorithm::TwoOpt,
                two_opt_time,
                SolutionValue::Cost(improved.cost()),
                ratio_against(improved.cost(), optimum),
                tour_solution(&improved),
            ),
        ];
        let status = match exact {
            Some((tour, elapsed)) => {
                records.push(AlgorithmRecord::new(
                    Algorithm::ExactTour,
                    elapsed,
                    SolutionValue::Cost(tour.cost()),
                    approximation_ratio(tour.cost(), tour.cost()),
                    tour_solution(&tour),
                ));
                ExactStatus::Solved
            }
            None => ExactStatus::Skipped { size: n, limit },
        };

        InstanceReport::new(Problem::Tsp, name, n, records, status)
    }

    fn run_exact_coloring(
        &self,
        name: &str,
        graph: &Graph,
    ) -> (Option<(Coloring, Duration)>, ExactStatus) {
        let n = graph.num_vertices();
        let limit = self.config.exact_coloring_limit();
        if !limit.admits(n) {
            info!(instance = name, size = n, limit = %limit, "exact_solver_skipped");
            return (None, ExactStatus::Skipped { size: n, limit });
        }

        let mut monitor = CompositeTreeSearchMonitor::new();
        if let Some(time_limit) = self.config.exact_time_limit() {
            monitor.add_monitor(TimeLimitMonitor::new(time_limit, EXACT_TIME_CHECK_INTERVAL));
        }
        if self.config.log_search_progress() {
            monitor.add_monitor(TreeLogMonitor::default());
        }

        let mut solver = BacktrackingColoringSolver::preallocated(n);
        let (outcome, elapsed) = timed(|| solver.solve(graph, monitor));
        debug!(instance = name, stats = %outcome.statistics(), "exact_coloring_statistics");

        if !outcome.is_optimal() {
            let reason = outcome.termination_reason().to_string();
            warn!(instance = name, reason = %reason, "exact_solver_aborted");
            return (None, ExactStatus::Aborted(reason));
        }

        match outcome.into_coloring() {
            Some(coloring) => {
                log_run(name, Algorithm::ExactColoring, coloring.num_colors() as f64, elapsed);
                (Some((coloring, elapsed)), ExactStatus::Solved)
            }
            None => {
                let reason = "search ended without a coloring".to_string();
                warn!(instance = name, reason = %reason, "exact_solver_aborted");
                (None, ExactStatus::Aborted(reason))
            }
        }
    }

    fn run_two_opt(
        &self,
        name: &str,
        cities: &Cities<f64>,
        initial: &Tour<f64>,
    ) -> (Tour<f64>, Duration) {
        let mut monitor = CompositeLocalSearchMonitor::new();
        if let Some(time_limit) = self.config.two_opt_time_limit() {
            monitor.add_monitor(LocalTimeLimitMonitor::new(time_limit));
        }
        if self.config.log_search_progress() {
            monitor.add_monitor(LocalLogMonitor::default());
        }

        let mut engine = TwoOptEngine::preallocated(cities.len());
        let (outcome, elapsed) = timed(|| engine.run(cities, initial, &mut monitor));
        debug!(instance = name, stats = %outcome.statistics(), "two_opt_statistics");
        if !outcome.is_local_optimum() {
            warn!(
                instance = name,
                reason = %outcome.termination_reason(),
                "two_opt_stopped_early"
            );
        }

        (outcome.into_tour(), elapsed)
    }
}

fn log_run(instance: &str, algorithm: Algorithm, value: f64, elapsed: Duration) {
    info!(
        instance,
        algorithm = %algorithm,
        value,
        seconds = elapsed.as_secs_f64(),
        "algorithm_finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use heurist_model::graph::AdjacencyList;
    use heurist_search::guard::SizeLimit;

    fn default_set() -> InstanceSet {
        InstanceSet::default_example()
    }

    #[test]
    fn test_default_coloring_instance() {
        let set = default_set();
        let instance = &set.coloring()[0];
        let report = Analyzer::default().analyze_coloring(&instance.name, &instance.graph);

        assert_eq!(report.problem(), Problem::Coloring);
        assert_eq!(report.size(), 5);
        assert!(report.exact_status().is_solved());
        assert_eq!(report.records().len(), 3);

        let exact = report.record(Algorithm::ExactColoring).unwrap();
        assert_eq!(exact.value(), SolutionValue::Colors(3));
        assert_eq!(exact.ratio(), Some(1.0));

        let greedy = report.record(Algorithm::Greedy).unwrap();
        assert_eq!(greedy.value(), SolutionValue::Colors(3));
        assert_eq!(greedy.ratio(), Some(1.0));
        assert_eq!(
            greedy.solution(),
            &Solution::Coloring(vec![
                ("A".into(), 0),
                ("B".into(), 1),
                ("C".into(), 2),
                ("D".into(), 1),
                ("E".into(), 0),
            ])
        );
    }

    #[test]
    fn test_default_tour_instance() {
        let set = default_set();
        let instance = &set.tours()[0];
        let report = Analyzer::default().analyze_tour(&instance.name, &instance.cities);

        assert_eq!(report.problem(), Problem::Tsp);
        assert_eq!(report.size(), 6);
        assert!(report.exact_status().is_solved());

        let nn = report.record(Algorithm::NearestNeighbor).unwrap();
        let two_opt = report.record(Algorithm::TwoOpt).unwrap();
        let exact = report.record(Algorithm::ExactTour).unwrap();

        assert_eq!(nn.solution(), &Solution::Tour(vec![0, 5, 1, 2, 3, 4, 0]));
        assert!(exact.value().as_f64() <= two_opt.value().as_f64() + 1e-9);
        assert!(two_opt.value().as_f64() <= nn.value().as_f64() + 1e-9);
        assert!(nn.ratio().unwrap() >= 1.0 - 1e-9);
        assert_eq!(exact.ratio(), Some(1.0));
    }

    #[test]
    fn test_guard_skips_exact_and_ratios() {
        let config = AnalysisConfig::new()
            .with_exact_coloring_limit(SizeLimit::new(2))
            .with_exact_tour_limit(SizeLimit::new(3));
        let analyzer = Analyzer::new(config);
        let report = analyzer.analyze(&default_set());

        assert_eq!(report.len(), 2);
        for instance in report.instances() {
            assert!(matches!(instance.exact_status(), ExactStatus::Skipped { .. }));
            assert_eq!(instance.records().len(), 2);
            assert!(instance.records().iter().all(|r| r.ratio().is_none()));
        }
    }

    #[test]
    fn test_zero_two_opt_time_limit_keeps_nearest_neighbor_tour() {
        let set = default_set();
        let instance = &set.tours()[0];
        let config = AnalysisConfig::new().with_two_opt_time_limit(Some(Duration::ZERO));
        let report = Analyzer::new(config).analyze_tour(&instance.name, &instance.cities);

        let nn = report.record(Algorithm::NearestNeighbor).unwrap();
        let two_opt = report.record(Algorithm::TwoOpt).unwrap();
        assert_eq!(two_opt.solution(), nn.solution());
        assert_eq!(two_opt.value(), nn.value());
        assert!(report.exact_status().is_solved());
    }

    #[test]
    fn test_zero_time_limit_aborts_exact_coloring() {
        // Crown graph on 4 + 4 vertices: u_i ~ v_j for i != j.
        let mut list = AdjacencyList::new();
        for i in 0..4 {
            let neighbors = (0..4).filter(move |&j| j != i).map(|j| format!("v{}", j));
            list.push_vertex(format!("u{}", i), neighbors);
        }
        for j in 0..4 {
            let neighbors = (0..4).filter(move |&i| i != j).map(|i| format!("u{}", i));
            list.push_vertex(format!("v{}", j), neighbors);
        }
        let graph = list.validate().unwrap();

        let config = AnalysisConfig::new().with_exact_time_limit(Some(Duration::ZERO));
        let report = Analyzer::new(config).analyze_coloring("crown", &graph);

        assert!(matches!(report.exact_status(), ExactStatus::Aborted(_)));
        assert!(report.record(Algorithm::ExactColoring).is_none());
        assert_eq!(report.records().len(), 2);
        assert!(report.records().iter().all(|r| r.ratio().is_none()));
    }
}
