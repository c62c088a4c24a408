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

use heurist_analysis::config::AnalysisConfig;
use heurist_analysis::ratio::approximation_ratio;
use heurist_analysis::record::Algorithm;
use heurist_analysis::runner::Analyzer;
use heurist_coloring::bnb::exact_color;
use heurist_coloring::dsatur::dsatur_color;
use heurist_coloring::greedy::greedy_color;
use heurist_model::city::Cities;
use heurist_model::error::ValidationError;
use heurist_model::graph::AdjacencyList;
use heurist_model::loading::{InstanceLoadError, InstanceLoader};
use heurist_tour::exact::exact_tour;
use heurist_tour::nearest_neighbor::nearest_neighbor_tour;
use heurist_tour::two_opt::two_opt_improve;

const EPS: f64 = 1e-9;

#[test]
fn test_triangle_needs_three_colors() {
    let graph = AdjacencyList::from_iter([
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["A", "B"]),
    ])
    .validate()
    .unwrap();

    assert_eq!(greedy_color(&graph).num_colors(), 3);
    assert_eq!(dsatur_color(&graph).num_colors(), 3);
    assert_eq!(exact_color(&graph).num_colors(), 3);
}

#[test]
fn test_six_cities_are_bracketed_by_exact_and_nearest_neighbor() {
    let cities = Cities::from_pairs([
        (0.0, 0.0),
        (1.0, 3.0),
        (4.0, 3.0),
        (6.0, 1.0),
        (3.0, 0.0),
        (2.0, 2.0),
    ])
    .unwrap();

    let nn = nearest_neighbor_tour(&cities);
    let improved = two_opt_improve(&cities, &nn);
    let (_, optimum) = exact_tour(&cities);

    assert!(optimum <= nn.cost() + EPS);
    assert!(optimum <= improved.cost() + EPS);
    assert!(improved.cost() <= nn.cost() + EPS);
}

#[test]
fn test_ratio_laws() {
    for v in [1usize, 2, 7] {
        assert_eq!(approximation_ratio(v, v), Some(1.0));
        assert_eq!(approximation_ratio(v, 0), None);
    }
    for v in [0.5f64, 3.25, 1e6] {
        assert_eq!(approximation_ratio(v, v), Some(1.0));
        assert_eq!(approximation_ratio(v, 0.0), None);
    }
}

#[test]
fn test_invalid_instances_are_rejected_before_any_algorithm() {
    let empty: [(&str, Vec<&str>); 0] = [];
    assert_eq!(
        AdjacencyList::from_iter(empty).validate().unwrap_err(),
        ValidationError::EmptyGraph
    );

    let err = AdjacencyList::from_iter([("A", vec!["Z"])]).validate().unwrap_err();
    assert!(matches!(err, ValidationError::UndeclaredVertex { .. }));

    let none: [(f64, f64); 0] = [];
    assert_eq!(
        Cities::from_pairs(none).unwrap_err(),
        ValidationError::TooFewCities { found: 0 }
    );
    assert_eq!(
        Cities::from_pairs([(1.0, 1.0)]).unwrap_err(),
        ValidationError::TooFewCities { found: 1 }
    );
}

#[test]
fn test_loaded_document_is_analyzed_end_to_end() {
    let document = r#"{
        "coloring": [
            { "name": "square", "graph": { "1": [2, 4], "2": [1, 3], "3": [2, 4], "4": [3, 1] } }
        ],
        "tsp": [
            { "name": "unit", "cities": [[0, 0], [0, 1], [1, 1], [1, 0]] }
        ]
    }"#;
    let instances = InstanceLoader::new().from_str(document).unwrap();
    let report = Analyzer::new(AnalysisConfig::default()).analyze(&instances);

    assert_eq!(report.len(), 2);

    let square = &report.instances()[1];
    assert_eq!(square.name(), "square");
    let exact = square.record(Algorithm::ExactColoring).unwrap();
    assert_eq!(exact.value().as_f64(), 2.0);
    assert_eq!(square.record(Algorithm::Dsatur).unwrap().ratio(), Some(1.0));

    let unit = &report.instances()[0];
    let exact = unit.record(Algorithm::ExactTour).unwrap();
    assert!((exact.value().as_f64() - 4.0).abs() <= EPS);
    let two_opt = unit.record(Algorithm::TwoOpt).unwrap();
    assert!(two_opt.ratio().unwrap() >= 1.0 - EPS);

    let text = report.to_string();
    assert!(text.contains("RESULTS - GCP (square), 4 vertices"));
    assert!(text.contains("RESULTS - TSP (unit), 4 cities"));
    assert!(text.contains("SUMMARY"));
    assert!(text.contains("TSP (unit) - 2-opt"));
    let tsp_table = text.find("RESULTS - TSP (unit)").unwrap();
    let gcp_table = text.find("RESULTS - GCP (square)").unwrap();
    assert!(tsp_table < gcp_table);
    let summary = text.find("SUMMARY").unwrap();
    let tsp_row = text[summary..].find("TSP (unit) - Nearest Neighbor").unwrap();
    let gcp_row = text[summary..].find("GCP (square) - Greedy").unwrap();
    assert!(tsp_row < gcp_row);
}

#[test]
fn test_invalid_document_names_the_instance() {
    let document = r#"{ "coloring": [ { "name": "broken", "graph": { "A": ["B"] } } ] }"#;
    let err = InstanceLoader::new().from_str(document).unwrap_err();
    match err {
        InstanceLoadError::Validation { instance, source } => {
            assert_eq!(instance, "broken");
            assert!(matches!(source, ValidationError::UndeclaredVertex { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}
