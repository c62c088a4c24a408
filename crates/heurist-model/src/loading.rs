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

//! Instance set loader.
//!
//! Instances are read from JSON documents of the form
//!
//! ```json
//! {
//!   "coloring": [ { "name": "triangle", "graph": { "A": ["B", "C"], "B": ["A", "C"], "C": ["A", "B"] } } ],
//!   "tsp":      [ { "name": "line", "cities": [[0, 0], [1, 0], [2, 0]] } ]
//! }
//! ```
//!
//! Either list may be omitted. The key order of each `graph` object is the
//! declared vertex order and is preserved exactly: the adjacency object is read
//! through a map visitor straight into an `AdjacencyList`, never through a
//! sorted map. Neighbor references may be strings or integers; integers are
//! normalized to their decimal representation so that `{"1": [2], "2": [1]}`
//! is accepted.
//!
//! Every instance is validated while loading. The first failure is reported
//! together with the name of the offending instance.

use crate::{
    city::{Cities, City},
    error::ValidationError,
    graph::{AdjacencyList, Graph},
};
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use thiserror::Error;

/// The error type for instance loading.
#[derive(Debug, Error)]
pub enum InstanceLoadError {
    /// The instance file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not have the expected structure.
    #[error("malformed instance document: {0}")]
    Json(#[from] serde_json::Error),

    /// An instance was structurally valid JSON but failed validation.
    #[error("invalid instance '{instance}': {source}")]
    Validation {
        /// The name of the rejected instance.
        instance: String,
        /// The validation failure.
        #[source]
        source: ValidationError,
    },

    /// The document declares neither coloring nor tsp instances.
    #[error("instance document contains no coloring or tsp instances")]
    EmptyInstanceSet,
}

/// A named, validated coloring instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringInstance {
    pub name: String,
    pub graph: Graph,
}

/// A named, validated TSP instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TourInstance {
    pub name: String,
    pub cities: Cities<f64>,
}

/// All instances of one document, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstanceSet {
    coloring: Vec<ColoringInstance>,
    tours: Vec<TourInstance>,
}

impl InstanceSet {
    /// Creates an instance set from already validated instances.
    #[inline]
    pub fn new(coloring: Vec<ColoringInstance>, tours: Vec<TourInstance>) -> Self {
        Self { coloring, tours }
    }

    /// The built-in example used when no instance file is supplied: the
    /// five-vertex graph `A..E` and the six-city tour instance.
    pub fn default_example() -> Self {
        let graph = [
            ("A", vec!["B", "C", "D"]),
            ("B", vec!["A", "C", "E"]),
            ("C", vec!["A", "B", "D", "E"]),
            ("D", vec!["A", "C", "E"]),
            ("E", vec!["B", "C", "D"]),
        ]
        .into_iter()
        .collect::<AdjacencyList>()
        .validate();

        let cities = Cities::from_pairs([
            (0.0, 0.0),
            (1.0, 3.0),
            (4.0, 3.0),
            (6.0, 1.0),
            (3.0, 0.0),
            (2.0, 2.0),
        ]);

        // Both literals above are valid by construction.
        let mut set = InstanceSet::default();
        if let Ok(graph) = graph {
            set.coloring.push(ColoringInstance {
                name: "default".to_string(),
                graph,
            });
        }
        if let Ok(cities) = cities {
            set.tours.push(TourInstance {
                name: "default".to_string(),
                cities,
            });
        }
        set
    }

    /// Returns the coloring instances.
    #[inline]
    pub fn coloring(&self) -> &[ColoringInstance] {
        &self.coloring
    }

    /// Returns the TSP instances.
    #[inline]
    pub fn tours(&self) -> &[TourInstance] {
        &self.tours
    }

    /// Returns the total number of instances.
    #[inline]
    pub fn len(&self) -> usize {
        self.coloring.len() + self.tours.len()
    }

    /// Returns `true` if the set holds no instance at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A configurable loader for JSON instance documents.
///
/// # Configuration
/// * `allow_empty`: If false (the default), a document without any instance is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstanceLoader {
    allow_empty: bool,
}

impl InstanceLoader {
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether an instance document without instances is accepted.
    #[inline]
    pub fn allow_empty(mut self, yes: bool) -> Self {
        self.allow_empty = yes;
        self
    }

    /// Loads an instance set from a generic reader.
    pub fn from_reader<R: Read>(&self, r: R) -> Result<InstanceSet, InstanceLoadError> {
        let raw: RawInstanceSet = serde_json::from_reader(BufReader::new(r))?;
        self.build(raw)
    }

    /// Loads an instance set from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<InstanceSet, InstanceLoadError> {
        let file = File::open(path)?;
        self.from_reader(file)
    }

    /// Loads an instance set from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<InstanceSet, InstanceLoadError> {
        let raw: RawInstanceSet = serde_json::from_str(s)?;
        self.build(raw)
    }

    fn build(&self, raw: RawInstanceSet) -> Result<InstanceSet, InstanceLoadError> {
        if !self.allow_empty && raw.coloring.is_empty() && raw.tsp.is_empty() {
            return Err(InstanceLoadError::EmptyInstanceSet);
        }

        let mut set = InstanceSet::default();

        for RawColoringInstance { name, graph } in raw.coloring {
            match graph.validate() {
                Ok(graph) => set.coloring.push(ColoringInstance { name, graph }),
                Err(source) => {
                    return Err(InstanceLoadError::Validation {
                        instance: name,
                        source,
                    });
                }
            }
        }

        for RawTourInstance { name, cities } in raw.tsp {
            let cities = cities.into_iter().map(|[x, y]| City::new(x, y)).collect();
            match Cities::new(cities) {
                Ok(cities) => set.tours.push(TourInstance { name, cities }),
                Err(source) => {
                    return Err(InstanceLoadError::Validation {
                        instance: name,
                        source,
                    });
                }
            }
        }

        Ok(set)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInstanceSet {
    #[serde(default)]
    coloring: Vec<RawColoringInstance>,
    #[serde(default)]
    tsp: Vec<RawTourInstance>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColoringInstance {
    name: String,
    graph: AdjacencyList,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTourInstance {
    name: String,
    cities: Vec<[f64; 2]>,
}

/// A vertex reference as it may appear in a neighbor list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Integer(i64),
    Unsigned(u64),
}

impl From<RawLabel> for String {
    fn from(label: RawLabel) -> Self {
        match label {
            RawLabel::Text(s) => s,
            RawLabel::Integer(i) => i.to_string(),
            RawLabel::Unsigned(u) => u.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for AdjacencyList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AdjacencyVisitor;

        impl<'de> Visitor<'de> for AdjacencyVisitor {
            type Value = AdjacencyList;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an object mapping vertex labels to neighbor lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut list = AdjacencyList::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, neighbors)) = map.next_entry::<String, Vec<RawLabel>>()? {
                    list.push_vertex(label, neighbors.into_iter().map(String::from));
                }
                Ok(list)
            }
        }

        deserializer.deserialize_map(AdjacencyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::VertexIndex;

    const SMALL_SET: &str = r#"
        {
            "coloring": [
                { "name": "reverse", "graph": { "Z": ["A"], "M": [], "A": ["Z"] } }
            ],
            "tsp": [
                { "name": "line", "cities": [[0, 0], [1, 0], [2.5, 0]] }
            ]
        }
    "#;

    #[test]
    fn test_loads_and_preserves_declared_order() {
        let set = InstanceLoader::new().from_str(SMALL_SET).expect("Failed to load");

        assert_eq!(set.len(), 2);
        let graph = &set.coloring()[0].graph;
        assert_eq!(set.coloring()[0].name, "reverse");
        assert_eq!(
            graph.labels(),
            &["Z".to_string(), "M".to_string(), "A".to_string()]
        );
        assert_eq!(graph.neighbors(VertexIndex::new(0)), &[VertexIndex::new(2)]);

        let tour = &set.tours()[0];
        assert_eq!(tour.name, "line");
        assert_eq!(tour.cities.len(), 3);
        assert_eq!(tour.cities.as_slice()[2].x(), 2.5);
    }

    #[test]
    fn test_integer_labels_are_normalized() {
        let doc = r#"{ "coloring": [ { "name": "ints", "graph": { "1": [2], "2": ["1"] } } ] }"#;
        let set = InstanceLoader::new().from_str(doc).unwrap();
        let graph = &set.coloring()[0].graph;
        assert_eq!(graph.index_of("2"), Some(VertexIndex::new(1)));
        assert_eq!(graph.neighbors(VertexIndex::new(0)), &[VertexIndex::new(1)]);
    }

    #[test]
    fn test_labels_beyond_i64_are_normalized() {
        let doc = r#"{ "coloring": [ { "name": "wide", "graph": {
            "18446744073709551615": [-9223372036854775808],
            "-9223372036854775808": [18446744073709551615]
        } } ] }"#;
        let set = InstanceLoader::new().from_str(doc).unwrap();
        let graph = &set.coloring()[0].graph;
        assert_eq!(graph.labels(), ["18446744073709551615", "-9223372036854775808"]);
        assert_eq!(graph.degree(VertexIndex::new(0)), 1);
    }

    #[test]
    fn test_validation_errors_name_the_instance() {
        let doc = r#"{ "coloring": [ { "name": "broken", "graph": { "A": ["Q"] } } ] }"#;
        match InstanceLoader::new().from_str(doc) {
            Err(InstanceLoadError::Validation { instance, source }) => {
                assert_eq!(instance, "broken");
                assert!(matches!(source, ValidationError::UndeclaredVertex { .. }));
            }
            other => panic!("expected Validation error, got {:?}", other),
        }

        let doc = r#"{ "tsp": [ { "name": "lonely", "cities": [[1, 1]] } ] }"#;
        match InstanceLoader::new().from_str(doc) {
            Err(InstanceLoadError::Validation { instance, source }) => {
                assert_eq!(instance, "lonely");
                assert_eq!(source, ValidationError::TooFewCities { found: 1 });
            }
            other => panic!("expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_graph_object_is_rejected() {
        let doc = r#"{ "coloring": [ { "name": "nothing", "graph": {} } ] }"#;
        let err = InstanceLoader::new().from_str(doc).unwrap_err();
        assert!(err.to_string().contains("empty graph"));
    }

    #[test]
    fn test_empty_document_handling() {
        assert!(matches!(
            InstanceLoader::new().from_str("{}"),
            Err(InstanceLoadError::EmptyInstanceSet)
        ));
        let set = InstanceLoader::new().allow_empty(true).from_str("{}").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_structural_errors_are_json_errors() {
        assert!(matches!(
            InstanceLoader::new().from_str(r#"{ "tsp": [ { "name": "x", "cities": [[1]] } ] }"#),
            Err(InstanceLoadError::Json(_))
        ));
        assert!(matches!(
            InstanceLoader::new().from_str(r#"{ "unexpected": [] }"#),
            Err(InstanceLoadError::Json(_))
        ));
    }

    #[test]
    fn test_default_example() {
        let set = InstanceSet::default_example();
        assert_eq!(set.coloring().len(), 1);
        assert_eq!(set.tours().len(), 1);
        assert_eq!(set.coloring()[0].graph.num_vertices(), 5);
        assert_eq!(set.tours()[0].cities.len(), 6);
    }
}
