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

//! CLI command implementations.

use heurist_analysis::config::AnalysisConfig;
use heurist_analysis::export::write_json;
use heurist_analysis::runner::Analyzer;
use heurist_model::loading::{InstanceLoader, InstanceSet};
use heurist_search::guard::SizeLimit;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Options of the `run` command.
pub struct RunArgs<'a> {
    pub instance: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub max_exact_vertices: usize,
    pub max_exact_cities: usize,
    pub exact_time_limit_secs: Option<f64>,
    pub two_opt_time_limit_secs: Option<f64>,
    pub log_search: bool,
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Analyze an instance document, or the built-in example.
pub fn run(args: RunArgs<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let exact_time_limit =
        parse_time_limit("--exact-time-limit-secs", args.exact_time_limit_secs)?;
    let two_opt_time_limit =
        parse_time_limit("--two-opt-time-limit-secs", args.two_opt_time_limit_secs)?;

    let instances = match args.instance {
        Some(path) => {
            info!(path = %path.display(), "loading_instances");
            InstanceLoader::new().from_path(path)?
        }
        None => {
            info!("no instance file given, using the built-in example");
            InstanceSet::default_example()
        }
    };

    let config = AnalysisConfig::new()
        .with_exact_coloring_limit(SizeLimit::new(args.max_exact_vertices))
        .with_exact_tour_limit(SizeLimit::new(args.max_exact_cities))
        .with_exact_time_limit(exact_time_limit)
        .with_two_opt_time_limit(two_opt_time_limit)
        .with_search_logging(args.log_search);

    let report = Analyzer::new(config).analyze(&instances);
    println!("{report}");

    if let Some(path) = args.output {
        write_json(&report, path)?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}

fn parse_time_limit(flag: &str, secs: Option<f64>) -> Result<Option<Duration>, String> {
    secs.map(|secs| {
        Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid {flag} {secs}: {e}"))
    })
    .transpose()
}

/// Validate an instance document.
pub fn validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let instances = InstanceLoader::new().from_path(path)?;

    println!("Validating: {}", path.display());
    println!("  Coloring instances: {}", instances.coloring().len());
    for instance in instances.coloring() {
        println!(
            "    {:<16} {} vertices, {} adjacency entries",
            instance.name,
            instance.graph.num_vertices(),
            instance.graph.num_adjacency_entries()
        );
    }
    println!("  TSP instances:      {}", instances.tours().len());
    for instance in instances.tours() {
        println!("    {:<16} {} cities", instance.name, instance.cities.len());
    }
    println!("  ✓ Valid");
    Ok(())
}
