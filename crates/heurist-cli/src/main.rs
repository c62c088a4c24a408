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

//! Heurist CLI: coloring and TSP heuristics against exact baselines.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "heurist")]
#[command(version, about = "Compare graph coloring and TSP heuristics against exact solutions")]
struct Cli {
    /// Log debug output, including search statistics.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every algorithm on an instance file, or on the built-in example.
    Run {
        /// Path to an instance document (JSON). Uses the built-in example if omitted.
        #[arg(short, long)]
        instance: Option<PathBuf>,

        /// Write all result records to this JSON file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Largest graph the exact coloring search runs on.
        #[arg(long, default_value_t = heurist_analysis::config::DEFAULT_EXACT_COLORING_VERTICES)]
        max_exact_vertices: usize,

        /// Largest city set the exhaustive tour search runs on.
        #[arg(long, default_value_t = heurist_analysis::config::DEFAULT_EXACT_TOUR_CITIES)]
        max_exact_cities: usize,

        /// Abort the exact coloring search after this many seconds.
        #[arg(long)]
        exact_time_limit_secs: Option<f64>,

        /// Stop 2-opt after this many seconds and keep the best tour found.
        #[arg(long)]
        two_opt_time_limit_secs: Option<f64>,

        /// Print search progress tables.
        #[arg(long)]
        log_search: bool,
    },

    /// Load and validate an instance file without solving it.
    Validate {
        /// Path to an instance document (JSON).
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    commands::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            instance,
            output,
            max_exact_vertices,
            max_exact_cities,
            exact_time_limit_secs,
            two_opt_time_limit_secs,
            log_search,
        } => commands::run(commands::RunArgs {
            instance: instance.as_deref(),
            output: output.as_deref(),
            max_exact_vertices,
            max_exact_cities,
            exact_time_limit_secs,
            two_opt_time_limit_secs,
            log_search,
        }),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
