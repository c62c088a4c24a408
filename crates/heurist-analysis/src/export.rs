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

//! JSON persistence of analysis results.

use crate::record::{Algorithm, Problem, Solution, SolutionValue};
use crate::report::AnalysisReport;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting results.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// One flat row per algorithm run.
#[derive(Debug, Serialize)]
struct ExportedRecord<'a> {
    problem: Problem,
    instance: &'a str,
    algorithm: Algorithm,
    seconds: f64,
    value: SolutionValue,
    ratio: Option<f64>,
    solution: &'a Solution,
}

fn exported_records(report: &AnalysisReport) -> Vec<ExportedRecord<'_>> {
    report
        .instances()
        .iter()
        .flat_map(|instance| {
            instance.records().iter().map(move |record| ExportedRecord {
                problem: instance.problem(),
                instance: instance.name(),
                algorithm: record.algorithm(),
                seconds: record.elapsed().as_secs_f64(),
                value: record.value(),
                ratio: record.ratio(),
                solution: record.solution(),
            })
        })
        .collect()
}

/// Writes all records of `report` as a pretty-printed JSON array.
pub fn to_writer<W>(report: &AnalysisReport, writer: W) -> Result<(), ExportError>
where
    W: Write,
{
    serde_json::to_writer_pretty(writer, &exported_records(report))?;
    Ok(())
}

/// Renders all records of `report` as a pretty-printed JSON string.
pub fn to_string(report: &AnalysisReport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&exported_records(report))?)
}

/// Writes all records of `report` to the file at `path`, replacing it.
pub fn write_json<P>(report: &AnalysisReport, path: P) -> Result<(), ExportError>
where
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer(report, &mut writer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
