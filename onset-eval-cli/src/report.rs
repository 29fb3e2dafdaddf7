//! Report generation
//!
//! Renders per-file outcomes as an ASCII table or as JSON. Files are listed
//! individually; no totals are computed across files.

use crate::batch::FileOutcome;
use crate::config::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Write};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    version: &'static str,
    time_precision: f64,
    files: &'a [FileOutcome],
}

pub fn render(outcomes: &[FileOutcome], time_precision: f64, format: OutputFormat) -> Result<String> {
    let generated_at = Utc::now();
    match format {
        OutputFormat::Txt => Ok(render_txt(outcomes, time_precision, generated_at)?),
        OutputFormat::Json => {
            let report = JsonReport {
                generated_at,
                version: onset_eval::VERSION,
                time_precision,
                files: outcomes,
            };
            Ok(serde_json::to_string_pretty(&report)? + "\n")
        }
    }
}

fn metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "n/a".to_string(),
    }
}

fn render_txt(
    outcomes: &[FileOutcome],
    time_precision: f64,
    generated_at: DateTime<Utc>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let width = outcomes
        .iter()
        .map(|o| o.file.len())
        .max()
        .unwrap_or(0)
        .max("File".len());

    writeln!(out, "Onset evaluation report ({})", generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(out, "Time precision: {}s\n", time_precision)?;
    writeln!(
        out,
        "{:<width$}  {:>5}  {:>5}  {:>5}  {:>9}  {:>6}  {:>9}",
        "File", "CD", "FP", "FN", "Precision", "Recall", "F-measure",
        width = width
    )?;
    writeln!(out, "{}", "-".repeat(width + 55))?;

    for outcome in outcomes {
        match (&outcome.result, &outcome.error) {
            (Some(result), _) => {
                writeln!(
                    out,
                    "{:<width$}  {:>5}  {:>5}  {:>5}  {:>9}  {:>6}  {:>9}",
                    outcome.file,
                    result.cd,
                    result.fp,
                    result.fn_,
                    metric(outcome.precision),
                    metric(outcome.recall),
                    metric(outcome.f_measure),
                    width = width
                )?;
            }
            (None, error) => {
                writeln!(
                    out,
                    "{:<width$}  error: {}",
                    outcome.file,
                    error.as_deref().unwrap_or("unknown"),
                    width = width
                )?;
            }
        }
    }

    Ok(out)
}
