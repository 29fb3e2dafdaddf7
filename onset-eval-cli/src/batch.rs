//! Batch evaluation over a data directory
//!
//! Each discovered case is scored independently on the rayon pool. A failing
//! case is recorded in its outcome and does not stop the others.

use crate::config::AppConfig;
use crate::detector::PrecomputedDetector;
use anyhow::{Context, Result};
use onset_eval::{discover, test_algorithm, CompareConfig, DetectorOptions, EvaluationCase, MatchResult, TestFile};
use rayon::prelude::*;
use serde::Serialize;

/// Per-file outcome of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Audio file name
    pub file: String,
    pub result: Option<MatchResult>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f_measure: Option<f64>,
    pub error: Option<String>,
}

impl FileOutcome {
    fn scored(file: String, result: MatchResult) -> Self {
        Self {
            file,
            precision: result.precision().ok(),
            recall: result.recall().ok(),
            f_measure: result.f_measure().ok(),
            result: Some(result),
            error: None,
        }
    }

    fn failed(file: String, error: &anyhow::Error) -> Self {
        Self {
            file,
            result: None,
            precision: None,
            recall: None,
            f_measure: None,
            error: Some(format!("{:#}", error)),
        }
    }
}

/// Discover and score every case described by `config`
pub fn run_batch(config: &AppConfig) -> Result<Vec<FileOutcome>> {
    let cases = discover(&config.input.dir)
        .with_context(|| format!("Failed to scan input directory: {:?}", config.input.dir))?;

    let detector = PrecomputedDetector::new(config.guess_dir(), config.input.guess_suffix.clone());
    let options = config.detector_options()?;

    let outcomes: Vec<FileOutcome> = cases
        .par_iter()
        .map(|case| {
            let file = case
                .audio
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            match evaluate_case(case, &detector, &options, &config.compare) {
                Ok(result) => {
                    log::debug!("{}: {}", file, result);
                    FileOutcome::scored(file, result)
                }
                Err(e) => {
                    log::warn!("{}: {:#}", file, e);
                    FileOutcome::failed(file, &e)
                }
            }
        })
        .collect();

    Ok(outcomes)
}

fn evaluate_case(
    case: &EvaluationCase,
    detector: &PrecomputedDetector,
    options: &DetectorOptions,
    compare: &CompareConfig,
) -> Result<MatchResult> {
    let ground_truth = TestFile::load(&case.ground_truth)
        .with_context(|| format!("Failed to load ground truth: {:?}", case.ground_truth))?;

    let result = test_algorithm(&case.audio, &ground_truth.events, detector, options, compare)
        .with_context(|| format!("Failed to evaluate {:?}", case.audio))?;
    Ok(result)
}
