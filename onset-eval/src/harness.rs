//! Algorithm test harness
//!
//! Glue between a pluggable onset detector and the matcher: run the detector
//! on an input, compare its output with the ground truth, return the counts.
//! Also finds the audio/ground-truth pairs of a data directory.

use crate::config::CompareConfig;
use crate::matcher::compare_events_with;
use crate::types::{Event, MatchResult, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Algorithm-specific options, passed through to the detector untouched
pub type DetectorOptions = serde_json::Map<String, serde_json::Value>;

/// Suffix that turns `take.wav` into its ground-truth file `take_events.json`
pub const GROUND_TRUTH_SUFFIX: &str = "_events.json";

/// Common trait for onset detection algorithms under test
pub trait OnsetDetector: Send + Sync {
    /// Name used in logs and error messages
    fn name(&self) -> &str;

    /// Produce the guessed events for one input
    fn detect(&self, input: &Path, options: &DetectorOptions) -> Result<Vec<Event>>;
}

/// Run `detector` on `input` and compare the guesses with `ground_truth`
///
/// # Example
/// ```
/// use onset_eval::{test_algorithm, CompareConfig, DetectorOptions, Event, MatchResult, OnsetDetector};
/// use std::path::Path;
///
/// struct Fixed;
///
/// impl OnsetDetector for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn detect(&self, _input: &Path, _options: &DetectorOptions) -> onset_eval::Result<Vec<Event>> {
///         Ok(vec![Event::note_on(1.01)])
///     }
/// }
///
/// let truth = vec![Event::note_on(1.0)];
/// let result = test_algorithm(
///     Path::new("take.wav"),
///     &truth,
///     &Fixed,
///     &DetectorOptions::new(),
///     &CompareConfig::new(),
/// )
/// .unwrap();
/// assert_eq!(result, MatchResult::new(1, 0, 0));
/// ```
pub fn test_algorithm<D>(
    input: &Path,
    ground_truth: &[Event],
    detector: &D,
    options: &DetectorOptions,
    compare: &CompareConfig,
) -> Result<MatchResult>
where
    D: OnsetDetector + ?Sized,
{
    log::debug!("Running detector '{}' on {:?}", detector.name(), input);
    let guess = detector.detect(input, options)?;
    log::debug!("Detector '{}' produced {} events", detector.name(), guess.len());

    Ok(compare_events_with(ground_truth, &guess, compare))
}

/// An audio file paired with its ground-truth event file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationCase {
    pub audio: PathBuf,
    pub ground_truth: PathBuf,
}

impl EvaluationCase {
    /// File name without the `.wav` extension
    pub fn stem(&self) -> &str {
        self.audio
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// Find every `X.wav` in `dir` that has an `X_events.json` next to it
///
/// Results are sorted by audio path. Audio files without ground truth are
/// skipped.
pub fn discover(dir: &Path) -> Result<Vec<EvaluationCase>> {
    log::info!("Discovering evaluation cases in {:?}", dir);

    let mut audio_files: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    audio_files.retain(|path| path.is_file() && is_wav(path));
    audio_files.sort();

    let mut cases = Vec::new();
    for audio in audio_files {
        let ground_truth = ground_truth_path(&audio);
        if ground_truth.is_file() {
            cases.push(EvaluationCase { audio, ground_truth });
        } else {
            log::debug!("No ground truth for {:?}, skipping", audio);
        }
    }

    log::info!("Found {} evaluation cases", cases.len());
    Ok(cases)
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

/// `dir/take.wav` -> `dir/take_events.json`
pub fn ground_truth_path(audio: &Path) -> PathBuf {
    let stem = audio
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    audio.with_file_name(format!("{}{}", stem, GROUND_TRUTH_SUFFIX))
}
