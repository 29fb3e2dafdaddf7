//! Precomputed-guess detector
//!
//! The CLI does not run onset detection itself. It scores detector output
//! that was written to disk beforehand as `<guess_dir>/<stem><suffix>`.

use onset_eval::{DetectorOptions, EvalError, Event, EventType, OnsetDetector, TestFile};
use std::path::{Path, PathBuf};

pub struct PrecomputedDetector {
    guess_dir: PathBuf,
    suffix: String,
}

impl PrecomputedDetector {
    pub fn new(guess_dir: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            guess_dir: guess_dir.into(),
            suffix: suffix.into(),
        }
    }

    /// `take.wav` -> `<guess_dir>/take<suffix>`
    pub fn guess_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.guess_dir.join(format!("{}{}", stem, self.suffix))
    }
}

impl OnsetDetector for PrecomputedDetector {
    fn name(&self) -> &str {
        "precomputed"
    }

    /// Recognized option: `event_type` keeps only events with that tag
    fn detect(&self, input: &Path, options: &DetectorOptions) -> onset_eval::Result<Vec<Event>> {
        let path = self.guess_path(input);
        if !path.is_file() {
            return Err(EvalError::Detector {
                detector: self.name().to_string(),
                message: format!("guess file not found: {:?}", path),
            });
        }

        let mut events = TestFile::load(&path)?.events;

        if let Some(tag) = options.get("event_type").and_then(|v| v.as_str()) {
            let wanted = EventType::from(tag);
            events.retain(|e| e.event_type == wanted);
        }

        Ok(events)
    }
}
