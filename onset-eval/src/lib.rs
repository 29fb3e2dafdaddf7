//! Onset Evaluation Library
//!
//! Scores the output of an onset detection algorithm against annotated ground
//! truth: correct detections (CD), false positives (FP) and false negatives
//! (FN) within a tolerance window, plus precision, recall and F-measure.
//!
//! # Architecture
//!
//! The library is intentionally minimal:
//! - Event model and JSON event files
//! - The matcher, a pure function of two event lists and a window width
//! - Metric functions over the match counts
//! - A small harness that runs a detector and scores its output
//!
//! The library does NOT:
//! - Process audio or detect onsets itself
//! - Aggregate statistics across files
//!
//! File discovery glue, parallel batch runs and reports live in the
//! application layer (onset-eval-cli).
//!
//! # Example Usage
//!
//! ```
//! use onset_eval::{compare_events, Event, MatchResult};
//!
//! let truth = vec![Event::note_on(1.0), Event::note_on(2.0)];
//! let guess = vec![Event::note_on(1.1), Event::note_on(2.1), Event::note_on(2.01)];
//!
//! let result = compare_events(&truth, &guess, 0.2);
//! assert_eq!(result, MatchResult::new(2, 1, 0));
//!
//! println!("precision: {:.3}", result.precision().unwrap());
//! println!("recall:    {:.3}", result.recall().unwrap());
//! println!("f-measure: {:.3}", result.f_measure().unwrap());
//! ```

// Public modules
pub mod config;
pub mod format;
pub mod harness;
pub mod matcher;
pub mod metrics;
pub mod types;

// Re-export main types for convenience
pub use config::{CompareConfig, DEFAULT_TIME_PRECISION};
pub use format::TestFile;
pub use harness::{discover, test_algorithm, DetectorOptions, EvaluationCase, OnsetDetector};
pub use matcher::{compare_events, compare_events_detailed, compare_events_with, MatchReport};
pub use metrics::{f_measure, false_positive_rate, precision, recall};
pub use types::{EvalError, Event, EventData, EventType, MatchResult, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: empty timelines produce empty counts
        let result = compare_events(&[], &[], DEFAULT_TIME_PRECISION);
        assert_eq!(result, MatchResult::default());
        assert!(result.precision().is_err());
    }
}
