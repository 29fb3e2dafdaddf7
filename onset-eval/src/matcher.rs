//! Event matcher
//!
//! Reconciles a guess timeline with a ground-truth timeline under a symmetric
//! tolerance window and counts correct detections, false positives and false
//! negatives.
//!
//! For each ground-truth event (in input order) every guess event is scanned
//! (in input order). The first guess inside the window is a correct detection;
//! any further guess inside the same window is a false positive (doubled
//! onset). A ground-truth event with no guess in its window is a false
//! negative. Guesses that never fell inside any window are false positives.
//!
//! A guess that already matched one ground-truth event is still a candidate
//! for the next one, so with overlapping windows a single guess can be
//! counted more than once, each time as a correct detection. The report
//! counts such guesses as reused guesses; they do not show up as false
//! negatives. Consumption is tracked by index, so duplicate-valued guesses
//! stay distinct.

use crate::config::CompareConfig;
use crate::types::{Event, MatchResult};
use serde::Serialize;

/// Compare a guess event list with a ground-truth one
///
/// `time_precision` is the full window width in seconds. It must be smaller
/// than the spacing between consecutive ground-truth events of the same type;
/// otherwise one guess can satisfy several ground-truth events and the counts
/// depend on input order.
///
/// # Example
/// ```
/// use onset_eval::{compare_events, Event, MatchResult};
///
/// let truth = vec![Event::note_on(1.0)];
/// let guess = vec![Event::note_on(1.5)];
///
/// assert_eq!(compare_events(&truth, &guess, 1.0), MatchResult::new(1, 0, 0));
/// assert_eq!(compare_events(&truth, &guess, 0.9), MatchResult::new(0, 1, 1));
/// ```
pub fn compare_events(ground_truth: &[Event], guess: &[Event], time_precision: f64) -> MatchResult {
    compare_events_detailed(ground_truth, guess, time_precision).result
}

/// Same as [`compare_events`], taking the window from a [`CompareConfig`]
pub fn compare_events_with(ground_truth: &[Event], guess: &[Event], config: &CompareConfig) -> MatchResult {
    compare_events(ground_truth, guess, config.time_precision)
}

/// Compare two event lists and keep the pairing table
///
/// The counts in the returned report are identical to [`compare_events`].
pub fn compare_events_detailed(ground_truth: &[Event], guess: &[Event], time_precision: f64) -> MatchReport {
    let half = time_precision / 2.;

    let mut result = MatchResult::default();
    let mut pairs: Vec<Vec<usize>> = Vec::with_capacity(ground_truth.len());
    let mut uses = vec![0usize; guess.len()];

    for (gt_index, gt_event) in ground_truth.iter().enumerate() {
        let mut matched = Vec::new();

        for (guess_index, guess_event) in guess.iter().enumerate() {
            if !in_window(gt_event, guess_event, half) {
                continue;
            }

            if matched.is_empty() {
                result.cd += 1;
            } else {
                result.fp += 1;
            }

            log::trace!(
                "ground truth #{} ({}) matched guess #{} ({})",
                gt_index,
                gt_event,
                guess_index,
                guess_event
            );
            matched.push(guess_index);
            uses[guess_index] += 1;
        }

        if matched.is_empty() {
            log::trace!("ground truth #{} ({}) missed", gt_index, gt_event);
            result.fn_ += 1;
        }

        pairs.push(matched);
    }

    result.fp += uses.iter().filter(|&&count| count == 0).count();

    let doubled_onsets = pairs
        .iter()
        .map(|matched| matched.len().saturating_sub(1))
        .sum();
    let reused_guesses = uses.iter().filter(|&&count| count > 1).count();

    log::debug!(
        "compared {} ground-truth events with {} guesses (window {}s): {}",
        ground_truth.len(),
        guess.len(),
        time_precision,
        result
    );

    MatchReport {
        result,
        pairs,
        doubled_onsets,
        reused_guesses,
    }
}

/// Window test, evaluated as `guess + half >= truth && guess - half <= truth`
fn in_window(gt_event: &Event, guess_event: &Event, half: f64) -> bool {
    guess_event.time + half >= gt_event.time
        && guess_event.time - half <= gt_event.time
        && guess_event.event_type == gt_event.event_type
}

/// Counts plus the pairing behind them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// The counts, identical to what [`compare_events`] returns
    pub result: MatchResult,
    /// For each ground-truth index, the guess indices inside its window
    pub pairs: Vec<Vec<usize>>,
    /// Matches beyond the first for a ground-truth event (subset of FP)
    pub doubled_onsets: usize,
    /// Guess events that fell inside more than one ground-truth window and
    /// were scored once per window
    pub reused_guesses: usize,
}

impl MatchReport {
    /// Guess indices paired with the given ground-truth event
    pub fn matches_for(&self, gt_index: usize) -> &[usize] {
        self.pairs.get(gt_index).map(Vec::as_slice).unwrap_or(&[])
    }
}
