//! Precision, recall and F-measure
//!
//! * Precision: `P = cd / (cd + fp)`
//! * Recall: `R = cd / (cd + fn)`
//! * F-measure: `F = 2PR / (P + R)`
//!
//! A zero denominator is reported as [`EvalError::UndefinedMetric`]; these
//! functions never return NaN or infinity. Callers evaluating files without
//! events should skip the metric or handle the error.

use crate::matcher::MatchReport;
use crate::types::{EvalError, MatchResult, Result};

fn ratio(metric: &'static str, reason: &'static str, numerator: usize, denominator: usize) -> Result<f64> {
    if denominator == 0 {
        return Err(EvalError::UndefinedMetric { metric, reason });
    }
    Ok(numerator as f64 / denominator as f64)
}

/// `cd / (cd + fp)`
pub fn precision(result: &MatchResult) -> Result<f64> {
    ratio("precision", "no guess events (cd + fp == 0)", result.cd, result.cd + result.fp)
}

/// `cd / (cd + fn)`
pub fn recall(result: &MatchResult) -> Result<f64> {
    ratio("recall", "no ground-truth events (cd + fn == 0)", result.cd, result.cd + result.fn_)
}

/// `2PR / (P + R)`
pub fn f_measure(result: &MatchResult) -> Result<f64> {
    let p = precision(result)?;
    let r = recall(result)?;
    if p + r == 0.0 {
        return Err(EvalError::UndefinedMetric {
            metric: "f-measure",
            reason: "no correct detections (P + R == 0)",
        });
    }
    Ok(2. * p * r / (p + r))
}

/// Percentage of guesses that are false positives: `100 * fp / (cd + fp)`
pub fn false_positive_rate(result: &MatchResult) -> Result<f64> {
    Ok(100. * ratio("false positive rate", "no guess events (cd + fp == 0)", result.fp, result.cd + result.fp)?)
}

impl MatchResult {
    pub fn precision(&self) -> Result<f64> {
        precision(self)
    }

    pub fn recall(&self) -> Result<f64> {
        recall(self)
    }

    pub fn f_measure(&self) -> Result<f64> {
        f_measure(self)
    }

    pub fn false_positive_rate(&self) -> Result<f64> {
        false_positive_rate(self)
    }
}

impl MatchReport {
    /// Share of false positives caused by doubled onsets: `100 * doubled / fp`
    pub fn doubled_rate(&self) -> Result<f64> {
        Ok(100. * ratio("doubled onset rate", "no false positives", self.doubled_onsets, self.result.fp)?)
    }
}
