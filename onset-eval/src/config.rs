//! Comparison configuration types
//!
//! This module defines the options accepted by the matcher. Algorithm-specific
//! options belong to the detector and live in [`crate::harness::DetectorOptions`].

use serde::{Deserialize, Serialize};

/// Default tolerance window width in seconds
pub const DEFAULT_TIME_PRECISION: f64 = 0.05;

/// Configuration for event comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Full width of the tolerance window in seconds; a guess matches when it
    /// lies within `time_precision / 2` of a ground-truth event.
    ///
    /// Must be smaller than the spacing between consecutive ground-truth
    /// events of the same type. This is not checked.
    #[serde(default = "default_time_precision")]
    pub time_precision: f64,
}

fn default_time_precision() -> f64 {
    DEFAULT_TIME_PRECISION
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            time_precision: DEFAULT_TIME_PRECISION,
        }
    }
}

impl CompareConfig {
    /// Create a comparison configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the tolerance window width
    pub fn with_time_precision(mut self, time_precision: f64) -> Self {
        self.time_precision = time_precision;
        self
    }

    /// Half-width of the tolerance window
    pub fn half_window(&self) -> f64 {
        self.time_precision / 2.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_config_defaults() {
        let config = CompareConfig::new();
        assert_eq!(config.time_precision, 0.05);
        assert_eq!(config.half_window(), 0.025);
    }

    #[test]
    fn test_compare_config_builder() {
        let config = CompareConfig::new().with_time_precision(0.2);
        assert_eq!(config.time_precision, 0.2);
        assert_eq!(config.half_window(), 0.1);
    }

    #[test]
    fn test_compare_config_deserialization() {
        let config: CompareConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CompareConfig::default());

        let config: CompareConfig = serde_json::from_str(r#"{"time_precision": 0.1}"#).unwrap();
        assert_eq!(config.time_precision, 0.1);
    }
}
