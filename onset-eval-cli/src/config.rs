//! Configuration loading and parsing

use anyhow::{Context, Result};
use onset_eval::{CompareConfig, DetectorOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub compare: CompareConfig,
    /// Algorithm-specific options handed to the detector as-is
    #[serde(default)]
    pub detector: toml::Table,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Directory holding `X.wav` + `X_events.json` pairs
    pub dir: PathBuf,
    /// Directory holding the detector output (default: same as `dir`)
    pub guess_dir: Option<PathBuf>,
    #[serde(default = "default_guess_suffix")]
    pub guess_suffix: String,
}

fn default_guess_suffix() -> String {
    "_guess.json".to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

impl AppConfig {
    /// Detector options converted to the library's JSON representation
    pub fn detector_options(&self) -> Result<DetectorOptions> {
        let value = serde_json::to_value(&self.detector)
            .context("Failed to convert detector options")?;
        match value {
            serde_json::Value::Object(map) => Ok(map),
            other => anyhow::bail!("Detector options must be a table, got {}", other),
        }
    }

    pub fn guess_dir(&self) -> &Path {
        self.input.guess_dir.as_deref().unwrap_or(&self.input.dir)
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_time_precision(config.compare.time_precision)
        .with_context(|| format!("Invalid [compare] section in {:?}", path))?;

    Ok(config)
}

/// Reject a window width the matcher cannot use (zero, negative, NaN)
pub fn validate_time_precision(time_precision: f64) -> Result<f64> {
    if time_precision.is_nan() || time_precision <= 0.0 {
        anyhow::bail!("time_precision must be positive, got {}", time_precision);
    }
    Ok(time_precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            dir = "data"

            [compare]
            time_precision = 0.1

            [detector]
            threshold = 0.3
            method = "spectral_flux"

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.dir, PathBuf::from("data"));
        assert_eq!(config.guess_dir(), Path::new("data"));
        assert_eq!(config.input.guess_suffix, "_guess.json");
        assert_eq!(config.compare.time_precision, 0.1);
        assert_eq!(config.output.format, OutputFormat::Json);

        let options = config.detector_options().unwrap();
        assert_eq!(options["threshold"], 0.3);
        assert_eq!(options["method"], "spectral_flux");
    }

    #[test]
    fn test_config_defaults() {
        let toml_content = r#"
            [input]
            dir = "data"
            guess_dir = "out"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.guess_dir(), Path::new("out"));
        assert_eq!(config.compare, CompareConfig::default());
        assert_eq!(config.output.format, OutputFormat::Txt);
        assert!(config.output.file.is_none());
        assert!(config.detector_options().unwrap().is_empty());
    }

    #[test]
    fn test_load_config_rejects_bad_precision() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[input]\ndir = \"data\"\n\n[compare]\ntime_precision = 0.0\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_validate_time_precision() {
        assert_eq!(validate_time_precision(0.05).unwrap(), 0.05);
        assert!(validate_time_precision(0.0).is_err());
        assert!(validate_time_precision(-0.1).is_err());
        assert!(validate_time_precision(f64::NAN).is_err());
    }
}
