//! Onset Evaluation CLI Application
//!
//! This is the command-line driver for the onset-eval library.
//! It adds:
//! - Comparison of two event files (simple mode)
//! - Batch evaluation of a data directory from a config file
//! - Text and JSON reports

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

mod batch;
mod config;
mod detector;
mod report;

use config::OutputFormat;

/// Onset Eval - Score onset detection output against ground truth
#[derive(Parser, Debug)]
#[command(name = "onset-eval-cli")]
#[command(about = "Score onset detection output against annotated ground truth", long_about = None)]
#[command(version)]
struct Args {
    /// Ground-truth event file (JSON)
    #[arg(short, long, value_name = "FILE", requires = "guess")]
    truth: Option<PathBuf>,

    /// Guessed event file (JSON)
    #[arg(short, long, value_name = "FILE", requires = "truth")]
    guess: Option<PathBuf>,

    /// Path to configuration file (config.toml) for batch evaluation
    #[arg(short, long, value_name = "FILE", conflicts_with = "truth")]
    config: Option<PathBuf>,

    /// Tolerance window width in seconds (overrides the config file)
    #[arg(long, value_name = "SECONDS")]
    time_precision: Option<f64>,

    /// Report format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Onset Eval CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using onset-eval library v{}", onset_eval::VERSION);

    if let (Some(truth), Some(guess)) = (&args.truth, &args.guess) {
        compare_mode(truth, guess, &args)?;
    } else if let Some(config_path) = &args.config {
        batch_mode(config_path, &args)?;
    } else {
        // No arguments - show help
        println!("Onset Eval - No input specified");
        println!("\nQuick Start:");
        println!("  onset-eval-cli --truth take_events.json --guess take_guess.json");
        println!("\nFor batch evaluation:");
        println!("  onset-eval-cli --config config.toml");
        println!("\nUse --help for more options");
    }

    Ok(())
}

/// Compare two event files and print counts and metrics
fn compare_mode(truth_path: &Path, guess_path: &Path, args: &Args) -> Result<()> {
    use onset_eval::{compare_events_detailed, TestFile, DEFAULT_TIME_PRECISION};

    let time_precision =
        config::validate_time_precision(args.time_precision.unwrap_or(DEFAULT_TIME_PRECISION))?;

    let truth = TestFile::load(truth_path)
        .with_context(|| format!("Failed to load ground truth: {:?}", truth_path))?;
    let guess = TestFile::load(guess_path)
        .with_context(|| format!("Failed to load guesses: {:?}", guess_path))?;

    let report = compare_events_detailed(&truth.events, &guess.events, time_precision);
    let result = report.result;

    let text = match args.format.unwrap_or_default() {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "truth": truth.filename,
                "guess": guess.filename,
                "time_precision": time_precision,
                "result": result,
                "precision": result.precision().ok(),
                "recall": result.recall().ok(),
                "f_measure": result.f_measure().ok(),
                "doubled_onsets": report.doubled_onsets,
                "reused_guesses": report.reused_guesses,
            });
            serde_json::to_string_pretty(&value)? + "\n"
        }
        OutputFormat::Txt => {
            let show = |value: onset_eval::Result<f64>| match value {
                Ok(v) => format!("{:.3}", v),
                Err(e) => format!("n/a ({})", e),
            };
            let mut text = String::new();
            text.push_str(&format!("Ground truth: {} ({} events)\n", truth.filename, truth.events.len()));
            text.push_str(&format!("Guess:        {} ({} events)\n", guess.filename, guess.events.len()));
            text.push_str(&format!("Time precision: {}s\n\n", time_precision));
            text.push_str(&format!("  CD: {}\n  FP: {}\n  FN: {}\n\n", result.cd, result.fp, result.fn_));
            text.push_str(&format!("  Precision: {}\n", show(result.precision())));
            text.push_str(&format!("  Recall:    {}\n", show(result.recall())));
            text.push_str(&format!("  F-measure: {}\n", show(result.f_measure())));
            text.push_str(&format!("  FP rate:   {}\n", show(result.false_positive_rate())));
            text.push_str(&format!("  Doubled onsets: {} ({})\n", report.doubled_onsets, show(report.doubled_rate())));
            text.push_str(&format!("  Reused guesses: {}\n", report.reused_guesses));
            text
        }
    };

    write_output(&text, args.output.as_deref())
}

/// Batch mode - discover cases from a config file and score each one
fn batch_mode(config_path: &Path, args: &Args) -> Result<()> {
    log::info!("Loading configuration from: {:?}", config_path);
    let mut config = config::load_config(config_path)?;
    log::debug!("Configuration loaded successfully");

    if let Some(time_precision) = args.time_precision {
        config.compare.time_precision = config::validate_time_precision(time_precision)?;
    }
    let format = args.format.unwrap_or(config.output.format);

    let outcomes = batch::run_batch(&config)?;
    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    log::info!("Evaluated {} files ({} failed)", outcomes.len(), failed);

    let text = report::render(&outcomes, config.compare.time_precision, format)?;
    let output = args.output.as_deref().or(config.output.file.as_deref());
    write_output(&text, output)
}

fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write report: {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
