//! Event file format
//!
//! A test file is a named event timeline stored as JSON:
//!
//! ```json
//! {
//!   "filename": "take_01.wav",
//!   "events": [
//!     {"type": "NoteOn", "time": 1.5, "data": {"velocity": 0.57}}
//!   ]
//! }
//! ```

use crate::types::{Event, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// A named collection of events, usually the annotation of one audio file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestFile {
    /// Name of the audio file the events belong to
    pub filename: String,
    /// Events in file order
    pub events: Vec<Event>,
}

impl TestFile {
    pub fn new(filename: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            filename: filename.into(),
            events,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a test file from disk
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading event file: {:?}", path);

        let reader = BufReader::new(File::open(path)?);
        let test_file: TestFile = serde_json::from_reader(reader)?;

        log::debug!(
            "Loaded {} events for '{}' from {:?}",
            test_file.events.len(),
            test_file.filename,
            path
        );
        Ok(test_file)
    }

    /// Write a test file to disk, replacing any existing content
    pub fn dump(&self, path: &Path) -> Result<()> {
        log::info!("Writing event file: {:?}", path);

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
