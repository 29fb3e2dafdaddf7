//! Core types for the onset evaluation library
//!
//! This module defines the event records that ground-truth and guess timelines
//! are made of, the count record produced by the matcher, and the error type
//! shared by the whole library.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;

/// Opaque key-value payload attached to an event (e.g. `{"velocity": 0.57}`)
pub type EventData = serde_json::Map<String, serde_json::Value>;

/// Errors that can occur during evaluation
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("{metric} is undefined: {reason}")]
    UndefinedMetric {
        metric: &'static str,
        reason: &'static str,
    },

    #[error("Malformed event data: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Detector '{detector}' failed: {message}")]
    Detector { detector: String, message: String },
}

/// Event type tag
///
/// Serialized as a plain string. Tags other than the known ones are kept
/// verbatim so files from other producers survive a round-trip.
///
/// Equality and hashing go by the tag string, so `Custom("NoteOn")` equals
/// `NoteOn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    /// Start of a note (`"NoteOn"`)
    NoteOn,
    /// Any other tag
    Custom(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::NoteOn => "NoteOn",
            EventType::Custom(tag) => tag,
        }
    }
}

impl PartialEq for EventType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for EventType {}

impl Hash for EventType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for EventType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "NoteOn" => EventType::NoteOn,
            _ => EventType::Custom(tag),
        }
    }
}

impl From<&str> for EventType {
    fn from(tag: &str) -> Self {
        EventType::from(tag.to_string())
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::NoteOn => "NoteOn".to_string(),
            EventType::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single timestamped event on a timeline
///
/// Equality is structural: two events are equal when type, time and payload
/// are all equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event type tag
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Seconds elapsed since the start of the stream
    pub time: f64,
    /// Optional payload, serialized as `null` when absent
    #[serde(default)]
    pub data: Option<EventData>,
}

impl Event {
    /// Create an event without payload
    pub fn new(event_type: impl Into<EventType>, time: f64) -> Self {
        Self {
            event_type: event_type.into(),
            time,
            data: None,
        }
    }

    /// Shorthand for a `NoteOn` event
    pub fn note_on(time: f64) -> Self {
        Self::new(EventType::NoteOn, time)
    }

    /// Builder method: attach a payload
    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = Some(data);
        self
    }

    /// Serialize to a flat JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an event from a JSON object; `type` and `time` are required
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "< Event: {}, {:.6}", self.event_type, self.time)?;
        match &self.data {
            Some(data) => write!(f, ", {} >", serde_json::Value::Object(data.clone())),
            None => write!(f, ", - >"),
        }
    }
}

/// Outcome of comparing a guess timeline against a ground-truth timeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    /// Correct detections
    pub cd: usize,
    /// False positives (unmatched or redundant guesses)
    pub fp: usize,
    /// False negatives (missed ground-truth events)
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl MatchResult {
    pub fn new(cd: usize, fp: usize, fn_: usize) -> Self {
        Self { cd, fp, fn_ }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cd={} fp={} fn={}", self.cd, self.fp, self.fn_)
    }
}
