//! Structured JSON event logger.
//!
//! Emits one JSON object per event: `ts`, `severity`, `event`, then the
//! caller's fields in sorted order. Key order is deterministic so log
//! lines diff cleanly across runs. Writes are synchronous and
//! unbuffered; a failed write is dropped rather than propagated, logging
//! never fails an operation.

use std::fmt;
use std::io::{self, Write};

use chrono::Utc;
use serde_json::{Map, Value};

/// Event severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log a structured event to stdout.
pub fn log_event(severity: Severity, event: &str, fields: &[(&str, &str)]) {
    write_event(&mut io::stdout(), severity, event, fields);
}

fn write_event<W: Write>(writer: &mut W, severity: Severity, event: &str, fields: &[(&str, &str)]) {
    let line = render(severity, event, fields);
    let _ = writeln!(writer, "{}", line);
    let _ = writer.flush();
}

fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    // serde_json::Map preserves insertion order; insert the fixed keys
    // first, then the caller's fields sorted by name.
    let mut object = Map::new();
    object.insert("ts".to_string(), Value::String(Utc::now().to_rfc3339()));
    object.insert(
        "severity".to_string(),
        Value::String(severity.as_str().to_string()),
    );
    object.insert("event".to_string(), Value::String(event.to_string()));

    let mut sorted: Vec<_> = fields.to_vec();
    sorted.sort_by_key(|(key, _)| *key);
    for (key, value) in sorted {
        object.insert(key.to_string(), Value::String(value.to_string()));
    }

    Value::Object(object).to_string()
}
