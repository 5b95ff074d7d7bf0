//! Structured JSON logger for docstore
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, written to stderr or to a shared `LogBuffer`
//! - Lines below the configured level are dropped before formatting

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-operation detail
    Trace = 0,
    /// Normal but notable operations
    Info = 1,
    /// Surprising outcomes the caller may not expect
    Warn = 2,
    /// Rejected operations
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
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

/// Minimum severity that gets written, or `Off`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    fn threshold(&self) -> Option<Severity> {
        match self {
            LogLevel::Trace => Some(Severity::Trace),
            LogLevel::Info => Some(Severity::Info),
            LogLevel::Warn => Some(Severity::Warn),
            LogLevel::Error => Some(Severity::Error),
            LogLevel::Off => None,
        }
    }
}

/// Shared in-memory log destination
///
/// Clones append to the same buffer, so a caller can keep one handle and
/// read back what a store's logger wrote.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, one entry per log line
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.lock();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(String::from)
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
enum Sink {
    #[default]
    Stderr,
    Buffer(LogBuffer),
}

/// Level-filtered JSON logger owned by a store
#[derive(Debug, Clone, Default)]
pub struct Logger {
    level: LogLevel,
    sink: Sink,
}

impl Logger {
    /// Logger writing to stderr
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            sink: Sink::Stderr,
        }
    }

    /// Logger appending to `buffer` instead of stderr
    pub fn with_buffer(level: LogLevel, buffer: LogBuffer) -> Self {
        Self {
            level,
            sink: Sink::Buffer(buffer),
        }
    }

    /// True if a line at `severity` would be written
    pub fn enabled(&self, severity: Severity) -> bool {
        self.level.threshold().is_some_and(|min| severity >= min)
    }

    /// Log an event with the given severity and fields
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if !self.enabled(severity) {
            return;
        }
        let line = format_line(severity, event, fields);

        match &self.sink {
            Sink::Stderr => Self::log_to_writer(&line, &mut io::stderr().lock()),
            Sink::Buffer(buffer) => Self::log_to_writer(&line, &mut buffer.clone()),
        }
    }

    /// Whole line in one `write_all`; write failures are dropped
    fn log_to_writer<W: Write>(line: &str, writer: &mut W) {
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    pub fn trace(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Trace, event, fields);
    }

    pub fn info(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    pub fn error(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

/// Render one newline-terminated JSON log line
pub fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":");
    push_json_string(&mut output, event);
    output.push_str(",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted {
        output.push(',');
        push_json_string(&mut output, key);
        output.push(':');
        push_json_string(&mut output, value);
    }

    output.push_str("}\n");
    output
}

fn push_json_string(output: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => output.push_str(&quoted),
        Err(_) => output.push_str("\"\""),
    }
}
