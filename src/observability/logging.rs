//! Leveled console logging.
//!
//! # Responsibilities
//! - Decide per call whether a record clears the configured threshold
//! - Format every record as `[<timestamp>] [<LEVEL>] <message>[ | <metadata>]`
//! - Route ERROR/WARN to stderr and everything else to stdout
//!
//! # Design Decisions
//! - The threshold is fixed when the `Logger` is built and never changes
//! - One synchronous write per emitted record, no buffering
//! - The sink is a trait object so tests can capture output

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::config::LoggingConfig;
use crate::observability::level::{LogLevel, RecordLevel};

/// Output stream a formatted line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Error and warning records go to the error stream.
    pub fn for_level(level: RecordLevel) -> Self {
        match level {
            RecordLevel::Standard(LogLevel::Error) | RecordLevel::Standard(LogLevel::Warn) => {
                Stream::Stderr
            }
            _ => Stream::Stdout,
        }
    }
}

/// A single log record, built and discarded within one call.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Utc>,
    pub level: RecordLevel,
    pub message: &'a str,
    pub metadata: Option<&'a Value>,
}

impl LogRecord<'_> {
    /// Render the record as one console line (no trailing newline).
    pub fn format(&self) -> String {
        let timestamp = self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        match self.metadata {
            Some(meta) => format!("[{}] [{}] {} | {}", timestamp, self.level, self.message, meta),
            None => format!("[{}] [{}] {}", timestamp, self.level, self.message),
        }
    }
}

/// Destination for formatted lines.
pub trait LogSink: Send + Sync {
    /// Write one line emitted at `level`. The stream follows [`Stream::for_level`].
    fn write(&self, level: RecordLevel, line: &str);
}

/// Writes to the process stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: RecordLevel, line: &str) {
        // Write errors are dropped.
        let _ = match Stream::for_level(level) {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
    }
}

#[derive(Debug, Clone)]
struct CapturedLine {
    level: RecordLevel,
    line: String,
}

/// Keeps every written line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn captured(&self) -> Vec<CapturedLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of everything written so far, with the stream each line went to.
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.captured()
            .into_iter()
            .map(|c| (Stream::for_level(c.level), c.line))
            .collect()
    }

    /// Lines emitted at `level`.
    pub fn lines_at(&self, level: RecordLevel) -> Vec<String> {
        self.captured()
            .into_iter()
            .filter(|c| c.level == level)
            .map(|c| c.line)
            .collect()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: RecordLevel, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedLine {
                level,
                line: line.to_string(),
            });
    }
}

/// Threshold-filtering logger. Cheap to clone; clones share the sink.
#[derive(Clone)]
pub struct Logger {
    threshold: LogLevel,
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub fn new(threshold: LogLevel, sink: Arc<dyn LogSink>) -> Self {
        Self { threshold, sink }
    }

    /// Console logger with the threshold implied by the configured environment.
    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(config.threshold(), Arc::new(ConsoleSink))
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn enabled(&self, level: RecordLevel) -> bool {
        level.passes(self.threshold)
    }

    /// Emit a record if `level` clears the threshold. Returns whether a line was written.
    pub fn log(&self, level: RecordLevel, message: &str, metadata: Option<&Value>) -> bool {
        if !self.enabled(level) {
            return false;
        }

        let record = LogRecord {
            timestamp: Utc::now(),
            level,
            message,
            metadata,
        };
        self.sink.write(level, &record.format());
        true
    }

    pub fn error(&self, message: &str, metadata: Option<&Value>) -> bool {
        self.log(LogLevel::Error.into(), message, metadata)
    }

    pub fn warn(&self, message: &str, metadata: Option<&Value>) -> bool {
        self.log(LogLevel::Warn.into(), message, metadata)
    }

    pub fn info(&self, message: &str, metadata: Option<&Value>) -> bool {
        self.log(LogLevel::Info.into(), message, metadata)
    }

    pub fn debug(&self, message: &str, metadata: Option<&Value>) -> bool {
        self.log(LogLevel::Debug.into(), message, metadata)
    }

    /// Always written, whatever the threshold.
    pub fn dev(&self, message: &str, metadata: Option<&Value>) -> bool {
        self.log(RecordLevel::Dev, message, metadata)
    }
}
