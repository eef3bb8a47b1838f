//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware:
//!     → logging.rs (leveled console records, threshold filtered)
//!     → ConsoleSink (stdout for INFO/DEBUG/DEV, stderr for ERROR/WARN)
//!
//! Server lifecycle and HTTP spans:
//!     → diagnostics.rs (tracing subscriber, RUST_LOG filter)
//! ```
//!
//! # Design Decisions
//! - The console logger is an injected value, not a global
//! - Threshold is immutable once the logger is built
//! - DEV records bypass the threshold for request tracing

pub mod diagnostics;
pub mod level;
pub mod logging;

pub use level::{LogLevel, RecordLevel};
pub use logging::{ConsoleSink, LogRecord, LogSink, Logger, MemorySink, Stream};
