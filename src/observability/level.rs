//! Severity levels for the console logger.
//!
//! `LogLevel` is totally ordered by urgency: `Error < Warn < Info < Debug`.
//! A record passes the threshold when its level compares less than or equal
//! to it. `RecordLevel::Dev` sits outside that order and always passes.

use std::fmt;

/// Environment tag that selects the error-only threshold.
pub const PRODUCTION_ENV: &str = "PRODUCTION";

/// Ordered severity. Lower discriminant = more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// All standard levels, most urgent first.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Threshold for a deployment environment tag.
    ///
    /// Only the exact tag `PRODUCTION` restricts output to errors.
    pub fn threshold_for(environment: &str) -> Self {
        if environment == PRODUCTION_ENV {
            LogLevel::Error
        } else {
            LogLevel::Debug
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Map an index in `0..4` onto a level. Out-of-range values saturate to `Debug`.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The level a single record is emitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordLevel {
    /// Filtered against the logger threshold.
    Standard(LogLevel),
    /// Unconditional request tracing channel.
    Dev,
}

impl RecordLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordLevel::Standard(level) => level.as_str(),
            RecordLevel::Dev => "DEV",
        }
    }

    /// Whether this record clears `threshold`.
    pub fn passes(self, threshold: LogLevel) -> bool {
        match self {
            RecordLevel::Standard(level) => level <= threshold,
            RecordLevel::Dev => true,
        }
    }
}

impl From<LogLevel> for RecordLevel {
    fn from(level: LogLevel) -> Self {
        RecordLevel::Standard(level)
    }
}

impl fmt::Display for RecordLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_urgency() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert_eq!(LogLevel::Debug as u8, 3);
    }

    #[test]
    fn test_threshold_filtering() {
        for threshold in LogLevel::ALL {
            for level in LogLevel::ALL {
                let expected = (level as u8) <= (threshold as u8);
                assert_eq!(
                    RecordLevel::Standard(level).passes(threshold),
                    expected,
                    "level {} against threshold {}",
                    level,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_dev_always_passes() {
        for threshold in LogLevel::ALL {
            assert!(RecordLevel::Dev.passes(threshold));
        }
    }

    #[test]
    fn test_threshold_for_environment() {
        assert_eq!(LogLevel::threshold_for("PRODUCTION"), LogLevel::Error);
        assert_eq!(LogLevel::threshold_for("SANDBOX"), LogLevel::Debug);
        assert_eq!(LogLevel::threshold_for("production"), LogLevel::Debug);
        assert_eq!(LogLevel::threshold_for(""), LogLevel::Debug);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(LogLevel::from_index(0), LogLevel::Error);
        assert_eq!(LogLevel::from_index(1), LogLevel::Warn);
        assert_eq!(LogLevel::from_index(2), LogLevel::Info);
        assert_eq!(LogLevel::from_index(3), LogLevel::Debug);
    }
}
