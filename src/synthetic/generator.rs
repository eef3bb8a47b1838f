//! Random message/level draws.

use rand::Rng;
use serde_json::json;

use crate::observability::{LogLevel, Logger};

/// Records emitted per call to [`generate_batch`].
pub const BATCH_SIZE: usize = 10;

/// Fixed pool the messages are drawn from.
pub const MESSAGE_POOL: [&str; 9] = [
    "User login successful",
    "Payment failed",
    "Cache refreshed",
    "Database connection slow",
    "Order placed successfully",
    "User profile updated",
    "Unknown API key detected",
    "Service restarted",
    "Metrics flushed",
];

/// One drawn record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticLog {
    pub request_id: usize,
    pub level: LogLevel,
    pub message: &'static str,
}

/// Draw and emit [`BATCH_SIZE`] records.
///
/// Each iteration draws the message first, then the level, both uniformly.
/// Every draw is returned, including those the logger's threshold suppressed.
pub fn generate_batch<R: Rng + ?Sized>(logger: &Logger, rng: &mut R) -> Vec<SyntheticLog> {
    (0..BATCH_SIZE)
        .map(|request_id| {
            let message = MESSAGE_POOL[rng.gen_range(0..MESSAGE_POOL.len())];
            let level = LogLevel::from_index(rng.gen_range(0..LogLevel::ALL.len()));

            logger.log(level.into(), message, Some(&json!({ "requestId": request_id })));

            SyntheticLog {
                request_id,
                level,
                message,
            }
        })
        .collect()
}
