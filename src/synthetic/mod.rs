//! Synthetic log generation for the `/generate-logs` endpoint.
//!
//! The random source is a parameter: the server passes its own seeded
//! `StdRng`, tests pass theirs and compare batches.

pub mod generator;

pub use generator::{generate_batch, SyntheticLog, BATCH_SIZE, MESSAGE_POOL};
