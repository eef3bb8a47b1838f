//! Operational diagnostics via `tracing`.
//!
//! These events (listener bound, shutdown, HTTP spans) are for operators and
//! are filtered by `RUST_LOG`. They go to stderr and never pass through the
//! leveled [`Logger`], so stdout carries only console log lines.
//!
//! [`Logger`]: crate::observability::Logger

use std::io;

use tracing_subscriber::{
    fmt::{self, format::DefaultFields, format::Format},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "log_demo_server=info,tower_http=info";

/// Formatting layer for diagnostics, pinned to stderr.
pub type DiagnosticsLayer<S> = fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr>;

pub fn fmt_layer<S>() -> DiagnosticsLayer<S> {
    fmt::layer().with_writer(io::stderr as fn() -> io::Stderr)
}

/// Install the global tracing subscriber.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt_layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::Registry;

    #[test]
    fn test_diagnostics_write_to_stderr() {
        let layer = fmt_layer::<Registry>();
        let make_writer: fn() -> io::Stderr = *layer.writer();
        let _stderr: io::Stderr = make_writer();
    }
}
