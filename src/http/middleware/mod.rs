//! HTTP middleware.

pub mod request_trace;

pub use request_trace::trace_request;
