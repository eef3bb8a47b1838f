//! Unconditional request tracing.
//!
//! Wraps the route table, so it sees every request before routing, including
//! paths that end in a 404. Each request produces exactly one DEV record:
//! `<METHOD> <path?query>` with `{"body": ..., "headers": {...}}` metadata.

use std::borrow::Cow;

use axum::{
    body::{Body, BodyDataStream, Bytes},
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use futures_util::{stream, StreamExt};
use serde_json::{Map, Value};

use crate::http::server::AppState;

pub async fn trace_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| parts.uri.path());
    let message = format!("{} {}", parts.method, target);
    let headers = headers_to_json(&parts.headers);

    let (captured, body) = capture_body(body, state.max_body_size).await;
    state
        .logger
        .dev(&message, Some(&request_metadata(headers, captured.as_ref())));

    next.run(Request::from_parts(parts, body)).await
}

/// Read up to `limit` bytes of `body` for the trace record.
///
/// Returns the full body when it fits. Otherwise returns `None` and a body
/// that replays what was already read followed by the unread remainder, so
/// the handler always sees the request exactly as the client sent it.
async fn capture_body(body: Body, limit: usize) -> (Option<Bytes>, Body) {
    let mut stream = body.into_data_stream();
    let mut chunks: Vec<Bytes> = Vec::new();
    let mut total = 0usize;

    while let Some(item) = stream.next().await {
        match item {
            Ok(chunk) => {
                total += chunk.len();
                chunks.push(chunk);
                if total > limit {
                    tracing::debug!(limit, "Request body exceeds trace limit, not recorded");
                    return (None, replay(chunks, None, stream));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Request body could not be read for tracing");
                return (None, replay(chunks, Some(err), stream));
            }
        }
    }

    let bytes = Bytes::from(chunks.concat());
    (Some(bytes.clone()), Body::from(bytes))
}

fn replay(chunks: Vec<Bytes>, error: Option<axum::Error>, rest: BodyDataStream) -> Body {
    let head = chunks.into_iter().map(Ok).chain(error.map(Err));
    Body::from_stream(stream::iter(head).chain(rest))
}

/// `{"body": <text>, "headers": {...}}`; `body` is left out when empty.
fn request_metadata(headers: Map<String, Value>, body: Option<&Bytes>) -> Value {
    let mut meta = Map::new();
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        meta.insert(
            "body".to_string(),
            Value::String(String::from_utf8_lossy(body).into_owned()),
        );
    }
    meta.insert("headers".to_string(), Value::Object(headers));
    Value::Object(meta)
}

/// Lowercase header names to values. Repeated headers are joined with `", "`.
fn headers_to_json(headers: &HeaderMap) -> Map<String, Value> {
    headers
        .keys()
        .map(|name| {
            let values: Vec<Cow<'_, str>> = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()))
                .collect();
            (name.as_str().to_string(), Value::String(values.join(", ")))
        })
        .collect()
}
