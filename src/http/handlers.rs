//! Route handlers.

use std::sync::PoisonError;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::server::AppState;
use crate::synthetic::generate_batch;

pub const ROOT_BODY: &str = "Backend up ✅";
pub const GENERATED_BODY: &str = "✅ Generated 10 random logs";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /`
pub async fn root() -> &'static str {
    ROOT_BODY
}

/// `GET /generate-logs`
///
/// Emits the whole batch before responding.
pub async fn generate_logs(State(state): State<AppState>) -> &'static str {
    {
        let mut rng = state.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_batch(&state.logger, &mut *rng);
    }
    GENERATED_BODY
}

/// `GET /healthz`
pub async fn healthz() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
