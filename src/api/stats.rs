//! Liveness and status endpoints

use axum::{Json, extract::State as AxumState, response::IntoResponse};
use serde::Serialize;

use crate::SharedState;

/// Server information
#[derive(Debug, Serialize)]
pub struct ServerStats {
    pub name: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub started_at: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub server: ServerStats,
}

pub async fn root() -> &'static str {
    "Hello, World!"
}

/// GET /status - Server name, version and uptime
pub async fn status(AxumState(state): AxumState<SharedState>) -> impl IntoResponse {
    Json(StatusResponse {
        server: ServerStats {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
            started_at: state.started_at.to_rfc3339(),
        },
    })
}
