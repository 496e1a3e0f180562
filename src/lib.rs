pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod messages;
pub mod notify;
pub mod utils;
pub mod webhook;

use axum::{Router, routing};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

pub use config::RelayConfig;
use notify::Notifier;

pub struct AppState {
    pub config: RelayConfig,
    pub notifier: Arc<dyn Notifier>,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: RelayConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            notifier,
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Build the HTTP router for the relay.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", routing::get(api::root))
        .route("/webhook", routing::post(api::handle_webhook))
        .route("/status", routing::get(api::status))
        .with_state(state)
}
