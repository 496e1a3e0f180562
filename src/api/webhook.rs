//! Webhook handler for GitHub events

use axum::{
    body::Bytes,
    extract::State as AxumState,
    http::{HeaderMap, StatusCode},
};
use tracing::{debug, error, info, warn};

use crate::SharedState;
use crate::messages;
use crate::notify::dispatch;
use crate::utils::verify_github_signature;
use crate::webhook::GithubEvent;

pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";
pub const EVENT_HEADER: &str = "x-github-event";

/// Handles the GitHub webhook POST request.
///
/// Signature first, then the event header, then the payload. A notification,
/// if any, is sent on a detached task so the response never waits on Telegram.
pub async fn handle_webhook(
    AxumState(state): AxumState<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !verify_github_signature(&state.config.webhook_secret, &body, signature) {
        error!("Invalid signature");
        return (StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let Some(event_type) = headers
        .get(EVENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    else {
        warn!("Missing event header");
        return (StatusCode::BAD_REQUEST, "Bad Request");
    };

    let event = match GithubEvent::parse(event_type, &body) {
        Ok(event) => event,
        Err(e) => {
            warn!("{}", e);
            return (StatusCode::BAD_REQUEST, "Bad Request");
        }
    };
    debug!("Received {} event", event.name());

    if let Some(text) = messages::for_event(&event) {
        info!("Relaying {} event", event.name());
        dispatch(state.notifier.clone(), text);
    }

    (StatusCode::OK, "Webhook received")
}
