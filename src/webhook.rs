//! GitHub webhook payload structures
//!
//! Only the fields the relay formats are modelled; everything else in the
//! payload is ignored by serde.

use serde::Deserialize;

use crate::error::{RelayError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub action: String,
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub html_url: String,
    /// GitHub sends `null` for PRs that are still open
    #[serde(default, deserialize_with = "null_as_false")]
    pub merged: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusEvent {
    pub state: String,
    pub repository: StatusRepository,
    pub commit: Commit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusRepository {
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryEvent {
    pub action: String,
    pub repository: Repository,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub html_url: String,
}

/// A webhook delivery classified by its `X-GitHub-Event` header.
#[derive(Debug, Clone)]
pub enum GithubEvent {
    PullRequest(PullRequestEvent),
    Status(StatusEvent),
    Repository(RepositoryEvent),
    /// Any event type the relay does not notify about; the body is not parsed.
    Unsupported(String),
}

impl GithubEvent {
    /// Classify and parse a delivery. Fails only when a recognized event's
    /// body doesn't have the expected shape.
    pub fn parse(event_type: &str, body: &[u8]) -> Result<Self> {
        let event = match event_type {
            "pull_request" => Self::PullRequest(from_body(event_type, body)?),
            "status" => Self::Status(from_body(event_type, body)?),
            "repository" => Self::Repository(from_body(event_type, body)?),
            other => Self::Unsupported(other.to_string()),
        };
        Ok(event)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::PullRequest(_) => "pull_request",
            Self::Status(_) => "status",
            Self::Repository(_) => "repository",
            Self::Unsupported(name) => name,
        }
    }
}

fn from_body<T: serde::de::DeserializeOwned>(event: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| RelayError::InvalidPayload {
        event: event.to_string(),
        message: e.to_string(),
    })
}

fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
