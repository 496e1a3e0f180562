//! Notification text for each supported event
//!
//! Every function here is pure: it returns the message to send, or `None`
//! when the event doesn't warrant a notification.

use tracing::info;

use crate::utils::escape_html;
use crate::webhook::{GithubEvent, PullRequestEvent, RepositoryEvent, StatusEvent};

/// Format the notification for any classified event.
pub fn for_event(event: &GithubEvent) -> Option<String> {
    match event {
        GithubEvent::PullRequest(e) => Some(pull_request(e)),
        GithubEvent::Status(e) => status(e),
        GithubEvent::Repository(e) => repository(e),
        GithubEvent::Unsupported(name) => {
            info!("Unhandled event: {}", name);
            None
        }
    }
}

/// Always produces a message: merged PRs get their own line, every other
/// action is reported verbatim. Title and URL are copied as-is unless they
/// contain `&`, `<` or `>`, which are HTML-escaped for Telegram.
pub fn pull_request(event: &PullRequestEvent) -> String {
    let pr = &event.pull_request;
    let title = escape_html(&pr.title);
    let url = escape_html(&pr.html_url);

    if event.action == "closed" && pr.merged {
        format!("✅ PR merged: {}\n{}", title, url)
    } else {
        format!("🆕 PR {}: {}\n{}", escape_html(&event.action), title, url)
    }
}

pub fn status(event: &StatusEvent) -> Option<String> {
    if event.state != "failure" {
        return None;
    }
    Some(format!(
        "❌ Build failed in {}\nCommit: {}",
        escape_html(&event.repository.full_name),
        escape_html(&event.commit.html_url)
    ))
}

pub fn repository(event: &RepositoryEvent) -> Option<String> {
    let repo = &event.repository;
    match event.action.as_str() {
        "created" => Some(format!(
            "📦 New repository created: {}\n{}",
            escape_html(&repo.full_name),
            escape_html(&repo.html_url)
        )),
        "deleted" => Some(format!(
            "🗑️ Repository deleted: {}",
            escape_html(&repo.full_name)
        )),
        other => {
            info!("Unhandled repository action: {}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::{Commit, PullRequest, Repository, StatusRepository};

    fn pr(action: &str, merged: bool) -> PullRequestEvent {
        PullRequestEvent {
            action: action.to_string(),
            pull_request: PullRequest {
                title: "Fix flaky build".to_string(),
                html_url: "https://github.com/acme/app/pull/12".to_string(),
                merged,
            },
        }
    }

    fn status_event(state: &str) -> StatusEvent {
        StatusEvent {
            state: state.to_string(),
            repository: StatusRepository {
                full_name: "acme/app".to_string(),
            },
            commit: Commit {
                html_url: "https://github.com/acme/app/commit/abc123".to_string(),
            },
        }
    }

    fn repo_event(action: &str) -> RepositoryEvent {
        RepositoryEvent {
            action: action.to_string(),
            repository: Repository {
                full_name: "acme/new-lib".to_string(),
                html_url: "https://github.com/acme/new-lib".to_string(),
            },
        }
    }

    #[test]
    fn merged_pull_request() {
        let msg = pull_request(&pr("closed", true));
        assert_eq!(
            msg,
            "✅ PR merged: Fix flaky build\nhttps://github.com/acme/app/pull/12"
        );
    }

    #[test]
    fn opened_pull_request_reports_action() {
        let msg = pull_request(&pr("opened", false));
        assert_eq!(
            msg,
            "🆕 PR opened: Fix flaky build\nhttps://github.com/acme/app/pull/12"
        );
        assert!(!msg.contains("merged"));
    }

    #[test]
    fn closed_without_merge_is_generic() {
        let msg = pull_request(&pr("closed", false));
        assert!(msg.starts_with("🆕 PR closed:"));
    }

    #[test]
    fn pull_request_title_is_escaped() {
        let mut event = pr("opened", false);
        event.pull_request.title = "Use <T> & friends".to_string();
        assert!(pull_request(&event).contains("Use &lt;T&gt; &amp; friends"));
    }

    #[test]
    fn failed_status_notifies() {
        let msg = status(&status_event("failure")).unwrap();
        assert_eq!(
            msg,
            "❌ Build failed in acme/app\nCommit: https://github.com/acme/app/commit/abc123"
        );
    }

    #[test]
    fn other_statuses_are_silent() {
        for state in ["success", "pending", "error"] {
            assert!(status(&status_event(state)).is_none(), "state {}", state);
        }
    }

    #[test]
    fn repository_created_and_deleted() {
        assert_eq!(
            repository(&repo_event("created")).unwrap(),
            "📦 New repository created: acme/new-lib\nhttps://github.com/acme/new-lib"
        );
        assert_eq!(
            repository(&repo_event("deleted")).unwrap(),
            "🗑️ Repository deleted: acme/new-lib"
        );
    }

    #[test]
    fn other_repository_actions_are_silent() {
        assert!(repository(&repo_event("renamed")).is_none());
        assert!(repository(&repo_event("archived")).is_none());
    }

    #[test]
    fn unsupported_event_has_no_message() {
        assert!(for_event(&GithubEvent::Unsupported("push".to_string())).is_none());
    }

    #[test]
    fn formatting_is_repeatable() {
        let event = GithubEvent::PullRequest(pr("closed", true));
        assert_eq!(for_event(&event), for_event(&event));
    }
}
