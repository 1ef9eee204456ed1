//! Hosting API port for pull requests and issues.
//!
//! Records mirror the subset of the GitHub REST payloads `gpm` displays.
//! Each nested object is its own typed record; unknown fields are ignored.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Boxed future type alias used by [`HostingApi`] to keep the trait dyn-compatible.
pub type HostingFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, PortError>> + Send + 'a>>;

/// An account on the hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login handle.
    pub login: String,
    /// Numeric account ID.
    pub id: u64,
    /// Profile page.
    #[serde(default)]
    pub html_url: String,
}

/// A label attached to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label text.
    pub name: String,
    /// Hex color without the leading `#`.
    #[serde(default)]
    pub color: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A milestone grouping issues and pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone number within the repository.
    pub number: u64,
    /// Milestone title.
    pub title: String,
    /// `open` or `closed`.
    pub state: String,
}

/// One side of a pull request (head or base).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRef {
    /// `owner:branch` label.
    pub label: String,
    /// Branch name.
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Tip commit.
    pub sha: String,
}

/// A pull request as returned by `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// `open` or `closed`.
    pub state: String,
    /// Web page.
    pub html_url: String,
    /// Author.
    pub user: User,
    /// Description body.
    #[serde(default)]
    pub body: Option<String>,
    /// Whether the pull request is a draft.
    #[serde(default)]
    pub draft: bool,
    /// Attached labels.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Milestone, if any.
    #[serde(default)]
    pub milestone: Option<Milestone>,
    /// Source branch.
    pub head: BranchRef,
    /// Target branch.
    pub base: BranchRef,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Marker present on issues that are really pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestLink {
    /// API URL of the pull request.
    pub url: String,
    /// Web page of the pull request.
    #[serde(default)]
    pub html_url: String,
}

/// An issue as returned by `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// `open` or `closed`.
    pub state: String,
    /// Web page.
    pub html_url: String,
    /// Author.
    pub user: User,
    /// Description body.
    #[serde(default)]
    pub body: Option<String>,
    /// Attached labels.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Comment count.
    #[serde(default)]
    pub comments: u64,
    /// Set when this issue is a pull request.
    #[serde(default)]
    pub pull_request: Option<PullRequestLink>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl Issue {
    /// GitHub lists pull requests among issues; this tells them apart.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Reads pull requests and issues from a hosting service.
pub trait HostingApi: Send + Sync {
    /// Lists open pull requests for `owner/repo`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    fn pull_requests<'a>(
        &'a self,
        owner: &'a str,
        repo: &'a str,
    ) -> HostingFuture<'a, Vec<PullRequest>>;

    /// Lists open issues for `owner/repo` (pull requests included, as the API does).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    fn issues<'a>(&'a self, owner: &'a str, repo: &'a str) -> HostingFuture<'a, Vec<Issue>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const PULL_JSON: &str = r#"[{
        "url": "https://api.github.com/repos/octo/demo/pulls/7",
        "id": 1,
        "number": 7,
        "state": "open",
        "locked": false,
        "title": "Add parser",
        "user": {"login": "octo", "id": 42, "html_url": "https://github.com/octo", "site_admin": false},
        "body": null,
        "labels": [{"id": 3, "name": "bug", "color": "f29513", "description": null, "default": true}],
        "milestone": null,
        "draft": false,
        "html_url": "https://github.com/octo/demo/pull/7",
        "head": {"label": "octo:feature", "ref": "feature", "sha": "abc", "user": null, "repo": null},
        "base": {"label": "octo:main", "ref": "main", "sha": "def"},
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "auto_merge": null
    }]"#;

    #[test]
    fn decodes_pull_request_payload() {
        let pulls: Vec<PullRequest> = serde_json::from_str(PULL_JSON).unwrap();
        assert_eq!(pulls.len(), 1);
        let pr = &pulls[0];
        assert_eq!(pr.number, 7);
        assert_eq!(pr.user.login, "octo");
        assert_eq!(pr.head.ref_name, "feature");
        assert_eq!(pr.labels[0].name, "bug");
        assert!(pr.body.is_none());
        assert!(pr.milestone.is_none());
    }

    #[test]
    fn issue_with_pull_request_marker_is_detected() {
        let json = r#"{
            "number": 9,
            "title": "Tidy",
            "state": "open",
            "html_url": "https://github.com/octo/demo/pull/9",
            "user": {"login": "octo", "id": 42},
            "labels": [],
            "comments": 2,
            "pull_request": {"url": "https://api.github.com/repos/octo/demo/pulls/9"},
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert!(issue.is_pull_request());
        assert_eq!(issue.comments, 2);
    }
}
