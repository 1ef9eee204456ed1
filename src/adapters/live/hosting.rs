//! Live adapter for the `HostingApi` port using the GitHub REST API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::ports::hosting::{HostingApi, HostingFuture, Issue, PullRequest};
use crate::ports::PortError;

const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = "gpm";

/// Live hosting client that calls the GitHub REST API with a bearer token.
pub struct LiveHostingApi {
    client: Client,
    base_url: String,
    token: String,
}

impl LiveHostingApi {
    /// Creates a client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn endpoint(&self, owner: &str, repo: &str, resource: &str) -> String {
        format!("{}/repos/{owner}/{repo}/{resource}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, PortError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header("Accept", GITHUB_ACCEPT)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| -> PortError { format!("GitHub API request failed: {e}").into() })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| -> PortError { format!("Failed to read GitHub API response: {e}").into() })?;

        if !status.is_success() {
            let msg = serde_json::from_str::<GitHubError>(&response_text)
                .map(|e| e.message)
                .unwrap_or(response_text);
            return Err(format!("{} {msg}", status.as_u16()).into());
        }

        serde_json::from_str(&response_text)
            .map_err(|e| -> PortError { format!("Failed to parse GitHub API response: {e}").into() })
    }
}

/// Error body returned by the GitHub API.
#[derive(Deserialize)]
struct GitHubError {
    message: String,
}

impl HostingApi for LiveHostingApi {
    fn pull_requests<'a>(
        &'a self,
        owner: &'a str,
        repo: &'a str,
    ) -> HostingFuture<'a, Vec<PullRequest>> {
        Box::pin(self.get_json(self.endpoint(owner, repo, "pulls")))
    }

    fn issues<'a>(&'a self, owner: &'a str, repo: &'a str) -> HostingFuture<'a, Vec<Issue>> {
        Box::pin(self.get_json(self.endpoint(owner, repo, "issues")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let api = LiveHostingApi::new("https://api.github.com/", "token");
        assert_eq!(
            api.endpoint("octo", "demo", "pulls"),
            "https://api.github.com/repos/octo/demo/pulls"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let api = LiveHostingApi::new("http://127.0.0.1:9", "token");
        let result = api.pull_requests("octo", "demo").await;
        assert!(result.unwrap_err().to_string().contains("request failed"));
    }
}
