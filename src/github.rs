//! Minimal GitHub REST client: milestone and issue listings plus the
//! rate-limit metadata that comes back with every response.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK, USER_AGENT};
use serde::Deserialize;

use crate::issue::{Assignee, Issue, IssueState};
use crate::milestone::{Milestone, MilestoneId};
use crate::repo_name::RepoName;
use crate::Error;

const GITHUB_API_URL: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Remaining request quota reported by the tracker, surfaced only via logging.
#[derive(Clone, Copy, Debug, Default)]
pub struct RateLimit {
    pub remaining: Option<u64>,
}

impl RateLimit {
    fn from_headers(headers: &HeaderMap) -> RateLimit {
        RateLimit {
            remaining: headers
                .get("x-ratelimit-remaining")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok()),
        }
    }
}

impl std::fmt::Display for RateLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.remaining {
            Some(remaining) => write!(f, "{}", remaining),
            None => f.write_str("unknown"),
        }
    }
}

pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    auth: Option<(String, String)>,
}

impl GithubClient {
    pub fn new(auth: Option<(String, String)>) -> Result<GithubClient, Error> {
        GithubClient::with_base_url(GITHUB_API_URL, auth)
    }

    /// Client against a non-default API root, used by tests to point at a
    /// local mock server.
    pub fn with_base_url(base_url: &str, auth: Option<(String, String)>) -> Result<GithubClient, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("roadmap/0.1"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(GithubClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub async fn list_milestones(
        &self,
        repo: &RepoName,
    ) -> Result<(Vec<Milestone>, RateLimit), Error> {
        let url = format!(
            "{}/repos/{}/{}/milestones?per_page=100",
            self.base_url, repo.owner, repo.repo
        );
        let (milestones, rate): (Vec<WireMilestone>, RateLimit) = self.get_paginated(url).await?;
        Ok((milestones.into_iter().map(Milestone::from).collect(), rate))
    }

    pub async fn list_issues(
        &self,
        repo: &RepoName,
        milestone: &MilestoneId,
    ) -> Result<(Vec<Issue>, RateLimit), Error> {
        let url = format!(
            "{}/repos/{}/{}/issues?milestone={}&state=all&per_page=100",
            self.base_url, repo.owner, repo.repo, milestone
        );
        let (issues, rate): (Vec<WireIssue>, RateLimit) = self.get_paginated(url).await?;
        Ok((issues.into_iter().map(Issue::from).collect(), rate))
    }

    /// Fetches `url` and every page linked from it via `Link: rel="next"`,
    /// concatenating the items. The rate limit returned is the one reported
    /// on the last response.
    async fn get_paginated<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<(Vec<T>, RateLimit), Error> {
        let mut items: Vec<T> = Vec::new();
        let mut rate = RateLimit::default();
        let mut next = Some(url);
        while let Some(url) = next.take() {
            let mut request = self.http.get(&url);
            if let Some((username, password)) = &self.auth {
                request = request.basic_auth(username, Some(password));
            }
            let response = request.send().await?;
            rate = RateLimit::from_headers(response.headers());
            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(Error::Api { status, message });
            }
            next = next_page(response.headers());
            let page: Vec<T> = response.json().await?;
            items.extend(page);
        }
        Ok((items, rate))
    }
}

fn next_page(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|part| {
        if !part.contains("rel=\"next\"") {
            return None;
        }
        let start = part.find('<')? + 1;
        let end = part.find('>')?;
        Some(part[start..end].to_string())
    })
}

#[derive(Debug, Deserialize)]
struct WireMilestone {
    number: u64,
    title: String,
    due_on: Option<DateTime<Utc>>,
    open_issues: Option<u64>,
    closed_issues: Option<u64>,
}

impl From<WireMilestone> for Milestone {
    fn from(wire: WireMilestone) -> Milestone {
        Milestone {
            id: MilestoneId::Number(wire.number),
            title: wire.title,
            due_on: wire.due_on,
            open_issues: wire.open_issues,
            closed_issues: wire.closed_issues,
            issues: None,
            labels: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireIssue {
    title: String,
    html_url: String,
    state: String,
    assignee: Option<WireAccount>,
    #[serde(default)]
    labels: Vec<WireLabel>,
}

#[derive(Debug, Deserialize)]
struct WireAccount {
    login: String,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct WireLabel {
    name: String,
}

impl From<WireIssue> for Issue {
    fn from(wire: WireIssue) -> Issue {
        Issue {
            title: wire.title,
            html_url: wire.html_url,
            state: IssueState::parse(&wire.state),
            assignee: wire.assignee.map(|account| Assignee {
                login: account.login,
                html_url: account.html_url,
            }),
            labels: wire.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}
