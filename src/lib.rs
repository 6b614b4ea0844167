//! Generates a markdown roadmap from the milestones and issues of a GitHub
//! repository: milestones are grouped into time buckets by due date, each with
//! its issues partitioned into open and closed and its labels aggregated.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

mod bucket;
mod fetch;
mod github;
mod issue;
mod labels;
mod milestone;
mod render;
mod repo_name;

pub use github::{GithubClient, RateLimit};
pub use issue::{Assignee, Issue, IssueState};
pub use milestone::{IssueSet, Milestone, MilestoneId};
pub use repo_name::RepoName;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("GitHub API error: {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// Options for generating a roadmap. Credentials are only applied when both
/// username and password are supplied.
#[derive(Clone, Debug)]
pub struct Options {
    pub repo: RepoName,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Options {
    fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.clone(), password.clone())),
            _ => None,
        }
    }
}

/// Returns the roadmap document for the configured repository, or the first
/// error encountered.
pub async fn generate(options: &Options) -> Result<String, Error> {
    let credentials = options.credentials();
    if let Some((username, _)) = &credentials {
        info!("{}/authenticate", username);
    }
    let client = GithubClient::new(credentials)?;
    generate_with(&client, &options.repo, Utc::now()).await
}

/// Generation against an explicit client and clock. Given identical tracker
/// data and a frozen `now`, the returned document is byte-identical.
pub async fn generate_with(
    client: &GithubClient,
    repo: &RepoName,
    now: DateTime<Utc>,
) -> Result<String, Error> {
    info!("{}/{}/milestones", repo.owner, repo.repo);
    let (mut milestones, rate) = client.list_milestones(repo).await?;
    info!("Remaining requests: {}", rate);

    milestones.push(Milestone::unassigned());
    fetch::fetch_all_issues(client, repo, &mut milestones).await?;

    let buckets = bucket::group_by_due(now, milestones);
    Ok(render::document(now, repo, &buckets))
}
