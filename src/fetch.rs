//! Fan-out of the per-milestone issue fetches, at most five in flight.

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::info;

use crate::github::GithubClient;
use crate::milestone::Milestone;
use crate::repo_name::RepoName;
use crate::Error;

const MAX_IN_FLIGHT: usize = 5;

/// Fetches the issues of every milestone, attaching them in place. The first
/// failed fetch aborts the batch; results of fetches already in flight are
/// dropped.
pub(crate) async fn fetch_all_issues(
    client: &GithubClient,
    repo: &RepoName,
    milestones: &mut [Milestone],
) -> Result<(), Error> {
    stream::iter(milestones.iter_mut())
        .map(|milestone| fetch_issues(client, repo, milestone))
        .buffer_unordered(MAX_IN_FLIGHT)
        .try_collect::<Vec<()>>()
        .await?;
    Ok(())
}

async fn fetch_issues(
    client: &GithubClient,
    repo: &RepoName,
    milestone: &mut Milestone,
) -> Result<(), Error> {
    info!("{}/{}/issues/{}", repo.owner, repo.repo, milestone.id);
    let (issues, rate) = client.list_issues(repo, &milestone.id).await?;
    info!("Remaining requests: {}", rate);
    milestone.attach_issues(issues);
    Ok(())
}
