use crate::issue::Issue;
use crate::repo_name::RepoName;

/// Distinct label names across a milestone's issues, in first-seen order.
pub(crate) fn distinct_labels(issues: &[Issue]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for issue in issues {
        for label in &issue.labels {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
    }
    labels
}

/// Markdown link to the open issues carrying `label`. The query value is
/// percent-encoded so labels with spaces stay inside the `(url)` segment.
pub(crate) fn label_link(repo: &RepoName, label: &str) -> String {
    format!(
        "[{label}](https://github.com/{owner}/{repo}/issues?page=1&state=open&labels={encoded})",
        label = label,
        owner = repo.owner,
        repo = repo.repo,
        encoded = urlencoding::encode(label),
    )
}

#[cfg(test)]
mod tests {
    use super::{distinct_labels, label_link};
    use crate::issue::{Issue, IssueState};
    use crate::repo_name::RepoName;

    fn issue(labels: &[&str]) -> Issue {
        Issue {
            title: "t".to_string(),
            html_url: "https://github.com/o/r/issues/1".to_string(),
            state: IssueState::Open,
            assignee: None,
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn dedupes_in_first_seen_order() {
        let issues = vec![issue(&["ui", "bug"]), issue(&["bug", "docs"])];
        assert_eq!(distinct_labels(&issues), vec!["ui", "bug", "docs"]);
    }

    #[test]
    fn no_issues_or_no_labels_yield_an_empty_set() {
        assert!(distinct_labels(&[]).is_empty());
        assert!(distinct_labels(&[issue(&[])]).is_empty());
    }

    #[test]
    fn links_point_at_the_open_issue_listing() {
        let repo: RepoName = "flatiron/roadmap".parse().unwrap();
        assert_eq!(
            label_link(&repo, "bug"),
            "[bug](https://github.com/flatiron/roadmap/issues?page=1&state=open&labels=bug)"
        );
    }

    #[test]
    fn labels_with_spaces_are_encoded_in_the_query_only() {
        let repo: RepoName = "flatiron/roadmap".parse().unwrap();
        assert_eq!(
            label_link(&repo, "help wanted"),
            "[help wanted](https://github.com/flatiron/roadmap/issues?page=1&state=open&labels=help%20wanted)"
        );
    }
}
