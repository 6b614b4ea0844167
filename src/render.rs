//! Assembles the roadmap document from bucketed milestones.

use chrono::{DateTime, Utc};

use crate::bucket::TimeBucket;
use crate::issue::Issue;
use crate::labels;
use crate::repo_name::RepoName;

/// Usage block appended verbatim near the top of every generated document.
static USAGE: &str = include_str!("../USAGE.md");

pub(crate) fn document(now: DateTime<Utc>, repo: &RepoName, buckets: &[TimeBucket]) -> String {
    let mut doc = vec![
        "## Roadmap".to_string(),
        format!("_Generated on {}_", now.format("%a %b %d %Y")),
        String::new(),
    ];
    doc.extend(USAGE.lines().map(str::to_string));

    for bucket in buckets {
        doc.push(String::new());
        doc.push("<hr>".to_string());
        doc.push(format!("### {}", bucket.label.replacen("in", "In", 1)));

        for milestone in &bucket.milestones {
            let closed = milestone.closed_count();
            let total = closed + milestone.open_count();
            doc.push(String::new());
            doc.push(format!("#### * {} ({}/{})", milestone.title, closed, total));

            if !milestone.labels.is_empty() {
                let links: Vec<String> = milestone
                    .labels
                    .iter()
                    .map(|label| labels::label_link(repo, label))
                    .collect();
                doc.push(format!("Labels: {}", links.join(", ")));
            }

            if let Some(issues) = &milestone.issues {
                for (state, partition) in [("open", &issues.open), ("closed", &issues.closed)] {
                    if partition.is_empty() {
                        continue;
                    }
                    doc.push(String::new());
                    doc.push(format!("**{}**", state));
                    doc.push(String::new());
                    for issue in partition {
                        doc.push(issue_line(issue));
                    }
                }
            }
        }
    }
    doc.join("\n")
}

fn issue_line(issue: &Issue) -> String {
    match &issue.assignee {
        Some(assignee) => format!(
            "* [{}]({}) -- [{}]({})",
            assignee.login, assignee.html_url, issue.title, issue.html_url
        ),
        None => format!("* [{}]({})", issue.title, issue.html_url),
    }
}
