use chrono::{DateTime, Utc};

use crate::issue::{Issue, IssueState};
use crate::labels;

/// Milestone identifier as the tracker's issue-listing API understands it:
/// either a milestone number or the sentinel `none` selecting issues with no
/// milestone assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MilestoneId {
    Number(u64),
    None,
}

impl std::fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MilestoneId::Number(number) => write!(f, "{}", number),
            MilestoneId::None => write!(f, "none"),
        }
    }
}

/// A tracker-defined grouping of issues with an optional due date.
///
/// Built from the tracker's milestone list, mutated exactly once by
/// [`Milestone::attach_issues`], then read-only for bucketing and rendering.
#[derive(Clone, Debug)]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: String,
    pub due_on: Option<DateTime<Utc>>,
    pub open_issues: Option<u64>,
    pub closed_issues: Option<u64>,
    pub issues: Option<IssueSet>,
    pub labels: Vec<String>,
}

/// Issues of one milestone, partitioned by state. The unpartitioned list is
/// kept alongside for label aggregation.
#[derive(Clone, Debug)]
pub struct IssueSet {
    pub all: Vec<Issue>,
    pub open: Vec<Issue>,
    pub closed: Vec<Issue>,
}

impl Milestone {
    /// The synthetic entry representing issues with no milestone assigned,
    /// always appended to the tracker's milestone list before fetching.
    pub fn unassigned() -> Milestone {
        Milestone {
            id: MilestoneId::None,
            title: "No milestone".to_string(),
            due_on: None,
            open_issues: None,
            closed_issues: None,
            issues: None,
            labels: Vec::new(),
        }
    }

    /// Attaches the fetched issues: partitions by state, derives the distinct
    /// label list, and back-fills any missing open/closed count from the
    /// partition lengths.
    pub(crate) fn attach_issues(&mut self, issues: Vec<Issue>) {
        self.labels = labels::distinct_labels(&issues);
        let (open, closed): (Vec<Issue>, Vec<Issue>) = issues
            .iter()
            .cloned()
            .partition(|issue| issue.state == IssueState::Open);
        if self.open_issues.is_none() {
            self.open_issues = Some(open.len() as u64);
        }
        if self.closed_issues.is_none() {
            self.closed_issues = Some(closed.len() as u64);
        }
        self.issues = Some(IssueSet {
            all: issues,
            open,
            closed,
        });
    }

    pub(crate) fn open_count(&self) -> u64 {
        self.open_issues.unwrap_or(0)
    }

    pub(crate) fn closed_count(&self) -> u64 {
        self.closed_issues.unwrap_or(0)
    }
}
