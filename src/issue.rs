#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub(crate) fn parse(state: &str) -> IssueState {
        match state {
            "closed" => IssueState::Closed,
            _ => IssueState::Open,
        }
    }
}

/// A single tracked work item, immutable once fetched.
#[derive(Clone, Debug)]
pub struct Issue {
    pub title: String,
    pub html_url: String,
    pub state: IssueState,
    pub assignee: Option<Assignee>,
    pub labels: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct Assignee {
    pub login: String,
    pub html_url: String,
}

#[cfg(test)]
mod tests {
    use super::IssueState;

    #[test]
    fn unknown_states_fall_back_to_open() {
        assert_eq!(IssueState::parse("closed"), IssueState::Closed);
        assert_eq!(IssueState::parse("open"), IssueState::Open);
        assert_eq!(IssueState::parse("reopened"), IssueState::Open);
    }
}
