use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Repository name must be <owner>/<repo>")]
pub struct ParseError {}

/// Coordinates of the repository the roadmap is generated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoName {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split('/').collect();
        match &components[..] {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(RepoName {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(ParseError {}),
        }
    }
}

impl std::fmt::Display for RepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::RepoName;

    #[test]
    fn parses_owner_and_repo() {
        let name: RepoName = "flatiron/roadmap".parse().unwrap();
        assert_eq!(name.owner, "flatiron");
        assert_eq!(name.repo, "roadmap");
        assert_eq!(name.to_string(), "flatiron/roadmap");
    }

    #[test]
    fn rejects_malformed_names() {
        assert!("no-slash".parse::<RepoName>().is_err());
        assert!("too/many/parts".parse::<RepoName>().is_err());
        assert!("/repo".parse::<RepoName>().is_err());
        assert!("owner/".parse::<RepoName>().is_err());
    }
}
