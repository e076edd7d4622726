use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static REPO_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").expect("invalid regex"));

/// A validated `owner/repo` pair.
///
/// Both segments are limited to ASCII alphanumerics plus `_`, `.` and `-`,
/// separated by exactly one `/`. Input is taken as-is: no trimming, no case
/// folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{input:?} is not a valid repository path: expected owner/repo, where both segments use only letters, digits, '_', '.' or '-'")]
pub struct RepoPathError {
    pub input: String,
}

impl RepoPath {
    pub fn parse(input: &str) -> Result<Self, RepoPathError> {
        if !REPO_PATH_RE.is_match(input) {
            return Err(RepoPathError {
                input: input.to_string(),
            });
        }
        match input.split_once('/') {
            Some((owner, name)) => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            None => Err(RepoPathError {
                input: input.to_string(),
            }),
        }
    }

    /// The `owner/name` form, used as the template lookup key.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoPath {
    type Err = RepoPathError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
