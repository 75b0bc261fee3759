//! GitHub API data transfer objects and the repository record
//!
//! `ApiRepository` mirrors the JSON returned by `GET /user/repos`.
//! `RepositoryRecord` is the flattened record the rest of the application
//! works with; it is immutable once fetched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository owned by the authenticated user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Numeric repository ID
    pub id: u64,

    /// Repository name (e.g., "rust")
    pub name: String,

    /// `owner/name`, unique key of the record
    pub full_name: String,

    /// Owner login
    pub owner: String,

    pub private: bool,
    pub archived: bool,
    pub fork: bool,

    /// Size in kilobytes as reported by GitHub
    pub size: u64,

    /// Primary language (empty when GitHub could not detect one)
    pub language: String,

    /// Default branch name (e.g., "main")
    pub default_branch: String,

    /// `owner/name` of the upstream repository, only set for forks
    pub parent: Option<String>,

    /// Last push, `None` for repositories that never received one
    pub pushed_at: Option<DateTime<Utc>>,

    /// Repository URL for opening in browser
    pub html_url: String,

    /// SSH clone URL
    pub ssh_url: String,
}

impl RepositoryRecord {
    /// A fork with a known upstream
    pub fn is_fork(&self) -> bool {
        self.fork && self.parent.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Repository owner as embedded in API responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiOwner {
    pub login: String,
}

/// Parent (upstream) reference as embedded in API responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiParent {
    pub full_name: String,
}

/// A repository object from the GitHub API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiRepository {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner: ApiOwner,
    #[serde(default)]
    pub parent: Option<ApiParent>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub ssh_url: Option<String>,
}

impl From<ApiRepository> for RepositoryRecord {
    fn from(repo: ApiRepository) -> Self {
        // The list endpoint rarely embeds `parent`, but when it does it only
        // means something for forks.
        let parent = repo
            .parent
            .map(|p| p.full_name)
            .filter(|name| repo.fork && !name.is_empty());

        Self {
            id: repo.id,
            name: repo.name,
            full_name: repo.full_name,
            owner: repo.owner.login,
            private: repo.private,
            archived: repo.archived,
            fork: repo.fork,
            size: repo.size,
            language: repo.language.unwrap_or_default(),
            default_branch: repo.default_branch.unwrap_or_default(),
            parent,
            pushed_at: repo.pushed_at,
            html_url: repo.html_url.unwrap_or_default(),
            ssh_url: repo.ssh_url.unwrap_or_default(),
        }
    }
}

/// Which of the owned repositories to keep after listing
///
/// The server-side affiliation is always `owner`; this is a client-side
/// predicate on the `fork` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoScope {
    /// Only forks
    #[default]
    Forks,
    /// Only repositories that are not forks
    Owned,
    /// Everything the user owns
    All,
}

impl RepoScope {
    /// Whether `record` belongs to this scope
    pub fn keeps(&self, record: &RepositoryRecord) -> bool {
        match self {
            Self::Forks => record.fork,
            Self::Owned => !record.fork,
            Self::All => true,
        }
    }

    /// Cycle to the next scope
    pub fn next(&self) -> Self {
        match self {
            Self::Forks => Self::Owned,
            Self::Owned => Self::All,
            Self::All => Self::Forks,
        }
    }

    /// Plural noun used in status messages ("Loaded 3 forks")
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Forks => "forks",
            Self::Owned => "owned repos",
            Self::All => "repos",
        }
    }

    /// Short label for the header
    pub fn label(&self) -> &'static str {
        match self {
            Self::Forks => "Forks",
            Self::Owned => "Owned",
            Self::All => "All",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn api_repo(json: &str) -> ApiRepository {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_maps_full_api_record() {
        let repo = api_repo(
            r#"{
                "id": 42,
                "name": "forked",
                "full_name": "me/forked",
                "private": true,
                "archived": false,
                "fork": true,
                "size": 128,
                "language": "Rust",
                "default_branch": "main",
                "pushed_at": "2024-03-01T12:00:00Z",
                "owner": { "login": "me" },
                "parent": { "full_name": "upstream/forked" },
                "html_url": "https://github.com/me/forked",
                "ssh_url": "git@github.com:me/forked.git"
            }"#,
        );

        let record = RepositoryRecord::from(repo);
        assert_eq!(record.id, 42);
        assert_eq!(record.full_name, "me/forked");
        assert_eq!(record.owner, "me");
        assert_eq!(record.language, "Rust");
        assert_eq!(record.parent.as_deref(), Some("upstream/forked"));
        assert!(record.pushed_at.is_some());
        assert!(record.is_fork());
    }

    #[test]
    fn test_nullable_fields_default() {
        let repo = api_repo(
            r#"{
                "id": 7,
                "name": "empty",
                "full_name": "me/empty",
                "fork": false,
                "language": null,
                "pushed_at": null,
                "owner": { "login": "me" }
            }"#,
        );

        let record = RepositoryRecord::from(repo);
        assert_eq!(record.language, "");
        assert_eq!(record.pushed_at, None);
        assert_eq!(record.parent, None);
        assert!(!record.is_fork());
    }

    #[test]
    fn test_parent_dropped_for_non_forks() {
        let repo = api_repo(
            r#"{
                "full_name": "me/source",
                "fork": false,
                "owner": { "login": "me" },
                "parent": { "full_name": "other/source" }
            }"#,
        );

        assert_eq!(RepositoryRecord::from(repo).parent, None);
    }

    #[test]
    fn test_scope_keeps() {
        let fork = RepositoryRecord {
            fork: true,
            ..Default::default()
        };
        let source = RepositoryRecord::default();

        assert!(RepoScope::Forks.keeps(&fork));
        assert!(!RepoScope::Forks.keeps(&source));
        assert!(!RepoScope::Owned.keeps(&fork));
        assert!(RepoScope::Owned.keeps(&source));
        assert!(RepoScope::All.keeps(&fork));
        assert!(RepoScope::All.keeps(&source));
    }

    #[test]
    fn test_scope_cycles() {
        assert_eq!(RepoScope::default(), RepoScope::Forks);
        assert_eq!(RepoScope::Forks.next(), RepoScope::Owned);
        assert_eq!(RepoScope::Owned.next(), RepoScope::All);
        assert_eq!(RepoScope::All.next(), RepoScope::Forks);
    }
}
