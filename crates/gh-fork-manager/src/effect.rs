//! Side effects requested by the session state machine
//!
//! A transition returns at most one effect. The scheduler performs it and
//! feeds the outcome back as a [`crate::actions::SessionAction`].

use gh_client::{RepoScope, RepositoryRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Effect {
    #[default]
    None,
    /// List the user's repositories; answered by `ReposLoaded`
    FetchRepositories { scope: RepoScope },
    /// Delete the queue head; answered by `DeleteResult`
    DeleteNext(RepositoryRecord),
    /// Ask who the token belongs to; answered by `CurrentUserLoaded`
    FetchCurrentUser,
    /// Open a web URL, no answer
    OpenInBrowser(String),
}

impl Effect {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
