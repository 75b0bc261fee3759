//! Repository client trait
//!
//! This module defines the core `RepositoryClient` trait that all client
//! implementations must satisfy. The scheduler in the binary only talks to
//! this trait, which keeps it testable with an in-memory implementation.

use crate::error::ClientError;
use crate::types::{RepoScope, RepositoryRecord};
use async_trait::async_trait;

/// GitHub repository client
///
/// Implementations are stateless per call: they hold the API base, the
/// credential and nothing else, so one instance can be shared across tasks.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{RepositoryClient, RepoScope, RepositoryRecord, ClientError};
///
/// async fn forks(client: &dyn RepositoryClient) -> Result<Vec<RepositoryRecord>, ClientError> {
///     client.list_repositories(RepoScope::Forks).await
/// }
/// ```
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// List every repository owned by the authenticated user
    ///
    /// Pages are requested one after another with a 1-based page counter
    /// until a page comes back empty. Pages are concatenated in request order
    /// and then narrowed to the requested `scope`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Unauthenticated`] when no credential is configured
    /// - [`ClientError::Remote`] when any page is not answered with HTTP 200
    /// - [`ClientError::Transport`] on network failures
    async fn list_repositories(&self, scope: RepoScope)
        -> Result<Vec<RepositoryRecord>, ClientError>;

    /// Delete a repository by its `owner/name`
    ///
    /// Success is HTTP 204 and nothing else.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] for HTTP 404
    /// - [`ClientError::Forbidden`] for HTTP 403
    /// - [`ClientError::Remote`] for any other status
    async fn delete_repository(&self, full_name: &str) -> Result<(), ClientError>;

    /// Login of the account the credential belongs to
    async fn current_user(&self) -> Result<String, ClientError>;
}
