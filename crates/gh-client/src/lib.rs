//! GitHub API client for repository housekeeping
//!
//! This crate provides a trait-based client for the handful of GitHub REST
//! calls the fork manager needs: listing the repositories a user owns,
//! deleting one of them and asking who the token belongs to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            RepositoryClient trait               │
//! │  - list_repositories()                          │
//! │  - delete_repository()                          │
//! │  - current_user()                               │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! HTTP outcomes are classified into [`ClientError`] variants by this crate.
//! Nothing here retries; a failed call is reported once and the caller decides
//! what to do next.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{OctocrabClient, RepoScope, RepositoryClient};
//!
//! # async fn example() -> Result<(), gh_client::ClientError> {
//! let client = OctocrabClient::new("https://api.github.com", Some("token"))?;
//! let forks = client.list_repositories(RepoScope::Forks).await?;
//! for fork in &forks {
//!     println!("{}", fork.full_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

/// Public GitHub API origin
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Number of repositories requested per page
pub const PER_PAGE: u32 = 100;

pub use client::RepositoryClient;
pub use error::ClientError;
pub use octocrab_client::OctocrabClient;
pub use types::{ApiRepository, RepoScope, RepositoryRecord};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
