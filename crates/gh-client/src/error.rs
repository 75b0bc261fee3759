//! Error taxonomy for repository API calls

use thiserror::Error;

/// Typed outcome of a failed API call
///
/// Every variant carries plain strings so errors can travel inside actions
/// across threads and be cloned into state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No credential configured; raised before any network call
    #[error("GITHUB_TOKEN not set")]
    Unauthenticated,

    /// Unexpected HTTP status
    #[error("unexpected status {status}: {body}")]
    Remote { status: u16, body: String },

    /// Delete target does not exist (HTTP 404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Delete refused (HTTP 403)
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Network failure, including timeouts
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered 200 but the body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The client could not be built (e.g. malformed API base)
    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

impl From<octocrab::Error> for ClientError {
    fn from(err: octocrab::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ClientError::Unauthenticated.to_string(), "GITHUB_TOKEN not set");
        assert_eq!(
            ClientError::NotFound("me/gone".to_string()).to_string(),
            "not found: me/gone"
        );
        assert_eq!(
            ClientError::Forbidden("nope".to_string()).to_string(),
            "forbidden: nope"
        );
        assert_eq!(
            ClientError::Remote {
                status: 500,
                body: "boom".to_string()
            }
            .to_string(),
            "unexpected status 500: boom"
        );
    }
}
