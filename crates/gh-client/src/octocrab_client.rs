//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `RepositoryClient` trait using the octocrab
//! library. Requests go through octocrab's raw `_get`/`_delete` helpers so the
//! HTTP status can be classified here instead of inside octocrab.

use crate::client::RepositoryClient;
use crate::error::ClientError;
use crate::types::{ApiRepository, RepoScope, RepositoryRecord};
use crate::PER_PAGE;
use async_trait::async_trait;
use http::header::ACCEPT;
use http::StatusCode;
use log::{debug, info};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// Media type GitHub recommends for REST v3 requests
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Direct GitHub API client using octocrab
///
/// Holds no octocrab instance when no token was supplied; every call then
/// fails with [`ClientError::Unauthenticated`] without touching the network.
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Option<Arc<Octocrab>>,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    login: String,
}

impl OctocrabClient {
    /// Create a client for `api_base` authenticated with `token`
    ///
    /// An absent or blank token is accepted; the client is then unauthenticated.
    pub fn new(api_base: &str, token: Option<&str>) -> Result<Self, ClientError> {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            debug!("No GitHub token configured, remote calls will be refused");
            return Ok(Self { octocrab: None });
        };

        let api_base = api_base.trim_end_matches('/');
        let octocrab = Octocrab::builder()
            .base_uri(api_base)
            .map_err(|e| ClientError::Configuration(format!("API base {api_base}: {e}")))?
            .personal_token(token.to_string())
            .add_header(ACCEPT, GITHUB_JSON.to_string())
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        debug!("GitHub client created for {}", api_base);
        Ok(Self {
            octocrab: Some(Arc::new(octocrab)),
        })
    }

    /// Whether a credential is configured
    pub fn is_authenticated(&self) -> bool {
        self.octocrab.is_some()
    }

    fn octocrab(&self) -> Result<&Octocrab, ClientError> {
        self.octocrab
            .as_deref()
            .ok_or(ClientError::Unauthenticated)
    }

    /// GET `route`, returning the body of a 200 response
    async fn get_ok(&self, octocrab: &Octocrab, route: String) -> Result<String, ClientError> {
        let response = octocrab._get(route).await?;
        let status = response.status();
        let body = octocrab.body_to_string(response).await?;

        if status != StatusCode::OK {
            return Err(ClientError::Remote {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl RepositoryClient for OctocrabClient {
    async fn list_repositories(
        &self,
        scope: RepoScope,
    ) -> Result<Vec<RepositoryRecord>, ClientError> {
        let octocrab = self.octocrab()?;

        let mut repos = Vec::new();
        let mut page = 1u32;

        loop {
            debug!("Fetching repository page {}", page);
            let route = format!("/user/repos?per_page={PER_PAGE}&page={page}&affiliation=owner");
            let body = self.get_ok(octocrab, route).await?;

            let payload: Vec<ApiRepository> = serde_json::from_str(&body)
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

            // An empty page is the only end-of-list signal we rely on
            if payload.is_empty() {
                break;
            }

            repos.extend(payload.into_iter().map(RepositoryRecord::from));
            page += 1;
        }

        let total = repos.len();
        repos.retain(|repo| scope.keeps(repo));

        info!(
            "Fetched {} owned repositories over {} pages, {} {} kept",
            total,
            page,
            repos.len(),
            scope.noun()
        );
        Ok(repos)
    }

    async fn delete_repository(&self, full_name: &str) -> Result<(), ClientError> {
        let octocrab = self.octocrab()?;

        debug!("Deleting repository {}", full_name);
        let route = format!("/repos/{full_name}");
        let response = octocrab._delete(route, None::<&()>).await?;
        let status = response.status();
        let body = octocrab.body_to_string(response).await?;
        let body = body.trim().to_string();

        match status {
            StatusCode::NO_CONTENT => {
                info!("Deleted repository {}", full_name);
                Ok(())
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(full_name.to_string())),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(body)),
            other => Err(ClientError::Remote {
                status: other.as_u16(),
                body,
            }),
        }
    }

    async fn current_user(&self) -> Result<String, ClientError> {
        let octocrab = self.octocrab()?;

        let body = self.get_ok(octocrab, "/user".to_string()).await?;
        let user: ApiUser =
            serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        debug!("Authenticated as {}", user.login);
        Ok(user.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OctocrabClient {
        OctocrabClient::new(&server.uri(), Some("token")).unwrap()
    }

    fn repo_json(full_name: &str, fork: bool) -> serde_json::Value {
        let (owner, name) = full_name.split_once('/').unwrap();
        json!({
            "id": 1,
            "name": name,
            "full_name": full_name,
            "private": false,
            "archived": false,
            "fork": fork,
            "size": 10,
            "language": "Rust",
            "default_branch": "main",
            "pushed_at": "2024-01-01T00:00:00Z",
            "owner": { "login": owner },
            "html_url": format!("https://github.com/{full_name}"),
            "ssh_url": format!("git@github.com:{full_name}.git")
        })
    }

    async fn mount_pages(server: &MockServer, first_page: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "100"))
            .and(query_param("affiliation", "owner"))
            .respond_with(ResponseTemplate::new(200).set_body_json(first_page))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_pagination_stops_on_empty_page() {
        let server = MockServer::start().await;
        mount_pages(
            &server,
            json!([
                repo_json("me/one", true),
                repo_json("me/two", true),
                repo_json("me/three", true)
            ]),
        )
        .await;

        let repos = client_for(&server)
            .list_repositories(RepoScope::All)
            .await
            .unwrap();

        let names: Vec<_> = repos.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["me/one", "me/two", "me/three"]);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_scope_filters_by_fork_flag() {
        let server = MockServer::start().await;
        mount_pages(
            &server,
            json!([repo_json("me/forked", true), repo_json("me/owned", false)]),
        )
        .await;
        let client = client_for(&server);

        let forks = client.list_repositories(RepoScope::Forks).await.unwrap();
        assert_eq!(forks.len(), 1);
        assert_eq!(forks[0].full_name, "me/forked");

        let owned = client.list_repositories(RepoScope::Owned).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].full_name, "me/owned");
    }

    #[tokio::test]
    async fn test_requests_carry_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(header_exists("authorization"))
            .and(header_exists("accept"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let repos = client_for(&server)
            .list_repositories(RepoScope::Forks)
            .await
            .unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_list_non_200_is_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials\n"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_repositories(RepoScope::Forks)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::Remote {
                status: 401,
                body: "Bad credentials".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_list_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_repositories(RepoScope::Forks)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_delete_classification() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/repos/me/ok"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/repos/me/forbidden"))
            .respond_with(ResponseTemplate::new(403).set_body_string("nope"))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/repos/me/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/repos/me/teapot"))
            .respond_with(ResponseTemplate::new(418).set_body_string("short and stout"))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/repos/me/accepted"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(&server);

        assert_eq!(client.delete_repository("me/ok").await, Ok(()));
        assert_eq!(
            client.delete_repository("me/forbidden").await,
            Err(ClientError::Forbidden("nope".to_string()))
        );
        assert_eq!(
            client.delete_repository("me/missing").await,
            Err(ClientError::NotFound("me/missing".to_string()))
        );
        assert_eq!(
            client.delete_repository("me/teapot").await,
            Err(ClientError::Remote {
                status: 418,
                body: "short and stout".to_string()
            })
        );
        // Only 204 counts as success
        assert!(matches!(
            client.delete_repository("me/accepted").await,
            Err(ClientError::Remote { status: 200, .. })
        ));
    }

    #[tokio::test]
    async fn test_current_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "octocat" })))
            .mount(&server)
            .await;

        let login = client_for(&server).current_user().await.unwrap();
        assert_eq!(login, "octocat");
    }

    #[tokio::test]
    async fn test_unauthenticated_makes_no_requests() {
        let server = MockServer::start().await;
        let client = OctocrabClient::new(&server.uri(), Some("  ")).unwrap();
        assert!(!client.is_authenticated());

        assert_eq!(
            client.list_repositories(RepoScope::Forks).await,
            Err(ClientError::Unauthenticated)
        );
        assert_eq!(
            client.delete_repository("me/anything").await,
            Err(ClientError::Unauthenticated)
        );
        assert_eq!(
            client.current_user().await,
            Err(ClientError::Unauthenticated)
        );

        let requests = server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Pooled mock servers keep listening after drop; use a closed port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = OctocrabClient::new(&uri, Some("token")).unwrap();

        assert!(matches!(
            client.list_repositories(RepoScope::All).await,
            Err(ClientError::Transport(_))
        ));
        assert!(matches!(
            client.delete_repository("me/fork").await,
            Err(ClientError::Transport(_))
        ));
    }
}
