//! Effect scheduler
//!
//! Performs the effects returned by the reducer on a tokio runtime and feeds
//! each outcome back through the dispatcher. At most one fetch and one
//! delete are in flight at any time; every request is bounded by a timeout.

use crate::actions::{Action, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::effect::Effect;
use crate::utils::browser::open_url;
use gh_client::{ClientError, RepositoryClient};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Something that can carry out effects
pub trait EffectRunner {
    fn schedule(&mut self, effect: Effect, dispatcher: &Dispatcher);
}

/// Runs effects against a [`RepositoryClient`]
pub struct EffectScheduler {
    runtime: Runtime,
    client: Arc<dyn RepositoryClient>,
    timeout: Duration,
    fetch_in_flight: Arc<AtomicBool>,
    delete_in_flight: Arc<AtomicBool>,
}

/// Multi-thread runtime the scheduler spawns onto
pub fn build_runtime() -> anyhow::Result<Runtime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("gh-fork-manager-io")
        .build()?;
    Ok(runtime)
}

impl EffectScheduler {
    pub fn new(runtime: Runtime, client: Arc<dyn RepositoryClient>, timeout: Duration) -> Self {
        Self {
            runtime,
            client,
            timeout,
            fetch_in_flight: Arc::new(AtomicBool::new(false)),
            delete_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawn `request` guarded by `flag`, then dispatch what `finish` makes of its result
    fn spawn_guarded<T, Fut, F>(
        &self,
        flag: &Arc<AtomicBool>,
        label: &str,
        request: Fut,
        dispatcher: &Dispatcher,
        finish: F,
    ) where
        T: Send + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
        F: FnOnce(Result<T, ClientError>) -> SessionAction + Send + 'static,
    {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("EffectScheduler: {} already in flight, ignoring", label);
            return;
        }

        let flag = Arc::clone(flag);
        let dispatcher = dispatcher.clone();
        let timeout = self.timeout;

        self.runtime.spawn(async move {
            let result = with_timeout(timeout, request).await;
            flag.store(false, Ordering::Release);
            dispatcher.dispatch(Action::Session(finish(result)));
        });
    }
}

/// Bound `request` by `timeout`, reporting expiry as a transport error
async fn with_timeout<T>(
    timeout: Duration,
    request: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, ClientError> {
    match tokio::time::timeout(timeout, request).await {
        Ok(result) => result,
        Err(_) => Err(ClientError::Transport(format!(
            "request timed out after {}s",
            timeout.as_secs()
        ))),
    }
}

impl EffectRunner for EffectScheduler {
    fn schedule(&mut self, effect: Effect, dispatcher: &Dispatcher) {
        match effect {
            Effect::None => {}
            Effect::FetchRepositories { scope } => {
                log::info!("EffectScheduler: fetching repositories ({})", scope.label());
                let client = Arc::clone(&self.client);
                self.spawn_guarded(
                    &self.fetch_in_flight,
                    "repository fetch",
                    async move { client.list_repositories(scope).await },
                    dispatcher,
                    SessionAction::ReposLoaded,
                );
            }
            Effect::DeleteNext(record) => {
                log::info!("EffectScheduler: deleting {}", record.full_name);
                let client = Arc::clone(&self.client);
                let full_name = record.full_name.clone();
                self.spawn_guarded(
                    &self.delete_in_flight,
                    "delete",
                    async move { client.delete_repository(&full_name).await },
                    dispatcher,
                    move |result| SessionAction::DeleteResult { record, result },
                );
            }
            Effect::FetchCurrentUser => {
                let client = Arc::clone(&self.client);
                let dispatcher = dispatcher.clone();
                let timeout = self.timeout;
                self.runtime.spawn(async move {
                    let result = with_timeout(timeout, client.current_user()).await;
                    dispatcher.dispatch(Action::Session(SessionAction::CurrentUserLoaded(result)));
                });
            }
            Effect::OpenInBrowser(url) => {
                self.runtime.spawn(open_url(url));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gh_client::{RepoScope, RepositoryRecord};
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::Receiver;

    struct FakeClient {
        delay: Duration,
    }

    #[async_trait]
    impl RepositoryClient for FakeClient {
        async fn list_repositories(
            &self,
            _scope: RepoScope,
        ) -> Result<Vec<RepositoryRecord>, ClientError> {
            tokio::time::sleep(self.delay).await;
            Ok(vec![RepositoryRecord {
                full_name: "me/one".to_string(),
                ..Default::default()
            }])
        }

        async fn delete_repository(&self, full_name: &str) -> Result<(), ClientError> {
            tokio::time::sleep(self.delay).await;
            if full_name == "me/locked" {
                return Err(ClientError::Forbidden("nope".to_string()));
            }
            Ok(())
        }

        async fn current_user(&self) -> Result<String, ClientError> {
            Ok("me".to_string())
        }
    }

    fn make_scheduler(delay: Duration, timeout: Duration) -> EffectScheduler {
        EffectScheduler::new(
            build_runtime().unwrap(),
            Arc::new(FakeClient { delay }),
            timeout,
        )
    }

    fn next(rx: &Receiver<Action>) -> Action {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_fetch_dispatches_loaded() {
        let mut scheduler = make_scheduler(Duration::ZERO, Duration::from_secs(5));
        let (dispatcher, rx) = Dispatcher::channel();

        scheduler.schedule(
            Effect::FetchRepositories {
                scope: RepoScope::Forks,
            },
            &dispatcher,
        );

        match next(&rx) {
            Action::Session(SessionAction::ReposLoaded(Ok(repos))) => {
                assert_eq!(repos.len(), 1);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_delete_result_carries_record() {
        let mut scheduler = make_scheduler(Duration::ZERO, Duration::from_secs(5));
        let (dispatcher, rx) = Dispatcher::channel();
        let record = RepositoryRecord {
            full_name: "me/locked".to_string(),
            ..Default::default()
        };

        scheduler.schedule(Effect::DeleteNext(record.clone()), &dispatcher);

        assert_eq!(
            next(&rx),
            Action::Session(SessionAction::DeleteResult {
                record,
                result: Err(ClientError::Forbidden("nope".to_string())),
            })
        );
    }

    #[test]
    fn test_second_fetch_is_refused_while_in_flight() {
        let mut scheduler = make_scheduler(Duration::from_millis(200), Duration::from_secs(5));
        let (dispatcher, rx) = Dispatcher::channel();
        let fetch = Effect::FetchRepositories {
            scope: RepoScope::All,
        };

        scheduler.schedule(fetch.clone(), &dispatcher);
        scheduler.schedule(fetch, &dispatcher);

        assert!(matches!(
            next(&rx),
            Action::Session(SessionAction::ReposLoaded(Ok(_)))
        ));
        assert!(rx.recv_timeout(Duration::from_millis(400)).is_err());
    }

    #[test]
    fn test_timeout_becomes_transport_error() {
        let mut scheduler = make_scheduler(Duration::from_secs(10), Duration::from_millis(50));
        let (dispatcher, rx) = Dispatcher::channel();

        scheduler.schedule(
            Effect::FetchRepositories {
                scope: RepoScope::Forks,
            },
            &dispatcher,
        );

        match next(&rx) {
            Action::Session(SessionAction::ReposLoaded(Err(ClientError::Transport(msg)))) => {
                assert!(msg.contains("timed out"));
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_current_user() {
        let mut scheduler = make_scheduler(Duration::ZERO, Duration::from_secs(5));
        let (dispatcher, rx) = Dispatcher::channel();

        scheduler.schedule(Effect::FetchCurrentUser, &dispatcher);

        assert_eq!(
            next(&rx),
            Action::Session(SessionAction::CurrentUserLoaded(Ok("me".to_string())))
        );
    }
}
