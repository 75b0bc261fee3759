use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::scheduler::EffectRunner;
use crate::state::AppState;
use std::sync::mpsc::Receiver;

/// Store - holds application state and manages the Redux loop
///
/// Actions pass the middleware chain, then the reducer. The effect the
/// reducer returns is handed to the runner, whose results come back through
/// the dispatcher channel.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
    effects: Box<dyn EffectRunner>,
}

impl Store {
    pub fn new(initial_state: AppState, effects: Box<dyn EffectRunner>) -> Self {
        let (dispatcher, action_rx) = Dispatcher::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher,
            action_rx,
            effects,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action and everything it queued
    pub fn dispatch(&mut self, action: Action) {
        self.apply(action);
        self.process_pending();
    }

    /// Drain actions queued by middleware and background effects
    pub fn process_pending(&mut self) {
        while self.state.running {
            match self.action_rx.try_recv() {
                Ok(action) => self.apply(action),
                Err(_) => break,
            }
        }
    }

    fn apply(&mut self, action: Action) {
        if !self.state.running {
            log::debug!("Store: ignoring {:?} after quit", action);
            return;
        }

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let (state, effect) = reduce(self.state.clone(), &action);
        self.state = state;

        if !effect.is_none() {
            self.effects.schedule(effect, &self.dispatcher);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, SessionAction};
    use crate::effect::Effect;
    use crate::middleware::keyboard::KeyboardMiddleware;
    use crate::middleware::text_input::TextInputMiddleware;
    use crate::session::SessionMode;
    use gh_client::{RepoScope, RepositoryRecord};
    use pretty_assertions::assert_eq;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::{Arc, Mutex};

    /// Records effects instead of performing them
    #[derive(Clone, Default)]
    struct RecordingRunner {
        effects: Arc<Mutex<Vec<Effect>>>,
    }

    impl EffectRunner for RecordingRunner {
        fn schedule(&mut self, effect: Effect, _dispatcher: &Dispatcher) {
            self.effects.lock().unwrap().push(effect);
        }
    }

    fn record(name: &str) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            full_name: format!("me/{name}"),
            owner: "me".to_string(),
            fork: true,
            parent: Some(format!("up/{name}")),
            ..Default::default()
        }
    }

    fn store() -> (Store, Arc<Mutex<Vec<Effect>>>) {
        let runner = RecordingRunner::default();
        let effects = Arc::clone(&runner.effects);
        let mut store = Store::new(AppState::default(), Box::new(runner));
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        store.add_middleware(Box::new(TextInputMiddleware::new()));
        (store, effects)
    }

    fn press(store: &mut Store, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
    }

    fn type_text(store: &mut Store, text: &str) {
        for c in text.chars() {
            press(store, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_load_request_reaches_runner() {
        let (mut store, effects) = store();

        store.dispatch(Action::Session(SessionAction::LoadRequested));

        assert!(store.state().session.loading);
        assert_eq!(
            *effects.lock().unwrap(),
            vec![Effect::FetchRepositories {
                scope: RepoScope::Forks
            }]
        );
    }

    #[test]
    fn test_filter_typed_through_keyboard() {
        let (mut store, _) = store();
        store.dispatch(Action::Session(SessionAction::ReposLoaded(Ok(vec![
            record("alpha"),
            record("beta"),
        ]))));

        press(&mut store, KeyCode::Char('/'));
        assert_eq!(store.state().session.mode, SessionMode::Filtering);

        type_text(&mut store, "bet");
        press(&mut store, KeyCode::Enter);

        let session = &store.state().session;
        assert_eq!(session.mode, SessionMode::Normal);
        assert_eq!(session.filter, "bet");
        assert_eq!(session.filtered.len(), 1);
    }

    #[test]
    fn test_delete_flow_with_approval_phrase() {
        let (mut store, effects) = store();
        store.dispatch(Action::Session(SessionAction::CurrentUserLoaded(Ok(
            "me".to_string(),
        ))));
        store.dispatch(Action::Session(SessionAction::ReposLoaded(Ok(vec![
            record("alpha"),
        ]))));

        press(&mut store, KeyCode::Char(' '));
        press(&mut store, KeyCode::Char('d'));
        assert_eq!(store.state().session.mode, SessionMode::ConfirmingDelete);

        type_text(&mut store, "me approves");
        press(&mut store, KeyCode::Enter);

        assert!(store.state().session.deleting);
        assert_eq!(
            effects.lock().unwrap().last(),
            Some(&Effect::DeleteNext(record("alpha")))
        );
    }

    #[test]
    fn test_quit_stops_processing() {
        let (mut store, effects) = store();

        press(&mut store, KeyCode::Char('q'));
        assert!(!store.state().running);

        store.dispatch(Action::Session(SessionAction::LoadRequested));
        assert!(effects.lock().unwrap().is_empty());
    }
}
