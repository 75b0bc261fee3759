use crate::actions::{Action, GlobalAction, NavigationAction, SessionAction};
use crate::effect::Effect;
use crate::reducers::session_reducer;
use crate::state::AppState;

/// Root reducer - orchestrates the session reducer
///
/// Returns the next state and the effect the scheduler has to perform.
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Effect) {
    match action {
        Action::Global(GlobalAction::Quit) => {
            log::info!("Quit requested");
            state.running = false;
            (state, Effect::None)
        }
        Action::Global(GlobalAction::Close) => {
            if state.session.show_help {
                state.session.show_help = false;
            } else {
                log::debug!("Closing main view - quitting application");
                state.running = false;
            }
            (state, Effect::None)
        }
        Action::Global(GlobalAction::KeyPressed(_)) => (state, Effect::None),
        Action::Navigate(navigation) => {
            let session_action = match navigation {
                NavigationAction::Next => SessionAction::CursorDown,
                NavigationAction::Previous => SessionAction::CursorUp,
                NavigationAction::ToTop => SessionAction::CursorToTop,
                NavigationAction::ToBottom => SessionAction::CursorToBottom,
            };
            reduce_session(state, &session_action)
        }
        Action::TextInput(input) => {
            log::debug!("TextInput action not handled in current mode: {:?}", input);
            (state, Effect::None)
        }
        Action::Session(session_action) => reduce_session(state, session_action),
    }
}

fn reduce_session(mut state: AppState, action: &SessionAction) -> (AppState, Effect) {
    let (session, effect) = session_reducer::reduce(state.session, action);
    state.session = session;
    (state, effect)
}
