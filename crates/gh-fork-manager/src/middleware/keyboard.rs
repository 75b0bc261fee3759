//! KeyboardMiddleware - translates keyboard events into actions
//!
//! Keys are handled in three layers:
//!
//! ## Layer 1: Priority keys
//! Ctrl+C always quits. Esc aborts text input, or closes otherwise.
//!
//! ## Layer 2: Capabilities
//! When the mode has TEXT_INPUT, printable keys become text edits instead of
//! commands.
//!
//! ## Layer 3: Keymap + gating
//! Look the key up in the keymap (including two-key sequences) and dispatch
//! the first command the current mode accepts.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::{KeyMatch, PendingKey};
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware {
    /// First key of a two-key sequence
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let capabilities = state.capabilities();

        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            self.pending_key = None;
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2: text input
        if capabilities.accepts_text_input() {
            self.pending_key = None;
            if let Some(action) = text_input_action(&key, capabilities.supports_item_navigation()) {
                log::debug!("Layer 2: TEXT_INPUT - {:?}", action);
                dispatcher.dispatch(action);
                return;
            }
        }

        // Layer 3: keymap + gating
        let commands = match state.keymap.match_key(&key, self.pending_key.as_ref()) {
            KeyMatch::Pending(first) => {
                log::debug!("Layer 3: Waiting for second key in sequence (first: {})", first);
                self.pending_key = Some(PendingKey::new(first));
                return;
            }
            KeyMatch::Commands(commands) => commands,
            KeyMatch::None => Vec::new(),
        };
        self.pending_key = None;

        for command in commands {
            let action = command.to_action();
            if state.accepts_action(&action) {
                log::debug!("Layer 3: Command {:?} accepted, dispatching", command);
                dispatcher.dispatch(action);
                return;
            }
            log::debug!("Layer 3: Command {:?} rejected in current mode", command);
        }
    }
}

/// Map a key to a text edit, or to list navigation while typing
fn text_input_action(key: &KeyEvent, navigation: bool) -> Option<Action> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let input = match key.code {
        KeyCode::Char('u') if control => TextInputAction::ClearLine,
        KeyCode::Char(c) if !control && !alt => TextInputAction::Char(c),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            TextInputAction::ClearLine
        }
        KeyCode::Backspace => TextInputAction::Backspace,
        KeyCode::Enter => TextInputAction::Confirm,
        KeyCode::Down if navigation => return Some(Action::Navigate(NavigationAction::Next)),
        KeyCode::Up if navigation => return Some(Action::Navigate(NavigationAction::Previous)),
        _ => return None,
    };

    Some(Action::TextInput(input))
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach the reducer
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SessionAction;
    use crate::session::SessionMode;
    use pretty_assertions::assert_eq;

    fn press(
        middleware: &mut KeyboardMiddleware,
        state: &AppState,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Vec<Action> {
        let (dispatcher, rx) = Dispatcher::channel();
        let key = KeyEvent::new(code, modifiers);
        let consumed =
            !middleware.handle(&Action::Global(GlobalAction::KeyPressed(key)), state, &dispatcher);
        assert!(consumed);
        rx.try_iter().collect()
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut middleware = KeyboardMiddleware::new();
        let mut state = AppState::default();
        state.session.mode = SessionMode::Filtering;

        assert_eq!(
            press(&mut middleware, &state, KeyCode::Char('c'), KeyModifiers::CONTROL),
            vec![Action::Global(GlobalAction::Quit)]
        );
    }

    #[test]
    fn test_esc_depends_on_text_input() {
        let mut middleware = KeyboardMiddleware::new();
        let mut state = AppState::default();

        assert_eq!(
            press(&mut middleware, &state, KeyCode::Esc, KeyModifiers::NONE),
            vec![Action::Global(GlobalAction::Close)]
        );

        state.session.mode = SessionMode::Filtering;
        assert_eq!(
            press(&mut middleware, &state, KeyCode::Esc, KeyModifiers::NONE),
            vec![Action::TextInput(TextInputAction::Escape)]
        );
    }

    #[test]
    fn test_chars_are_text_while_filtering() {
        let mut middleware = KeyboardMiddleware::new();
        let mut state = AppState::default();
        state.session.mode = SessionMode::Filtering;

        assert_eq!(
            press(&mut middleware, &state, KeyCode::Char('d'), KeyModifiers::NONE),
            vec![Action::TextInput(TextInputAction::Char('d'))]
        );
        assert_eq!(
            press(&mut middleware, &state, KeyCode::Down, KeyModifiers::NONE),
            vec![Action::Navigate(NavigationAction::Next)]
        );
    }

    #[test]
    fn test_keymap_commands_in_normal_mode() {
        let mut middleware = KeyboardMiddleware::new();
        let state = AppState::default();

        assert_eq!(
            press(&mut middleware, &state, KeyCode::Char('d'), KeyModifiers::NONE),
            vec![Action::Session(SessionAction::DeleteRequested)]
        );
        assert_eq!(
            press(&mut middleware, &state, KeyCode::Char(' '), KeyModifiers::NONE),
            vec![Action::Session(SessionAction::ToggleSelection)]
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut middleware = KeyboardMiddleware::new();
        let state = AppState::default();

        assert!(press(&mut middleware, &state, KeyCode::Char('g'), KeyModifiers::NONE).is_empty());
        assert_eq!(
            press(&mut middleware, &state, KeyCode::Char('g'), KeyModifiers::NONE),
            vec![Action::Navigate(NavigationAction::ToTop)]
        );
    }

    #[test]
    fn test_help_overlay_gates_commands() {
        let mut middleware = KeyboardMiddleware::new();
        let mut state = AppState::default();
        state.session.show_help = true;

        assert!(press(&mut middleware, &state, KeyCode::Char('d'), KeyModifiers::NONE).is_empty());
        assert_eq!(
            press(&mut middleware, &state, KeyCode::Char('?'), KeyModifiers::NONE),
            vec![Action::Session(SessionAction::HelpToggled)]
        );
    }
}
