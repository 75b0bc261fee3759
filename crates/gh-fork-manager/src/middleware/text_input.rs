//! Text Input Translation Middleware
//!
//! Translates generic TextInput actions into filter or confirmation edits,
//! depending on the session mode. The translated action carries the complete
//! new buffer, so reducers never replay keystrokes.

use crate::actions::{Action, SessionAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::session::SessionMode;
use crate::state::AppState;

/// Middleware that translates TextInput actions by mode
pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextInputMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply an edit to `buffer`; `None` for inputs that are not edits
fn edit(buffer: &str, input: &TextInputAction) -> Option<String> {
    match input {
        TextInputAction::Char(c) => {
            let mut text = buffer.to_string();
            text.push(*c);
            Some(text)
        }
        TextInputAction::Backspace => {
            let mut text = buffer.to_string();
            text.pop();
            Some(text)
        }
        TextInputAction::ClearLine => Some(String::new()),
        TextInputAction::Escape | TextInputAction::Confirm => None,
    }
}

fn translate(input: &TextInputAction, state: &AppState) -> Option<SessionAction> {
    let session = &state.session;

    match session.mode {
        SessionMode::Filtering => Some(match input {
            TextInputAction::Escape => SessionAction::FilterCancelled,
            TextInputAction::Confirm => SessionAction::FilterCommitted,
            edit_input => SessionAction::FilterTextChanged(edit(&session.filter_input, edit_input)?),
        }),
        SessionMode::ConfirmingDelete => {
            let typed = session
                .confirmation
                .as_ref()
                .map(|c| c.input.as_str())
                .unwrap_or_default();
            Some(match input {
                TextInputAction::Escape => SessionAction::ConfirmationCancelled,
                TextInputAction::Confirm => SessionAction::ConfirmationSubmitted,
                edit_input => SessionAction::ConfirmationTextChanged(edit(typed, edit_input)?),
            })
        }
        SessionMode::Normal => None,
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::TextInput(input) = action {
            if let Some(translated) = translate(input, state) {
                log::debug!(
                    "TextInputMiddleware: Translating {:?} to {:?}",
                    input,
                    translated
                );
                dispatcher.dispatch(Action::Session(translated));
                return false;
            }
            log::debug!("TextInput action not handled in {:?} mode", state.session.mode);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Confirmation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_edits_carry_whole_buffer() {
        let mut state = AppState::default();
        state.session.mode = SessionMode::Filtering;
        state.session.filter_input = "ru".to_string();

        assert_eq!(
            translate(&TextInputAction::Char('s'), &state),
            Some(SessionAction::FilterTextChanged("rus".to_string()))
        );
        assert_eq!(
            translate(&TextInputAction::Backspace, &state),
            Some(SessionAction::FilterTextChanged("r".to_string()))
        );
        assert_eq!(
            translate(&TextInputAction::ClearLine, &state),
            Some(SessionAction::FilterTextChanged(String::new()))
        );
        assert_eq!(
            translate(&TextInputAction::Confirm, &state),
            Some(SessionAction::FilterCommitted)
        );
        assert_eq!(
            translate(&TextInputAction::Escape, &state),
            Some(SessionAction::FilterCancelled)
        );
    }

    #[test]
    fn test_confirmation_edits() {
        let mut state = AppState::default();
        state.session.mode = SessionMode::ConfirmingDelete;
        state.session.confirmation = Some(Confirmation {
            records: vec![],
            input: "me approve".to_string(),
        });

        assert_eq!(
            translate(&TextInputAction::Char('s'), &state),
            Some(SessionAction::ConfirmationTextChanged("me approves".to_string()))
        );
        assert_eq!(
            translate(&TextInputAction::Escape, &state),
            Some(SessionAction::ConfirmationCancelled)
        );
    }

    #[test]
    fn test_normal_mode_passes_through() {
        let state = AppState::default();
        assert_eq!(translate(&TextInputAction::Char('x'), &state), None);
    }
}
