//! Application State

use crate::actions::{Action, SessionAction};
use crate::capabilities::ModeCapabilities;
use crate::keymap::{default_keymap, Keymap};
use crate::session::{SessionMode, SessionState};
use crate::theme::Theme;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub session: SessionState,
    /// Whether a token was configured (drives the header warning)
    pub authenticated: bool,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
}

impl AppState {
    pub fn new(session: SessionState, authenticated: bool) -> Self {
        Self {
            running: true,
            session,
            authenticated,
            theme: Theme::default(),
            keymap: default_keymap(),
        }
    }

    /// Capabilities of whatever currently owns the keyboard
    ///
    /// The help overlay swallows everything but closing it.
    pub fn capabilities(&self) -> ModeCapabilities {
        if self.session.show_help {
            return ModeCapabilities::empty();
        }

        match self.session.mode {
            SessionMode::Normal => {
                ModeCapabilities::ITEM_NAVIGATION | ModeCapabilities::ITEM_SELECTION
            }
            SessionMode::Filtering => {
                ModeCapabilities::TEXT_INPUT | ModeCapabilities::ITEM_NAVIGATION
            }
            SessionMode::ConfirmingDelete => ModeCapabilities::TEXT_INPUT,
        }
    }

    /// Gate for keymap commands
    pub fn accepts_action(&self, action: &Action) -> bool {
        let capabilities = self.capabilities();

        match action {
            Action::Global(_) => true,
            Action::Navigate(_) => capabilities.supports_item_navigation(),
            Action::TextInput(_) => capabilities.accepts_text_input(),
            Action::Session(SessionAction::HelpToggled) => {
                self.session.mode == SessionMode::Normal
            }
            Action::Session(_) => capabilities.supports_item_selection(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionState::default(), true)
    }
}
