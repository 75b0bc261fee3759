//! Actions module
//!
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that are translated by the current mode
//! - Global actions that affect the entire application
//! - Session actions that drive the fork-management state machine

pub mod global;
pub mod navigation;
pub mod session;
pub mod text_input;

pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use session::SessionAction;
pub use text_input::TextInputAction;

/// Root action enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Generic navigation action
    Navigate(NavigationAction),
    /// Generic text input action - translated by the text input middleware
    TextInput(TextInputAction),
    /// Global application actions
    Global(GlobalAction),
    /// Session state machine events
    Session(SessionAction),
}
