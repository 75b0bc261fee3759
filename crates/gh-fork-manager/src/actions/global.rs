//! Global actions - not tied to any mode
//!
//! These actions affect the application as a whole.

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Close the help overlay, or quit when nothing is open
    Close,
    /// Quit the application
    Quit,
}
