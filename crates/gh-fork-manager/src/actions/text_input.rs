//! Text input actions - shared by every mode with text input capability
//!
//! These are generic edits that the text input middleware translates into
//! filter or confirmation edits depending on the current mode.

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Cmd+Backspace or Ctrl+U)
    ClearLine,
    /// Escape pressed - abort the edit
    Escape,
    /// Enter pressed - commit the edit
    Confirm,
}
