//! Session actions - events consumed by the session state machine
//!
//! Keyboard commands, translated text edits and results of background
//! effects all arrive here.

use gh_client::{ClientError, RepositoryRecord};

/// Events of the fork-management session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    // === Loading ===
    /// Refresh key or initial entry
    LoadRequested,
    /// Result of a fetch effect
    ReposLoaded(Result<Vec<RepositoryRecord>, ClientError>),
    /// Cycle forks / owned / all and reload
    ScopeToggled,

    // === Identity ===
    WhoAmIRequested,
    CurrentUserLoaded(Result<String, ClientError>),

    // === Cursor ===
    CursorDown,
    CursorUp,
    CursorToTop,
    CursorToBottom,
    /// Terminal resized to `rows` lines
    ResizeViewport { rows: u16 },

    // === Selection ===
    ToggleSelection,
    SelectAllVisible,

    // === Filter ===
    FilterStarted,
    FilterTextChanged(String),
    FilterCommitted,
    FilterCancelled,

    // === Delete ===
    DeleteRequested,
    ConfirmationTextChanged(String),
    ConfirmationSubmitted,
    ConfirmationCancelled,
    /// Result of a delete effect for `record`
    DeleteResult {
        record: RepositoryRecord,
        result: Result<(), ClientError>,
    },

    // === Misc ===
    OpenInBrowser,
    HelpToggled,
}
