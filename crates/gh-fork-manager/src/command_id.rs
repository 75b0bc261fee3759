//! Command identifiers
//!
//! This module defines all command IDs as an enum for type-safe
//! command references that can be serialized/deserialized.

use crate::actions::{Action, GlobalAction, NavigationAction, SessionAction};
use serde::{Deserialize, Serialize};

/// Unique identifier for each command in the application.
///
/// Commands are the semantic actions users can trigger from the keymap.
/// The enum is serialized as snake_case (e.g., `RepoRefresh` -> `"repo_refresh"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    /// Navigate to the next item (down)
    NavigateNext,
    /// Navigate to the previous item (up)
    NavigatePrevious,
    /// Jump to the first item (gg in vim)
    NavigateToTop,
    /// Jump to the last item (G in vim)
    NavigateToBottom,

    // === Selection ===
    /// Toggle selection of the repository under the cursor
    RepoToggleSelection,
    /// Select every visible repository, or clear them when all are selected
    RepoSelectAllVisible,

    // === Repository operations ===
    /// Delete every selected repository
    RepoDeleteSelected,
    /// Reload the repository list
    RepoRefresh,
    /// Cycle forks / owned / all
    RepoCycleScope,
    /// Open the repository under the cursor in the browser
    RepoOpenInBrowser,

    // === Filter ===
    /// Start editing the filter
    FilterStart,

    // === Help ===
    /// Show or hide the key bindings overlay
    KeyBindingsToggleView,

    // === General ===
    /// Close the overlay, or quit
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::RepoToggleSelection => Action::Session(SessionAction::ToggleSelection),
            Self::RepoSelectAllVisible => Action::Session(SessionAction::SelectAllVisible),
            Self::RepoDeleteSelected => Action::Session(SessionAction::DeleteRequested),
            Self::RepoRefresh => Action::Session(SessionAction::LoadRequested),
            Self::RepoCycleScope => Action::Session(SessionAction::ScopeToggled),
            Self::RepoOpenInBrowser => Action::Session(SessionAction::OpenInBrowser),

            Self::FilterStart => Action::Session(SessionAction::FilterStarted),

            Self::KeyBindingsToggleView => Action::Session(SessionAction::HelpToggled),

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Human readable description for the help overlay
    pub fn title(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Move down",
            Self::NavigatePrevious => "Move up",
            Self::NavigateToTop => "Jump to first",
            Self::NavigateToBottom => "Jump to last",
            Self::RepoToggleSelection => "Toggle selection",
            Self::RepoSelectAllVisible => "Select / clear all visible",
            Self::RepoDeleteSelected => "Delete selected",
            Self::RepoRefresh => "Refresh",
            Self::RepoCycleScope => "Cycle forks / owned / all",
            Self::RepoOpenInBrowser => "Open in browser",
            Self::FilterStart => "Filter",
            Self::KeyBindingsToggleView => "Toggle help",
            Self::GlobalClose => "Close / quit",
            Self::GlobalQuit => "Quit",
        }
    }

    /// Category used to group bindings in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateToTop
            | Self::NavigateToBottom => "Navigation",

            Self::RepoToggleSelection | Self::RepoSelectAllVisible => "Selection",

            Self::RepoDeleteSelected
            | Self::RepoRefresh
            | Self::RepoCycleScope
            | Self::RepoOpenInBrowser
            | Self::FilterStart => "Repositories",

            Self::KeyBindingsToggleView | Self::GlobalClose | Self::GlobalQuit => "General",
        }
    }
}
