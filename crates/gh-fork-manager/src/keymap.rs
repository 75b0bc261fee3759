pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        // Selection
        KeyBinding::new("space", "Space", RepoToggleSelection),
        KeyBinding::new("a", "a", RepoSelectAllVisible),
        // Repositories
        KeyBinding::new("/", "/", FilterStart),
        KeyBinding::new("d", "d", RepoDeleteSelected),
        KeyBinding::new("r", "r", RepoRefresh),
        KeyBinding::new("t", "t", RepoCycleScope),
        KeyBinding::new("enter", "Enter", RepoOpenInBrowser),
        // Help
        KeyBinding::new("?", "?", KeyBindingsToggleView),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
