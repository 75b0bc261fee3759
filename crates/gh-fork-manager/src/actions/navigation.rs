//! Navigation actions (vim-style)

/// Generic cursor movement over the filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Next item (j, down arrow)
    Next,
    /// Previous item (k, up arrow)
    Previous,
    /// First item (gg)
    ToTop,
    /// Last item (G)
    ToBottom,
}
