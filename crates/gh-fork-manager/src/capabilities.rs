//! Mode capability system
//!
//! Each session mode declares what kind of input it accepts. The keyboard
//! middleware routes keys by capability instead of by mode, so a new mode
//! only has to declare its flags.

use bitflags::bitflags;

bitflags! {
    /// Capabilities of the active mode
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModeCapabilities: u32 {
        /// Printable keys are text, not commands
        const TEXT_INPUT = 1 << 0;

        /// The cursor can move over the list
        const ITEM_NAVIGATION = 1 << 1;

        /// List items can be selected and acted upon
        const ITEM_SELECTION = 1 << 2;
    }
}

impl Default for ModeCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

impl ModeCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    pub fn supports_item_selection(self) -> bool {
        self.contains(Self::ITEM_SELECTION)
    }
}
