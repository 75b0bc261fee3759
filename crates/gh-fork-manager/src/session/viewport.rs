//! Scroll window over the filtered list

use std::ops::Range;

/// Smallest number of list rows ever shown
pub const MIN_VIEWPORT_HEIGHT: usize = 5;

/// Rows used by everything around the list: header (3), filter line (1),
/// list borders (2), "Showing" line (1), recent results (7), status bar (1)
pub const CHROME_ROWS: u16 = 15;

/// List rows available on a terminal with `rows` lines
pub fn viewport_height_for(rows: u16) -> usize {
    usize::from(rows.saturating_sub(CHROME_ROWS)).max(MIN_VIEWPORT_HEIGHT)
}

/// Offset and height of the rendered window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset: usize,
    pub height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: 0,
            height: MIN_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Clamp `cursor` into `[0, len)` and scroll so it is visible
    ///
    /// Afterwards `offset <= cursor < offset + height` and
    /// `offset <= max(0, len - height)`. Idempotent.
    pub fn ensure_visible(&mut self, cursor: &mut usize, len: usize) {
        if len == 0 {
            *cursor = 0;
            self.offset = 0;
            return;
        }

        *cursor = (*cursor).min(len - 1);

        let height = self.effective_height(len);
        let max_offset = len - height;
        self.offset = self.offset.min(max_offset);

        if *cursor < self.offset {
            self.offset = *cursor;
        } else if *cursor >= self.offset + height {
            self.offset = *cursor + 1 - height;
        }
    }

    /// Indices of the filtered list that are on screen
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = (self.offset + self.height).min(len);
        start..end
    }

    fn effective_height(&self, len: usize) -> usize {
        if self.height == 0 || self.height > len {
            len
        } else {
            self.height
        }
    }
}
