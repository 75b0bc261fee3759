//! Status Bar Widget
//!
//! Format: `[HH:MM:SS] emoji message`

use crate::state::StatusMessage;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// Columns reserved for padding, timestamp and emoji
const PREFIX_WIDTH: usize = 15;

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a> {
    pub status: &'a StatusMessage,
    pub theme: &'a Theme,
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        // Fill entire row with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(self.theme.bg_panel).set_char(' ');
        }

        let style = self.theme.status(self.status.kind);
        let available = usize::from(area.width).saturating_sub(PREFIX_WIDTH);

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("[{}] ", self.status.timestamp.format("%H:%M:%S")),
                self.theme.muted(),
            ),
            Span::styled(format!("{} ", self.status.kind.emoji()), style),
            Span::styled(truncate(&self.status.message, available), style),
        ]);

        line.render(area, buf);
    }
}

/// Cut `text` to `width` characters, ending in an ellipsis when shortened
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Loaded 3 forks", 40), "Loaded 3 forks");
        assert_eq!(truncate("Deleting 12 repos", 5), "Dele…");
    }

    #[test]
    fn test_renders_message() {
        let theme = Theme::default();
        let status = StatusMessage::success("Loaded 3 forks");
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        StatusBarWidget {
            status: &status,
            theme: &theme,
        }
        .render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("Loaded 3 forks"));
    }
}
