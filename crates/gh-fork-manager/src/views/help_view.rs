//! Key Bindings Help Overlay
//!
//! Displays all keybindings grouped by category.

use crate::keybindings::Keymap;
use crate::state::AppState;
use crate::theme::Theme;
use crate::views::centered;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help sections in display order
const CATEGORIES: [&str; 4] = ["Navigation", "Selection", "Repositories", "General"];

/// Width of the key column
const KEY_COLUMN: usize = 12;

/// Render the help overlay
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let lines = help_lines(&state.keymap, theme);

    let panel = centered(area, 56, lines.len() as u16 + 2);

    // Dim everything behind the panel
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);
    f.render_widget(Clear, panel);

    let footer = Line::from(vec![
        Span::styled(" ?", theme.key_hint()),
        Span::styled(" / ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" close ", theme.muted()),
    ]);

    let block = Block::default()
        .title(" Key Bindings ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer);

    f.render_widget(Paragraph::new(lines).block(block), panel);
}

/// One header per category followed by its bindings
fn help_lines(keymap: &Keymap, theme: &Theme) -> Vec<Line<'static>> {
    let commands = keymap.commands();
    let mut lines = Vec::new();

    for category in CATEGORIES {
        let entries: Vec<_> = commands
            .iter()
            .filter(|command| command.category() == category)
            .filter_map(|&command| {
                keymap
                    .compact_hint_for_command(command)
                    .map(|hint| (hint, command.title()))
            })
            .collect();

        if entries.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            format!(" {category}"),
            theme.section_header(),
        )));
        for (hint, title) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("   {:<width$}", hint, width = KEY_COLUMN), theme.key_hint()),
                Span::styled(title, theme.key_description()),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::default_keymap;

    #[test]
    fn test_help_lists_every_category() {
        let lines = help_lines(&default_keymap(), &Theme::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        for category in CATEGORIES {
            assert!(text.iter().any(|l| l.trim() == category), "{category}");
        }
        assert!(text.iter().any(|l| l.contains("j/↓") && l.contains("Move down")));
    }
}
