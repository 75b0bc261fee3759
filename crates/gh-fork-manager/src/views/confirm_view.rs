//! Delete confirmation popup
//!
//! Lists the queued repositories and shows the approval phrase the user has
//! to type before the batch starts.

use crate::state::AppState;
use crate::views::centered;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Repository names listed before collapsing into "and N more"
const MAX_LISTED: usize = 8;

/// Render the confirmation popup as a centered floating window
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(confirmation) = state.session.confirmation.as_ref() else {
        return;
    };
    let theme = &state.theme;
    let phrase = state.session.approval_phrase();

    let mut lines = vec![Line::from(Span::styled(
        format!(
            " Delete {} repositories? This cannot be undone.",
            confirmation.records.len()
        ),
        theme.error(),
    ))];
    lines.push(Line::default());

    for record in confirmation.records.iter().take(MAX_LISTED) {
        lines.push(Line::from(Span::styled(
            format!("   {}", record.full_name),
            theme.text(),
        )));
    }
    if confirmation.records.len() > MAX_LISTED {
        lines.push(Line::from(Span::styled(
            format!("   and {} more", confirmation.records.len() - MAX_LISTED),
            theme.muted(),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" Type ", theme.muted()),
        Span::styled(phrase.clone(), theme.warning()),
        Span::styled(" to confirm:", theme.muted()),
    ]));

    let typed_style = if confirmation.input.trim() == phrase {
        theme.success()
    } else {
        theme.text()
    };
    lines.push(Line::from(vec![
        Span::styled(" > ", theme.key_hint()),
        Span::styled(confirmation.input.clone(), typed_style),
        Span::styled("▏", theme.key_hint()),
    ]));

    let popup = centered(area, 64, lines.len() as u16 + 2);

    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);
    f.render_widget(Clear, popup);

    let footer = Line::from(vec![
        Span::styled(" Enter", theme.key_hint()),
        Span::styled(" confirm  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .title(" Confirm delete ")
        .borders(Borders::ALL)
        .border_style(theme.error())
        .title_style(theme.error())
        .title_alignment(Alignment::Center)
        .title_bottom(footer);

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
