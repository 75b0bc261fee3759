//! Main view: header, filter line, repository list, recent results, status bar

use crate::session::{SessionMode, SessionState};
use crate::state::AppState;
use crate::theme::Theme;
use crate::views::status_bar::StatusBarWidget;
use gh_client::RepositoryRecord;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Outcomes listed in the results panel
const RECENT_RESULTS: usize = 5;

/// Render the main view
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Filter line
            Constraint::Min(3),    // Repository list
            Constraint::Length(1), // "Showing a-b of n"
            Constraint::Length(7), // Recent results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let session = &state.session;
    let theme = &state.theme;

    render_header(state, chunks[0], f);
    f.render_widget(Paragraph::new(filter_line(session, theme)), chunks[1]);
    render_list(session, theme, chunks[2], f);
    f.render_widget(
        Paragraph::new(Span::styled(showing_label(session), theme.muted())),
        chunks[3],
    );
    render_results(session, theme, chunks[4], f);
    f.render_widget(
        StatusBarWidget {
            status: &session.status,
            theme,
        },
        chunks[5],
    );
}

/// Metadata shown after the repository name
pub fn repo_meta(record: &RepositoryRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !record.language.is_empty() {
        parts.push(record.language.clone());
    }
    if record.private {
        parts.push("private".to_string());
    }
    if record.archived {
        parts.push("archived".to_string());
    }
    if let Some(parent) = record.parent.as_deref().filter(|p| !p.is_empty()) {
        parts.push(format!("parent: {parent}"));
    }
    parts.push(match record.pushed_at {
        Some(pushed) => format!("pushed {}", pushed.format("%Y-%m-%d")),
        None => "pushed unknown".to_string(),
    });

    parts.join(" · ")
}

/// "Showing a-b of n" for the current viewport, 1-based and inclusive
pub fn showing_label(session: &SessionState) -> String {
    let total = session.filtered.len();
    let range = session.viewport.visible_range(total);
    if range.is_empty() {
        return format!("Showing 0 of {total}");
    }
    format!("Showing {}-{} of {}", range.start + 1, range.end, total)
}

/// `Total | Filtered | Selected` plus whatever is running
fn stats_line(session: &SessionState) -> String {
    let mut stats = format!(
        "Total: {} | Filtered: {} | Selected: {}",
        session.repos.len(),
        session.filtered.len(),
        session.selected.len()
    );
    if session.loading {
        stats.push_str(" | Loading…");
    }
    if session.deleting {
        stats.push_str(&format!(" | Deleting {}…", session.queue.len()));
    }
    stats
}

fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    let session = &state.session;
    let theme = &state.theme;

    let mut spans = vec![
        Span::styled(stats_line(session), theme.text()),
        Span::styled("  scope: ", theme.muted()),
        Span::styled(session.scope.label(), theme.key_hint()),
    ];
    if let Some(login) = &session.viewer_login {
        spans.push(Span::styled(format!("  @{login}"), theme.muted()));
    }
    if !state.authenticated {
        spans.push(Span::styled(
            "  No GITHUB_TOKEN set, requests will fail",
            theme.warning(),
        ));
    }

    let block = Block::default()
        .title(" gh-fork-manager ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn filter_line<'a>(session: &'a SessionState, theme: &Theme) -> Line<'a> {
    match session.mode {
        SessionMode::Filtering => Line::from(vec![
            Span::styled(" Filter: ", theme.key_hint()),
            Span::styled(session.filter_input.as_str(), theme.text()),
            Span::styled("▏", theme.key_hint()),
            Span::styled("  Enter apply · Esc clear", theme.muted()),
        ]),
        _ if !session.filter.is_empty() => Line::from(vec![
            Span::styled(" Filter: ", theme.muted()),
            Span::styled(session.filter.as_str(), theme.text().bold()),
        ]),
        _ => Line::from(Span::styled(" Press / to filter", theme.muted())),
    }
}

fn render_list(session: &SessionState, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(format!(" {} ", session.scope.label()))
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    if session.filtered.is_empty() {
        let message = if session.loading {
            "Loading…"
        } else if session.repos.is_empty() {
            "No repositories. Press r to refresh."
        } else {
            "Nothing matches the filter"
        };
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {message}"), theme.muted())).block(block),
            area,
        );
        return;
    }

    let lines: Vec<Line> = session
        .viewport
        .visible_range(session.filtered.len())
        .filter_map(|position| {
            let record = session.repos.get(*session.filtered.get(position)?)?;
            Some(repo_line(session, theme, record, position == session.cursor))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn repo_line<'a>(
    session: &SessionState,
    theme: &Theme,
    record: &'a RepositoryRecord,
    at_cursor: bool,
) -> Line<'a> {
    let selected = session.is_selected(&record.full_name);
    let marker = if at_cursor { ">" } else { " " };
    let check = if selected { "[x]" } else { "[ ]" };

    let name_style = if at_cursor {
        theme.cursor_row()
    } else if selected {
        theme.selected_row()
    } else {
        theme.repo_name(record)
    };

    let mut spans = vec![
        Span::styled(format!("{marker} {check} "), name_style),
        Span::styled(record.full_name.as_str(), name_style),
        Span::styled(format!(" — {}", repo_meta(record)), theme.muted()),
    ];
    if let Some(outcome) = session.outcomes.get(&record.full_name) {
        spans.push(Span::styled(format!("  ({outcome})"), theme.outcome(outcome)));
    }

    Line::from(spans)
}

fn render_results(session: &SessionState, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(" Recent results ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    let lines: Vec<Line> = session
        .recent_outcomes(RECENT_RESULTS)
        .into_iter()
        .map(|(name, outcome)| {
            Line::from(vec![
                Span::styled(format!(" {name} -> "), theme.text()),
                Span::styled(outcome.to_string(), theme.outcome(outcome)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
