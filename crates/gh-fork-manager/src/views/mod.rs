use crate::session::SessionMode;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod confirm_view;
pub mod help_view;
pub mod main_view;
pub mod status_bar;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    main_view::render(state, area, f);

    if state.session.mode == SessionMode::ConfirmingDelete {
        confirm_view::render(state, area, f);
    }

    if state.session.show_help {
        help_view::render(state, area, f);
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
