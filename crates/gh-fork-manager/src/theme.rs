use crate::state::StatusKind;
use gh_client::RepositoryRecord;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
    pub status_running: Color,

    // Repository markers
    pub repo_fork: Color,
    pub repo_private: Color,
    pub repo_archived: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub bg_panel: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,
            status_running: tailwind::AMBER.c400,

            repo_fork: tailwind::PURPLE.c400,
            repo_private: tailwind::ORANGE.c400,
            repo_archived: tailwind::SLATE.c500,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,
            bg_panel: tailwind::SLATE.c800,
        }
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Space" in "Space to select")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Row under the cursor
    pub fn cursor_row(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Row marked for deletion
    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Color for a status line of the given kind
    pub fn status(&self, kind: StatusKind) -> Style {
        let color = match kind {
            StatusKind::Running => self.status_running,
            StatusKind::Success => self.status_success,
            StatusKind::Error => self.status_error,
            StatusKind::Warning => self.status_warning,
            StatusKind::Info => self.status_info,
        };
        Style::default().fg(color)
    }

    /// Name colour for a row that is neither under the cursor nor selected
    pub fn repo_name(&self, record: &RepositoryRecord) -> Style {
        let color = if record.archived {
            self.repo_archived
        } else if record.private {
            self.repo_private
        } else if record.is_fork() {
            self.repo_fork
        } else {
            self.text_primary
        };
        Style::default().fg(color)
    }

    /// Style for a delete outcome ("deleted" or "error: ...")
    pub fn outcome(&self, outcome: &str) -> Style {
        if outcome.starts_with("error") {
            self.error()
        } else {
            self.success()
        }
    }
}
