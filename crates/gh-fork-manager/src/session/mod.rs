//! Session state
//!
//! The in-memory repository set together with filter, cursor, viewport,
//! selection and delete queue. Mutated only by
//! [`crate::reducers::session_reducer::reduce`].

pub mod filter;
pub mod viewport;

use crate::state::StatusMessage;
use gh_client::{RepoScope, RepositoryRecord};
use gh_fork_config::{AuditSink, MemoryAuditSink};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

pub use viewport::{viewport_height_for, Viewport};

/// Login placeholder used in the approval phrase before `/user` answered
const UNKNOWN_LOGIN: &str = "your-github-username";

/// Phrase the user types to confirm a delete batch
pub fn approval_phrase(login: Option<&str>) -> String {
    let login = login.map(str::trim).filter(|l| !l.is_empty());
    format!("{} approves", login.unwrap_or(UNKNOWN_LOGIN))
}

/// Which input the session is collecting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionMode {
    #[default]
    Normal,
    /// Keystrokes edit the filter buffer
    Filtering,
    /// Keystrokes edit the approval phrase
    ConfirmingDelete,
}

/// Collaborators and settings handed to the session at construction
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub audit: Arc<dyn AuditSink>,
    /// Ask for the approval phrase before deleting
    pub confirm_deletes: bool,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            audit: Arc::new(MemoryAuditSink::new()),
            confirm_deletes: true,
        }
    }
}

/// A delete batch waiting for the approval phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Snapshot taken when delete was requested, sorted by full name
    pub records: Vec<RepositoryRecord>,
    /// What the user typed so far
    pub input: String,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Every known repository, most recently pushed first
    pub repos: Vec<RepositoryRecord>,
    /// Indices into `repos` matching `filter`
    pub filtered: Vec<usize>,
    /// Active filter
    pub filter: String,
    /// Filter being edited
    pub filter_input: String,
    /// Index into `filtered`
    pub cursor: usize,
    pub viewport: Viewport,
    /// Selected full names
    pub selected: HashSet<String>,
    /// Records awaiting deletion; the head is in flight while `deleting`
    pub queue: VecDeque<RepositoryRecord>,
    /// Last delete outcome per full name ("deleted" or "error: ...")
    pub outcomes: HashMap<String, String>,
    /// Full names in the order their outcomes arrived
    pub outcome_log: Vec<String>,
    pub status: StatusMessage,
    pub last_error: Option<String>,
    pub loading: bool,
    pub deleting: bool,
    pub mode: SessionMode,
    pub scope: RepoScope,
    pub viewer_login: Option<String>,
    pub confirmation: Option<Confirmation>,
    pub show_help: bool,
    pub context: SessionContext,
}

impl SessionState {
    pub fn new(context: SessionContext, scope: RepoScope) -> Self {
        Self {
            repos: Vec::new(),
            filtered: Vec::new(),
            filter: String::new(),
            filter_input: String::new(),
            cursor: 0,
            viewport: Viewport::default(),
            selected: HashSet::new(),
            queue: VecDeque::new(),
            outcomes: HashMap::new(),
            outcome_log: Vec::new(),
            status: StatusMessage::default(),
            last_error: None,
            loading: false,
            deleting: false,
            mode: SessionMode::Normal,
            scope,
            viewer_login: None,
            confirmation: None,
            show_help: false,
            context,
        }
    }

    /// Record under the cursor
    pub fn current(&self) -> Option<&RepositoryRecord> {
        self.filtered
            .get(self.cursor)
            .and_then(|&index| self.repos.get(index))
    }

    /// Records of the filtered view, in order
    pub fn visible(&self) -> impl Iterator<Item = &RepositoryRecord> {
        self.filtered.iter().filter_map(|&index| self.repos.get(index))
    }

    pub fn is_selected(&self, full_name: &str) -> bool {
        self.selected.contains(full_name)
    }

    /// Phrase expected by the delete confirmation
    pub fn approval_phrase(&self) -> String {
        approval_phrase(self.viewer_login.as_deref())
    }

    /// Recompute `filtered` from `filter` and re-establish the viewport invariant
    pub(crate) fn refilter(&mut self) {
        self.filtered = filter::apply_filter(&self.repos, &self.filter);
        self.clamp_cursor();
    }

    pub(crate) fn clamp_cursor(&mut self) {
        self.viewport
            .ensure_visible(&mut self.cursor, self.filtered.len());
    }

    /// Selected records still present, sorted by full name
    pub(crate) fn selected_snapshot(&self) -> Vec<RepositoryRecord> {
        let mut records: Vec<RepositoryRecord> = self
            .repos
            .iter()
            .filter(|r| self.selected.contains(&r.full_name))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        records
    }

    pub(crate) fn record_outcome(&mut self, full_name: &str, outcome: String) {
        self.outcome_log.retain(|name| name != full_name);
        self.outcome_log.push(full_name.to_string());
        self.outcomes.insert(full_name.to_string(), outcome);
    }

    /// Most recent outcomes, newest last
    pub fn recent_outcomes(&self, limit: usize) -> Vec<(&str, &str)> {
        let skip = self.outcome_log.len().saturating_sub(limit);
        self.outcome_log
            .iter()
            .skip(skip)
            .filter_map(|name| {
                self.outcomes
                    .get(name)
                    .map(|outcome| (name.as_str(), outcome.as_str()))
            })
            .collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SessionContext::default(), RepoScope::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_approval_phrase() {
        assert_eq!(approval_phrase(Some("octocat")), "octocat approves");
        assert_eq!(approval_phrase(None), "your-github-username approves");
        assert_eq!(approval_phrase(Some("  ")), "your-github-username approves");
    }

    #[test]
    fn test_recent_outcomes_keep_processing_order() {
        let mut state = SessionState::default();
        for name in ["me/a", "me/b", "me/c"] {
            state.record_outcome(name, "deleted".to_string());
        }
        state.record_outcome("me/a", "error: boom".to_string());

        assert_eq!(
            state.recent_outcomes(2),
            vec![("me/c", "deleted"), ("me/a", "error: boom")]
        );
        assert_eq!(state.recent_outcomes(10).len(), 3);
    }
}
