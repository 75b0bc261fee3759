//! Session Reducer
//!
//! Transition function of the fork-management session:
//! `(SessionState, SessionAction) -> (SessionState, Effect)`.
//!
//! Runs on the UI thread only. The only side effect performed here is the
//! audit line appended through the injected [`gh_fork_config::AuditSink`];
//! everything else is returned as an [`Effect`].

use crate::actions::SessionAction;
use crate::effect::Effect;
use crate::session::{viewport_height_for, Confirmation, SessionMode, SessionState};
use crate::state::StatusMessage;
use gh_client::{ClientError, RepositoryRecord};

/// Key summary shown in the status line when help is opened
pub const HELP_SUMMARY: &str = "j/k move · space select · a all · / filter · d delete · r refresh · t scope · enter open · q quit";

/// Outcome text recorded for a successful delete
pub const OUTCOME_DELETED: &str = "deleted";

pub fn reduce(mut state: SessionState, action: &SessionAction) -> (SessionState, Effect) {
    let effect = match action {
        SessionAction::LoadRequested => request_load(&mut state),

        SessionAction::ReposLoaded(result) => {
            repos_loaded(&mut state, result);
            Effect::None
        }

        SessionAction::ScopeToggled => {
            if state.loading {
                state.status = StatusMessage::warning("Already loading");
                Effect::None
            } else {
                state.scope = state.scope.next();
                log::info!("Scope switched to {:?}", state.scope);
                request_load(&mut state)
            }
        }

        SessionAction::WhoAmIRequested => Effect::FetchCurrentUser,

        SessionAction::CurrentUserLoaded(result) => {
            match result {
                Ok(login) => {
                    log::info!("Token belongs to {}", login);
                    state.viewer_login = Some(login.clone());
                }
                Err(e) => log::warn!("Could not determine current user: {}", e),
            }
            Effect::None
        }

        SessionAction::CursorDown => {
            if state.cursor + 1 < state.filtered.len() {
                state.cursor += 1;
            }
            state.clamp_cursor();
            Effect::None
        }

        SessionAction::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
            state.clamp_cursor();
            Effect::None
        }

        SessionAction::CursorToTop => {
            state.cursor = 0;
            state.clamp_cursor();
            Effect::None
        }

        SessionAction::CursorToBottom => {
            state.cursor = state.filtered.len().saturating_sub(1);
            state.clamp_cursor();
            Effect::None
        }

        SessionAction::ResizeViewport { rows } => {
            state.viewport.height = viewport_height_for(*rows);
            state.clamp_cursor();
            Effect::None
        }

        SessionAction::ToggleSelection => {
            toggle_selection(&mut state);
            Effect::None
        }

        SessionAction::SelectAllVisible => {
            select_all_visible(&mut state);
            Effect::None
        }

        SessionAction::FilterStarted => {
            state.mode = SessionMode::Filtering;
            state.filter_input = state.filter.clone();
            state.status = StatusMessage::info("Type to filter, Enter to apply, Esc to clear");
            Effect::None
        }

        SessionAction::FilterTextChanged(text) => {
            if state.mode == SessionMode::Filtering {
                state.filter_input = text.clone();
            }
            Effect::None
        }

        SessionAction::FilterCommitted => {
            state.mode = SessionMode::Normal;
            state.filter = state.filter_input.clone();
            state.cursor = 0;
            state.viewport.offset = 0;
            state.refilter();
            state.status = if state.filter.is_empty() {
                StatusMessage::info("Filter cleared")
            } else {
                StatusMessage::info(format!("Filter applied: {} shown", state.filtered.len()))
            };
            Effect::None
        }

        SessionAction::FilterCancelled => {
            state.mode = SessionMode::Normal;
            state.filter_input.clear();
            state.filter.clear();
            state.refilter();
            state.status = StatusMessage::info("Filter cleared");
            Effect::None
        }

        SessionAction::DeleteRequested => request_delete(&mut state),

        SessionAction::ConfirmationTextChanged(text) => {
            if let Some(confirmation) = state.confirmation.as_mut() {
                confirmation.input = text.clone();
            }
            Effect::None
        }

        SessionAction::ConfirmationSubmitted => submit_confirmation(&mut state),

        SessionAction::ConfirmationCancelled => {
            if state.confirmation.take().is_some() {
                state.status = StatusMessage::info("Delete cancelled");
            }
            state.mode = SessionMode::Normal;
            Effect::None
        }

        SessionAction::DeleteResult { record, result } => delete_result(&mut state, record, result),

        SessionAction::OpenInBrowser => {
            let current = state
                .current()
                .map(|r| (r.full_name.clone(), r.html_url.clone()));
            match current {
                Some((full_name, url)) if !url.is_empty() => {
                    state.status = StatusMessage::info(format!("Opening {full_name}"));
                    Effect::OpenInBrowser(url)
                }
                Some((full_name, _)) => {
                    state.status = StatusMessage::warning(format!("No web URL for {full_name}"));
                    Effect::None
                }
                None => Effect::None,
            }
        }

        SessionAction::HelpToggled => {
            state.show_help = !state.show_help;
            if state.show_help {
                state.status = StatusMessage::info(HELP_SUMMARY);
            }
            Effect::None
        }
    };

    (state, effect)
}

fn request_load(state: &mut SessionState) -> Effect {
    if state.loading {
        state.status = StatusMessage::warning("Already loading");
        return Effect::None;
    }

    state.loading = true;
    state.status = StatusMessage::running("Loading…");
    Effect::FetchRepositories { scope: state.scope }
}

fn repos_loaded(state: &mut SessionState, result: &Result<Vec<RepositoryRecord>, ClientError>) {
    state.loading = false;

    match result {
        Err(e) => {
            log::error!("Failed to load repositories: {}", e);
            state.last_error = Some(e.to_string());
            state.status = StatusMessage::error(format!("Failed to load {}: {}", state.scope.noun(), e));
        }
        Ok(records) => {
            let mut repos = records.clone();
            // Stable; `None` orders below any timestamp so unpushed repos sink
            repos.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));

            state.repos = repos;
            state.last_error = None;

            let present: Vec<&str> = state.repos.iter().map(|r| r.full_name.as_str()).collect();
            state.selected.retain(|name| present.contains(&name.as_str()));

            state.refilter();
            state.status = StatusMessage::success(format!(
                "Loaded {} {}",
                state.repos.len(),
                state.scope.noun()
            ));
        }
    }
}

fn toggle_selection(state: &mut SessionState) {
    let Some(full_name) = state.current().map(|r| r.full_name.clone()) else {
        return;
    };

    if state.selected.remove(&full_name) {
        state.status = StatusMessage::info(format!("Unselected {full_name}"));
    } else {
        state.status = StatusMessage::info(format!("Selected {full_name}"));
        state.selected.insert(full_name);
    }
}

/// Clear the visible set when all of it is selected, otherwise select it
///
/// Selections outside the current filter are never touched.
fn select_all_visible(state: &mut SessionState) {
    let visible: Vec<String> = state.visible().map(|r| r.full_name.clone()).collect();
    if visible.is_empty() {
        state.status = StatusMessage::warning("Nothing to select");
        return;
    }

    if visible.iter().all(|name| state.selected.contains(name)) {
        for name in &visible {
            state.selected.remove(name);
        }
        state.status = StatusMessage::info("Cleared visible selections");
    } else {
        let count = visible.len();
        state.selected.extend(visible);
        state.status = StatusMessage::info(format!("Selected {count} visible repos"));
    }
}

fn request_delete(state: &mut SessionState) -> Effect {
    if state.deleting {
        state.status = StatusMessage::warning("Delete already in progress");
        return Effect::None;
    }

    let records = state.selected_snapshot();
    if records.is_empty() {
        state.status = StatusMessage::warning("Nothing selected");
        return Effect::None;
    }

    if !state.context.confirm_deletes {
        return start_queue(state, records);
    }

    state.status = StatusMessage::warning(format!(
        "Type \"{}\" to delete {} repos",
        state.approval_phrase(),
        records.len()
    ));
    state.confirmation = Some(Confirmation {
        records,
        input: String::new(),
    });
    state.mode = SessionMode::ConfirmingDelete;
    Effect::None
}

fn submit_confirmation(state: &mut SessionState) -> Effect {
    let Some(confirmation) = state.confirmation.as_ref() else {
        state.mode = SessionMode::Normal;
        return Effect::None;
    };

    if confirmation.input.trim() != state.approval_phrase() {
        state.status = StatusMessage::error("Approval phrase does not match");
        return Effect::None;
    }

    state.mode = SessionMode::Normal;
    let records = state
        .confirmation
        .take()
        .map(|c| c.records)
        .unwrap_or_default();

    if state.deleting {
        state.status = StatusMessage::warning("Delete already in progress");
        return Effect::None;
    }

    start_queue(state, records)
}

fn start_queue(state: &mut SessionState, records: Vec<RepositoryRecord>) -> Effect {
    log::info!("Queueing {} repositories for deletion", records.len());

    state.queue = records.into();
    let Some(head) = state.queue.front().cloned() else {
        return Effect::None;
    };

    state.deleting = true;
    state.status = StatusMessage::running(format!("Deleting {} repos…", state.queue.len()));
    Effect::DeleteNext(head)
}

fn delete_result(
    state: &mut SessionState,
    record: &RepositoryRecord,
    result: &Result<(), ClientError>,
) -> Effect {
    let is_head = state
        .queue
        .front()
        .is_some_and(|head| head.full_name == record.full_name);
    if !is_head {
        log::warn!(
            "Ignoring delete result for {} which is not the queue head",
            record.full_name
        );
        return Effect::None;
    }
    state.queue.pop_front();

    let full_name = record.full_name.as_str();
    let outcome = match result {
        Ok(()) => {
            state.repos.retain(|r| r.full_name != full_name);
            state.selected.remove(full_name);
            state.refilter();
            state.status = StatusMessage::success(format!("Deleted {full_name}"));
            OUTCOME_DELETED.to_string()
        }
        Err(e) => {
            log::error!("Failed to delete {}: {}", full_name, e);
            state.last_error = Some(e.to_string());
            state.status = StatusMessage::error(format!("Failed to delete {full_name}: {e}"));
            format!("error: {e}")
        }
    };

    state.context.audit.append(full_name, &outcome);
    state.record_outcome(full_name, outcome);

    match state.queue.front() {
        Some(next) => Effect::DeleteNext(next.clone()),
        None => {
            state.deleting = false;
            log::info!("Delete queue drained");
            Effect::None
        }
    }
}
