//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim (keys, timers, web results) or the
//!    worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState`, `Session` and `QueryController`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Editing**: `Char`, `Backspace`, `ClearQuery`
//! - **Focus**: `FocusSearchBar`, `FocusResults`, `CloseFocus`
//! - **Browsing**: `MoveCursor`, `SelectSort`, `NextSort`
//! - **Search round trip**: `DebounceElapsed`, `SearchResponded`,
//!   `WorkerResponse`
//! - **System**: `PermissionsResult`

use crate::app::controller::{InputOutcome, QueryController};
use crate::app::modes::{GridMove, InputMode};
use crate::app::{Action, AppState};
use crate::domain::{GamedexError, Result, SortKind};
use crate::search::status_error;
use crate::worker::{WorkerMessage, WorkerResponse};
use chrono::{DateTime, Utc};

/// Events triggered by user input, host callbacks or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Appends a character to the query text.
    Char(char),
    /// Deletes the last query character, or the last token when the query is
    /// already empty.
    Backspace,
    /// Empties the query text.
    ClearQuery,

    /// Gives keyboard focus to the search bar.
    FocusSearchBar,
    /// Gives keyboard focus to the results grid.
    FocusResults,
    /// Hides the plugin pane.
    CloseFocus,

    /// Moves the grid cursor one cell.
    MoveCursor(GridMove),
    /// Selects a sort kind.
    SelectSort(SortKind),
    /// Selects the next sort kind in carousel order.
    NextSort,

    /// A debounce timer set by [`Action::ArmTimer`] fired.
    DebounceElapsed,

    /// The provider answered a search request.
    SearchResponded {
        query: String,
        request_id: u64,
        status: u16,
        body: Vec<u8>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    /// Result of the web access permission request.
    PermissionsResult { granted: bool },
}

/// Processes an event at the current wall-clock time.
///
/// Returns whether the UI must be redrawn and the actions to run, in order.
///
/// # Errors
///
/// Propagates failures from state transitions; provider failures are not
/// errors and are reported through the status line instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    handle_event_at(state, event, Utc::now())
}

/// Processes an event as if it happened at `now`.
///
/// # Errors
///
/// See [`handle_event`].
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use gamedex::app::{handle_event_at, Action, AppState, Event};
/// use gamedex::Theme;
///
/// let mut state = AppState::new(Theme::default(), 30, 500);
/// let (_, actions) = handle_event_at(&mut state, &Event::Char('z'), Utc::now())?;
/// assert_eq!(actions, vec![Action::ArmTimer { seconds: 0.5 }]);
/// # Ok::<(), gamedex::GamedexError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event_at(
    state: &mut AppState,
    event: &Event,
    now: DateTime<Utc>,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::Char(c) => {
            state.session.filter.query_text.push(*c);
            tracing::trace!(query = %state.session.filter.query_text, "query text updated");
            Ok((true, query_changed(state, now)))
        }
        Event::Backspace => {
            if state.session.filter.query_text.pop().is_some() {
                return Ok((true, query_changed(state, now)));
            }
            match state.session.filter.pop_token() {
                Some(token) => {
                    // Dropping a token changes the filter only.
                    tracing::debug!(token = token.label(), "filter token removed, results kept");
                    Ok((true, vec![]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::ClearQuery => {
            if state.session.filter.query_text.is_empty() {
                return Ok((false, vec![]));
            }
            state.session.filter.query_text.clear();
            Ok((true, query_changed(state, now)))
        }
        Event::FocusSearchBar => {
            let changed = state.input_mode != InputMode::Typing;
            state.input_mode = InputMode::Typing;
            Ok((changed, vec![]))
        }
        Event::FocusResults => {
            if state.session.grid().is_empty() {
                tracing::debug!("no results to focus");
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Browsing;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::MoveCursor(step) => Ok((state.move_cursor(*step), vec![])),
        Event::SelectSort(kind) => Ok((state.set_sort(*kind), vec![])),
        Event::NextSort => {
            let next = state.session.sort.next();
            Ok((state.set_sort(next), vec![]))
        }
        Event::DebounceElapsed => Ok(debounce_elapsed(state)),
        Event::SearchResponded {
            query,
            request_id,
            status,
            body,
        } => {
            if !QueryController::accepts_response(query, &state.session.filter.query_text) {
                tracing::debug!(query = %query, request_id, "dropping stale response");
                return Ok((false, vec![]));
            }

            if !(200..300).contains(status) {
                return Ok(search_failed(state, query, &status_error(*status, body)));
            }

            tracing::debug!(request_id, body_len = body.len(), "response accepted, decoding");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::decode_games(
                    query.clone(),
                    *request_id,
                    String::from_utf8_lossy(body).into_owned(),
                ))],
            ))
        }
        Event::WorkerResponse(response) => Ok(worker_responded(state, response)),
        Event::PermissionsResult { granted } => {
            state.web_access = *granted;
            if *granted {
                state.status.clone_from(&state.config_problem);
            } else {
                tracing::warn!("web access denied, searches are disabled");
                state.status = Some("Web access permission denied".to_string());
            }
            Ok((true, vec![]))
        }
    }
}

/// Runs after every edit of the query text.
///
/// A query that names a platform or genre becomes a filter token instead of
/// a search. Otherwise the debounce controller decides what happens next.
fn query_changed(state: &mut AppState, now: DateTime<Utc>) -> Vec<Action> {
    if let Some(token) = state.session.filter.absorb_token() {
        tracing::debug!(token = token.label(), "query absorbed into filter token");
        state.controller.cancel();
        state.refresh();
        return vec![];
    }

    let actions = match state.controller.on_input(&state.session.filter.query_text, now) {
        InputOutcome::Cleared => {
            state.session.clear_games();
            vec![]
        }
        InputOutcome::Armed { seconds } => vec![Action::ArmTimer { seconds }],
    };

    state.refresh();
    actions
}

fn debounce_elapsed(state: &mut AppState) -> (bool, Vec<Action>) {
    let filter = &state.session.filter;
    let Some(request) = state.controller.on_timer(
        &filter.query_text,
        filter.platform_id(),
        filter.genre_id(),
        state.result_limit,
    ) else {
        return (false, vec![]);
    };

    if !state.web_access {
        tracing::warn!(query = %request.query, "search skipped without web access");
        state.controller.finish(&request.query);
        state.status = Some("Web access permission not granted".to_string());
        return (true, vec![]);
    }

    tracing::debug!(
        query = %request.query,
        request_id = request.request_id,
        platform_id = ?request.platform_id,
        genre_id = ?request.genre_id,
        "issuing search"
    );
    (true, vec![Action::IssueSearch(request)])
}

fn worker_responded(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::GamesDecoded {
            query,
            request_id,
            games,
        } => {
            if !QueryController::accepts_response(query, &state.session.filter.query_text) {
                tracing::debug!(query = %query, request_id, "dropping stale decoded results");
                return (false, vec![]);
            }

            tracing::debug!(request_id, game_count = games.len(), "results replaced");
            state.session.replace_games(games.clone());
            state.controller.finish(query);
            state.status = None;
            state.refresh();
            (true, vec![])
        }
        WorkerResponse::DecodeFailed {
            query,
            request_id,
            message,
        } => {
            if !QueryController::accepts_response(query, &state.session.filter.query_text) {
                tracing::debug!(query = %query, request_id, "dropping stale decode failure");
                return (false, vec![]);
            }
            search_failed(state, query, &GamedexError::Search(message.clone()))
        }
        WorkerResponse::Error { message } => {
            tracing::warn!(message = %message, "worker error");
            state.controller.abandon();
            state.status = Some(GamedexError::Worker(message.clone()).to_string());
            (true, vec![])
        }
    }
}

/// Ends the round for `query` without touching the current results.
fn search_failed(state: &mut AppState, query: &str, error: &GamedexError) -> (bool, Vec<Action>) {
    tracing::warn!(query = %query, error = %error, "search failed");
    state.controller.finish(query);
    state.status = Some(error.to_string());
    (true, vec![])
}

/// Keeps response bodies and decoded games out of span fields.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::SearchResponded {
                request_id, status, ..
            } => write!(f, "SearchResponded({request_id}, {status})"),
            Event::WorkerResponse(WorkerResponse::GamesDecoded { request_id, games, .. }) => {
                write!(f, "GamesDecoded({request_id}, {} games)", games.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}
