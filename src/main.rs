//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the gamedex library and the Zellij host.
//! It maps host events to library events, runs the returned actions as host
//! calls, and delegates rendering.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │   Zellij Main Thread          │
//! │  ┌─────────────────────────┐  │   web_request   ┌──────────┐
//! │  │  State (plugin)         │──┼────────────────▶│   IGDB   │
//! │  │  keys, timers, results  │◀─┼─────────────────│          │
//! │  └─────────────────────────┘  │ WebRequestResult└──────────┘
//! │        │ DecodeGames  ▲       │
//! │        ▼              │       │
//! │  ┌─────────────────────────┐  │
//! │  │  GamedexWorker          │  │  ← JSON decoding
//! │  └─────────────────────────┘  │
//! └───────────────────────────────┘
//! ```
//!
//! # Event Mapping
//!
//! - `Key` → editing, focus, cursor and sort events (see keybindings below)
//! - `Timer` → `Event::DebounceElapsed`
//! - `WebRequestResult` → `Event::SearchResponded`, correlated through the
//!   request context
//! - `CustomMessage` from the worker → `Event::WorkerResponse`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Typing (search bar focused):
//! - Characters: edit the query
//! - `Backspace`: delete a character, or the last token when the query is empty
//! - `Esc`: clear the query
//! - `Enter`/`Tab`/`Down`: focus the results
//!
//! Browsing (results focused):
//! - Arrows or `h`/`j`/`k`/`l`: move the cursor
//! - `Tab`/`s`: next sort, `1`..`3`: pick a sort
//! - `/`/`Esc`: back to the search bar
//! - `q`: close the plugin
//!
//! `Ctrl+c` closes the plugin in either mode.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use gamedex::app::GridMove;
use gamedex::domain::SortKind;
use gamedex::search::{Endpoint, ResponseTag};
use gamedex::worker::{GamedexWorker, WorkerMessage, WorkerResponse, RESPONSE_NAME, WORKER_NAME};
use gamedex::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(GamedexWorker, gamedex_worker, GAMEDEX_WORKER);

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: gamedex::AppState,

    /// Search endpoint and credentials from the configuration.
    endpoint: Endpoint,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: gamedex::initialize(&config),
            endpoint: config.endpoint(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the app state, asks for web access and
    /// subscribes to the events the plugin reacts to.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        gamedex::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();

        self.app = gamedex::initialize(&config);
        self.endpoint = config.endpoint();

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!(endpoint = %self.endpoint.url, "plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::DebounceElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Event::PermissionsResult {
                    granted: matches!(permissions, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(cols);
        gamedex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(elapsed) => format!("Timer({elapsed})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('c') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CloseFocus);
        }
        if key.key_modifiers.iter().any(|m| *m != KeyModifier::Shift) {
            return None;
        }

        match self.app.input_mode {
            InputMode::Typing => Self::map_typing_key(key.bare_key),
            InputMode::Browsing => Self::map_browsing_key(key.bare_key),
        }
    }

    fn map_typing_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Char(c) => Event::Char(c),
            BareKey::Backspace => Event::Backspace,
            BareKey::Esc => Event::ClearQuery,
            BareKey::Enter | BareKey::Tab | BareKey::Down => Event::FocusResults,
            _ => return None,
        })
    }

    fn map_browsing_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Left | BareKey::Char('h') => Event::MoveCursor(GridMove::Left),
            BareKey::Down | BareKey::Char('j') => Event::MoveCursor(GridMove::Down),
            BareKey::Up | BareKey::Char('k') => Event::MoveCursor(GridMove::Up),
            BareKey::Right | BareKey::Char('l') => Event::MoveCursor(GridMove::Right),
            BareKey::Tab | BareKey::Char('s') => Event::NextSort,
            BareKey::Char(digit @ '1'..='9') => {
                let position = digit.to_digit(10).and_then(|d| usize::try_from(d).ok())?;
                Event::SelectSort(SortKind::from_position(position)?)
            }
            BareKey::Char('/') | BareKey::Esc => Event::FocusSearchBar,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a finished web request back to the search it belongs to.
    fn map_web_result_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(tag) = ResponseTag::from_context(context) else {
            tracing::debug!(status, "ignoring web result without a search context");
            return None;
        };

        tracing::debug!(status, request_id = tag.request_id, body_len = body.len(), "search response");
        Some(Event::SearchResponded {
            query: tag.query,
            request_id: tag.request_id,
            status,
            body,
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != RESPONSE_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates a library action into Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::ArmTimer { seconds } => set_timeout(*seconds),
            Action::IssueSearch(request) => {
                web_request(
                    &self.endpoint.url,
                    HttpVerb::Post,
                    self.endpoint.headers(),
                    request.body().into_bytes(),
                    request.context(),
                );
            }
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}
