//! Gamedex: a Zellij plugin for searching the IGDB game catalogue.
//!
//! Gamedex turns a floating pane into a live game search:
//! - Debounced search-as-you-type against the IGDB `games` endpoint
//! - Platform and genre words become filter tokens instead of search text
//! - Instant local narrowing of the last results while a new search is pending
//! - A sortable card grid (popularity, release date, rating)
//! - Response decoding on a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, timers, web results
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and actions                       │
//! │  - Debounce controller                              │
//! │  - Session (results, filters, sort)                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ View (view/)  │   │ Search        │   │ Worker        │
//! │ - Sections    │   │ (search/)     │   │ (worker/)     │
//! │ - Sorting     │   │ - IGDB query  │   │ - JSON decode │
//! │ - Filtering   │   │ - Responses   │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI (ui/), Domain (domain/), Infrastructure,        │
//! │  Observability (file-exported OpenTelemetry spans)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/gamedex.wasm" {
//!         client_id "your-twitch-client-id"
//!         access_token "your-app-access-token"
//!         result_limit "30"
//!         debounce_ms "500"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use gamedex::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Char('z'))?;
//! assert!(matches!(actions.as_slice(), [Action::ArmTimer { .. }]));
//! # Ok::<(), gamedex::GamedexError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod ui;
pub mod view;
pub mod worker;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{GamedexError, Result};
pub use ui::Theme;

use search::Endpoint;
use std::collections::BTreeMap;

/// Default IGDB games endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.igdb.com/v4/games";

const DEFAULT_RESULT_LIMIT: u32 = 30;
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Twitch application client id used as the IGDB `Client-ID`.
    pub client_id: Option<String>,

    /// App access token sent as `Authorization: Bearer <token>`.
    pub access_token: Option<String>,

    /// Games endpoint URL. Default: [`DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Maximum number of games requested per search. Default: 30
    pub result_limit: u32,

    /// Quiet period after the last keystroke before a search is sent.
    /// Default: 500
    pub debounce_ms: u64,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` resolves under `/host`.
    pub theme_file: Option<String>,

    /// Tracing level for spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: None,
            access_token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as absent and unparsable numbers fall back to their
    /// defaults; a zero `result_limit` is raised to 1.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use gamedex::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("client_id".to_string(), "abc".to_string()),
    ///     ("debounce_ms".to_string(), "250".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.client_id.as_deref(), Some("abc"));
    /// assert_eq!(config.debounce_ms, 250);
    /// assert_eq!(config.result_limit, 30);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let result_limit = text("result_limit")
            .and_then(|s| s.parse::<u32>().ok())
            .map_or(DEFAULT_RESULT_LIMIT, |limit| limit.max(1));

        let debounce_ms = text("debounce_ms")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        Self {
            client_id: text("client_id"),
            access_token: text("access_token"),
            endpoint: text("endpoint").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            result_limit,
            debounce_ms,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Checks that both IGDB credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`GamedexError::Config`] naming every missing key.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("client_id", &self.client_id),
            ("access_token", &self.access_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GamedexError::Config(format!(
                "missing {}",
                missing.join(" and ")
            )))
        }
    }

    /// Endpoint and credentials for outgoing searches. Missing credentials
    /// are sent empty and rejected by the provider.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            url: self.endpoint.clone(),
            client_id: self.client_id.clone().unwrap_or_default(),
            access_token: self.access_token.clone().unwrap_or_default(),
        }
    }

    fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state for `config`.
///
/// Configuration problems are not fatal: they are logged and shown on the
/// status line, and the plugin still starts.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        endpoint = %config.endpoint,
        result_limit = config.result_limit,
        debounce_ms = config.debounce_ms,
        "initializing gamedex plugin"
    );

    let mut state = AppState::new(config.theme(), config.result_limit, config.debounce_ms);
    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "incomplete configuration");
        state.config_problem = Some(e.to_string());
        state.status.clone_from(&state.config_problem);
    }
    state
}
