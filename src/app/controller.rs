//! Query/debounce controller.
//!
//! Decides when a keystroke turns into a provider request and whether a late
//! timer or response still matters.
//!
//! # State Machine
//!
//! ```text
//!            keystroke "T"             timer fires (latest, text still T)
//!   Idle ─────────────────▶ Debouncing ───────────────────────────────▶ Awaiting
//!    ▲  ◀── empty text ───      │  ▲                                       │
//!    │                          └──┘ keystroke "T'" re-arms                │
//!    └─────────────────── response or failure for the live text ◀──────────┘
//! ```
//!
//! # Timers
//!
//! Zellij timers carry no payload and cannot be cancelled; they fire in the
//! order they were set. Every arm is therefore queued, and each `Timer` event
//! pops the oldest entry. Only the entry that is both the most recent arm and
//! still equal to the live query text may issue a request; every other entry
//! is dropped when its timer fires.

use crate::search::SearchRequest;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;

/// Phase of the current search round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPhase {
    /// Nothing in flight.
    Idle,
    /// A timer is armed for `pending`; it fires at `deadline`.
    Debouncing {
        pending: String,
        deadline: DateTime<Utc>,
    },
    /// A request for `query` was issued and has not been answered.
    Awaiting { query: String, request_id: u64 },
}

/// What the caller must do after a keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    /// The text became empty: drop the current results.
    Cleared,
    /// Set a host timer for this many seconds.
    Armed { seconds: f64 },
}

#[derive(Debug, Clone)]
struct ArmedQuery {
    generation: u64,
    text: String,
}

/// Owns the debounce timer queue and request numbering.
#[derive(Debug, Clone)]
pub struct QueryController {
    phase: QueryPhase,
    debounce: Duration,
    armed: VecDeque<ArmedQuery>,
    generation: u64,
    latest_armed: Option<u64>,
    last_request_id: u64,
}

impl QueryController {
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        let millis = i64::try_from(debounce_ms).unwrap_or(i64::MAX);
        Self {
            phase: QueryPhase::Idle,
            debounce: Duration::milliseconds(millis),
            armed: VecDeque::new(),
            generation: 0,
            latest_armed: None,
            last_request_id: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &QueryPhase {
        &self.phase
    }

    /// Whether the loading indicator should be visible.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, QueryPhase::Awaiting { .. })
    }

    /// Number of timers set but not yet fired.
    #[must_use]
    pub fn timers_outstanding(&self) -> usize {
        self.armed.len()
    }

    /// Handles a change of the query text.
    ///
    /// Empty text cancels any pending arm. Anything else arms a new timer
    /// that supersedes all earlier ones.
    pub fn on_input(&mut self, text: &str, now: DateTime<Utc>) -> InputOutcome {
        if text.is_empty() {
            self.cancel();
            return InputOutcome::Cleared;
        }

        self.generation += 1;
        self.armed.push_back(ArmedQuery {
            generation: self.generation,
            text: text.to_string(),
        });
        self.latest_armed = Some(self.generation);
        self.phase = QueryPhase::Debouncing {
            pending: text.to_string(),
            deadline: now + self.debounce,
        };

        tracing::trace!(generation = self.generation, query = %text, "debounce armed");

        #[allow(clippy::cast_precision_loss)]
        let seconds = self.debounce.num_milliseconds() as f64 / 1000.0;
        InputOutcome::Armed { seconds }
    }

    /// Forgets every armed query and returns to idle.
    ///
    /// Timers already set with the host still fire; they find no latest arm
    /// and are dropped. The queue is kept so later timers stay aligned.
    pub fn cancel(&mut self) {
        self.latest_armed = None;
        self.phase = QueryPhase::Idle;
    }

    /// Handles a fired timer, returning the request to issue if the timer is
    /// still current.
    pub fn on_timer(
        &mut self,
        live_text: &str,
        platform_id: Option<u32>,
        genre_id: Option<u32>,
        limit: u32,
    ) -> Option<SearchRequest> {
        let Some(fired) = self.armed.pop_front() else {
            tracing::debug!("timer fired with nothing armed");
            return None;
        };

        if self.latest_armed != Some(fired.generation) {
            tracing::debug!(generation = fired.generation, query = %fired.text, "dropping superseded timer");
            return None;
        }
        if fired.text != live_text {
            tracing::debug!(armed = %fired.text, live = %live_text, "dropping timer for stale text");
            return None;
        }

        self.latest_armed = None;
        self.last_request_id += 1;
        self.phase = QueryPhase::Awaiting {
            query: fired.text.clone(),
            request_id: self.last_request_id,
        };

        Some(SearchRequest {
            query: fired.text,
            request_id: self.last_request_id,
            platform_id,
            genre_id,
            limit,
        })
    }

    /// Whether a response for `query` still describes what the user sees.
    #[must_use]
    pub fn accepts_response(query: &str, live_text: &str) -> bool {
        query == live_text
    }

    /// Marks the round for `query` as answered, clearing the loading state.
    ///
    /// A newer arm keeps its debouncing phase.
    pub fn finish(&mut self, query: &str) {
        if matches!(&self.phase, QueryPhase::Awaiting { query: awaited, .. } if awaited == query) {
            self.phase = QueryPhase::Idle;
        }
    }

    /// Ends whichever request is in flight when its answer cannot be matched
    /// to a query. A pending debounce is left alone.
    pub fn abandon(&mut self) {
        if let QueryPhase::Awaiting { query, request_id } = &self.phase {
            tracing::debug!(query = %query, request_id, "abandoning in-flight request");
            self.phase = QueryPhase::Idle;
        }
    }
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new(500)
    }
}
