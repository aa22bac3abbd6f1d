//! Worker thread implementation for response decoding.
//!
//! Search responses can be large; decoding them on the worker keeps the plugin
//! thread free to take keystrokes. The worker is stateless apart from its
//! tracing setup.

use crate::search::decode_games;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Name the worker is registered under, without Zellij's `_worker` suffix.
pub const WORKER_NAME: &str = "gamedex";

/// Message name responses are posted back under.
pub const RESPONSE_NAME: &str = "gamedex_response";

/// Worker thread state.
#[derive(Serialize, Deserialize, Default)]
pub struct GamedexWorker;

impl GamedexWorker {
    /// Reattaches the plugin thread's span as the remote parent.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one message and builds its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        match message {
            WorkerMessage::DecodeGames { query, request_id, body, .. } => {
                let _span = tracing::debug_span!(
                    "worker_decode_games",
                    request_id,
                    body_len = body.len()
                )
                .entered();

                match decode_games(body.as_bytes()) {
                    Ok(games) => {
                        tracing::debug!(game_count = games.len(), "response decoded");
                        WorkerResponse::GamesDecoded { query, request_id, games }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "response body could not be decoded");
                        WorkerResponse::DecodeFailed {
                            query,
                            request_id,
                            message: e.to_string(),
                        }
                    }
                }
            }
        }
    }
}

fn post_response(response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name: RESPONSE_NAME.to_string(),
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
    }
}

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

impl ZellijWorker<'_> for GamedexWorker {
    fn on_message(&mut self, _message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("unreadable worker message: {e}"),
                }
            }
        };

        post_response(&response);
    }
}
