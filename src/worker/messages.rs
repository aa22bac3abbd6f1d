//! Worker thread message types for cross-thread communication.
//!
//! The plugin thread hands raw response bodies to the worker and gets decoded
//! game records back. Every request also carries the trace context of the span
//! that produced it, so worker spans land in the same trace.

use crate::domain::GameRecord;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry ids of the active span.
    ///
    /// Returns `None` when no valid span context is active, for example when
    /// tracing was never initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    decode_games(DecodeGames { query: String, request_id: u64, body: String }),
}

/// Messages sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Decode a successful search response body.
    DecodeGames {
        /// Query the response answers, echoed back for the stale guard.
        query: String,
        request_id: u64,
        /// Response body as UTF-8 text.
        body: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::DecodeGames { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The body decoded into these records, in provider order.
    GamesDecoded {
        query: String,
        request_id: u64,
        games: Vec<GameRecord>,
    },

    /// The body was not a valid games array.
    DecodeFailed {
        query: String,
        request_id: u64,
        message: String,
    },

    /// The worker could not read the request at all.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
