//! Background worker thread for search response decoding.
//!
//! Uses Zellij's worker API: the plugin posts JSON-encoded [`WorkerMessage`]s
//! and receives [`WorkerResponse`]s as `CustomMessage` events.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{GamedexWorker, RESPONSE_NAME, WORKER_NAME};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
