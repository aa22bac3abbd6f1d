//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, view, search
//! and worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Keys / Timers / Web results → Events → handle_event → State Mutations → Actions → Host calls
//!                                   ↑                                        ↓
//!                                   └──────────── Worker Responses ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: Debounce timers and stale-response guards
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Focus mode and grid navigation types
//! - [`session`]: Results, filter and sort, plus their computed sections
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use controller::{InputOutcome, QueryController, QueryPhase};
pub use handler::{handle_event, handle_event_at, Event};
pub use modes::{GridMove, InputMode};
pub use session::Session;
pub use state::AppState;
