//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij itself. It returns a `Vec<Action>`
//! and the plugin shim in `main.rs` turns each one into a host call, in order.
//!
//! # Example
//!
//! ```
//! use gamedex::app::Action;
//!
//! let actions = vec![Action::ArmTimer { seconds: 0.5 }, Action::CloseFocus];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::search::SearchRequest;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sets a host timer; it comes back as [`Event::DebounceElapsed`].
    ///
    /// [`Event::DebounceElapsed`]: crate::app::Event::DebounceElapsed
    ArmTimer {
        /// Delay in seconds.
        seconds: f64,
    },

    /// Sends a search to the provider as a web request.
    IssueSearch(SearchRequest),

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
