//! Domain layer for the gamedex plugin.
//!
//! Plain value types shared by every other layer, independent of Zellij and
//! of the search provider's wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`filters`]: Platform, genre and sort categories, plus search tokens
//! - [`game`]: The game record returned by searches

pub mod error;
pub mod filters;
pub mod game;

pub use error::{GamedexError, Result};
pub use filters::{FilterState, Genre, Platform, SearchToken, SortKind};
pub use game::GameRecord;
