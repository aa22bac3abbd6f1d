//! IGDB search provider: request building and response decoding.
//!
//! The plugin never performs I/O here. Requests are rendered to a URL, headers
//! and body for Zellij's `web_request`, and response bytes are decoded on the
//! worker thread.
//!
//! # Modules
//!
//! - [`query`]: [`SearchRequest`], endpoint credentials and request context
//! - [`response`]: JSON decoding into [`GameRecord`](crate::domain::GameRecord)s

pub mod query;
pub mod response;

pub use query::{Endpoint, ResponseTag, SearchRequest};
pub use response::{decode_games, status_error};
