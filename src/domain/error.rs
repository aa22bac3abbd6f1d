//! Error types for the gamedex plugin.
//!
//! [`GamedexError`] collects every failure the plugin can observe, from
//! configuration problems to undecodable search responses. None of them are
//! fatal: the event loop logs them and keeps the previous view on screen.

use thiserror::Error;

/// The main error type for gamedex operations.
///
/// # Examples
///
/// ```
/// use gamedex::GamedexError;
///
/// fn require_token(token: Option<&str>) -> Result<&str, GamedexError> {
///     token.ok_or_else(|| GamedexError::Config("access_token is not set".to_string()))
/// }
///
/// assert!(require_token(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum GamedexError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The decode worker could not be reached or answered with garbage.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Plugin configuration is missing a value or holds a malformed one.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A search response body was not the JSON the provider promised.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The search provider answered with a failure.
    ///
    /// Carries the HTTP status or transport message as reported by the host.
    #[error("Search failed: {0}")]
    Search(String),
}

/// A specialized `Result` type for gamedex operations.
pub type Result<T> = std::result::Result<T, GamedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_convert_from_serde() {
        let err: GamedexError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, GamedexError::Decode(_)));
        assert!(err.to_string().starts_with("Decode error"));
    }

    #[test]
    fn search_errors_render_the_reason() {
        let err = GamedexError::Search("HTTP 401".to_string());
        assert_eq!(err.to_string(), "Search failed: HTTP 401");
    }
}
