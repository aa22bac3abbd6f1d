//! Decoding of IGDB search responses.
//!
//! The games endpoint answers with a JSON array of objects whose fields are
//! all optional apart from `id`. Missing scores and dates decode as zero, the
//! same convention [`GameRecord`] uses for "unknown".

use crate::domain::{GameRecord, GamedexError, Result};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct WireGame {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    popularity: f64,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    first_release_date: i64,
    #[serde(default)]
    genres: Vec<WireRef>,
    #[serde(default)]
    platforms: Vec<WireRef>,
    #[serde(default)]
    cover: Option<WireCover>,
}

#[derive(Debug, Deserialize)]
struct WireRef {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct WireCover {
    image_id: Option<String>,
}

/// Error entry IGDB returns for rejected queries.
#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    title: String,
    #[serde(default)]
    cause: Option<String>,
}

impl From<WireGame> for GameRecord {
    fn from(wire: WireGame) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            popularity: wire.popularity,
            rating: wire.rating,
            first_release_date: wire.first_release_date,
            genre_ids: wire.genres.into_iter().map(|r| r.id).collect(),
            platform_ids: wire.platforms.into_iter().map(|r| r.id).collect(),
            cover_image_id: wire.cover.and_then(|cover| cover.image_id),
        }
    }
}

/// Decodes a successful response body into game records.
///
/// Records that repeat an earlier id are dropped; the first one wins.
///
/// # Errors
///
/// Returns [`GamedexError::Decode`] when the body is not a JSON array of
/// game objects.
pub fn decode_games(body: &[u8]) -> Result<Vec<GameRecord>> {
    let wire: Vec<WireGame> = serde_json::from_slice(body)?;
    let total = wire.len();

    let mut seen = HashSet::with_capacity(total);
    let games: Vec<GameRecord> = wire
        .into_iter()
        .filter(|game| seen.insert(game.id))
        .map(GameRecord::from)
        .collect();

    if games.len() < total {
        tracing::debug!(
            total,
            unique = games.len(),
            "provider repeated records, keeping first occurrences"
        );
    }

    Ok(games)
}

/// Builds the error for a non-success HTTP status.
///
/// Uses the provider's own error title and cause when the body carries them.
#[must_use]
pub fn status_error(status: u16, body: &[u8]) -> GamedexError {
    let detail = serde_json::from_slice::<Vec<WireError>>(body)
        .ok()
        .and_then(|errors| errors.into_iter().next())
        .map(|error| match error.cause {
            Some(cause) => format!("{}: {cause}", error.title),
            None => error.title,
        })
        .filter(|detail| !detail.is_empty());

    match detail {
        Some(detail) => GamedexError::Search(format!("HTTP {status} ({detail})")),
        None => GamedexError::Search(format!("HTTP {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_records() {
        let body = br#"[{
            "id": 7346,
            "name": "The Legend of Zelda: Breath of the Wild",
            "popularity": 12.5,
            "rating": 97.2,
            "first_release_date": 1488499200,
            "genres": [{"id": 31}, {"id": 12}],
            "platforms": [{"id": 130}],
            "cover": {"id": 1, "image_id": "co3p2d"}
        }]"#;

        let games = decode_games(body).unwrap();
        assert_eq!(games.len(), 1);
        let zelda = &games[0];
        assert_eq!(zelda.id, 7346);
        assert_eq!(zelda.rating, 97.2);
        assert_eq!(zelda.genre_ids.iter().copied().collect::<Vec<_>>(), vec![12, 31]);
        assert!(zelda.platform_ids.contains(&130));
        assert_eq!(zelda.cover_image_id.as_deref(), Some("co3p2d"));
        assert_eq!(zelda.release_year(), Some(2017));
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let games = decode_games(br#"[{"id": 1, "name": "Obscure"}]"#).unwrap();
        let game = &games[0];
        assert_eq!(game.popularity, 0.0);
        assert_eq!(game.rating, 0.0);
        assert_eq!(game.first_release_date, 0);
        assert!(game.genre_ids.is_empty());
        assert_eq!(game.cover_image_id, None);
    }

    #[test]
    fn repeated_ids_keep_the_first_record() {
        let games =
            decode_games(br#"[{"id": 1, "name": "First"}, {"id": 1, "name": "Second"}]"#).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "First");
    }

    #[test]
    fn empty_array_is_an_empty_result() {
        assert!(decode_games(b"[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_bodies_are_decode_errors() {
        let err = decode_games(br#"{"message": "Authorization Failure"}"#).unwrap_err();
        assert!(matches!(err, GamedexError::Decode(_)));
    }

    #[test]
    fn status_error_uses_provider_details() {
        let body = br#"[{"title": "Syntax Error", "status": 400, "cause": "Missing ;"}]"#;
        assert_eq!(
            status_error(400, body).to_string(),
            "Search failed: HTTP 400 (Syntax Error: Missing ;)"
        );
        assert_eq!(status_error(401, b"").to_string(), "Search failed: HTTP 401");
    }
}
