//! Game record domain model.
//!
//! A [`GameRecord`] is one result returned by the search provider. Records are
//! treated as opaque, immutable values: the plugin filters, orders and displays
//! them but never edits them. Two records are the same game when their ids
//! match, regardless of any other field.

use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// A game returned by the search provider.
///
/// # Fields
///
/// - `id`: IGDB game identifier, the record's identity
/// - `name`: Display name
/// - `popularity`, `rating`: Scores used by the sort carousel (0 when unknown)
/// - `first_release_date`: Unix timestamp in seconds (0 when unknown)
/// - `genre_ids`, `platform_ids`: IGDB ids the game is associated with
/// - `cover_image_id`: IGDB image id of the cover art, when present
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: u64,
    pub name: String,
    pub popularity: f64,
    pub rating: f64,
    pub first_release_date: i64,
    pub genre_ids: BTreeSet<u32>,
    pub platform_ids: BTreeSet<u32>,
    pub cover_image_id: Option<String>,
}

impl GameRecord {
    /// Creates a record with the given identity and zeroed scores.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamedex::domain::GameRecord;
    ///
    /// let game = GameRecord::new(1942, "The Witcher 3: Wild Hunt");
    /// assert_eq!(game.identity(), "1942");
    /// assert_eq!(game.release_year(), None);
    /// ```
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            popularity: 0.0,
            rating: 0.0,
            first_release_date: 0,
            genre_ids: BTreeSet::new(),
            platform_ids: BTreeSet::new(),
            cover_image_id: None,
        }
    }

    /// Stable identity used by the render surface.
    #[must_use]
    pub fn identity(&self) -> String {
        self.id.to_string()
    }

    /// Release year, or `None` when the provider did not report a date.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        if self.first_release_date == 0 {
            return None;
        }
        DateTime::from_timestamp(self.first_release_date, 0).map(|date| date.year())
    }

    /// Whether the name contains `needle_lower` ignoring case.
    ///
    /// The needle must already be lower-cased; callers filtering many records
    /// lower-case it once.
    #[must_use]
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

impl PartialEq for GameRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GameRecord {}

impl Hash for GameRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
