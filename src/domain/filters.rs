//! Filter and sort categories.
//!
//! Typed words in the search bar can resolve to a [`Platform`] or a [`Genre`],
//! each carrying the numeric identifier IGDB uses in `where` clauses. Parsing
//! is deliberately forgiving about case and surrounding whitespace, and a
//! failed parse simply means "not this category": callers try the next one
//! and finally fall back to treating the text as a plain search query.
//!
//! [`SortKind`] is the closed set of orderings offered in the sort carousel.

use crate::domain::GameRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Gaming platform a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    PlayStation4,
    XboxOne,
    NintendoSwitch,
}

impl Platform {
    /// All platforms in display order.
    pub const ALL: [Self; 3] = [Self::PlayStation4, Self::XboxOne, Self::NintendoSwitch];

    /// Resolves a typed word to a platform.
    ///
    /// Matching is case-insensitive against a fixed synonym list, so `"PS4"`,
    /// `"playstation 4"` and `" ps 4 "` all resolve to [`Platform::PlayStation4`].
    ///
    /// ```
    /// use gamedex::domain::Platform;
    ///
    /// assert_eq!(Platform::parse("Xbox"), Some(Platform::XboxOne));
    /// assert_eq!(Platform::parse("zelda"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "ps4" | "playstation4" | "playstation 4" | "ps 4" => Some(Self::PlayStation4),
            "xbox" | "xbox one" => Some(Self::XboxOne),
            "switch" | "nintendo switch" => Some(Self::NintendoSwitch),
            _ => None,
        }
    }

    /// IGDB platform identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::PlayStation4 => 48,
            Self::XboxOne => 49,
            Self::NintendoSwitch => 130,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayStation4 => "PlayStation 4",
            Self::XboxOne => "Xbox One",
            Self::NintendoSwitch => "Nintendo Switch",
        }
    }
}

/// Game genre a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Adventure,
    Arcade,
    Platform,
    Rpg,
    Fps,
    Sport,
    Racing,
}

impl Genre {
    /// All genres in display order.
    pub const ALL: [Self; 7] = [
        Self::Adventure,
        Self::Arcade,
        Self::Platform,
        Self::Rpg,
        Self::Fps,
        Self::Sport,
        Self::Racing,
    ];

    /// Resolves a typed word to a genre by exact, case-insensitive keyword.
    ///
    /// ```
    /// use gamedex::domain::Genre;
    ///
    /// assert_eq!(Genre::parse("RPG"), Some(Genre::Rpg));
    /// assert_eq!(Genre::parse("role playing"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let keyword = text.trim().to_lowercase();
        Self::ALL.into_iter().find(|genre| genre.keyword() == keyword)
    }

    /// Lower-case keyword the user types to select this genre.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Adventure => "adventure",
            Self::Arcade => "arcade",
            Self::Platform => "platform",
            Self::Rpg => "rpg",
            Self::Fps => "fps",
            Self::Sport => "sport",
            Self::Racing => "racing",
        }
    }

    /// IGDB genre identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::Adventure => 31,
            Self::Arcade => 25,
            Self::Platform => 8,
            Self::Rpg => 12,
            Self::Fps => 5,
            Self::Sport => 14,
            Self::Racing => 10,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Adventure => "Adventure",
            Self::Arcade => "Arcade",
            Self::Platform => "Platform",
            Self::Rpg => "RPG",
            Self::Fps => "FPS",
            Self::Sport => "Sport",
            Self::Racing => "Racing",
        }
    }
}

/// A filter token shown in front of the query text in the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchToken {
    Platform(Platform),
    Genre(Genre),
}

impl SearchToken {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Platform(platform) => platform.label(),
            Self::Genre(genre) => genre.label(),
        }
    }
}

/// The user's latest search intent.
///
/// Holds the free-text part of the search bar plus at most one token of each
/// category. Only input handling mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query_text: String,
    pub platform: Option<Platform>,
    pub genre: Option<Genre>,
}

impl FilterState {
    #[must_use]
    pub fn platform_id(&self) -> Option<u32> {
        self.platform.map(Platform::id)
    }

    #[must_use]
    pub fn genre_id(&self) -> Option<u32> {
        self.genre.map(Genre::id)
    }

    /// Active tokens in the order they are drawn: platform first, then genre.
    #[must_use]
    pub fn tokens(&self) -> Vec<SearchToken> {
        self.platform
            .map(SearchToken::Platform)
            .into_iter()
            .chain(self.genre.map(SearchToken::Genre))
            .collect()
    }

    /// Turns the query text into a filter token when it names a category.
    ///
    /// Genres are tried before platforms, and a category that already has a
    /// token is skipped. On success the query text is cleared, since the
    /// typed word now lives in the token. Returns the absorbed token.
    pub fn absorb_token(&mut self) -> Option<SearchToken> {
        if self.genre.is_none() {
            if let Some(genre) = Genre::parse(&self.query_text) {
                self.genre = Some(genre);
                self.query_text.clear();
                return Some(SearchToken::Genre(genre));
            }
        }
        if self.platform.is_none() {
            if let Some(platform) = Platform::parse(&self.query_text) {
                self.platform = Some(platform);
                self.query_text.clear();
                return Some(SearchToken::Platform(platform));
            }
        }
        None
    }

    /// Removes the most recently drawn token (genre before platform).
    pub fn pop_token(&mut self) -> Option<SearchToken> {
        if let Some(genre) = self.genre.take() {
            return Some(SearchToken::Genre(genre));
        }
        self.platform.take().map(SearchToken::Platform)
    }
}

/// Ordering applied to the games grid.
///
/// Every kind sorts in descending order of its field. Declaration order is
/// the order the badges appear in the sort carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKind {
    #[default]
    Popularity,
    ReleaseDate,
    Rating,
}

impl SortKind {
    /// All sort kinds in carousel order.
    pub const ALL: [Self; 3] = [Self::Popularity, Self::ReleaseDate, Self::Rating];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Popularity => "Popularity",
            Self::ReleaseDate => "Release Date",
            Self::Rating => "Rating",
        }
    }

    /// Short machine-friendly tag, used in view item identities.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::ReleaseDate => "release_date",
            Self::Rating => "rating",
        }
    }

    /// Compares two records so that the "larger" record sorts first.
    ///
    /// Incomparable floats (NaN) compare as equal, which keeps a stable sort
    /// from reordering them.
    #[must_use]
    pub fn compare(self, a: &GameRecord, b: &GameRecord) -> Ordering {
        match self {
            Self::Popularity => b
                .popularity
                .partial_cmp(&a.popularity)
                .unwrap_or(Ordering::Equal),
            Self::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
            Self::ReleaseDate => b.first_release_date.cmp(&a.first_release_date),
        }
    }

    /// The kind after this one in carousel order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|kind| *kind == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    /// Maps a one-based carousel position (the `1`..`3` keys) to a kind.
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        position.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_synonyms_resolve_case_insensitively() {
        for word in ["ps4", "PlayStation4", "playstation 4", "PS 4", "  ps4 "] {
            assert_eq!(Platform::parse(word), Some(Platform::PlayStation4), "{word}");
        }
        assert_eq!(Platform::parse("Xbox One"), Some(Platform::XboxOne));
        assert_eq!(Platform::parse("nintendo switch"), Some(Platform::NintendoSwitch));
        assert_eq!(Platform::parse("SWITCH"), Some(Platform::NintendoSwitch));
    }

    #[test]
    fn unknown_platform_words_do_not_resolve() {
        assert_eq!(Platform::parse(""), None);
        assert_eq!(Platform::parse("ps5"), None);
        assert_eq!(Platform::parse("xbox series x"), None);
    }

    #[test]
    fn genres_match_whole_keywords_only() {
        assert_eq!(Genre::parse("Adventure"), Some(Genre::Adventure));
        assert_eq!(Genre::parse("fps"), Some(Genre::Fps));
        assert_eq!(Genre::parse("adventures"), None);
        assert_eq!(Genre::parse("shooter"), None);
    }

    #[test]
    fn identifiers_match_igdb() {
        assert_eq!(Platform::PlayStation4.id(), 48);
        assert_eq!(Platform::XboxOne.id(), 49);
        assert_eq!(Platform::NintendoSwitch.id(), 130);
        let ids: Vec<u32> = Genre::ALL.iter().map(|genre| genre.id()).collect();
        assert_eq!(ids, vec![31, 25, 8, 12, 5, 14, 10]);
    }

    #[test]
    fn absorbing_prefers_genres_and_clears_the_text() {
        let mut filter = FilterState { query_text: "Platform".to_string(), ..Default::default() };
        assert_eq!(filter.absorb_token(), Some(SearchToken::Genre(Genre::Platform)));
        assert!(filter.query_text.is_empty());

        filter.query_text = "ps4".to_string();
        assert_eq!(filter.absorb_token(), Some(SearchToken::Platform(Platform::PlayStation4)));
        assert_eq!(filter.platform_id(), Some(48));
        assert_eq!(filter.genre_id(), Some(8));
        assert_eq!(
            filter.tokens(),
            vec![SearchToken::Platform(Platform::PlayStation4), SearchToken::Genre(Genre::Platform)]
        );
    }

    #[test]
    fn occupied_categories_are_not_absorbed_twice() {
        let mut filter = FilterState {
            query_text: "rpg".to_string(),
            genre: Some(Genre::Fps),
            ..Default::default()
        };
        assert_eq!(filter.absorb_token(), None);
        assert_eq!(filter.query_text, "rpg");
        assert_eq!(filter.genre, Some(Genre::Fps));
    }

    #[test]
    fn popping_tokens_removes_genre_then_platform() {
        let mut filter = FilterState {
            query_text: String::new(),
            platform: Some(Platform::XboxOne),
            genre: Some(Genre::Racing),
        };
        assert_eq!(filter.pop_token(), Some(SearchToken::Genre(Genre::Racing)));
        assert_eq!(filter.pop_token(), Some(SearchToken::Platform(Platform::XboxOne)));
        assert_eq!(filter.pop_token(), None);
    }

    #[test]
    fn sort_kinds_cycle_in_carousel_order() {
        assert_eq!(SortKind::default(), SortKind::Popularity);
        assert_eq!(SortKind::Popularity.next(), SortKind::ReleaseDate);
        assert_eq!(SortKind::ReleaseDate.next(), SortKind::Rating);
        assert_eq!(SortKind::Rating.next(), SortKind::Popularity);
        assert_eq!(SortKind::from_position(3), Some(SortKind::Rating));
        assert_eq!(SortKind::from_position(0), None);
        assert_eq!(SortKind::from_position(4), None);
    }

    #[test]
    fn compare_puts_larger_values_first() {
        let mut low = GameRecord::new(1, "Low");
        low.rating = 40.0;
        let mut high = GameRecord::new(2, "High");
        high.rating = 95.5;
        assert_eq!(SortKind::Rating.compare(&high, &low), Ordering::Less);
        assert_eq!(SortKind::Rating.compare(&low, &high), Ordering::Greater);

        let mut broken = GameRecord::new(3, "Broken");
        broken.rating = f64::NAN;
        assert_eq!(SortKind::Rating.compare(&broken, &high), Ordering::Equal);
    }
}
