//! View items: the things a single cell can show.

use crate::domain::{GameRecord, SortKind};

/// What one cell of the rendered collection shows.
///
/// Dispatch over cells is an exhaustive `match` on this enum; there is no
/// runtime type inspection and no "unknown cell" fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewItem {
    /// A badge in the sort carousel.
    SortBadge {
        kind: SortKind,
        is_selected: bool,
    },
    /// A game card in the results grid.
    GameCell(GameRecord),
}

impl ViewItem {
    /// Stable identity used by the render surface to match cells across
    /// recomputations.
    ///
    /// A sort badge's identity includes its selection state, so a badge whose
    /// selection flips is treated as a new cell and redrawn. A game cell is
    /// identified by the game's id alone.
    ///
    /// ```
    /// use gamedex::domain::SortKind;
    /// use gamedex::view::ViewItem;
    ///
    /// let badge = ViewItem::SortBadge { kind: SortKind::Rating, is_selected: true };
    /// assert_eq!(badge.identity(), "sort_rating_true");
    /// ```
    #[must_use]
    pub fn identity(&self) -> String {
        match self {
            Self::SortBadge { kind, is_selected } => format!("sort_{}_{is_selected}", kind.tag()),
            Self::GameCell(game) => game.identity(),
        }
    }

    #[must_use]
    pub const fn as_game(&self) -> Option<&GameRecord> {
        match self {
            Self::GameCell(game) => Some(game),
            Self::SortBadge { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_identity_changes_with_selection() {
        let on = ViewItem::SortBadge { kind: SortKind::Popularity, is_selected: true };
        let off = ViewItem::SortBadge { kind: SortKind::Popularity, is_selected: false };
        assert_ne!(on.identity(), off.identity());
        assert_eq!(off.identity(), "sort_popularity_false");
    }

    #[test]
    fn game_identity_is_the_record_id() {
        let cell = ViewItem::GameCell(GameRecord::new(1020, "Grand Theft Auto V"));
        assert_eq!(cell.identity(), "1020");
        assert_eq!(cell.as_game().map(|game| game.id), Some(1020));
    }
}
