//! Sections: ordered groups of view items tagged with their layout kind.

use super::items::ViewItem;
use std::collections::HashSet;

/// Layout kind of a section. At most one section of each kind exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Horizontal strip of sort badges.
    SortsCarousel,
    /// Grid of game cards.
    GamesGrid,
}

impl SectionKind {
    /// Stable section identity.
    #[must_use]
    pub const fn identity(self) -> &'static str {
        match self {
            Self::SortsCarousel => "sorts",
            Self::GamesGrid => "grid",
        }
    }
}

/// An ordered group of view items.
///
/// Sections are rebuilt from scratch on every state change and never patched
/// in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    kind: SectionKind,
    items: Vec<ViewItem>,
}

impl Section {
    /// Builds a section from its items.
    ///
    /// Item identities must be unique within the section. The reconciliation
    /// engine guarantees this, so a duplicate here is a programming error and
    /// trips a debug assertion.
    #[must_use]
    pub fn new(kind: SectionKind, items: Vec<ViewItem>) -> Self {
        debug_assert!(
            Self::identities_unique(&items),
            "duplicate item identity in {} section",
            kind.identity()
        );
        Self { kind, items }
    }

    fn identities_unique(items: &[ViewItem]) -> bool {
        let mut seen = HashSet::with_capacity(items.len());
        items.iter().all(|item| seen.insert(item.identity()))
    }

    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        self.kind
    }

    #[must_use]
    pub const fn identity(&self) -> &'static str {
        self.kind.identity()
    }

    #[must_use]
    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    /// Item identities in display order.
    #[must_use]
    pub fn item_identities(&self) -> Vec<String> {
        self.items.iter().map(ViewItem::identity).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameRecord;

    #[test]
    fn identities_follow_the_kind() {
        let grid = Section::new(SectionKind::GamesGrid, vec![]);
        assert_eq!(grid.identity(), "grid");
        assert_eq!(SectionKind::SortsCarousel.identity(), "sorts");
    }

    #[test]
    fn item_identities_preserve_order() {
        let section = Section::new(
            SectionKind::GamesGrid,
            vec![
                ViewItem::GameCell(GameRecord::new(3, "C")),
                ViewItem::GameCell(GameRecord::new(1, "A")),
            ],
        );
        assert_eq!(section.item_identities(), vec!["3", "1"]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate item identity")]
    fn duplicate_identities_are_rejected_at_construction() {
        let _ = Section::new(
            SectionKind::GamesGrid,
            vec![
                ViewItem::GameCell(GameRecord::new(1, "A")),
                ViewItem::GameCell(GameRecord::new(1, "A again")),
            ],
        );
    }
}
