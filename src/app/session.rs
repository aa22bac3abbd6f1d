//! Search session: the data the reconciliation engine works from.

use crate::domain::{FilterState, GameRecord, SortKind};
use crate::view::{compute_sections, Section, SectionKind, ViewItem};

/// Results, filter and sort for the lifetime of the plugin pane, plus the
/// sections last computed from them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    all_games: Vec<GameRecord>,
    pub filter: FilterState,
    pub sort: SortKind,
    sections: Vec<Section>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        let mut session = Self::default();
        session.recompute();
        session
    }

    #[must_use]
    pub fn all_games(&self) -> &[GameRecord] {
        &self.all_games
    }

    /// Stores a fresh result set, ordered by name.
    pub fn replace_games(&mut self, mut games: Vec<GameRecord>) {
        games.sort_by(|a, b| a.name.cmp(&b.name));
        self.all_games = games;
    }

    pub fn clear_games(&mut self) {
        self.all_games.clear();
    }

    /// Re-runs reconciliation over the current games, filter and sort.
    pub fn recompute(&mut self) {
        self.sections = compute_sections(&self.all_games, &self.filter, self.sort);
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Items of the games grid, in display order.
    #[must_use]
    pub fn grid(&self) -> &[ViewItem] {
        self.sections
            .iter()
            .find(|section| section.kind() == SectionKind::GamesGrid)
            .map(Section::items)
            .unwrap_or_default()
    }

    /// Index of the game with `id` in the grid.
    #[must_use]
    pub fn grid_position(&self, id: u64) -> Option<usize> {
        self.grid()
            .iter()
            .position(|item| item.as_game().is_some_and(|game| game.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_both_sections() {
        let session = Session::new();
        assert_eq!(session.sections().len(), 2);
        assert!(session.grid().is_empty());
    }

    #[test]
    fn replaced_games_are_stored_by_name() {
        let mut session = Session::new();
        session.replace_games(vec![GameRecord::new(1, "Zelda"), GameRecord::new(2, "Aaa")]);
        let names: Vec<&str> = session.all_games().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Aaa", "Zelda"]);
    }

    #[test]
    fn grid_reflects_the_last_recompute() {
        let mut session = Session::new();
        session.replace_games(vec![GameRecord::new(1, "Zelda")]);
        assert!(session.grid().is_empty());
        session.recompute();
        assert_eq!(session.grid_position(1), Some(0));
        assert_eq!(session.grid_position(2), None);
    }
}
