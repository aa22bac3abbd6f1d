//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the plugin knows: the search
//! [`Session`], the [`QueryController`], the focus mode and the grid cursor.
//! Only the event handler mutates it; the renderer reads a [`UIViewModel`]
//! computed from it.
//!
//! # Cursor
//!
//! The grid cursor is stored as the *id* of the selected game rather than an
//! index, so a re-sort or a narrower text filter keeps the same game selected
//! whenever it is still visible. If it disappears the cursor falls back to
//! the first cell.
//!
//! # Example
//!
//! ```
//! use gamedex::app::AppState;
//! use gamedex::Theme;
//!
//! let state = AppState::new(Theme::default(), 30, 500);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::controller::QueryController;
use super::modes::{GridMove, InputMode};
use super::session::Session;
use crate::domain::{GameRecord, SortKind};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, GameCard, GridInfo, HeaderInfo, SearchBarInfo, SortBadgeInfo, UIViewModel,
};
use crate::ui::{CARD_HEIGHT, CARD_WIDTH};
use crate::view::{SectionKind, ViewItem};

/// Rows taken by everything except the grid: top padding, header, border,
/// search bar (3), sort carousel, spacer, border and footer.
const CHROME_ROWS: usize = 10;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Results, filter and sort.
    pub session: Session,

    /// Debounce timers and in-flight request tracking.
    pub controller: QueryController,

    /// Which part of the screen receives keystrokes.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Id of the game under the grid cursor.
    pub selected_game: Option<u64>,

    /// Columns the grid was last laid out with. Cursor movement uses it, so
    /// the shim refreshes it from the pane width before every render.
    pub grid_columns: usize,

    /// Last search failure, shown in the header until the next success.
    pub status: Option<String>,

    /// Configuration problem found at load; the status line falls back to it
    /// once web access is granted.
    pub config_problem: Option<String>,

    /// Whether the host granted web access.
    pub web_access: bool,

    /// Maximum results requested per search.
    pub result_limit: u32,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme, result_limit: u32, debounce_ms: u64) -> Self {
        Self {
            session: Session::new(),
            controller: QueryController::new(debounce_ms),
            input_mode: InputMode::Typing,
            theme,
            selected_game: None,
            grid_columns: 1,
            status: None,
            config_problem: None,
            web_access: false,
            result_limit,
        }
    }

    /// Recomputes sections and re-anchors the cursor.
    ///
    /// Call after any change to results, filter text or sort.
    pub fn refresh(&mut self) {
        self.session.recompute();
        self.sync_selection();
    }

    /// Keeps the cursor on the same game, or moves it to the first cell when
    /// that game is no longer shown.
    fn sync_selection(&mut self) {
        let still_visible = self
            .selected_game
            .is_some_and(|id| self.session.grid_position(id).is_some());

        if !still_visible {
            self.selected_game = self.game_at(0).map(|game| game.id);
        }
    }

    fn game_at(&self, index: usize) -> Option<&GameRecord> {
        self.session.grid().get(index).and_then(ViewItem::as_game)
    }

    /// Grid index of the cursor.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_game.and_then(|id| self.session.grid_position(id))
    }

    #[must_use]
    pub fn selected_game(&self) -> Option<&GameRecord> {
        self.selected_index().and_then(|index| self.game_at(index))
    }

    /// Updates the column count from the pane width.
    pub fn set_viewport(&mut self, cols: usize) {
        self.grid_columns = crate::ui::grid_columns(cols);
    }

    /// Moves the grid cursor one step. Returns whether it moved.
    ///
    /// Left and right stay within the current row; down into a partial last
    /// row lands on its final cell.
    pub fn move_cursor(&mut self, step: GridMove) -> bool {
        let count = self.session.grid().len();
        let Some(current) = self.selected_index() else {
            return false;
        };
        let columns = self.grid_columns.max(1);

        let target = match step {
            GridMove::Left if current % columns > 0 => Some(current - 1),
            GridMove::Right if current % columns < columns - 1 && current + 1 < count => Some(current + 1),
            GridMove::Up => current.checked_sub(columns),
            GridMove::Down if current + columns < count => Some(current + columns),
            GridMove::Down if current / columns < (count - 1) / columns => Some(count - 1),
            _ => None,
        };

        match target.and_then(|index| self.game_at(index)).map(|game| game.id) {
            Some(id) => {
                self.selected_game = Some(id);
                true
            }
            None => false,
        }
    }

    /// Selects a sort kind. Returns whether it changed.
    pub fn set_sort(&mut self, sort: SortKind) -> bool {
        if self.session.sort == sort {
            return false;
        }
        self.session.sort = sort;
        self.refresh();
        true
    }

    /// Computes a renderable view model for a pane of `rows` x `cols` cells.
    ///
    /// The grid is windowed by rows of cards so the cursor's row is always
    /// visible, centred where possible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let columns = crate::ui::grid_columns(cols);
        let grid = self.session.grid();

        let visible_rows = (rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1);
        let total_rows = grid.len().div_ceil(columns);
        let selected = self.selected_index();
        let cursor_row = selected.map_or(0, |index| index / columns);

        let mut first_row = cursor_row.saturating_sub(visible_rows / 2);
        if first_row + visible_rows > total_rows {
            first_row = total_rows.saturating_sub(visible_rows);
        }
        let first_index = first_row * columns;
        let last_index = ((first_row + visible_rows) * columns).min(grid.len());

        let cards = grid
            .get(first_index..last_index)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(offset, item)| {
                item.as_game()
                    .map(|game| Self::compute_card(game, selected == Some(first_index + offset)))
            })
            .collect();

        UIViewModel {
            header: self.compute_header(grid.len()),
            search_bar: self.compute_search_bar(),
            sort_badges: self.compute_sort_badges(),
            grid: GridInfo {
                columns,
                cards,
                rows_above: first_row,
                rows_below: total_rows.saturating_sub(first_row + visible_rows),
            },
            footer: self.compute_footer(),
            empty_state: if grid.is_empty() { Some(self.compute_empty_state()) } else { None },
        }
    }

    fn compute_card(game: &GameRecord, is_selected: bool) -> GameCard {
        let year = game
            .release_year()
            .map_or_else(|| "TBA".to_string(), |year| year.to_string());
        let details = if game.rating > 0.0 {
            format!("{year}  ★ {:.0}", game.rating)
        } else {
            year
        };

        GameCard {
            title: crate::ui::helpers::truncate(&game.name, CARD_WIDTH - 2),
            details,
            is_selected,
        }
    }

    fn compute_header(&self, result_count: usize) -> HeaderInfo {
        HeaderInfo {
            title: format!(" gamedex ({result_count}) "),
            is_loading: self.controller.is_loading(),
            status: self.status.clone(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            tokens: self
                .session
                .filter
                .tokens()
                .into_iter()
                .map(|token| token.label().to_string())
                .collect(),
            query: self.session.filter.query_text.clone(),
            is_focused: self.input_mode == InputMode::Typing,
        }
    }

    fn compute_sort_badges(&self) -> Vec<SortBadgeInfo> {
        self.session
            .sections()
            .iter()
            .filter(|section| section.kind() == SectionKind::SortsCarousel)
            .flat_map(|section| section.items())
            .enumerate()
            .filter_map(|(index, item)| match item {
                ViewItem::SortBadge { kind, is_selected } => Some(SortBadgeInfo {
                    label: kind.label().to_string(),
                    key: index + 1,
                    is_selected: *is_selected,
                }),
                ViewItem::GameCell(_) => None,
            })
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Typing => {
                "Type to search  platform/genre words add filters  ESC: clear  Enter/Tab: results"
            }
            InputMode::Browsing => {
                "←↓↑→ or hjkl: move  Tab/s: next sort  1-3: sort  /: search  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let filter = &self.session.filter;

        if self.controller.is_loading() {
            EmptyState {
                message: "Searching…".to_string(),
                subtitle: format!("Looking up \"{}\"", filter.query_text),
            }
        } else if filter.query_text.is_empty() {
            EmptyState {
                message: "Search for a game".to_string(),
                subtitle: "Type a title, or a platform or genre such as \"switch\" or \"rpg\""
                    .to_string(),
            }
        } else {
            EmptyState {
                message: "No games found".to_string(),
                subtitle: "Try another title or remove a filter".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str], columns: usize) -> AppState {
        let mut state = AppState::new(Theme::default(), 30, 500);
        let games = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut game = GameRecord::new(i as u64 + 1, *name);
                game.popularity = 100.0 - i as f64;
                game
            })
            .collect();
        state.session.replace_games(games);
        state.grid_columns = columns;
        state.refresh();
        state
    }

    #[test]
    fn cursor_starts_on_the_first_cell() {
        let state = state_with(&["A", "B", "C"], 2);
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.selected_game().map(|g| g.name.as_str()), Some("A"));
    }

    #[test]
    fn cursor_moves_within_the_grid() {
        // A B C
        // D E
        let mut state = state_with(&["A", "B", "C", "D", "E"], 3);
        assert!(!state.move_cursor(GridMove::Left));
        assert!(!state.move_cursor(GridMove::Up));
        assert!(state.move_cursor(GridMove::Right));
        assert!(state.move_cursor(GridMove::Right));
        assert!(!state.move_cursor(GridMove::Right));
        assert!(state.move_cursor(GridMove::Down));
        assert_eq!(state.selected_game().map(|g| g.name.as_str()), Some("E"));
        assert!(!state.move_cursor(GridMove::Down));
        assert!(state.move_cursor(GridMove::Up));
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn cursor_follows_its_game_across_a_resort() {
        let mut state = state_with(&["A", "B", "C"], 3);
        let mut games = state.session.all_games().to_vec();
        for game in &mut games {
            game.first_release_date = i64::try_from(game.id).unwrap() * 1_000_000;
        }
        state.session.replace_games(games);
        state.refresh();
        assert_eq!(state.selected_index(), Some(0));

        assert!(state.set_sort(SortKind::ReleaseDate));
        assert_eq!(state.selected_game().map(|g| g.name.as_str()), Some("A"));
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn cursor_falls_back_when_its_game_is_filtered_out() {
        let mut state = state_with(&["Alpha", "Beta"], 2);
        state.move_cursor(GridMove::Right);
        state.session.filter.query_text = "alp".to_string();
        state.refresh();
        assert_eq!(state.selected_game().map(|g| g.name.as_str()), Some("Alpha"));
    }

    #[test]
    fn setting_the_same_sort_is_a_no_op() {
        let mut state = state_with(&["A"], 1);
        assert!(!state.set_sort(SortKind::Popularity));
        assert!(state.set_sort(SortKind::Rating));
    }

    #[test]
    fn viewmodel_windows_to_the_cursor_row() {
        let names: Vec<String> = (0..40).map(|i| format!("Game {i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = state_with(&refs, 1);
        state.set_viewport(20);
        for _ in 0..30 {
            state.move_cursor(GridMove::Down);
        }

        let vm = state.compute_viewmodel(24, 20);
        assert!(vm.grid.cards.iter().any(|card| card.is_selected));
        assert!(vm.grid.rows_above > 0);
        assert_eq!(vm.empty_state, None);
    }

    #[test]
    fn viewmodel_lists_badges_in_carousel_order() {
        let state = state_with(&[], 1);
        let vm = state.compute_viewmodel(24, 80);
        let labels: Vec<&str> = vm.sort_badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Popularity", "Release Date", "Rating"]);
        assert!(vm.sort_badges[0].is_selected);
        assert_eq!(vm.sort_badges[2].key, 3);
    }

    #[test]
    fn empty_state_depends_on_the_query() {
        let mut state = state_with(&[], 1);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("Search for a game".to_string()));

        state.session.filter.query_text = "zzz".to_string();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No games found".to_string()));
    }

    #[test]
    fn cards_show_year_and_rating() {
        let mut game = GameRecord::new(1, "Celeste");
        game.first_release_date = 1_516_838_400;
        game.rating = 92.4;
        let card = AppState::compute_card(&game, false);
        assert_eq!(card.details, "2018  ★ 92");

        let card = AppState::compute_card(&GameRecord::new(2, "Unknown"), true);
        assert_eq!(card.details, "TBA");
        assert!(card.is_selected);
    }
}
