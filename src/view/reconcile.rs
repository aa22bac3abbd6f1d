//! Reconciliation engine: from session state to the next list of sections.
//!
//! [`compute_sections`] is a pure function of the current result set, the
//! active filter and the selected sort. It is re-run whenever any of the three
//! changes, and its output is handed to the render surface as a whole.
//!
//! # Algorithm
//!
//! 1. **Text filter**: with an empty query every game passes through in its
//!    current order; otherwise only games whose name contains the query
//!    (ignoring case) are kept, ordered by name as a baseline.
//! 2. **Sort**: a stable sort by the selected [`SortKind`], so games with equal
//!    keys keep their step-1 order.
//! 3. **Sections**: a sort carousel with one badge per kind, then the games
//!    grid with one cell per remaining game.

use super::items::ViewItem;
use super::sections::{Section, SectionKind};
use crate::domain::{FilterState, GameRecord, SortKind};
use std::collections::HashSet;

/// Computes the ordered sections for the next render.
///
/// Always returns exactly two sections, `[SortsCarousel, GamesGrid]`. An empty
/// result set yields an empty grid section rather than a missing one.
///
/// # Example
///
/// ```
/// use gamedex::domain::{FilterState, GameRecord, SortKind};
/// use gamedex::view::compute_sections;
///
/// let mut zelda = GameRecord::new(1, "Zelda");
/// zelda.popularity = 10.0;
/// let mut aaa = GameRecord::new(2, "Aaa");
/// aaa.popularity = 90.0;
///
/// let sections = compute_sections(&[zelda, aaa], &FilterState::default(), SortKind::Popularity);
/// assert_eq!(sections[1].item_identities(), vec!["2", "1"]);
/// ```
#[must_use]
pub fn compute_sections(all_games: &[GameRecord], filter: &FilterState, sort: SortKind) -> Vec<Section> {
    let _span = tracing::debug_span!(
        "compute_sections",
        total_games = all_games.len(),
        query_len = filter.query_text.len(),
        sort = ?sort
    )
    .entered();

    let mut games = filter_games(all_games, &filter.query_text);
    sort_games(&mut games, sort);

    let carousel = sort_badges(sort);
    let grid = game_cells(games);

    tracing::debug!(grid_items = grid.len(), "sections computed");

    vec![
        Section::new(SectionKind::SortsCarousel, carousel),
        Section::new(SectionKind::GamesGrid, grid),
    ]
}

/// Applies the text filter, returning owned copies of the surviving games.
fn filter_games(all_games: &[GameRecord], query_text: &str) -> Vec<GameRecord> {
    if query_text.is_empty() {
        return all_games.to_vec();
    }

    let needle = query_text.to_lowercase();
    let mut matches: Vec<GameRecord> = all_games
        .iter()
        .filter(|game| game.name_contains(&needle))
        .cloned()
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));
    matches
}

/// Orders games by the selected kind. `sort_by` is stable, which is what
/// preserves the filter step's order among equal keys.
fn sort_games(games: &mut [GameRecord], sort: SortKind) {
    games.sort_by(|a, b| sort.compare(a, b));
}

fn sort_badges(selected: SortKind) -> Vec<ViewItem> {
    SortKind::ALL
        .iter()
        .map(|&kind| ViewItem::SortBadge {
            kind,
            is_selected: kind == selected,
        })
        .collect()
}

/// Wraps games in cells, dropping repeated ids so identities stay unique.
fn game_cells(games: Vec<GameRecord>) -> Vec<ViewItem> {
    let mut seen = HashSet::with_capacity(games.len());
    games
        .into_iter()
        .filter(|game| {
            let fresh = seen.insert(game.id);
            if !fresh {
                tracing::debug!(game_id = game.id, "dropping repeated game from grid");
            }
            fresh
        })
        .map(ViewItem::GameCell)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u64, name: &str, popularity: f64, rating: f64, released: i64) -> GameRecord {
        let mut record = GameRecord::new(id, name);
        record.popularity = popularity;
        record.rating = rating;
        record.first_release_date = released;
        record
    }

    fn library() -> Vec<GameRecord> {
        vec![
            game(1, "Zelda: Breath of the Wild", 10.0, 97.0, 1_488_499_200),
            game(2, "Aaa", 90.0, 50.0, 1_262_304_000),
            game(3, "Hollow Knight", 40.0, 90.0, 1_487_808_000),
            game(4, "hollow ground", 40.0, 60.0, 1_577_836_800),
            game(5, "Celeste", 70.0, 92.0, 1_516_838_400),
        ]
    }

    fn filter(text: &str) -> FilterState {
        FilterState { query_text: text.to_string(), ..Default::default() }
    }

    fn grid_games(sections: &[Section]) -> Vec<GameRecord> {
        sections[1].items().iter().filter_map(ViewItem::as_game).cloned().collect()
    }

    #[test]
    fn always_two_sections_in_fixed_order() {
        for games in [vec![], library()] {
            let sections = compute_sections(&games, &filter(""), SortKind::Rating);
            assert_eq!(sections.len(), 2);
            assert_eq!(sections[0].kind(), SectionKind::SortsCarousel);
            assert_eq!(sections[1].kind(), SectionKind::GamesGrid);
        }
    }

    #[test]
    fn empty_result_set_yields_empty_grid() {
        let sections = compute_sections(&[], &filter("zelda"), SortKind::Popularity);
        assert!(sections[1].items().is_empty());
        assert_eq!(sections[0].items().len(), SortKind::ALL.len());
    }

    #[test]
    fn text_filter_keeps_exactly_the_case_insensitive_matches() {
        let all = library();
        let sections = compute_sections(&all, &filter("HOLLOW"), SortKind::Popularity);
        let kept: HashSet<u64> = grid_games(&sections).iter().map(|g| g.id).collect();
        let expected: HashSet<u64> = all
            .iter()
            .filter(|g| g.name.to_lowercase().contains("hollow"))
            .map(|g| g.id)
            .collect();
        assert_eq!(kept, expected);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn empty_query_keeps_every_game() {
        let all = library();
        let sections = compute_sections(&all, &filter(""), SortKind::ReleaseDate);
        let mut ids: Vec<u64> = grid_games(&sections).iter().map(|g| g.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn each_sort_kind_yields_non_increasing_keys() {
        let all = library();
        let popularity = grid_games(&compute_sections(&all, &filter(""), SortKind::Popularity));
        assert!(popularity.windows(2).all(|w| w[0].popularity >= w[1].popularity));

        let rating = grid_games(&compute_sections(&all, &filter(""), SortKind::Rating));
        assert!(rating.windows(2).all(|w| w[0].rating >= w[1].rating));

        let released = grid_games(&compute_sections(&all, &filter(""), SortKind::ReleaseDate));
        assert!(released
            .windows(2)
            .all(|w| w[0].first_release_date >= w[1].first_release_date));
    }

    #[test]
    fn equal_keys_keep_alphabetical_filter_order() {
        // Both "hollow" games share popularity 40; the filter step orders
        // them by name ("Hollow Knight" < "hollow ground" byte-wise).
        let sections = compute_sections(&library(), &filter("hollow"), SortKind::Popularity);
        assert_eq!(sections[1].item_identities(), vec!["3", "4"]);
    }

    #[test]
    fn equal_keys_keep_input_order_without_a_query() {
        let games = vec![game(9, "B", 5.0, 0.0, 0), game(8, "A", 5.0, 0.0, 0)];
        let sections = compute_sections(&games, &filter(""), SortKind::Popularity);
        assert_eq!(sections[1].item_identities(), vec!["9", "8"]);
    }

    #[test]
    fn carousel_marks_only_the_selected_kind() {
        for selected in SortKind::ALL {
            let sections = compute_sections(&library(), &filter(""), selected);
            let badges = sections[0].items();
            assert_eq!(badges.len(), SortKind::ALL.len());
            let chosen: Vec<SortKind> = badges
                .iter()
                .filter_map(|item| match item {
                    ViewItem::SortBadge { kind, is_selected: true } => Some(*kind),
                    _ => None,
                })
                .collect();
            assert_eq!(chosen, vec![selected]);
        }
    }

    #[test]
    fn recomputing_is_idempotent() {
        let all = library();
        let f = filter("o");
        let first = compute_sections(&all, &f, SortKind::Rating);
        let second = compute_sections(&all, &f, SortKind::Rating);
        assert_eq!(first, second);
        let identities = |s: &[Section]| -> Vec<(String, Vec<String>)> {
            s.iter().map(|sec| (sec.identity().to_string(), sec.item_identities())).collect()
        };
        assert_eq!(identities(&first), identities(&second));
    }

    #[test]
    fn popularity_scenario_orders_by_score() {
        let games = vec![game(1, "Zelda", 10.0, 0.0, 0), game(2, "Aaa", 90.0, 0.0, 0)];
        let sections = compute_sections(&games, &filter(""), SortKind::Popularity);
        let names: Vec<String> = grid_games(&sections).into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Aaa", "Zelda"]);

        let sections = compute_sections(&games, &filter("zel"), SortKind::Popularity);
        let names: Vec<String> = grid_games(&sections).into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Zelda"]);
    }

    #[test]
    fn repeated_records_appear_once() {
        let games = vec![game(1, "Zelda", 10.0, 0.0, 0), game(1, "Zelda", 10.0, 0.0, 0)];
        let sections = compute_sections(&games, &filter(""), SortKind::Popularity);
        assert_eq!(sections[1].item_identities(), vec!["1"]);
    }
}
