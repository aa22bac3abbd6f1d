//! Games grid component renderer.
//!
//! Cards are laid out row-major, `columns` per row. Each card is two text
//! lines (title, then year and rating) followed by a blank spacer line:
//!
//! ```text
//!  Celeste                    Hollow Knight
//!  2018  ★ 92                 2017  ★ 90
//! ```

use crate::ui::helpers::{pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GameCard, GridInfo};
use crate::ui::{CARD_GAP, CARD_HEIGHT, CARD_WIDTH};

/// Renders the visible cards from `row`, never drawing at or past
/// `last_row`. Returns the next free row.
pub fn render_grid(row: usize, grid: &GridInfo, theme: &Theme, last_row: usize) -> usize {
    let mut current_row = row;

    for card_row in grid.cards.chunks(grid.columns.max(1)) {
        if current_row + 1 >= last_row {
            break;
        }
        for (column, card) in card_row.iter().enumerate() {
            let col = 1 + column * (CARD_WIDTH + CARD_GAP);
            render_card(current_row, col, card, theme);
        }
        current_row += CARD_HEIGHT;
    }

    current_row
}

fn render_card(row: usize, col: usize, card: &GameCard, theme: &Theme) {
    let inner = CARD_WIDTH - 2;
    let (base, details) = if card.is_selected {
        let selected = format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        );
        (selected.clone(), selected)
    } else {
        (
            Theme::fg(&theme.colors.text_normal),
            Theme::fg(&theme.colors.rating_fg),
        )
    };

    position_cursor(row, col);
    print!("{base}{} {} {}", Theme::bold(), pad_right(&card.title, inner), Theme::reset());

    position_cursor(row + 1, col);
    print!("{details} {} {}", pad_right(&card.details, inner), Theme::reset());
}
