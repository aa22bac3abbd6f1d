//! Empty state component renderer.
//!
//! Drawn in the grid area when there are no cards: before the first search,
//! while the first results load, and when a search matched nothing.

use crate::ui::helpers::{centre_offset, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message centred at `row` and the subtitle below it.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate(&empty.message, cols);
    position_cursor(row, 1 + centre_offset(width(&message), cols));
    print!("{}{message}{}", Theme::fg(&theme.colors.empty_state_fg), Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    position_cursor(row + 1, 1 + centre_offset(width(&subtitle), cols));
    print!(
        "{}{}{subtitle}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        Theme::reset()
    );
}
