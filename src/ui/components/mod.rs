//! Composable UI component renderers.
//!
//! Each component draws one region of the pane at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title, loading indicator and last failure
//! - [`search`]: Search box with filter tokens and query
//! - [`carousel`]: Sort badges and grid scroll hints
//! - [`grid`]: Game cards
//! - [`empty`]: Message shown when the grid has no cards
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Sort Carousel]
//! [blank line]
//! [Grid or Empty State]
//! [Border]
//! [Footer]
//! ```

mod carousel;
mod empty;
mod footer;
mod grid;
mod header;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use carousel::render_sort_carousel;
use empty::render_empty_state;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at `row`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen for `vm` into a `rows` x `cols` pane.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_sort_carousel(current_row, &vm.sort_badges, &vm.grid, theme, cols);
    current_row += 1;

    let footer_row = rows.saturating_sub(1).max(current_row + 1);
    let border_row = footer_row - 1;

    match &vm.empty_state {
        Some(empty) => render_empty_state(current_row + 1, empty, theme, cols),
        None => {
            render_grid(current_row, &vm.grid, theme, border_row);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
