//! Search bar component renderer.
//!
//! A three-row box holding the filter tokens as coloured chips followed by
//! the free-text query:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Search:  Nintendo Switch   RPG  mario▏   │
//! └──────────────────────────────────────────┘
//! ```

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 1;
const PROMPT: &str = " Search: ";
const CARET: &str = "▏";

/// Renders the search bar at `row` and returns the row after its frame.
///
/// The frame uses the focus color while the bar receives keystrokes and the
/// plain border color otherwise.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐{}", Theme::fg(frame), "─".repeat(inner_width), Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}{}│{}", Theme::fg(frame), Theme::reset());

    let mut used = 0;
    let mut write = |text: &str, style: &str| {
        let fitted = truncate(text, inner_width.saturating_sub(used));
        used += width(&fitted);
        print!("{style}{fitted}{}", Theme::reset());
    };

    write(PROMPT, &Theme::fg(&theme.colors.text_dim));
    for token in &search.tokens {
        let chip_style = format!("{}{}", Theme::fg(&theme.colors.token_fg), Theme::bg(&theme.colors.token_bg));
        write(&format!(" {token} "), &chip_style);
        write(" ", "");
    }
    write(&search.query, &Theme::fg(&theme.colors.text_normal));
    if search.is_focused {
        write(CARET, &Theme::fg(&theme.colors.search_bar_border));
    }

    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}│{}", Theme::fg(frame), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘{}", Theme::fg(frame), "─".repeat(inner_width), Theme::reset());

    row + 3
}
