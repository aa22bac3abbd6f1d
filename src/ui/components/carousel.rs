//! Sort carousel component renderer.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GridInfo, SortBadgeInfo};

/// Renders one row of sort badges, plus scroll hints for the grid on the
/// right. Returns the next free row.
pub fn render_sort_carousel(
    row: usize,
    badges: &[SortBadgeInfo],
    grid: &GridInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let mut used = 1;
    print!(" ");
    for badge in badges {
        let text = format!(" {} {} ", badge.key, badge.label);
        used += width(&text) + 1;
        if used > cols {
            break;
        }
        if badge.is_selected {
            print!(
                "{}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.badge_selected_fg),
                Theme::bg(&theme.colors.badge_selected_bg)
            );
        } else {
            print!("{}", Theme::fg(&theme.colors.badge_fg));
        }
        print!("{text}{} ", Theme::reset());
    }

    let hint = scroll_hint(grid);
    if !hint.is_empty() && used + width(&hint) < cols {
        print!("{}", " ".repeat(cols - used - width(&hint)));
        print!("{}{hint}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }

    row + 1
}

fn scroll_hint(grid: &GridInfo) -> String {
    match (grid.rows_above, grid.rows_below) {
        (0, 0) => String::new(),
        (above, 0) => format!("↑{above} "),
        (0, below) => format!("↓{below} "),
        (above, below) => format!("↑{above} ↓{below} "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows_above: usize, rows_below: usize) -> GridInfo {
        GridInfo {
            columns: 1,
            cards: vec![],
            rows_above,
            rows_below,
        }
    }

    #[test]
    fn scroll_hint_shows_hidden_rows() {
        assert_eq!(scroll_hint(&grid(0, 0)), "");
        assert_eq!(scroll_hint(&grid(2, 0)), "↑2 ");
        assert_eq!(scroll_hint(&grid(1, 4)), "↑1 ↓4 ");
    }
}
