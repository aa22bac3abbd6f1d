//! Header component renderer.
//!
//! Title on the left; the loading indicator or the last failure on the right.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar at `row` and returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let (status_text, status_color) = if header.is_loading {
        (" Searching… ".to_string(), &theme.colors.loading_fg)
    } else if let Some(status) = &header.status {
        (format!(" {status} "), &theme.colors.error_fg)
    } else {
        (String::new(), &theme.colors.text_dim)
    };

    let title_len = width(&header.title);
    let status_len = width(&status_text).min(cols.saturating_sub(title_len));
    let status_text: String = status_text.chars().take(status_len).collect();
    let gap = cols.saturating_sub(title_len + status_len);

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), header.title);
    print!("{}", " ".repeat(gap));
    print!("{}{status_text}", Theme::fg(status_color));
    print!("{}", Theme::reset());
    row + 1
}
