//! Footer component renderer.

use crate::ui::helpers::{centre_offset, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the centred keybinding hints at `row`, truncated to the pane.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = width(&help_text);
    let padding = centre_offset(text_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
