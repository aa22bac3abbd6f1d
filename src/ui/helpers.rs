//! Shared rendering utilities.
//!
//! Width calculations here count `char`s, which matches terminal cells for
//! the text this plugin draws (game names are rarely wide CJK titles, and a
//! miscount only shifts padding).

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of character cells `text` occupies.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `…` when cut.
///
/// ```
/// use gamedex::ui::helpers::truncate;
///
/// assert_eq!(truncate("Hollow Knight", 20), "Hollow Knight");
/// assert_eq!(truncate("Hollow Knight", 8), "Hollow …");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Pads `text` with spaces on the right to exactly `cells` characters,
/// truncating if it is longer.
#[must_use]
pub fn pad_right(text: &str, cells: usize) -> String {
    let fitted = truncate(text, cells);
    let padding = cells.saturating_sub(width(&fitted));
    format!("{fitted}{}", " ".repeat(padding))
}

/// Left padding that centres `text_width` cells in `cols`.
#[must_use]
pub const fn centre_offset(text_width: usize, cols: usize) -> usize {
    cols.saturating_sub(text_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Pokémon Sword", 8), "Pokémon…");
        assert_eq!(truncate("ab", 0), "");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn pad_right_fills_or_cuts_to_width() {
        assert_eq!(pad_right("abc", 5), "abc  ");
        assert_eq!(pad_right("abcdef", 4), "abc…");
        assert_eq!(width(&pad_right("Pokémon", 10)), 10);
    }

    #[test]
    fn centre_offset_never_underflows() {
        assert_eq!(centre_offset(4, 10), 3);
        assert_eq!(centre_offset(20, 10), 0);
    }
}
