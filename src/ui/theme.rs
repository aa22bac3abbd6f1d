//! Theme management and ANSI escape sequence generation.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#cba6f7"
//! token_fg = "#1e1e2e"
//! token_bg = "#94e2d5"
//! badge_fg = "#a6adc8"
//! badge_selected_fg = "#1e1e2e"
//! badge_selected_bg = "#f9e2af"
//! card_border = "#585b70"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! rating_fg = "#f9e2af"
//! loading_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! `header_bg` is optional.

use crate::domain::{GamedexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer and secondary card text.
    pub text_dim: String,
    pub border: String,

    /// Search bar frame while it has focus.
    pub search_bar_border: String,
    /// Filter token chips in the search bar.
    pub token_fg: String,
    pub token_bg: String,

    pub badge_fg: String,
    pub badge_selected_fg: String,
    pub badge_selected_bg: String,

    pub card_border: String,
    /// The card under the grid cursor.
    pub selection_fg: String,
    pub selection_bg: String,
    pub rating_fg: String,

    pub loading_fg: String,
    pub error_fg: String,
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// ```
    /// use gamedex::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GamedexError::Theme`] if the file cannot be read or does not
    /// parse as a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| GamedexError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| GamedexError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb`; malformed colors render white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the test suite rules
    /// out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("embedded catppuccin-mocha theme should parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn escape_sequences_use_rgb() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let mocha = toml::to_string(&Theme::default()).unwrap();
        let custom = mocha.replace("catppuccin-mocha", "my-theme");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "my-theme");
        assert_eq!(theme.colors, Theme::default().colors);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(GamedexError::Theme(_))));

        let missing = Theme::from_file("/definitely/not/here.toml");
        assert!(matches!(missing, Err(GamedexError::Theme(_))));
    }
}
