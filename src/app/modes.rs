//! Input mode and grid navigation types.
//!
//! The plugin has a single screen with two focus targets: the search bar and
//! the results grid. [`InputMode`] says which one receives keystrokes.

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The search bar is focused.
    ///
    /// Characters edit the query, Backspace deletes (or drops the last token
    /// when the query is empty), Esc clears the query, and Enter, Tab or Down
    /// move focus to the results.
    #[default]
    Typing,

    /// The results grid is focused.
    ///
    /// Arrows and h/j/k/l move the cursor, Tab or `s` cycle the sort, `1`..`3`
    /// pick a sort directly, `/` or Esc return to the search bar and `q`
    /// closes the plugin.
    Browsing,
}

/// A single cursor step in the results grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}
