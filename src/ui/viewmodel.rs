//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; all
//! filtering, ordering and windowing already happened.
//!
//! # Example
//!
//! ```
//! use gamedex::ui::viewmodel::{FooterInfo, GridInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " gamedex (0) ".to_string(), is_loading: false, status: None },
//!     search_bar: SearchBarInfo { tokens: vec![], query: String::new(), is_focused: true },
//!     sort_badges: vec![],
//!     grid: GridInfo { columns: 3, cards: vec![], rows_above: 0, rows_below: 0 },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//! };
//! assert!(vm.grid.cards.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// One badge per sort kind, in carousel order.
    pub sort_badges: Vec<SortBadgeInfo>,
    pub grid: GridInfo,
    pub footer: FooterInfo,
    /// Shown in place of the grid when it has no cards.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, including the result count.
    pub title: String,
    /// Whether a search request is in flight.
    pub is_loading: bool,
    /// Last failure message, if any.
    pub status: Option<String>,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Labels of active filter tokens, drawn before the query.
    pub tokens: Vec<String>,
    pub query: String,
    /// Whether keystrokes currently go to the search bar.
    pub is_focused: bool,
}

/// One badge in the sort carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBadgeInfo {
    pub label: String,
    /// Number key that selects this sort.
    pub key: usize,
    pub is_selected: bool,
}

/// The visible window of the games grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInfo {
    pub columns: usize,
    /// Cards in row-major order.
    pub cards: Vec<GameCard>,
    /// Rows of cards scrolled off above the window.
    pub rows_above: usize,
    /// Rows of cards below the window.
    pub rows_below: usize,
}

/// A single game card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    /// Game name, truncated to the card width.
    pub title: String,
    /// Release year and rating.
    pub details: String,
    pub is_selected: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the focused mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
