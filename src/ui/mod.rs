//! User interface rendering layer with component-based architecture.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! Every render redraws the whole pane from the view model; nothing is
//! patched in place.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and width-aware text fitting
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, GameCard, GridInfo, HeaderInfo, SearchBarInfo, SortBadgeInfo, UIViewModel,
};

/// Width of a game card in cells, side padding included.
pub const CARD_WIDTH: usize = 26;
/// Blank cells between neighbouring cards.
pub const CARD_GAP: usize = 2;
/// Rows taken by one row of cards, spacer included.
pub const CARD_HEIGHT: usize = 3;

/// Number of card columns that fit in `cols` cells. Always at least one.
///
/// ```
/// assert_eq!(gamedex::ui::grid_columns(80), 2);
/// assert_eq!(gamedex::ui::grid_columns(84), 3);
/// assert_eq!(gamedex::ui::grid_columns(10), 1);
/// ```
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    let columns = (cols + CARD_GAP) / (CARD_WIDTH + CARD_GAP);
    if columns == 0 {
        1
    } else {
        columns
    }
}
