//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`; Zellij clears the pane before
/// each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
