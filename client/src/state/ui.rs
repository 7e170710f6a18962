//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps the rendering mirror of the theme out of the persistence layer
//! (`theme::controller`) so components read a signal while the document
//! marker stays the source of truth for toggling.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::theme::controller::Theme;

/// UI state shared via Leptos context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}
