//! Dark mode toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::theme::controller::Theme;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Glyph shown on the toggle control for the active theme.
fn glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    }
}

/// The single theme control: inverts the document marker, persists the
/// matching preference, and mirrors the result into shared UI state.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let current = ui.get().theme;
                let next = crate::theme::browser::toggle(current);
                ui.update(|u| u.theme = next);
            }
            title="Toggle dark mode"
        >
            {move || glyph(ui.get().theme)}
        </button>
    }
}
