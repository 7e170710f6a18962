//! Landing page hosting the theme toggle control.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1 class="home-page__title">"Nightswitch"</h1>
                <span class="home-page__spacer"></span>
                <ThemeToggle/>
            </header>
            <main class="home-page__content">
                <p>
                    "Flip the switch in the header to change between light and "
                    "dark mode. The choice is remembered in this browser and "
                    "restored the next time the page loads."
                </p>
            </main>
        </div>
    }
}
