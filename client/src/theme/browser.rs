//! Browser-backed theme storage and display marker.
//!
//! Reads the preference from `localStorage` under the `theme` key and flips
//! the `dark-mode` class on `<body>`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic, and storage write
//! errors are discarded so the toggle keeps working with storage disabled.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use super::controller::Theme;
#[cfg(feature = "hydrate")]
use super::controller::{DisplayMarker, PreferenceStore, ThemeController};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

/// `localStorage`-backed preference store. Resolves the window on every
/// call so a missing or disabled storage degrades to no stored value.
#[cfg(feature = "hydrate")]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn set(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }
}

/// Display marker expressed as the `dark-mode` class on `document.body`.
#[cfg(feature = "hydrate")]
pub struct BodyClassMarker;

#[cfg(feature = "hydrate")]
impl BodyClassMarker {
    fn body() -> Option<web_sys::HtmlElement> {
        web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
    }
}

#[cfg(feature = "hydrate")]
impl DisplayMarker for BodyClassMarker {
    fn add(&self) {
        if let Some(body) = Self::body() {
            let _ = body.class_list().add_1(DARK_CLASS);
        }
    }

    fn remove(&self) {
        if let Some(body) = Self::body() {
            let _ = body.class_list().remove_1(DARK_CLASS);
        }
    }

    fn has(&self) -> bool {
        Self::body().map_or(false, |body| body.class_list().contains(DARK_CLASS))
    }
}

/// Apply the persisted preference to the page and return it.
///
/// Only an explicit stored `"dark"` changes anything; never writes.
pub fn load() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        ThemeController::new(LocalStorageStore, BodyClassMarker).load()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Toggle dark mode on the page and persist the new preference.
///
/// The document is the source of truth in the browser; outside it the
/// passed theme is flipped so callers stay responsive.
pub fn toggle(current: Theme) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let _ = current;
        ThemeController::new(LocalStorageStore, BodyClassMarker).toggle()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        current.inverted()
    }
}
