//! Theme state and the controller that keeps display and persistence in
//! agreement.
//!
//! TRADE-OFFS
//! ==========
//! The display marker is inverted before the preference is written, so a
//! store that drops writes degrades to a session-only preference instead
//! of a dead toggle control.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// User-facing theme choice, light by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored string form of this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference. Anything other than exactly `"dark"`,
    /// including a missing value, means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The other theme.
    pub fn inverted(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read/write access to the single persisted theme preference.
pub trait PreferenceStore {
    /// Currently stored preference value, if any.
    fn get(&self) -> Option<String>;

    /// Persist `value`. Implementations swallow storage failures; the
    /// toggle must stay responsive when persistence is unavailable.
    fn set(&self, value: &str);
}

/// Presence of the dark-mode marker on the display container.
pub trait DisplayMarker {
    fn add(&self);
    fn remove(&self);
    fn has(&self) -> bool;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, value: &str) {
        (**self).set(value);
    }
}

impl<T: DisplayMarker + ?Sized> DisplayMarker for &T {
    fn add(&self) {
        (**self).add();
    }

    fn remove(&self) {
        (**self).remove();
    }

    fn has(&self) -> bool {
        (**self).has()
    }
}

/// Keeps the visible theme and the persisted preference consistent.
pub struct ThemeController<S, M> {
    store: S,
    marker: M,
}

impl<S: PreferenceStore, M: DisplayMarker> ThemeController<S, M> {
    pub fn new(store: S, marker: M) -> Self {
        Self { store, marker }
    }

    /// Apply the persisted preference to the display. Only an explicit
    /// `"dark"` preference adds the marker; the display keeps its default
    /// light state otherwise. Never writes to the store.
    pub fn load(&self) -> Theme {
        let theme = Theme::from_stored(self.store.get().as_deref());
        if theme == Theme::Dark {
            self.marker.add();
        }
        theme
    }

    /// Invert the display marker, then persist the matching preference.
    pub fn toggle(&self) -> Theme {
        let next = if self.marker.has() {
            self.marker.remove();
            Theme::Light
        } else {
            self.marker.add();
            Theme::Dark
        };
        self.store.set(next.as_str());
        next
    }

    /// Theme currently shown by the display marker.
    pub fn current(&self) -> Theme {
        if self.marker.has() { Theme::Dark } else { Theme::Light }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }
}
