//! Theme service — load and persist the visitor's theme preference.

use folio_domain::theme::Theme;

use crate::ports::PreferenceStore;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "folio-theme";

/// Application service for the dark-mode switch.
pub struct ThemeService<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeService<S> {
    /// Create a new service backed by the given preference store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted theme, defaulting to light.
    ///
    /// Storage failures are swallowed: the feature degrades to
    /// session-only switching.
    pub fn current(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(stored) => Theme::from_stored(stored.as_deref()),
            Err(err) => {
                tracing::warn!("theme preference unavailable: {err}");
                Theme::default()
            }
        }
    }

    /// Persist a new theme, best-effort.
    pub fn set(&self, theme: Theme) {
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("theme preference not persisted: {err}");
        }
    }
}
