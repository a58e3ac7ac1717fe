//! Theme state: selection, persistence, and per-frame application.
//!
//! Wraps the library's [`ThemeManager`] and adds the viewer-side concerns:
//! loading the preferred theme from eframe storage at startup, saving it on
//! shutdown, and pushing the active palette into the egui context each frame.

use linview::ThemeManager;

const THEME_KEY: &str = "lineage_theme";

/// State related to visual theme and styling.
pub struct ThemeState {
    theme_manager: ThemeManager,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name())
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
        }
    }

    /// Restores the stored theme preference, if any. A stored name that no
    /// longer matches a known theme keeps the default selection.
    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut state = Self::new();
        if let Some(name) = storage.and_then(|s| s.get_string(THEME_KEY)) {
            let _ = state.theme_manager.set_current_theme(&name);
        }
        state
    }

    /// Saves the current theme preference to persistent storage.
    pub fn persist(&self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_KEY, self.current_theme_name().to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context. Called every frame.
    pub fn apply(&self, ctx: &egui::Context) {
        let theme = self.theme_manager.current_theme();
        let mut visuals = theme.base_visuals();
        self.theme_manager.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the current theme.
    pub fn current_theme_name(&self) -> &str {
        self.theme_manager.current_theme_name()
    }

    /// Switches to the named theme. Returns false when no such theme exists,
    /// leaving the current selection in place.
    pub fn set_theme(&mut self, name: &str) -> bool {
        self.theme_manager.set_current_theme(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemStorage(HashMap<String, String>);

    impl eframe::Storage for MemStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }
        fn flush(&mut self) {}
    }

    #[test]
    fn round_trips_theme_preference() {
        let mut storage = MemStorage::default();

        let mut state = ThemeState::new();
        assert!(state.set_theme("Light"));
        state.persist(&mut storage);

        let restored = ThemeState::from_storage(Some(&storage as &dyn eframe::Storage));
        assert_eq!(restored.current_theme_name(), "Light");
    }

    #[test]
    fn unknown_stored_theme_falls_back_to_default() {
        let mut storage = MemStorage::default();
        storage.set_string(THEME_KEY, "Dracula".to_string());

        let state = ThemeState::from_storage(Some(&storage as &dyn eframe::Storage));
        assert_eq!(state.current_theme_name(), "Dark");
        assert!(!ThemeState::new().set_theme("Dracula"));
    }
}
