//! Client-local persisted state.
//!
//! The site persists exactly two keys: the theme preference and the
//! registration-completion flag. Components never touch browser storage
//! directly; they go through [`ThemeStore`] or [`mark_registration_completed`]
//! over a [`KeyValueStore`] backend (browser `localStorage` in the frontend,
//! [`MemoryStore`] in tests).

use std::collections::HashMap;

use crate::model::theme::ThemePreference;

pub const THEME_KEY: &str = "theme";
pub const REGISTRATION_COMPLETED_KEY: &str = "registrationCompleted";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Process-wide owner of the theme preference.
///
/// Init-on-load, write-on-change: [`ThemeStore::load`] reads the saved value
/// (defaulting to light) and writes it back, [`ThemeStore::toggle`] flips and
/// persists. Last write wins.
pub struct ThemeStore<S> {
    backend: S,
    current: ThemePreference,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn load(mut backend: S) -> Self {
        let current = backend
            .get(THEME_KEY)
            .map(|raw| ThemePreference::parse_or_default(&raw))
            .unwrap_or_default();
        backend.set(THEME_KEY, current.as_str());
        Self { backend, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn set(&mut self, theme: ThemePreference) {
        self.current = theme;
        self.backend.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

/// Records which registration flow completed on this device.
pub fn mark_registration_completed<S: KeyValueStore>(backend: &mut S, flow_key: &str) {
    backend.set(REGISTRATION_COMPLETED_KEY, flow_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_to_light_and_persists_it() {
        let store = ThemeStore::load(MemoryStore::new());
        assert_eq!(store.current(), ThemePreference::Light);
        assert_eq!(store.backend().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn load_reads_saved_dark() {
        let mut backend = MemoryStore::new();
        backend.set(THEME_KEY, "dark");
        assert_eq!(ThemeStore::load(backend).current(), ThemePreference::Dark);
    }

    #[test]
    fn unknown_saved_value_falls_back_to_light() {
        let mut backend = MemoryStore::new();
        backend.set(THEME_KEY, "sepia");
        let store = ThemeStore::load(backend);
        assert_eq!(store.current(), ThemePreference::Light);
        assert_eq!(store.backend().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_flips_and_writes() {
        let mut store = ThemeStore::load(MemoryStore::new());
        assert_eq!(store.toggle(), ThemePreference::Dark);
        assert_eq!(store.backend().get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.toggle(), ThemePreference::Light);
        assert_eq!(store.backend().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn completion_flag_is_written() {
        let mut backend = MemoryStore::new();
        mark_registration_completed(&mut backend, "pharmacy");
        assert_eq!(
            backend.get(REGISTRATION_COMPLETED_KEY).as_deref(),
            Some("pharmacy")
        );
    }
}
