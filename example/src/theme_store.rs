use glide_ui::{SharedTheme, ThemeMode, ThemeProvider};
use tracing::info;

use crate::storage::{KeyValueStore, STORAGE_KEY_THEME_DARK};

/// The application's theme mode, persisted across runs.
pub struct ThemeStore {
    theme: SharedTheme,
    storage: KeyValueStore,
}

impl ThemeStore {
    /// Reads the persisted flag. An empty store starts light and records
    /// `dark`, so the next run starts dark.
    pub fn load(storage: KeyValueStore) -> Self {
        let mode = match storage.get_or_warn(STORAGE_KEY_THEME_DARK) {
            Some(flag) if !flag.is_empty() => flag.parse().unwrap_or_default(),
            _ => {
                storage.set_or_warn(STORAGE_KEY_THEME_DARK, ThemeMode::Dark.as_str());
                ThemeMode::Light
            }
        };
        info!(%mode, path = %storage.path().display(), "theme loaded");
        Self {
            theme: SharedTheme::new(mode),
            storage,
        }
    }

    /// Handle components read the mode through.
    pub fn theme(&self) -> &SharedTheme {
        &self.theme
    }

    pub fn mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Flips the mode and persists it.
    pub fn toggle_dark(&self) -> ThemeMode {
        let mode = self.theme.toggle();
        self.storage.set_or_warn(STORAGE_KEY_THEME_DARK, mode.as_str());
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_is_light_and_next_run_dark() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = ThemeStore::load(KeyValueStore::in_dir(dir.path()));
        assert_eq!(first.mode(), ThemeMode::Light);

        let second = ThemeStore::load(KeyValueStore::in_dir(dir.path()));
        assert_eq!(second.mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_is_persisted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = KeyValueStore::in_dir(dir.path());
        storage.set(STORAGE_KEY_THEME_DARK, "dark").expect("set");

        let store = ThemeStore::load(storage.clone());
        assert!(store.theme().is_dark());
        assert_eq!(store.toggle_dark(), ThemeMode::Light);
        assert_eq!(
            storage.get(STORAGE_KEY_THEME_DARK).expect("get").as_deref(),
            Some("light")
        );
    }
}
