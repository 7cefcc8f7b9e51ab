//! Settings repository backed by a key/value store.

use postsmith_core::settings::{Settings, SettingsRepository};
use postsmith_core::store::{KeyValueStore, StoreExt};
use std::sync::Arc;

/// Store key holding the committed settings.
pub const SETTINGS_KEY: &str = "settings";

/// Keeps the committed settings under [`SETTINGS_KEY`].
///
/// Loaded values are normalized so a hand-edited file cannot smuggle in
/// duplicates or an out-of-range quota.
pub struct StoreSettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreSettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SettingsRepository for StoreSettingsRepository {
    fn load(&self) -> Settings {
        self.store
            .get_or(SETTINGS_KEY, Settings::default())
            .normalized()
    }

    fn commit(&self, settings: &Settings) {
        self.store.set(SETTINGS_KEY, settings);
        tracing::debug!(
            "[SettingsRepository] Committed {} source(s)",
            settings.sources.len()
        );
    }
}
