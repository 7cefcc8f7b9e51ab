use postsmith_core::history::{HistoryEntry, HistoryLedger};
use postsmith_core::settings::{DraftController, SettingsRepository};
use postsmith_core::store::KeyValueStore;
use postsmith_infrastructure::{JsonFileStore, StoreSettingsRepository};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn file_store(temp_dir: &TempDir) -> Arc<dyn KeyValueStore> {
    Arc::new(JsonFileStore::new(temp_dir.path().join("store")))
}

#[test]
fn test_committed_settings_survive_reload() {
    let temp_dir = TempDir::new().unwrap();

    {
        let repo = Arc::new(StoreSettingsRepository::new(file_store(&temp_dir)));
        let mut draft = DraftController::new(repo);
        draft.add_source("https://a.example/feed");
        draft.add_schedule_time("07:15");
        assert!(draft.commit());
    }

    let repo = StoreSettingsRepository::new(file_store(&temp_dir));
    let settings = repo.load();
    assert_eq!(settings.sources, vec!["https://a.example/feed"]);
    assert!(settings.schedule_times.contains(&"07:15".to_string()));
}

#[test]
fn test_uncommitted_draft_is_not_persisted() {
    let temp_dir = TempDir::new().unwrap();

    {
        let repo = Arc::new(StoreSettingsRepository::new(file_store(&temp_dir)));
        let mut draft = DraftController::new(repo);
        draft.add_source("https://never-saved.example");
        assert!(draft.is_dirty());
    }

    let repo = StoreSettingsRepository::new(file_store(&temp_dir));
    assert!(repo.load().sources.is_empty());
}

#[test]
fn test_history_and_settings_use_separate_files() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);

    let mut ledger = HistoryLedger::load(store.clone());
    ledger.prepend(HistoryEntry {
        text: "Hello 🌟".to_string(),
        source_url: "https://a.example/feed".to_string(),
        timestamp: "2024/01/01 00:00:00".to_string(),
    });

    let store_dir = temp_dir.path().join("store");
    assert!(store_dir.join("history.json").exists());
    assert!(!store_dir.join("settings.json").exists());

    // History reloads without any settings present
    let reloaded = HistoryLedger::load(store);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.list()[0].text, "Hello 🌟");
}

#[test]
fn test_corrupt_settings_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store_dir = temp_dir.path().join("store");
    fs::create_dir_all(&store_dir).unwrap();
    fs::write(store_dir.join("settings.json"), "{ this is not json").unwrap();

    let repo = StoreSettingsRepository::new(file_store(&temp_dir));
    assert_eq!(repo.load(), postsmith_core::settings::Settings::default());
}
