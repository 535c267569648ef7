//! Dark-mode preference tests for dashboard-service.

mod common;

use common::TestShell;
use dashboard_service::services::{Theme, ThemePreferences, DARK_MODE_KEY};
use service_core::storage::{FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;

#[tokio::test]
async fn falls_back_to_system_preference_and_stores_it() {
    let store = Arc::new(MemoryStore::new());

    let prefs = ThemePreferences::load(store.clone(), true).await;

    assert!(prefs.dark_mode());
    assert_eq!(prefs.theme(), Theme::Dark);
    assert_eq!(store.get(DARK_MODE_KEY).await.unwrap().as_deref(), Some("true"));
}

#[tokio::test]
async fn stored_value_wins_over_system_preference() {
    let store = Arc::new(MemoryStore::new());
    store.set(DARK_MODE_KEY, "false").await.unwrap();

    let prefs = ThemePreferences::load(store, true).await;

    assert!(!prefs.dark_mode());
    assert_eq!(prefs.theme(), Theme::Light);
}

#[tokio::test]
async fn malformed_value_falls_back_and_is_overwritten() {
    let store = Arc::new(MemoryStore::new());
    store.set(DARK_MODE_KEY, "maybe").await.unwrap();

    let prefs = ThemePreferences::load(store.clone(), false).await;

    assert!(!prefs.dark_mode());
    assert_eq!(store.get(DARK_MODE_KEY).await.unwrap().as_deref(), Some("false"));
}

#[tokio::test]
async fn toggle_flips_and_persists() {
    let store = Arc::new(MemoryStore::new());
    let mut prefs = ThemePreferences::load(store.clone(), false).await;

    assert!(prefs.toggle().await.unwrap());
    assert_eq!(store.get(DARK_MODE_KEY).await.unwrap().as_deref(), Some("true"));

    assert!(!prefs.toggle().await.unwrap());
    assert_eq!(store.get(DARK_MODE_KEY).await.unwrap().as_deref(), Some("false"));
}

#[tokio::test]
async fn preference_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let mut prefs = ThemePreferences::load(Arc::new(FileStore::new(&path)), false).await;
        prefs.set(true).await.unwrap();
    }

    let reloaded = ThemePreferences::load(Arc::new(FileStore::new(&path)), false).await;
    assert!(reloaded.dark_mode());
}

#[tokio::test]
async fn shell_toggle_uses_the_same_store() {
    let app = TestShell::spawn(false).await;
    let mut shell = app.shell;

    assert!(!shell.dark_mode());
    assert!(shell.toggle_dark_mode().await.unwrap());
    assert_eq!(shell.theme(), Theme::Dark);

    let restarted = TestShell::spawn_with_store(app.store.clone(), false).await;
    assert!(restarted.shell.dark_mode());
}
