// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use spendboard::db::init_schema;
use spendboard::error::StorageError;
use spendboard::models::{DashboardView, Preferences, Theme};
use spendboard::prefs::{
    MemoryStorage, PreferenceStorage, PreferenceStore, SqliteStorage, THEME_KEY, VIEW_KEY,
};

struct BrokenStorage;

impl PreferenceStorage for BrokenStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disk gone".into()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk gone".into()))
    }
}

fn conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn
}

#[test]
fn defaults_when_nothing_stored() {
    let store = PreferenceStore::load(MemoryStorage::new());
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.view(), DashboardView::Detailed);
}

#[test]
fn set_theme_survives_reload() {
    let mut store = PreferenceStore::load(MemoryStorage::new());
    store.set_theme(Theme::Dark).unwrap();
    assert_eq!(store.theme(), Theme::Dark);

    let reloaded = PreferenceStore::load(store.into_storage());
    assert_eq!(reloaded.theme(), Theme::Dark);
    assert_eq!(reloaded.view(), DashboardView::Detailed);
}

#[test]
fn invalid_stored_values_fall_back_silently() {
    let mut storage = MemoryStorage::new();
    storage.write(THEME_KEY, "purple").unwrap();
    storage.write(VIEW_KEY, "").unwrap();
    let store = PreferenceStore::load(storage);
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.view(), DashboardView::Detailed);
}

#[test]
fn unreadable_storage_uses_defaults_and_rejects_writes() {
    let mut store = PreferenceStore::load(BrokenStorage);
    assert_eq!(store.theme(), Theme::Light);
    assert!(store.set_theme(Theme::Dark).is_err());
    // failed write leaves the current value alone
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn sqlite_storage_round_trips_through_settings_table() {
    let conn = conn();
    {
        let mut store = PreferenceStore::load(SqliteStorage::new(&conn));
        store.set_view(DashboardView::Compact).unwrap();
        store.set_theme(Theme::System).unwrap();
        store.set_theme(Theme::Dark).unwrap();
    }
    let stored: String = conn
        .query_row("SELECT value FROM settings WHERE key=?1", [VIEW_KEY], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(stored, "compact");

    let store = PreferenceStore::load(SqliteStorage::new(&conn));
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.view(), DashboardView::Compact);
}

#[test]
fn system_theme_follows_host() {
    let mut store = PreferenceStore::load(MemoryStorage::new());
    store.set_theme(Theme::System).unwrap();
    assert_eq!(store.effective_theme(true), Theme::Dark);
    assert_eq!(store.effective_theme(false), Theme::Light);
    store.set_theme(Theme::Light).unwrap();
    assert_eq!(store.effective_theme(true), Theme::Light);
}

/// Accepts theme writes but refuses the dashboard view.
#[derive(Default)]
struct ViewLockedStorage {
    inner: MemoryStorage,
}

impl PreferenceStorage for ViewLockedStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == VIEW_KEY {
            return Err(StorageError::Unavailable("read-only".into()));
        }
        self.inner.write(key, value)
    }
}

#[test]
fn apply_keeps_previous_pair_when_second_write_fails() {
    let mut store = PreferenceStore::load(ViewLockedStorage::default());
    let err = store.apply(Preferences {
        theme: Theme::Dark,
        dashboard_view: DashboardView::Compact,
    });
    assert!(err.is_err());
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.view(), DashboardView::Detailed);

    let storage = store.into_storage();
    assert_eq!(storage.read(THEME_KEY).unwrap().as_deref(), Some("light"));
    let reloaded = PreferenceStore::load(storage);
    assert_eq!(reloaded.theme(), Theme::Light);
}

#[test]
fn apply_writes_both_preferences() {
    let conn = conn();
    let mut store = PreferenceStore::load(SqliteStorage::new(&conn));
    store
        .apply(Preferences {
            theme: Theme::System,
            dashboard_view: DashboardView::Compact,
        })
        .unwrap();
    let reloaded = PreferenceStore::load(SqliteStorage::new(&conn));
    assert_eq!(reloaded.theme(), Theme::System);
    assert_eq!(reloaded.view(), DashboardView::Compact);
}
