// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Durable display preferences (color theme and dashboard density).

use crate::error::StorageError;
use crate::models::{DashboardView, Preferences, Theme};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";
pub const VIEW_KEY: &str = "dashboardViewPreference";

/// Key/value backend behind a [`PreferenceStore`].
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Preferences kept in the `settings` table of the app database.
pub struct SqliteStorage<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStorage<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl PreferenceStorage for SqliteStorage<'_> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// In-process holder of the current preferences, written through to storage
/// on every change.
pub struct PreferenceStore<S> {
    storage: S,
    current: Preferences,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Reads both preferences. Missing, unreadable or unknown values fall back
    /// to light / detailed without failing.
    pub fn load(storage: S) -> Self {
        let current = Preferences {
            theme: read_or_default::<Theme>(&storage, THEME_KEY),
            dashboard_view: read_or_default::<DashboardView>(&storage, VIEW_KEY),
        };
        Self { storage, current }
    }

    pub fn preferences(&self) -> Preferences {
        self.current
    }

    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    pub fn view(&self) -> DashboardView {
        self.current.dashboard_view
    }

    /// Resolves `system` using the host's dark-mode preference.
    pub fn effective_theme(&self, prefers_dark: bool) -> Theme {
        match self.current.theme {
            Theme::System if prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            t => t,
        }
    }

    /// The in-memory value only changes once storage accepted the write.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.storage.write(THEME_KEY, theme.as_str())?;
        self.current.theme = theme;
        tracing::info!(%theme, "theme preference saved");
        Ok(())
    }

    pub fn set_view(&mut self, view: DashboardView) -> Result<(), StorageError> {
        self.storage.write(VIEW_KEY, view.as_str())?;
        self.current.dashboard_view = view;
        tracing::info!(%view, "dashboard view preference saved");
        Ok(())
    }

    /// Writes both preferences. When the view write fails the previous theme
    /// is written back, so storage and memory keep the old pair.
    pub fn apply(&mut self, prefs: Preferences) -> Result<(), StorageError> {
        let previous = self.current.theme;
        self.set_theme(prefs.theme)?;
        if let Err(e) = self.set_view(prefs.dashboard_view) {
            if let Err(undo) = self.set_theme(previous) {
                tracing::warn!(error = %undo, "could not restore previous theme");
            }
            return Err(e);
        }
        Ok(())
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_or_default<T>(storage: &impl PreferenceStorage, key: &str) -> T
where
    T: FromStr + Default,
{
    match storage.read(key) {
        Ok(Some(raw)) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, "ignoring unknown stored preference");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            tracing::debug!(key, error = %e, "preference storage unreadable, using default");
            T::default()
        }
    }
}
