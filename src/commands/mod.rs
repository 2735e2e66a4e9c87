// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod charts;
pub mod dashboard;
pub mod exporter;
pub mod expenses;
pub mod importer;
pub mod prefs;
pub mod reports;

use crate::models::{Expense, UserProfile};
use crate::prefs::{PreferenceStore, SqliteStorage};
use rusqlite::Connection;

/// Everything a command works against: the preferences database plus the
/// in-memory record snapshot and profile.
pub struct Session {
    pub conn: Connection,
    pub records: Vec<Expense>,
    pub profile: UserProfile,
}

impl Session {
    pub fn new(conn: Connection, records: Vec<Expense>, profile: UserProfile) -> Self {
        Self {
            conn,
            records,
            profile,
        }
    }

    pub fn preferences(&self) -> PreferenceStore<SqliteStorage<'_>> {
        PreferenceStore::load(SqliteStorage::new(&self.conn))
    }
}
