// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::aggregate::available_years;
use crate::exchange::{self, BackupDocument};
use crate::models::Expense;
use anyhow::{Context, Result};
use std::path::Path;

/// Reads and validates an import file. Nothing is loaded unless every record
/// parses.
pub fn load(sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let path = sub.get_one::<String>("path").context("path missing")?.trim();
    let records = exchange::import_file(Path::new(path))
        .with_context(|| format!("Import failed for {}", path))?;
    Ok(records)
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let records = load(sub)?;
    let years = available_years(&records)
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(count = records.len(), "import validated");
    println!(
        "Imported {} expenses (years: {})",
        records.len(),
        if years.is_empty() { "-".into() } else { years }
    );
    Ok(())
}

/// Applies the backup's preferences to the store and returns the document.
pub fn restore(session: &Session, sub: &clap::ArgMatches) -> Result<BackupDocument> {
    let path = sub.get_one::<String>("path").context("path missing")?.trim();
    let doc = exchange::read_backup(Path::new(path))
        .with_context(|| format!("Restore failed for {}", path))?;
    session
        .preferences()
        .apply(doc.preferences)
        .context("Save restored preferences")?;
    tracing::info!(
        count = doc.expenses.len(),
        created_at = %doc.created_at,
        "backup restored"
    );
    println!(
        "Restored {} expenses for {} (theme {}, view {})",
        doc.expenses.len(),
        doc.user.name,
        doc.preferences.theme,
        doc.preferences.dashboard_view
    );
    Ok(doc)
}
