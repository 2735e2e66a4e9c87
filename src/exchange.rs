// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV/JSON export and import, plus the backup document.

use crate::error::ImportError;
use crate::models::{Expense, Preferences, UserProfile};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Notes"];
pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub user: UserProfile,
    pub expenses: Vec<Expense>,
    pub export_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub user: UserProfile,
    pub preferences: Preferences,
    pub expenses: Vec<Expense>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    Records(Vec<Expense>),
    Backup(BackupDocument),
    Export(ExportDocument),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    pub fn parse(s: &str) -> Result<Self, ImportError> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(ImportError::Format(other.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::parse(ext)
    }
}

pub fn write_csv<W: Write>(w: W, records: &[Expense]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(w);
    wtr.write_record(CSV_HEADER)?;
    for e in records {
        wtr.write_record([
            e.date.to_string(),
            e.category.clone(),
            format!("{:.2}", e.amount),
            e.notes.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_csv(path: &Path, records: &[Expense]) -> Result<()> {
    let f = fs::File::create(path).with_context(|| format!("Create {}", path.display()))?;
    write_csv(f, records)?;
    tracing::info!(path = %path.display(), count = records.len(), "exported CSV");
    Ok(())
}

pub fn export_json(
    path: &Path,
    user: &UserProfile,
    records: &[Expense],
    now: DateTime<Utc>,
) -> Result<()> {
    let doc = ExportDocument {
        user: user.clone(),
        expenses: records.to_vec(),
        export_date: now,
    };
    fs::write(path, serde_json::to_string_pretty(&doc)?)
        .with_context(|| format!("Write {}", path.display()))?;
    tracing::info!(path = %path.display(), count = records.len(), "exported JSON");
    Ok(())
}

pub fn write_backup(
    path: &Path,
    user: &UserProfile,
    preferences: Preferences,
    records: &[Expense],
    now: DateTime<Utc>,
) -> Result<()> {
    let doc = BackupDocument {
        version: BACKUP_VERSION,
        created_at: now,
        user: user.clone(),
        preferences,
        expenses: records.to_vec(),
    };
    fs::write(path, serde_json::to_string_pretty(&doc)?)
        .with_context(|| format!("Write backup {}", path.display()))?;
    tracing::info!(path = %path.display(), count = records.len(), "backup written");
    Ok(())
}

fn row_err(row: usize, message: impl Into<String>) -> ImportError {
    ImportError::Row {
        row,
        message: message.into(),
    }
}

/// Parses a CSV with the export header. Records are numbered from 1 in file
/// order.
pub fn read_csv<R: Read>(r: R) -> Result<Vec<Expense>, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(r);

    let header = rdr.headers()?.clone();
    let matches = header.len() >= 3
        && header
            .iter()
            .zip(CSV_HEADER.iter())
            .all(|(h, want)| h.eq_ignore_ascii_case(want));
    if !matches {
        return Err(ImportError::Header(header.iter().collect::<Vec<_>>().join(",")));
    }

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let rec = result?;
        let date_raw = rec.get(0).unwrap_or_default();
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| row_err(row, format!("invalid date '{}'", date_raw)))?;
        let category = rec.get(1).unwrap_or_default().to_string();
        if category.is_empty() {
            return Err(row_err(row, "category missing"));
        }
        let amount_raw = rec.get(2).unwrap_or_default();
        let amount = amount_raw
            .parse::<Decimal>()
            .map_err(|_| row_err(row, format!("invalid amount '{}'", amount_raw)))?;
        if amount < Decimal::ZERO {
            return Err(row_err(row, format!("negative amount '{}'", amount_raw)));
        }
        let notes = rec
            .get(3)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        out.push(Expense {
            id: row as i64,
            date,
            category,
            amount,
            notes,
        });
    }
    Ok(out)
}

fn check_records(records: &[Expense]) -> Result<(), ImportError> {
    let mut seen = HashSet::new();
    for (i, e) in records.iter().enumerate() {
        if !seen.insert(e.id) {
            return Err(row_err(i + 1, format!("duplicate id {}", e.id)));
        }
        if e.amount < Decimal::ZERO {
            return Err(row_err(i + 1, format!("negative amount {}", e.amount)));
        }
        if e.category.trim().is_empty() {
            return Err(row_err(i + 1, "category missing"));
        }
    }
    Ok(())
}

/// Accepts a bare record array, an export document or a backup document.
pub fn read_json(raw: &str) -> Result<Vec<Expense>, ImportError> {
    let records = match serde_json::from_str::<JsonPayload>(raw) {
        Ok(JsonPayload::Records(r)) => r,
        Ok(JsonPayload::Backup(b)) => b.expenses,
        Ok(JsonPayload::Export(e)) => e.expenses,
        Err(_) => {
            // Re-parse as a plain record list for a positioned error message.
            serde_json::from_str::<Vec<Expense>>(raw)?
        }
    };
    check_records(&records)?;
    Ok(records)
}

pub fn import_file(path: &Path) -> Result<Vec<Expense>, ImportError> {
    match Format::from_path(path)? {
        Format::Csv => read_csv(fs::File::open(path)?),
        Format::Json => read_json(&fs::read_to_string(path)?),
    }
}

pub fn read_backup(path: &Path) -> Result<BackupDocument, ImportError> {
    let raw = fs::read_to_string(path)?;
    let doc: BackupDocument = serde_json::from_str(&raw)?;
    if doc.version != BACKUP_VERSION {
        return Err(ImportError::Version(doc.version));
    }
    check_records(&doc.expenses)?;
    Ok(doc)
}
