// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Domain error types. Command code wraps these in `anyhow` with context.

use thiserror::Error;

/// Failure while reading an import or backup file. An import either yields
/// every record or fails as a whole.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected CSV header '{0}', expected Date,Category,Amount,Notes")]
    Header(String),

    #[error("Row {row}: {message}")]
    Row { row: usize, message: String },

    #[error("Unsupported import format: {0}")]
    Format(String),

    #[error("Unsupported backup version {0}")]
    Version(u32),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Expense {0} not found")]
    NotFound(i64),

    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(String),

    #[error("Category is required")]
    MissingCategory,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
