// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::project_dirs;
use crate::exchange;
use crate::models::{Expense, UserProfile};
use crate::sample;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const PROFILE_FILE: &str = "profile.json";

pub fn default_profile_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(PROFILE_FILE))
}

/// Loads the user profile from `path`, or from the default location when it
/// exists, otherwise returns the built-in demo profile. An explicitly named
/// file must exist.
pub fn load_profile(path: Option<&Path>) -> Result<UserProfile> {
    let resolved = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_profile_path()
            .ok()
            .filter(|p| p.exists()),
    };
    let Some(p) = resolved else {
        tracing::debug!("no profile file, using built-in profile");
        return Ok(sample::sample_profile());
    };
    let raw =
        fs::read_to_string(&p).with_context(|| format!("Read profile {}", p.display()))?;
    let profile: UserProfile = serde_json::from_str(&raw)
        .with_context(|| format!("Parse profile {}", p.display()))?;
    tracing::debug!(path = %p.display(), "profile loaded");
    Ok(profile)
}

/// Records from a CSV/JSON data file, or the built-in demo history.
pub fn load_records(path: Option<&Path>) -> Result<Vec<Expense>> {
    match path {
        Some(p) => {
            let records = exchange::import_file(p)
                .with_context(|| format!("Load records from {}", p.display()))?;
            tracing::debug!(path = %p.display(), count = records.len(), "records loaded");
            Ok(records)
        }
        None => Ok(sample::sample_expenses()),
    }
}
