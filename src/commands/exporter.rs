// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::exchange::{self, Format};
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = Format::parse(sub.get_one::<String>("format").context("format missing")?)?;
    let out = sub.get_one::<String>("out").context("out missing")?;
    let path = Path::new(out.trim());

    match fmt {
        Format::Csv => exchange::export_csv(path, &session.records)?,
        Format::Json => {
            exchange::export_json(path, &session.profile, &session.records, chrono::Utc::now())?
        }
    }
    println!("Exported {} expenses to {}", session.records.len(), path.display());
    Ok(())
}

pub fn backup(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").context("out missing")?;
    let path = Path::new(out.trim());
    let prefs = session.preferences().preferences();
    exchange::write_backup(
        path,
        &session.profile,
        prefs,
        &session.records,
        chrono::Utc::now(),
    )?;
    println!("Backup written to {}", path.display());
    Ok(())
}
