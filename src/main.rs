// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::{Path, PathBuf};

use spendboard::commands::{self, Session};
use spendboard::{cli, config, db, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    logging::init(matches.get_flag("verbose"));

    let db_file = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p),
        None => db::db_path()?,
    };
    let conn = db::open_at(&db_file)?;
    let profile = config::load_profile(matches.get_one::<String>("profile").map(Path::new))?;
    let records = config::load_records(matches.get_one::<String>("data").map(Path::new))?;
    let session = Session::new(conn, records, profile);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db_file.display());
        }
        Some(("dashboard", sub)) => commands::dashboard::handle(&session, sub)?,
        Some(("expenses", sub)) => commands::expenses::handle(&session, sub)?,
        Some(("report", sub)) => commands::reports::handle(&session, sub)?,
        Some(("chart", sub)) => commands::charts::handle(&session, sub)?,
        Some(("prefs", sub)) => commands::prefs::handle(&session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        Some(("backup", sub)) => commands::exporter::backup(&session, sub)?,
        Some(("import", sub)) => commands::importer::handle(sub)?,
        Some(("restore", sub)) => {
            commands::importer::restore(&session, sub)?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
