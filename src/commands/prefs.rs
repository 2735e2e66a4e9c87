// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::models::{DashboardView, Theme};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            let prefs = session.preferences().preferences();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &prefs)? {
                println!(
                    "{}",
                    pretty_table(
                        &["Preference", "Value"],
                        vec![
                            vec!["theme".into(), prefs.theme.to_string()],
                            vec!["dashboardView".into(), prefs.dashboard_view.to_string()],
                        ],
                    )
                );
            }
        }
        Some(("set-theme", sub)) => {
            let theme: Theme = sub
                .get_one::<String>("theme")
                .context("theme missing")?
                .parse()?;
            session
                .preferences()
                .set_theme(theme)
                .context("Save theme preference")?;
            println!("Theme set to {}", theme);
        }
        Some(("set-view", sub)) => {
            let view: DashboardView = sub
                .get_one::<String>("view")
                .context("view missing")?
                .parse()?;
            session
                .preferences()
                .set_view(view)
                .context("Save dashboard view preference")?;
            println!("Dashboard view set to {}", view);
        }
        _ => {}
    }
    Ok(())
}
