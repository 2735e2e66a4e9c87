// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use super::reports::{category_breakdown, monthly_rows};
use crate::aggregate::summarize_year;
use crate::charts::line::{LineLayout, build_from_monthly};
use crate::charts::pie::{PIE_SIZE, build_from_breakdown};
use crate::charts::svg::{LineStyle, render_empty, render_line, render_pie};
use anyhow::{Context, Result};
use std::fs;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let (sub, svg) = match m.subcommand() {
        Some(("pie", sub)) => (sub, pie_svg(session, sub)?),
        Some(("line", sub)) => (sub, line_svg(session, sub)?),
        _ => return Ok(()),
    };
    let out = sub.get_one::<String>("out").context("out missing")?;
    fs::write(out, svg).with_context(|| format!("Write chart {}", out))?;
    println!("Chart written to {}", out);
    Ok(())
}

pub fn pie_svg(session: &Session, sub: &clap::ArgMatches) -> Result<String> {
    let breakdown = category_breakdown(session, sub)?;
    let highlight = sub.get_one::<String>("highlight").map(|s| s.as_str());
    Ok(match build_from_breakdown(&breakdown) {
        Some(g) => render_pie(&g, highlight),
        None => {
            tracing::info!("no category data for the selected window");
            render_empty(PIE_SIZE, PIE_SIZE)
        }
    })
}

pub fn line_svg(session: &Session, sub: &clap::ArgMatches) -> Result<String> {
    let months = monthly_rows(session, sub)?;
    let width = *sub.get_one::<f64>("width").unwrap_or(&800.0);
    let height = *sub.get_one::<f64>("height").unwrap_or(&300.0);
    let progress = *sub.get_one::<f64>("progress").unwrap_or(&1.0);
    let layout = LineLayout::new(width, height, sub.get_flag("compact"));
    let style = LineStyle {
        show_area: !sub.get_flag("no-area"),
        show_grid: !sub.get_flag("no-grid"),
        currency: session.profile.currency,
    };
    if !summarize_year(&months).has_data() {
        tracing::info!("no monthly data for the selected year");
        return Ok(render_empty(layout.width, layout.height));
    }
    let geometry = build_from_monthly(&months, layout);
    Ok(render_line(&geometry, &style, progress))
}
