// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::aggregate::MONTH_NAMES;
use crate::dashboard::{DashboardSummary, summarize};
use crate::models::DashboardView;
use crate::utils::{fmt_money_as, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let summary = build(session, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        return Ok(());
    }
    let view = session.preferences().view();
    print_summary(session, &summary, view);
    Ok(())
}

pub fn build(session: &Session, sub: &clap::ArgMatches) -> Result<DashboardSummary> {
    let today = match sub.get_one::<String>("today") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    summarize(&session.records, &session.profile, today)
}

fn print_summary(session: &Session, s: &DashboardSummary, view: DashboardView) {
    let p = &session.profile;
    let money = |d: &rust_decimal::Decimal| fmt_money_as(d, p.currency, p.number_format);
    let month_name = MONTH_NAMES[s.month as usize - 1];

    let mut cards = vec![
        vec![
            format!("Spent in {} {}", month_name, s.year),
            money(&s.total_this_month),
        ],
        vec!["Remaining budget".into(), money(&s.remaining_budget)],
        vec![
            "Budget used".into(),
            format!(
                "{}%{}",
                s.budget_percentage.round_dp(1),
                if s.over_alert_threshold { " (!)" } else { "" }
            ),
        ],
        vec![
            "Top category".into(),
            s.top_category
                .as_ref()
                .map(|c| format!("{} ({})", c.category, money(&c.amount)))
                .unwrap_or_else(|| "-".into()),
        ],
    ];
    if view == DashboardView::Detailed {
        cards.push(vec!["Average daily".into(), money(&s.average_daily)]);
        cards.push(vec!["Projected month".into(), money(&s.projected_monthly)]);
    }
    println!("{}", pretty_table(&["Card", "Value"], cards));

    if view == DashboardView::Compact {
        return;
    }

    if s.breakdown.is_empty() {
        println!("No data to display");
    } else {
        let rows = s
            .breakdown
            .categories
            .iter()
            .map(|c| {
                let pct = c.amount / s.breakdown.total * rust_decimal::Decimal::from(100);
                let budget = p
                    .category(&c.category)
                    .and_then(|cfg| cfg.budget)
                    .map(|b| money(&b))
                    .unwrap_or_else(|| "-".into());
                vec![
                    c.category.clone(),
                    money(&c.amount),
                    format!("{:.1}%", pct),
                    budget,
                    c.color.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Share", "Budget", "Color"], rows)
        );
    }

    let recent = s
        .recent
        .iter()
        .map(|e| {
            vec![
                p.date_format.format(e.date),
                e.category.clone(),
                money(&e.amount),
                e.notes.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Category", "Amount", "Notes"], recent)
    );
}
