// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use super::expenses::window_from;
use crate::aggregate::{
    CategoryBreakdown, ColorResolver, MonthlyAggregate, aggregate_by_category, available_years,
    monthly_totals, summarize_year,
};
use crate::utils::{fmt_money_as, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(session, sub)?,
        Some(("monthly", sub)) => monthly(session, sub)?,
        Some(("years", sub)) => years(session, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn category_breakdown(session: &Session, sub: &clap::ArgMatches) -> Result<CategoryBreakdown> {
    let window = window_from(sub)?;
    let colors = ColorResolver::new(&session.profile.category_settings);
    Ok(aggregate_by_category(&session.records, &window, &colors))
}

fn categories(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let breakdown = category_breakdown(session, sub)?;
    if maybe_print_json(sub.get_flag("json"), false, &breakdown)? {
        return Ok(());
    }
    if maybe_print_json(false, sub.get_flag("jsonl"), &breakdown.categories)? {
        return Ok(());
    }
    if breakdown.is_empty() {
        println!("No data to display");
        return Ok(());
    }
    let p = &session.profile;
    let mut data = Vec::new();
    for c in &breakdown.categories {
        let share = c.amount / breakdown.total * rust_decimal::Decimal::from(100);
        data.push(vec![
            c.category.clone(),
            fmt_money_as(&c.amount, p.currency, p.number_format),
            format!("{:.1}%", share),
            c.color.clone(),
        ]);
    }
    data.push(vec![
        "Total".into(),
        fmt_money_as(&breakdown.total, p.currency, p.number_format),
        "100.0%".into(),
        String::new(),
    ]);
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share", "Color"], data)
    );
    Ok(())
}

pub fn monthly_rows(session: &Session, sub: &clap::ArgMatches) -> Result<[MonthlyAggregate; 12]> {
    let year = *sub.get_one::<i32>("year").context("year missing")?;
    Ok(monthly_totals(&session.records, year))
}

fn monthly(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let months = monthly_rows(session, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &months)? {
        return Ok(());
    }
    let summary = summarize_year(&months);
    if !summary.has_data() {
        println!("No expense data available");
        return Ok(());
    }
    let p = &session.profile;
    let money = |d: &rust_decimal::Decimal| fmt_money_as(d, p.currency, p.number_format);
    let data = months
        .iter()
        .map(|m| vec![m.month.to_string(), money(&m.amount)])
        .collect();
    println!("{}", pretty_table(&["Month", "Spent"], data));
    println!(
        "{}",
        pretty_table(
            &["Total", "Monthly avg", "Highest", "Lowest"],
            vec![vec![
                money(&summary.total),
                money(&summary.average_monthly),
                format!("{} {}", summary.highest.month, money(&summary.highest.amount)),
                format!("{} {}", summary.lowest.month, money(&summary.lowest.amount)),
            ]],
        )
    );
    Ok(())
}

fn years(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let ys = available_years(&session.records);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &ys)? {
        let data = ys.iter().map(|y| vec![y.to_string()]).collect();
        println!("{}", pretty_table(&["Year"], data));
    }
    Ok(())
}
