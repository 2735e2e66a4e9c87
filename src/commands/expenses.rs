// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::aggregate::{Window, YearFilter};
use crate::listing::{ExpenseQuery, Page, SortDirection, SortKey, query};
use crate::models::{Expense, ExpenseDraft};
use crate::repository::{ExpenseRepository, InMemoryRepository};
use crate::utils::{
    fmt_money_as, maybe_print_json, parse_date, parse_decimal, parse_month_filter, pretty_table,
};
use anyhow::{Context, Result};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        Some((_, _)) => {
            let (repo, message) = apply(session.records.clone(), m)?;
            println!("{}", message);
            tracing::debug!(count = repo.list().len(), "records after change (not persisted)");
        }
        _ => {}
    }
    Ok(())
}

pub fn window_from(sub: &clap::ArgMatches) -> Result<Window> {
    let year = sub
        .get_one::<String>("year")
        .map(|s| s.parse::<YearFilter>())
        .transpose()?
        .unwrap_or_default();
    let month = match sub.get_one::<String>("month") {
        Some(s) => parse_month_filter(s)?,
        None => None,
    };
    Ok(Window { year, month })
}

pub fn query_from(sub: &clap::ArgMatches) -> Result<ExpenseQuery> {
    let sort = sub
        .get_one::<String>("sort")
        .map(|s| s.parse::<SortKey>())
        .transpose()?
        .unwrap_or_default();
    let direction = sub
        .get_one::<String>("dir")
        .map(|s| s.parse::<SortDirection>())
        .transpose()?
        .unwrap_or_default();
    Ok(ExpenseQuery {
        window: window_from(sub)?,
        sort,
        direction,
        page: *sub.get_one::<usize>("page").unwrap_or(&1),
        per_page: *sub.get_one::<usize>("per-page").unwrap_or(&10),
    })
}

pub fn list_page(session: &Session, sub: &clap::ArgMatches) -> Result<Page<Expense>> {
    let q = query_from(sub)?;
    Ok(query(&session.records, &q))
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let page = list_page(session, sub)?;
    if maybe_print_json(sub.get_flag("json"), false, &page)? {
        return Ok(());
    }
    if maybe_print_json(false, sub.get_flag("jsonl"), &page.items)? {
        return Ok(());
    }
    let p = &session.profile;
    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                p.date_format.format(e.date),
                e.category.clone(),
                fmt_money_as(&e.amount, p.currency, p.number_format),
                e.notes.clone().unwrap_or_default(),
            ]
        })
        .collect();
    if rows.is_empty() {
        println!("No expenses match the selected filters");
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Category", "Amount", "Notes"], rows)
    );
    println!(
        "Showing {}-{} of {} (page {}/{})",
        page.start, page.end, page.total_items, page.page, page.total_pages
    );
    Ok(())
}

fn draft_from(sub: &clap::ArgMatches) -> Result<ExpenseDraft> {
    let date = parse_date(sub.get_one::<String>("date").context("date missing")?)?;
    let category = sub
        .get_one::<String>("category")
        .context("category missing")?
        .trim()
        .to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").context("amount missing")?)?;
    let notes = sub.get_one::<String>("notes").map(|s| s.to_string());
    Ok(ExpenseDraft {
        date,
        category,
        amount,
        notes,
    })
}

/// Runs `add`, `edit` or `rm` against an in-memory copy of `records`.
pub fn apply(
    records: Vec<Expense>,
    m: &clap::ArgMatches,
) -> Result<(InMemoryRepository, String)> {
    let mut repo = InMemoryRepository::new(records);
    let message = match m.subcommand() {
        Some(("add", sub)) => {
            let e = repo.create(draft_from(sub)?)?;
            format!("Recorded {} on {} in '{}' (id {})", e.amount, e.date, e.category, e.id)
        }
        Some(("edit", sub)) => {
            let id = *sub.get_one::<i64>("id").context("id missing")?;
            let e = repo.update(id, draft_from(sub)?)?;
            format!("Updated expense {}: {} on {} in '{}'", id, e.amount, e.date, e.category)
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").context("id missing")?;
            let e = repo.delete(id)?;
            format!("Removed expense {} ({} in '{}')", e.id, e.amount, e.category)
        }
        Some((other, _)) => return Err(anyhow::anyhow!("Unknown expenses command '{}'", other)),
        None => return Err(anyhow::anyhow!("No expenses command given")),
    };
    Ok((repo, message))
}
