// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use spendboard::commands::{Session, dashboard};
use spendboard::dashboard::summarize;
use spendboard::models::Expense;
use spendboard::sample::{sample_expenses, sample_profile};
use spendboard::{cli, db};

fn exp(id: i64, date: &str, category: &str, amount: i64) -> Expense {
    Expense {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category: category.to_string(),
        amount: Decimal::from(amount),
        notes: None,
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn summary_for_month_over_threshold() {
    let records = vec![
        exp(1, "2025-03-02", "Food", 10_000),
        exp(2, "2025-03-05", "Bills", 6_500),
        exp(3, "2025-02-27", "Food", 900),
    ];
    let profile = sample_profile();
    let s = summarize(&records, &profile, day("2025-03-10")).unwrap();
    assert_eq!(s.total_this_month, Decimal::from(16_500));
    assert_eq!(s.remaining_budget, Decimal::from(3_500));
    assert_eq!(s.budget_percentage, Decimal::new(825, 1));
    assert!(s.over_alert_threshold);
    assert_eq!(s.average_daily, Decimal::from(1_650));
    assert_eq!(s.projected_monthly, Decimal::from(51_150));
    assert_eq!(s.top_category.as_ref().unwrap().category, "Food");
    assert_eq!(s.top_category.as_ref().unwrap().color, "#F66D44");
    assert_eq!(s.recent.len(), 3);
    assert_eq!(s.recent[0].id, 2);
}

#[test]
fn remaining_budget_never_negative() {
    let records = vec![exp(1, "2025-03-02", "Food", 25_000)];
    let s = summarize(&records, &sample_profile(), day("2025-03-31")).unwrap();
    assert_eq!(s.remaining_budget, Decimal::ZERO);
    assert_eq!(s.budget_percentage, Decimal::from(125));
}

#[test]
fn quiet_month_has_empty_breakdown() {
    let s = summarize(&sample_expenses(), &sample_profile(), day("2030-06-15")).unwrap();
    assert_eq!(s.total_this_month, Decimal::ZERO);
    assert!(s.breakdown.is_empty());
    assert!(s.top_category.is_none());
    assert!(!s.over_alert_threshold);
    assert_eq!(s.recent.len(), 5);
}

#[test]
fn dashboard_command_uses_reference_date() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let session = Session::new(conn, sample_expenses(), sample_profile());
    let matches = cli::build_cli().get_matches_from([
        "spendboard",
        "dashboard",
        "--today",
        "2025-12-31",
    ]);
    if let Some(("dashboard", sub)) = matches.subcommand() {
        let s = dashboard::build(&session, sub).unwrap();
        assert_eq!((s.year, s.month), (2025, 12));
        // December 2025 in the sample history
        assert_eq!(s.total_this_month, Decimal::from(11_180));
        assert_eq!(s.recent[0].date, day("2025-12-30"));
        dashboard::handle(&session, sub).unwrap();
    } else {
        panic!("no dashboard subcommand");
    }
}

#[test]
fn profile_category_lookup_feeds_budget_column() {
    let profile = sample_profile();
    let food = profile.category("Food").unwrap();
    assert_eq!(food.budget, Some(Decimal::from(8_000)));
    assert!(food.enabled);
    assert!(profile.category("Groceries").is_none());

    let s = summarize(&sample_expenses(), &profile, day("2025-12-31")).unwrap();
    let budgets: Vec<Option<Decimal>> = s
        .breakdown
        .categories
        .iter()
        .map(|c| profile.category(&c.category).and_then(|cfg| cfg.budget))
        .collect();
    assert!(budgets.iter().all(|b| b.is_some()));
}
