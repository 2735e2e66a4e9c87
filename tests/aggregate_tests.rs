// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendboard::aggregate::{
    ColorResolver, DEFAULT_COLOR, Window, YearFilter, aggregate_by_category, available_years,
    monthly_totals, summarize_year, window_total,
};
use spendboard::models::{CategorySettings, Expense};
use spendboard::sample::{sample_expenses, sample_profile};
use std::collections::BTreeMap;

fn exp(id: i64, date: &str, category: &str, amount: i64) -> Expense {
    Expense {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category: category.to_string(),
        amount: Decimal::from(amount),
        notes: None,
    }
}

fn scenario() -> Vec<Expense> {
    vec![
        exp(1, "2025-01-10", "Food", 100),
        exp(2, "2025-02-03", "Food", 50),
        exp(3, "2025-01-20", "Transport", 30),
    ]
}

#[test]
fn category_totals_for_year_window() {
    let records = scenario();
    let b = aggregate_by_category(&records, &Window::year(2025), &ColorResolver::builtin());
    assert_eq!(b.total, Decimal::from(180));
    let map = b.by_category();
    assert_eq!(map.len(), 2);
    assert_eq!(map["Food"], Decimal::from(150));
    assert_eq!(map["Transport"], Decimal::from(30));
    assert_eq!(b.categories[0].category, "Food");
    assert_eq!(b.top().unwrap().category, "Food");
}

#[test]
fn category_sum_matches_window_total_on_sample_data() {
    let records = sample_expenses();
    for window in [
        Window::all(),
        Window::year(2024),
        Window::month(2025, 12),
        Window::month(2023, 2),
    ] {
        let b = aggregate_by_category(&records, &window, &ColorResolver::builtin());
        let sum: Decimal = b.categories.iter().map(|c| c.amount).sum();
        assert_eq!(sum, b.total);
        assert_eq!(b.total, window_total(&records, &window));
        assert!(!b.is_empty());
    }
}

#[test]
fn ties_keep_first_encounter_order() {
    let records = vec![
        exp(1, "2025-03-01", "Bills", 40),
        exp(2, "2025-03-02", "Food", 90),
        exp(3, "2025-03-03", "Transport", 40),
        exp(4, "2025-03-04", "Gifts", 40),
    ];
    let b = aggregate_by_category(&records, &Window::all(), &ColorResolver::builtin());
    let order: Vec<&str> = b.categories.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(order, ["Food", "Bills", "Transport", "Gifts"]);
}

#[test]
fn month_filter_without_year_matches_every_year() {
    let records = vec![
        exp(1, "2024-01-10", "Food", 10),
        exp(2, "2025-01-10", "Food", 20),
        exp(3, "2025-02-10", "Food", 40),
    ];
    let w = Window {
        year: YearFilter::All,
        month: Some(1),
    };
    assert_eq!(window_total(&records, &w), Decimal::from(30));
}

#[test]
fn empty_window_yields_no_categories() {
    let b = aggregate_by_category(&scenario(), &Window::year(1999), &ColorResolver::builtin());
    assert_eq!(b.total, Decimal::ZERO);
    assert!(b.categories.is_empty());
    assert!(b.is_empty());
}

#[test]
fn color_resolution_order() {
    let mut settings = BTreeMap::new();
    settings.insert(
        "Food".to_string(),
        CategorySettings {
            name: "Food".into(),
            enabled: true,
            budget: None,
            color: "#123456".into(),
            is_custom: false,
        },
    );
    settings.insert(
        "Bills".to_string(),
        CategorySettings {
            name: "Bills".into(),
            enabled: true,
            budget: None,
            color: "teal".into(),
            is_custom: false,
        },
    );
    let r = ColorResolver::new(&settings);
    assert_eq!(r.resolve("Food"), "#123456");
    // invalid configured color falls through to the palette
    assert_eq!(r.resolve("Bills"), "#64C2A6");
    assert_eq!(r.resolve("Transport"), "#2D87BB");
    assert_eq!(r.resolve("Pets"), DEFAULT_COLOR);

    let profile = sample_profile();
    let r = ColorResolver::new(&profile.category_settings);
    assert_eq!(r.resolve("Entertainment"), "#FEAE65");
}

#[test]
fn monthly_totals_are_positional_and_zero_filled() {
    let months = monthly_totals(&scenario(), 2025);
    assert_eq!(months.len(), 12);
    assert_eq!(months[0].month, "Jan");
    assert_eq!(months[0].amount, Decimal::from(130));
    assert_eq!(months[1].amount, Decimal::from(50));
    for (i, m) in months.iter().enumerate() {
        assert_eq!(m.month_index, i);
        if i > 1 {
            assert_eq!(m.amount, Decimal::ZERO);
        }
    }
    assert_eq!(months[11].month, "Dec");
}

#[test]
fn empty_year_gives_twelve_zero_months() {
    let months = monthly_totals(&[], 2025);
    assert_eq!(months.len(), 12);
    assert!(months.iter().all(|m| m.amount.is_zero()));
    let summary = summarize_year(&months);
    assert!(!summary.has_data());
}

#[test]
fn monthly_sum_equals_year_total() {
    let records = sample_expenses();
    let months = monthly_totals(&records, 2024);
    let sum: Decimal = months.iter().map(|m| m.amount).sum();
    assert_eq!(sum, window_total(&records, &Window::year(2024)));
}

#[test]
fn year_summary_stats() {
    let months = monthly_totals(&scenario(), 2025);
    let s = summarize_year(&months);
    assert_eq!(s.total, Decimal::from(180));
    assert_eq!(s.average_monthly, Decimal::new(1500, 2));
    assert_eq!(s.highest.month, "Jan");
    // first zero month wins
    assert_eq!(s.lowest.month, "Mar");
}

#[test]
fn year_filter_parsing_and_available_years() {
    assert_eq!("all".parse::<YearFilter>().unwrap(), YearFilter::All);
    assert_eq!("2024".parse::<YearFilter>().unwrap(), YearFilter::Year(2024));
    assert!("20x4".parse::<YearFilter>().is_err());
    assert_eq!(available_years(&sample_expenses()), vec![2025, 2024, 2023]);
}
