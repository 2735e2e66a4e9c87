// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategorySettings, Expense};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Built-in colors for the stock categories.
pub const BUILTIN_PALETTE: [(&str, &str); 4] = [
    ("Food", "#F66D44"),
    ("Transport", "#2D87BB"),
    ("Bills", "#64C2A6"),
    ("Entertainment", "#FEAE65"),
];

pub const DEFAULT_COLOR: &str = "#F66D44";

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("static regex"));

pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl FromStr for YearFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(YearFilter::All);
        }
        let y: i32 = s
            .parse()
            .with_context(|| format!("Invalid year '{}', expected YYYY or 'all'", s))?;
        Ok(YearFilter::Year(y))
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str("all"),
            YearFilter::Year(y) => write!(f, "{}", y),
        }
    }
}

/// Year (or all years) plus an optional 1-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Window {
    pub year: YearFilter,
    pub month: Option<u32>,
}

impl Window {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn year(year: i32) -> Self {
        Self {
            year: YearFilter::Year(year),
            month: None,
        }
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year: YearFilter::Year(year),
            month: Some(month),
        }
    }

    pub fn contains(&self, e: &Expense) -> bool {
        let year_ok = match self.year {
            YearFilter::All => true,
            YearFilter::Year(y) => e.year() == y,
        };
        year_ok && self.month.is_none_or(|m| e.month() == m)
    }
}

/// Resolves the display color of a category.
///
/// Resolution order:
/// 1. the color configured in the profile's category settings, when it is a
///    valid `#RRGGBB` value;
/// 2. the built-in palette entry for the category name;
/// 3. [`DEFAULT_COLOR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorResolver<'a> {
    settings: Option<&'a BTreeMap<String, CategorySettings>>,
}

impl<'a> ColorResolver<'a> {
    pub fn new(settings: &'a BTreeMap<String, CategorySettings>) -> Self {
        Self {
            settings: Some(settings),
        }
    }

    pub fn builtin() -> Self {
        Self { settings: None }
    }

    pub fn resolve(&self, category: &str) -> String {
        if let Some(cfg) = self.settings.and_then(|s| s.get(category)) {
            if is_hex_color(&cfg.color) {
                return cfg.color.clone();
            }
            tracing::debug!(category, color = %cfg.color, "ignoring invalid category color");
        }
        BUILTIN_PALETTE
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, c)| c.to_string())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub amount: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct CategoryBreakdown {
    pub total: Decimal,
    /// Sorted by amount descending; equal amounts keep first-encounter order.
    pub categories: Vec<CategoryAggregate>,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.total.is_zero()
    }

    pub fn by_category(&self) -> HashMap<String, Decimal> {
        self.categories
            .iter()
            .map(|c| (c.category.clone(), c.amount))
            .collect()
    }

    pub fn top(&self) -> Option<&CategoryAggregate> {
        self.categories.first()
    }
}

pub fn aggregate_by_category(
    records: &[Expense],
    window: &Window,
    colors: &ColorResolver<'_>,
) -> CategoryBreakdown {
    let mut order: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total = Decimal::ZERO;

    for e in records.iter().filter(|e| window.contains(e)) {
        total += e.amount;
        match index.get(e.category.as_str()) {
            Some(&i) => order[i].1 += e.amount,
            None => {
                index.insert(e.category.as_str(), order.len());
                order.push((e.category.clone(), e.amount));
            }
        }
    }

    let mut categories: Vec<CategoryAggregate> = order
        .into_iter()
        .map(|(category, amount)| CategoryAggregate {
            color: colors.resolve(&category),
            category,
            amount,
        })
        .collect();
    // sort_by is stable
    categories.sort_by(|a, b| b.amount.cmp(&a.amount));

    CategoryBreakdown { total, categories }
}

pub fn window_total(records: &[Expense], window: &Window) -> Decimal {
    records
        .iter()
        .filter(|e| window.contains(e))
        .map(|e| e.amount)
        .sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyAggregate {
    pub month_index: usize,
    pub month: &'static str,
    pub amount: Decimal,
}

/// Totals for every month of `year`, January first. Months without records
/// are present with a zero amount.
pub fn monthly_totals(records: &[Expense], year: i32) -> [MonthlyAggregate; 12] {
    let mut sums = [Decimal::ZERO; 12];
    for e in records.iter().filter(|e| e.year() == year) {
        sums[e.month() as usize - 1] += e.amount;
    }
    std::array::from_fn(|i| MonthlyAggregate {
        month_index: i,
        month: MONTH_LABELS[i],
        amount: sums[i],
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    pub total: Decimal,
    pub average_monthly: Decimal,
    pub highest: MonthlyAggregate,
    pub lowest: MonthlyAggregate,
}

impl YearSummary {
    pub fn has_data(&self) -> bool {
        !self.total.is_zero()
    }
}

pub fn summarize_year(months: &[MonthlyAggregate; 12]) -> YearSummary {
    let total: Decimal = months.iter().map(|m| m.amount).sum();
    let mut highest = &months[0];
    let mut lowest = &months[0];
    for m in &months[1..] {
        if m.amount > highest.amount {
            highest = m;
        }
        if m.amount < lowest.amount {
            lowest = m;
        }
    }
    YearSummary {
        total,
        average_monthly: (total / Decimal::from(12)).round_dp(2),
        highest: highest.clone(),
        lowest: lowest.clone(),
    }
}

/// Distinct years present in `records`, newest first.
pub fn available_years(records: &[Expense]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().map(|e| e.year()).collect();
    years.into_iter().rev().collect()
}
