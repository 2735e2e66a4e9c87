// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::Window;
use crate::models::Expense;
use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

pub const ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Category,
    Amount,
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "category" => Ok(SortKey::Category),
            "amount" => Ok(SortKey::Amount),
            other => Err(anyhow::anyhow!(
                "Unknown sort key '{}', expected date|category|amount",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(anyhow::anyhow!(
                "Unknown sort direction '{}', expected asc|desc",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpenseQuery {
    pub window: Window,
    pub sort: SortKey,
    pub direction: SortDirection,
    /// 1-based.
    pub page: usize,
    pub per_page: usize,
}

impl Default for ExpenseQuery {
    fn default() -> Self {
        Self {
            window: Window::all(),
            sort: SortKey::Date,
            direction: SortDirection::Desc,
            page: 1,
            per_page: ROWS_PER_PAGE,
        }
    }
}

impl ExpenseQuery {
    /// Clicking a column header: same key flips direction, a new key starts
    /// ascending. Either way the listing returns to page 1.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if key == self.sort {
            self.direction = self.direction.toggled();
        } else {
            self.sort = key;
            self.direction = SortDirection::Asc;
        }
        self.page = 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first item shown, 0 when empty.
    pub start: usize,
    /// 1-based index of the last item shown.
    pub end: usize,
}

fn compare(a: &Expense, b: &Expense, key: SortKey) -> Ordering {
    match key {
        SortKey::Amount => a.amount.cmp(&b.amount),
        SortKey::Date => a.date.cmp(&b.date),
        // case-insensitive, byte order breaks ties
        SortKey::Category => a
            .category
            .to_lowercase()
            .cmp(&b.category.to_lowercase())
            .then_with(|| a.category.cmp(&b.category)),
    }
}

/// Filtered and sorted records, without pagination.
pub fn filter_sorted(records: &[Expense], q: &ExpenseQuery) -> Vec<Expense> {
    let mut rows: Vec<Expense> = records
        .iter()
        .filter(|e| q.window.contains(e))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        let ord = compare(a, b, q.sort);
        match q.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    rows
}

pub fn query(records: &[Expense], q: &ExpenseQuery) -> Page<Expense> {
    let rows = filter_sorted(records, q);
    let per_page = q.per_page.max(1);
    let total_items = rows.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = q.page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let items = rows[start.min(total_items)..end].to_vec();
    Page {
        page,
        total_pages,
        total_items,
        start: if items.is_empty() { 0 } else { start + 1 },
        end,
        items,
    }
}

/// The `n` newest records across all months.
pub fn recent(records: &[Expense], n: usize) -> Vec<Expense> {
    let mut rows = records.to_vec();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows.truncate(n);
    rows
}
