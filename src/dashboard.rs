// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{
    CategoryAggregate, CategoryBreakdown, ColorResolver, Window, aggregate_by_category,
};
use crate::listing::recent;
use crate::models::{Expense, UserProfile};
use crate::utils::days_in_month;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

pub const RECENT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub year: i32,
    pub month: u32,
    pub total_this_month: Decimal,
    pub monthly_budget: Decimal,
    pub remaining_budget: Decimal,
    /// Spent share of the budget in percent, 0 when no budget is set.
    pub budget_percentage: Decimal,
    pub over_alert_threshold: bool,
    pub average_daily: Decimal,
    pub projected_monthly: Decimal,
    pub top_category: Option<CategoryAggregate>,
    pub breakdown: CategoryBreakdown,
    pub recent: Vec<Expense>,
}

pub fn summarize(
    records: &[Expense],
    profile: &UserProfile,
    today: NaiveDate,
) -> Result<DashboardSummary> {
    let (year, month) = (today.year(), today.month());
    let colors = ColorResolver::new(&profile.category_settings);
    let breakdown = aggregate_by_category(records, &Window::month(year, month), &colors);
    let total = breakdown.total;
    let budget = profile.monthly_budget;

    let remaining_budget = (budget - total).max(Decimal::ZERO);
    let budget_percentage = if budget.is_zero() {
        Decimal::ZERO
    } else {
        (total / budget * Decimal::from(100)).round_dp(2)
    };
    let over_alert_threshold = !budget.is_zero()
        && budget_percentage >= Decimal::from(profile.budget_alert_threshold);

    let day = Decimal::from(today.day());
    let average_daily = total / day;
    let days = Decimal::from(days_in_month(year, month)?);
    let projected_monthly = (average_daily * days).round_dp(2);

    if over_alert_threshold {
        tracing::warn!(
            spent = %total,
            budget = %budget,
            threshold = profile.budget_alert_threshold,
            "monthly spending passed the alert threshold"
        );
    }

    Ok(DashboardSummary {
        year,
        month,
        total_this_month: total,
        monthly_budget: budget,
        remaining_budget,
        budget_percentage,
        over_alert_threshold,
        average_daily: average_daily.round_dp(2),
        projected_monthly,
        top_category: breakdown.top().cloned(),
        recent: recent(records, RECENT_COUNT),
        breakdown,
    })
}
