// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// Fields a caller supplies when creating or editing an expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySettings {
    pub name: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
    pub color: String,
    #[serde(default)]
    pub is_custom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(anyhow::anyhow!(
                "Invalid theme '{}', expected light|dark|system",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Compact,
    #[default]
    Detailed,
}

impl DashboardView {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardView::Compact => "compact",
            DashboardView::Detailed => "detailed",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardView {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "compact" => Ok(DashboardView::Compact),
            "detailed" => Ok(DashboardView::Detailed),
            other => Err(anyhow::anyhow!(
                "Invalid dashboard view '{}', expected compact|detailed",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub dashboard_view: DashboardView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

impl DateFormat {
    pub fn format(&self, d: NaiveDate) -> String {
        match self {
            DateFormat::MonthDayYear => d.format("%m/%d/%Y").to_string(),
            DateFormat::DayMonthYear => d.format("%d/%m/%Y").to_string(),
            DateFormat::Iso => d.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "PHP")]
    Php,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Php => "₱",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    #[default]
    Standard,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    #[default]
    ThisMonth,
    LastMonth,
    #[serde(rename = "last30Days")]
    Last30Days,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    pub email_enabled: bool,
    pub budget_warnings: bool,
    pub weekly_summary: bool,
    pub monthly_summary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreferences {
    pub theme: Theme,
    pub default_date_range: DateRange,
    pub dashboard_view: DashboardView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub monthly_budget: Decimal,
    #[serde(default)]
    pub date_format: DateFormat,
    pub budget_reset_day: u32,
    /// Percentage of the monthly budget (0-100) at which spending is flagged.
    pub budget_alert_threshold: u32,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub number_format: NumberFormat,
    #[serde(default)]
    pub category_settings: BTreeMap<String, CategorySettings>,
    pub notifications: Notifications,
    pub display_preferences: DisplayPreferences,
}

impl UserProfile {
    pub fn category(&self, name: &str) -> Option<&CategorySettings> {
        self.category_settings.get(name)
    }
}
