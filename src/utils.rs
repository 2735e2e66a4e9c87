// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Currency, NumberFormat};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Month number 1-12, or `None` for "all".
pub fn parse_month_filter(s: &str) -> Result<Option<u32>> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    let m: u32 = s
        .parse()
        .with_context(|| format!("Invalid month '{}', expected 1-12 or 'all'", s))?;
    if !(1..=12).contains(&m) {
        return Err(anyhow::anyhow!("Invalid month number {}", m));
    }
    Ok(Some(m))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{}", year, month))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{}", year, month))?;
    Ok((next - first).num_days() as u32)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Currency string with thousands separators and exactly two decimals,
/// e.g. `₱1,234.50` or `₱10,000.00`.
pub fn fmt_money(d: &Decimal, ccy: Currency) -> String {
    let v = d.round_dp(2);
    let sign = if v.is_sign_negative() && !v.is_zero() {
        "-"
    } else {
        ""
    };
    let s = format!("{:.2}", v.abs());
    let (int, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    format!("{}{}{}.{}", sign, ccy.symbol(), group_thousands(int), frac)
}

/// Short form used on narrow displays, e.g. `₱8.0K`.
pub fn fmt_money_compact(d: &Decimal, ccy: Currency) -> String {
    if d.abs() >= Decimal::from(1000) {
        let k = (*d / Decimal::from(1000)).round_dp(1);
        format!("{}{:.1}K", ccy.symbol(), k)
    } else {
        fmt_money(d, ccy)
    }
}

pub fn fmt_money_as(d: &Decimal, ccy: Currency, fmt: NumberFormat) -> String {
    match fmt {
        NumberFormat::Standard => fmt_money(d, ccy),
        NumberFormat::Compact => fmt_money_compact(d, ccy),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
