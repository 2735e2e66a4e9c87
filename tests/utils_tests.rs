// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendboard::models::{Currency, NumberFormat};
use spendboard::utils::{
    days_in_month, fmt_money, fmt_money_as, fmt_money_compact, parse_month_filter,
};

#[test]
fn money_always_has_two_decimals() {
    assert_eq!(fmt_money(&Decimal::from(10_000), Currency::Php), "₱10,000.00");
    assert_eq!(fmt_money(&Decimal::new(12_345, 1), Currency::Php), "₱1,234.50");
    assert_eq!(fmt_money(&Decimal::new(1_234_567, 3), Currency::Usd), "$1,234.57");
    assert_eq!(fmt_money(&Decimal::new(999, 0), Currency::Eur), "€999.00");
    assert_eq!(fmt_money(&Decimal::ZERO, Currency::Php), "₱0.00");
    assert_eq!(fmt_money(&Decimal::new(-1, 3), Currency::Php), "₱0.00");
    assert_eq!(
        fmt_money(&Decimal::new(-2_500_075, 2), Currency::Php),
        "-₱25,000.75"
    );
}

#[test]
fn compact_money_abbreviates_thousands() {
    assert_eq!(fmt_money_compact(&Decimal::from(8_000), Currency::Php), "₱8.0K");
    assert_eq!(fmt_money_compact(&Decimal::from(500), Currency::Php), "₱500.00");
    assert_eq!(
        fmt_money_as(&Decimal::from(2_000), Currency::Php, NumberFormat::Compact),
        "₱2.0K"
    );
    assert_eq!(
        fmt_money_as(&Decimal::from(2_000), Currency::Php, NumberFormat::Standard),
        "₱2,000.00"
    );
}

#[test]
fn month_helpers() {
    assert_eq!(parse_month_filter("all").unwrap(), None);
    assert_eq!(parse_month_filter(" 3 ").unwrap(), Some(3));
    assert!(parse_month_filter("13").is_err());
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    assert_eq!(days_in_month(2025, 12).unwrap(), 31);
}
