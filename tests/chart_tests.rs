// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use spendboard::aggregate::{CategoryBreakdown, monthly_totals};
use spendboard::charts::fmt_coord;
use spendboard::charts::line::{CEILING, LineLayout, build_from_monthly, build_line};
use spendboard::charts::pie::{PieEntry, build_from_breakdown, build_pie};
use spendboard::charts::svg::{LineStyle, render_line, render_pie};
use spendboard::commands::{Session, charts};
use spendboard::sample::{sample_expenses, sample_profile};
use spendboard::{cli, db};
use tempfile::tempdir;

const EPS: f64 = 1e-9;

fn entry(label: &str, amount: i64) -> PieEntry {
    PieEntry {
        label: label.into(),
        amount: Decimal::from(amount),
        color: "#F66D44".into(),
    }
}

#[test]
fn pie_scenario_food_takes_three_hundred_degrees() {
    let g = build_pie(&[entry("Food", 150), entry("Transport", 30)], Decimal::from(180)).unwrap();
    assert_eq!(g.sectors.len(), 2);
    let food = &g.sectors[0];
    assert!((food.start_angle + 90.0).abs() < EPS);
    assert!((food.sweep() - 300.0).abs() < EPS);
    assert!(food.large_arc);
    assert!(food.path.contains(" 0 1 1 "));
    let transport = &g.sectors[1];
    assert!((transport.start_angle - food.end_angle).abs() < EPS);
    assert!((transport.end_angle - 270.0).abs() < EPS);
    assert!(!transport.large_arc);
    assert!(transport.path.contains(" 0 0 1 "));
    assert_eq!(food.label_percent(), "83.3%");
}

#[test]
fn pie_sweeps_sum_to_full_circle() {
    let entries: Vec<PieEntry> = [7, 13, 29, 1, 50]
        .iter()
        .enumerate()
        .map(|(i, a)| entry(&format!("c{}", i), *a))
        .collect();
    let g = build_pie(&entries, Decimal::from(100)).unwrap();
    let total: f64 = g.sectors.iter().map(|s| s.sweep()).sum();
    assert!((total - 360.0).abs() < 1e-6);
    for pair in g.sectors.windows(2) {
        assert!((pair[0].end_angle - pair[1].start_angle).abs() < EPS);
    }
}

#[test]
fn single_entry_spans_full_circle_and_renders() {
    let g = build_pie(&[entry("Food", 42)], Decimal::from(42)).unwrap();
    assert_eq!(g.sectors.len(), 1);
    let s = &g.sectors[0];
    assert!((s.sweep() - 360.0).abs() < EPS);
    assert_eq!(
        s.path,
        "M 80 80 L 80 8 A 72 72 0 1 1 80 152 A 72 72 0 1 1 80 8 Z"
    );
}

#[test]
fn pie_without_data_has_no_geometry() {
    assert!(build_pie(&[], Decimal::ZERO).is_none());
    assert!(build_pie(&[entry("Food", 0)], Decimal::ZERO).is_none());
    assert!(build_from_breakdown(&CategoryBreakdown::default()).is_none());
}

#[test]
fn explode_offset_follows_mid_angle() {
    let g = build_pie(&[entry("A", 1), entry("B", 1)], Decimal::from(2)).unwrap();
    // first half spans -90..90, mid angle 0 => pushed right
    let (dx, dy) = g.sectors[0].explode_offset(8.0);
    assert!((dx - 8.0).abs() < EPS);
    assert!(dy.abs() < EPS);
}

#[test]
fn pie_svg_contains_one_path_per_sector() {
    let g = build_pie(&[entry("Food", 3), entry("Fun & Games", 1)], Decimal::from(4)).unwrap();
    let svg = render_pie(&g, Some("Food"));
    assert_eq!(svg.matches("<path ").count(), 2);
    assert!(svg.contains("Fun &amp; Games"));
    assert!(svg.contains("stroke=\"#0f172a\""));
}

#[test]
fn line_maps_ceiling_to_top_and_zero_to_bottom() {
    let layout = LineLayout::default();
    assert_eq!(layout.plot_width(), 700.0);
    assert_eq!(layout.plot_height(), 220.0);
    let g = build_line(
        &[
            ("Jan", Decimal::from(10_000)),
            ("Feb", Decimal::ZERO),
            ("Mar", Decimal::from(5_000)),
            ("Apr", Decimal::from(25_000)),
        ],
        layout,
    );
    assert_eq!(g.points[0].y, 0.0);
    assert_eq!(g.points[1].y, 220.0);
    assert_eq!(g.points[2].y, 110.0);
    // above the ceiling clips to the top edge
    assert_eq!(g.points[3].y, 0.0);
    assert_eq!(g.points[0].x, 0.0);
    assert_eq!(g.points[3].x, 700.0);
    assert_eq!(g.y_for(CEILING), 0.0);
}

#[test]
fn twelve_months_are_evenly_spaced() {
    let months = monthly_totals(&sample_expenses(), 2025);
    let g = build_from_monthly(&months, LineLayout::default());
    assert_eq!(g.points.len(), 12);
    let step = 700.0 / 11.0;
    for (i, p) in g.points.iter().enumerate() {
        assert!((p.x - step * i as f64).abs() < EPS);
        assert!(p.y >= 0.0 && p.y <= 220.0);
    }
}

#[test]
fn partial_reveal_emits_path_prefix() {
    let months = monthly_totals(&[], 2025);
    let g = build_from_monthly(&months, LineLayout::default());
    assert_eq!(g.line_path(0.0), "");
    assert_eq!(g.area_path(0.0), "");
    assert_eq!(g.visible_count(0.5), 6);
    assert_eq!(g.visible_count(0.01), 1);
    assert_eq!(g.visible_count(7.0), 12);

    let half = g.line_path(0.5);
    assert!(half.starts_with("M 0 220"));
    assert_eq!(half.matches(" L ").count(), 5);
    let full = g.line_path(1.0);
    assert!(full.starts_with(&half));
    assert_eq!(full.matches(" L ").count(), 11);
}

#[test]
fn area_path_closes_to_baseline() {
    let months = monthly_totals(&[], 2025);
    let g = build_from_monthly(&months, LineLayout::default());
    let area = g.area_path(1.0);
    assert!(area.starts_with(&g.line_path(1.0)));
    assert!(area.ends_with(" L 700 220 L 0 220 Z"));

    let x5 = fmt_coord(700.0 / 11.0 * 5.0);
    assert!(g.area_path(0.5).ends_with(&format!(" L {} 220 L 0 220 Z", x5)));
}

#[test]
fn gridlines_every_two_thousand() {
    let g = build_line(&[("Jan", Decimal::ZERO)], LineLayout::default());
    let lines = g.gridlines();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0].value, 0.0);
    assert_eq!(lines[0].y, 220.0);
    assert_eq!(lines[5].value, 10_000.0);
    assert_eq!(lines[5].y, 0.0);
}

#[test]
fn layout_width_is_clamped() {
    assert_eq!(LineLayout::new(100.0, 300.0, false).width, 320.0);
    assert_eq!(LineLayout::new(4000.0, 300.0, false).width, 960.0);
    let compact = LineLayout::new(320.0, 300.0, true);
    assert_eq!(compact.plot_width(), 250.0);
}

#[test]
fn line_svg_has_labels_and_paths() {
    let months = monthly_totals(&sample_expenses(), 2025);
    let g = build_from_monthly(&months, LineLayout::default());
    let svg = render_line(&g, &LineStyle::default(), 1.0);
    assert!(svg.contains("translate(60 40)"));
    assert!(svg.contains(">Dec<"));
    assert!(svg.contains("₱10,000.00"));
    assert_eq!(svg.matches("<circle ").count(), 12);

    let bare = render_line(
        &g,
        &LineStyle {
            show_area: false,
            show_grid: false,
            ..LineStyle::default()
        },
        0.25,
    );
    assert!(!bare.contains("<line "));
    assert_eq!(bare.matches("<path ").count(), 1);
    assert_eq!(bare.matches("<circle ").count(), 3);
}

#[test]
fn coordinates_are_trimmed() {
    assert_eq!(fmt_coord(80.0), "80");
    assert_eq!(fmt_coord(8.000000001), "8");
    assert_eq!(fmt_coord(63.636363), "63.64");
    assert_eq!(fmt_coord(-0.0001), "0");
    assert_eq!(fmt_coord(110.5), "110.5");
}

fn sample_session() -> Session {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    Session::new(conn, sample_expenses(), sample_profile())
}

fn run_chart(session: &Session, args: &[&str]) -> String {
    let dir = tempdir().unwrap();
    let out = dir.path().join("chart.svg");
    let mut argv = vec!["spendboard", "chart"];
    argv.extend_from_slice(args);
    argv.extend_from_slice(&["--out", out.to_str().unwrap()]);
    let m = cli::build_cli().get_matches_from(argv);
    let (_, sub) = m.subcommand().unwrap();
    charts::handle(session, sub).unwrap();
    std::fs::read_to_string(&out).unwrap()
}

#[test]
fn chart_commands_render_empty_state_for_year_without_data() {
    let session = sample_session();

    let pie = run_chart(&session, &["pie", "--year", "1999"]);
    assert!(pie.contains("No data to display"));
    assert!(!pie.contains("<path "));
    assert!(pie.contains(r#"width="160" height="160""#));

    let line = run_chart(&session, &["line", "--year", "1999"]);
    assert!(line.contains("No data to display"));
    assert!(!line.contains("<path "));
    assert!(line.contains(r#"width="800" height="300""#));
}

#[test]
fn chart_commands_draw_years_with_data() {
    let session = sample_session();
    let pie = run_chart(&session, &["pie", "--year", "2025", "--highlight", "Food"]);
    assert!(pie.contains("<path "));
    assert!(pie.contains("#0f172a"));
    assert!(!pie.contains("No data to display"));

    let line = run_chart(&session, &["line", "--year", "2025", "--compact"]);
    assert_eq!(line.matches("<circle ").count(), 12);
    assert!(line.contains("translate(50 40)"));
}
