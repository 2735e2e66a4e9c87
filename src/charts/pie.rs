// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{fmt_coord, to_f64};
use crate::aggregate::{CategoryAggregate, CategoryBreakdown};
use rust_decimal::Decimal;
use serde::Serialize;

pub const PIE_SIZE: f64 = 160.0;
/// Angle of the first sector's leading edge (12 o'clock).
pub const START_ANGLE: f64 = -90.0;

const FULL_CIRCLE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct PieEntry {
    pub label: String,
    pub amount: Decimal,
    pub color: String,
}

impl From<&CategoryAggregate> for PieEntry {
    fn from(c: &CategoryAggregate) -> Self {
        Self {
            label: c.category.clone(),
            amount: c.amount,
            color: c.color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSector {
    pub label: String,
    pub color: String,
    pub amount: Decimal,
    /// Fraction of the total, 0..=1.
    pub share: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    pub path: String,
}

impl PieSector {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Translation that pushes the sector `distance` pixels outward along its
    /// mid angle.
    pub fn explode_offset(&self, distance: f64) -> (f64, f64) {
        let rad = self.mid_angle().to_radians();
        (rad.cos() * distance, rad.sin() * distance)
    }

    pub fn label_percent(&self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieGeometry {
    pub size: f64,
    pub radius: f64,
    pub center: f64,
    pub sectors: Vec<PieSector>,
}

pub fn build_pie(entries: &[PieEntry], total: Decimal) -> Option<PieGeometry> {
    build_pie_sized(entries, total, PIE_SIZE)
}

/// Lays out sectors clockwise from 12 o'clock in input order.
///
/// `total` must equal the sum of the entry amounts. Returns `None` when there
/// is nothing to draw (no entries or a zero total).
pub fn build_pie_sized(entries: &[PieEntry], total: Decimal, size: f64) -> Option<PieGeometry> {
    if entries.is_empty() || total <= Decimal::ZERO {
        return None;
    }
    let total_f = to_f64(total);
    let radius = size / 2.0 - 8.0;
    let center = size / 2.0;

    let mut current = START_ANGLE;
    let sectors = entries
        .iter()
        .map(|e| {
            let share = to_f64(e.amount) / total_f;
            let sweep = share * 360.0;
            let start = current;
            let end = current + sweep;
            current = end;
            let large_arc = sweep > 180.0;
            PieSector {
                label: e.label.clone(),
                color: e.color.clone(),
                amount: e.amount,
                share,
                start_angle: start,
                end_angle: end,
                large_arc,
                path: sector_path(center, radius, start, end, large_arc),
            }
        })
        .collect();

    Some(PieGeometry {
        size,
        radius,
        center,
        sectors,
    })
}

pub fn build_from_breakdown(b: &CategoryBreakdown) -> Option<PieGeometry> {
    let entries: Vec<PieEntry> = b.categories.iter().map(PieEntry::from).collect();
    build_pie(&entries, b.total)
}

fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    (center + radius * rad.cos(), center + radius * rad.sin())
}

fn sector_path(center: f64, radius: f64, start: f64, end: f64, large_arc: bool) -> String {
    let c = fmt_coord(center);
    let r = fmt_coord(radius);
    let (x1, y1) = point(center, radius, start);

    // An arc whose endpoints coincide draws nothing, so a full circle is
    // split into two half arcs.
    if end - start >= 360.0 - FULL_CIRCLE_EPSILON {
        let (xm, ym) = point(center, radius, start + 180.0);
        return format!(
            "M {c} {c} L {x1} {y1} A {r} {r} 0 1 1 {xm} {ym} A {r} {r} 0 1 1 {x1} {y1} Z",
            x1 = fmt_coord(x1),
            y1 = fmt_coord(y1),
            xm = fmt_coord(xm),
            ym = fmt_coord(ym),
        );
    }

    let (x2, y2) = point(center, radius, end);
    format!(
        "M {c} {c} L {x1} {y1} A {r} {r} 0 {large} 1 {x2} {y2} Z",
        x1 = fmt_coord(x1),
        y1 = fmt_coord(y1),
        large = if large_arc { 1 } else { 0 },
        x2 = fmt_coord(x2),
        y2 = fmt_coord(y2),
    )
}
