// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{fmt_coord, to_f64};
use crate::aggregate::MonthlyAggregate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Largest value the vertical axis can show; larger values sit on the top edge.
pub const CEILING: f64 = 10_000.0;
/// Spacing between horizontal gridlines, from zero up to [`CEILING`].
pub const GRID_STEP: f64 = 2_000.0;

pub const MIN_WIDTH: f64 = 320.0;
pub const MAX_WIDTH: f64 = 960.0;
pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn regular() -> Self {
        Self {
            top: 40.0,
            right: 40.0,
            bottom: 40.0,
            left: 60.0,
        }
    }

    /// Narrow-screen variant with tighter side margins.
    pub fn compact() -> Self {
        Self {
            top: 40.0,
            right: 20.0,
            bottom: 40.0,
            left: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, false)
    }
}

impl LineLayout {
    /// `width` is clamped to [`MIN_WIDTH`, `MAX_WIDTH`].
    pub fn new(width: f64, height: f64, compact: bool) -> Self {
        Self {
            width: width.clamp(MIN_WIDTH, MAX_WIDTH),
            height,
            padding: if compact {
                Padding::compact()
            } else {
                Padding::regular()
            },
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.padding.left - self.padding.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.padding.top - self.padding.bottom).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub label: String,
    pub amount: Decimal,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gridline {
    pub value: f64,
    pub y: f64,
}

/// Precomputed point positions in plot coordinates (origin at the top-left of
/// the plot area, inside the padding).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGeometry {
    pub layout: LineLayout,
    pub ceiling: f64,
    pub points: Vec<LinePoint>,
}

pub fn build_line(points: &[(&str, Decimal)], layout: LineLayout) -> LineGeometry {
    let mut g = LineGeometry {
        layout,
        ceiling: CEILING,
        points: Vec::with_capacity(points.len()),
    };
    for (i, (label, amount)) in points.iter().enumerate() {
        let x = g.x_at(i, points.len());
        let y = g.y_for(to_f64(*amount));
        g.points.push(LinePoint {
            label: label.to_string(),
            amount: *amount,
            x,
            y,
        });
    }
    g
}

pub fn build_from_monthly(months: &[MonthlyAggregate; 12], layout: LineLayout) -> LineGeometry {
    let pts: Vec<(&str, Decimal)> = months.iter().map(|m| (m.month, m.amount)).collect();
    build_line(&pts, layout)
}

impl LineGeometry {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn x_at(&self, index: usize, count: usize) -> f64 {
        let span = count.saturating_sub(1).max(1) as f64;
        index as f64 / span * self.layout.plot_width()
    }

    /// Vertical position of `value`: the ceiling maps to 0, zero maps to the
    /// plot height. Out-of-range values are clipped.
    pub fn y_for(&self, value: f64) -> f64 {
        let h = self.layout.plot_height();
        let v = value.clamp(0.0, self.ceiling);
        h - (v / self.ceiling) * h
    }

    pub fn baseline(&self) -> f64 {
        self.layout.plot_height()
    }

    /// Number of points shown at reveal `progress` (clamped to 0..=1).
    pub fn visible_count(&self, progress: f64) -> usize {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let n = (self.points.len() as f64 * p).ceil() as usize;
        n.min(self.points.len())
    }

    pub fn line_path(&self, progress: f64) -> String {
        let n = self.visible_count(progress);
        self.points[..n]
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { "M" } else { "L" };
                format!("{} {} {}", cmd, fmt_coord(p.x), fmt_coord(p.y))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The line path closed down to the baseline, for a filled area.
    pub fn area_path(&self, progress: f64) -> String {
        let n = self.visible_count(progress);
        if n == 0 {
            return String::new();
        }
        let base = fmt_coord(self.baseline());
        format!(
            "{} L {} {} L {} {} Z",
            self.line_path(progress),
            fmt_coord(self.points[n - 1].x),
            base,
            fmt_coord(self.points[0].x),
            base
        )
    }

    pub fn gridlines(&self) -> Vec<Gridline> {
        let steps = (self.ceiling / GRID_STEP).round() as usize;
        (0..=steps)
            .map(|i| {
                let value = i as f64 * GRID_STEP;
                Gridline {
                    value,
                    y: self.y_for(value),
                }
            })
            .collect()
    }
}
