// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::fmt_coord;
use super::line::LineGeometry;
use super::pie::PieGeometry;
use crate::models::Currency;
use crate::utils::fmt_money;
use rust_decimal::Decimal;
use std::fmt::Write;

const LINE_COLOR: &str = "#06b6d4";
const GRID_COLOR: &str = "#e2e8f0";
const LABEL_COLOR: &str = "#475569";
const HIGHLIGHT_OFFSET: f64 = 8.0;

#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    pub show_area: bool,
    pub show_grid: bool,
    pub currency: Currency,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            show_area: true,
            show_grid: true,
            currency: Currency::default(),
        }
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders a standalone SVG document for a pie chart with a legend column.
/// `highlight` pushes the named sector outward and outlines it.
pub fn render_pie(g: &PieGeometry, highlight: Option<&str>) -> String {
    let legend_width = 140.0;
    let width = g.size + legend_width;
    let mut s = String::new();
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_coord(width),
        h = fmt_coord(g.size)
    );
    for sector in &g.sectors {
        let on = highlight == Some(sector.label.as_str());
        let (dx, dy) = if on {
            sector.explode_offset(HIGHLIGHT_OFFSET)
        } else {
            (0.0, 0.0)
        };
        let _ = writeln!(
            s,
            r#"  <path d="{d}" fill="{fill}" opacity="{op}" stroke="{stroke}" stroke-width="{sw}" transform="translate({dx} {dy})"><title>{title}</title></path>"#,
            d = sector.path,
            fill = escape(&sector.color),
            op = if on { "0.9" } else { "0.8" },
            stroke = if on { "#0f172a" } else { "none" },
            sw = if on { "1.5" } else { "0" },
            dx = fmt_coord(dx),
            dy = fmt_coord(dy),
            title = escape(&format!("{} {}", sector.label, sector.label_percent())),
        );
    }
    for (i, sector) in g.sectors.iter().enumerate() {
        let y = 20.0 + i as f64 * 18.0;
        let _ = writeln!(
            s,
            r#"  <circle cx="{cx}" cy="{cy}" r="4" fill="{fill}"/><text x="{tx}" y="{ty}" font-size="11" fill="{fill}">{label} {pct}</text>"#,
            cx = fmt_coord(g.size + 12.0),
            cy = fmt_coord(y),
            fill = escape(&sector.color),
            tx = fmt_coord(g.size + 22.0),
            ty = fmt_coord(y + 4.0),
            label = escape(&sector.label),
            pct = sector.label_percent(),
        );
    }
    s.push_str("</svg>\n");
    s
}

/// SVG shown in place of a chart when there is nothing to draw.
pub fn render_empty(width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n  <text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" font-size=\"13\" fill=\"{c}\">No data to display</text>\n</svg>\n",
        w = fmt_coord(width),
        h = fmt_coord(height),
        cx = fmt_coord(width / 2.0),
        cy = fmt_coord(height / 2.0),
        c = LABEL_COLOR
    )
}

pub fn render_line(g: &LineGeometry, style: &LineStyle, progress: f64) -> String {
    let l = &g.layout;
    let mut s = String::new();
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_coord(l.width),
        h = fmt_coord(l.height)
    );
    let _ = writeln!(
        s,
        r#"  <g transform="translate({} {})">"#,
        fmt_coord(l.padding.left),
        fmt_coord(l.padding.top)
    );
    if style.show_grid {
        for line in g.gridlines() {
            let _ = writeln!(
                s,
                r#"    <line x1="0" y1="{y}" x2="{x2}" y2="{y}" stroke="{c}" stroke-width="1" stroke-dasharray="4 4" opacity="0.5"/>"#,
                y = fmt_coord(line.y),
                x2 = fmt_coord(l.plot_width()),
                c = GRID_COLOR
            );
        }
    }
    if style.show_area {
        let area = g.area_path(progress);
        if !area.is_empty() {
            let _ = writeln!(
                s,
                r#"    <path d="{}" fill="{}" fill-opacity="0.15"/>"#,
                area, LINE_COLOR
            );
        }
    }
    let line = g.line_path(progress);
    if !line.is_empty() {
        let _ = writeln!(
            s,
            r#"    <path d="{}" fill="none" stroke="{}" stroke-width="3" stroke-linecap="round" stroke-linejoin="round"/>"#,
            line, LINE_COLOR
        );
    }
    for p in &g.points[..g.visible_count(progress)] {
        let _ = writeln!(
            s,
            r#"    <circle cx="{}" cy="{}" r="4" fill="white" stroke="{}" stroke-width="2"><title>{}: {}</title></circle>"#,
            fmt_coord(p.x),
            fmt_coord(p.y),
            LINE_COLOR,
            escape(&p.label),
            escape(&fmt_money(&p.amount, style.currency))
        );
    }
    s.push_str("  </g>\n");

    for line in g.gridlines().iter().rev() {
        let value = Decimal::from(line.value as i64);
        let _ = writeln!(
            s,
            r#"  <text x="{}" y="{}" text-anchor="end" font-size="12" fill="{}">{}</text>"#,
            fmt_coord(l.padding.left - 10.0),
            fmt_coord(l.padding.top + line.y + 4.0),
            LABEL_COLOR,
            escape(&fmt_money(&value, style.currency))
        );
    }
    for p in &g.points {
        let _ = writeln!(
            s,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="12" fill="{}">{}</text>"#,
            fmt_coord(l.padding.left + p.x),
            fmt_coord(l.height - l.padding.bottom + 20.0),
            LABEL_COLOR,
            escape(&p.label)
        );
    }
    s.push_str("</svg>\n");
    s
}
