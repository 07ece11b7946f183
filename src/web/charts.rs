//! Server-side SVG chart rendering for the dashboard page.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::f64::consts::{PI, TAU};
use svg::node::element::{path::Data, Circle, Line, Path, Rectangle, Text};
use svg::node::Text as Label;
use svg::Document;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;

// Category10 palette, wrapped when more than ten categories exist.
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

fn base_document() -> Document {
    Document::new()
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .set("viewBox", format!("0 0 {WIDTH} {HEIGHT}"))
        .set("font-family", "sans-serif")
}

fn empty_chart(title: &str) -> String {
    let doc = base_document().add(
        Text::new()
            .set("x", WIDTH / 2.0)
            .set("y", HEIGHT / 2.0)
            .set("text-anchor", "middle")
            .set("font-size", 18)
            .set("fill", "#888")
            .add(Label::new(format!("{title}: no data available"))),
    );
    doc.to_string()
}

/// Pie chart of category shares, with a legend naming each category and its
/// percentage of the grand total.
pub(crate) fn pie_chart(totals: &BTreeMap<String, Decimal>) -> String {
    let grand: f64 = totals
        .values()
        .map(|v| v.to_f64().unwrap_or(0.0))
        .sum();
    if totals.is_empty() || grand <= 0.0 {
        return empty_chart("Expenses by category");
    }

    let (cx, cy, r) = (200.0, 210.0, 160.0);
    let mut doc = base_document().add(
        Text::new()
            .set("x", 200)
            .set("y", 24)
            .set("text-anchor", "middle")
            .set("font-size", 16)
            .add(Label::new("Expense distribution by category")),
    );

    let mut angle = -PI / 2.0;
    for (i, (category, amount)) in totals.iter().enumerate() {
        let share = amount.to_f64().unwrap_or(0.0) / grand;
        let sweep = share * TAU;
        let color = PALETTE[i % PALETTE.len()];

        // A full-circle wedge degenerates as an arc; draw it as a circle.
        if sweep >= TAU * 0.9999 {
            doc = doc.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", r)
                    .set("fill", color)
                    .set("stroke", "white"),
            );
        } else if sweep > 0.0 {
            let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = i32::from(sweep > PI);
            let data = Data::new()
                .move_to((cx, cy))
                .line_to((x1, y1))
                .elliptical_arc_to((r, r, 0, large_arc, 1, x2, y2))
                .close();
            doc = doc.add(
                Path::new()
                    .set("d", data)
                    .set("fill", color)
                    .set("stroke", "white"),
            );
        }

        let ly = 48.0 + i as f64 * 22.0;
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", 420)
                    .set("y", ly)
                    .set("width", 14)
                    .set("height", 14)
                    .set("fill", color),
            )
            .add(
                Text::new()
                    .set("x", 442)
                    .set("y", ly + 12.0)
                    .set("font-size", 13)
                    .add(Label::new(format!(
                        "{} ({:.1}%)",
                        escape(category),
                        share * 100.0
                    ))),
            );

        angle += sweep;
    }

    doc.to_string()
}

/// Month-over-month trend: a line through the monthly totals with a marker
/// and label per month.
pub(crate) fn trend_chart(totals: &[(String, Decimal)]) -> String {
    if totals.is_empty() {
        return empty_chart("Monthly totals");
    }

    let margin = 50.0;
    let plot_w = WIDTH - 2.0 * margin;
    let plot_h = HEIGHT - 2.0 * margin;

    let max = totals
        .iter()
        .map(|(_, v)| v.to_f64().unwrap_or(0.0))
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let x_at = |i: usize| {
        if totals.len() == 1 {
            margin + plot_w / 2.0
        } else {
            margin + plot_w * i as f64 / (totals.len() - 1) as f64
        }
    };
    let y_at = |v: f64| margin + plot_h * (1.0 - v / max);

    let mut doc = base_document()
        .add(
            Text::new()
                .set("x", WIDTH / 2.0)
                .set("y", 24)
                .set("text-anchor", "middle")
                .set("font-size", 16)
                .add(Label::new("Total expenses per month")),
        )
        // Axes
        .add(
            Line::new()
                .set("x1", margin)
                .set("y1", margin)
                .set("x2", margin)
                .set("y2", HEIGHT - margin)
                .set("stroke", "#333"),
        )
        .add(
            Line::new()
                .set("x1", margin)
                .set("y1", HEIGHT - margin)
                .set("x2", WIDTH - margin)
                .set("y2", HEIGHT - margin)
                .set("stroke", "#333"),
        )
        .add(
            Text::new()
                .set("x", margin - 6.0)
                .set("y", margin + 4.0)
                .set("text-anchor", "end")
                .set("font-size", 11)
                .add(Label::new(format!("{max:.2}"))),
        );

    let mut data = Data::new();
    for (i, (_, value)) in totals.iter().enumerate() {
        let (x, y) = (x_at(i), y_at(value.to_f64().unwrap_or(0.0)));
        data = if i == 0 {
            data.move_to((x, y))
        } else {
            data.line_to((x, y))
        };
    }
    if totals.len() > 1 {
        doc = doc.add(
            Path::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", "#1f77b4")
                .set("stroke-width", 2),
        );
    }

    for (i, (month, value)) in totals.iter().enumerate() {
        let (x, y) = (x_at(i), y_at(value.to_f64().unwrap_or(0.0)));
        doc = doc
            .add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", 4)
                    .set("fill", "#1f77b4"),
            )
            .add(
                Text::new()
                    .set("x", x)
                    .set("y", HEIGHT - margin + 18.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 11)
                    .add(Label::new(month.clone())),
            );
    }

    doc.to_string()
}

/// Minimal escaping for text placed in SVG/HTML output.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
