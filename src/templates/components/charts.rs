// src/templates/components/charts.rs
//
// Server-rendered SVG charts. The dashboard recomputes everything per
// request, so these stay deliberately small: fixed viewBox, no axes
// beyond a baseline, values carried as pre-formatted labels.

use maud::{html, Markup};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 16.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 24.0;
const PAD_BOTTOM: f64 = 36.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    /// Human-readable value, shown next to the mark.
    pub display: String,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64, display: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            display: display.into(),
        }
    }
}

fn px(v: f64) -> String {
    format!("{v:.1}")
}

fn empty_chart() -> Markup {
    html! {
        div class="chart chart-empty" { p { "No data for the selected filters." } }
    }
}

/// Vertical bars scaled from zero. Negative values are clamped to the
/// baseline; use `line_chart` for series that cross zero.
pub fn bar_chart(points: &[ChartPoint]) -> Markup {
    if points.is_empty() {
        return empty_chart();
    }

    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let baseline = PAD_TOP + plot_h;
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { plot_h / max } else { 0.0 };

    let step = plot_w / points.len() as f64;
    let bar_w = (step * 0.6).min(64.0);
    let show_values = points.len() <= 12;

    html! {
        svg class="chart" viewBox={ "0 0 " (WIDTH) " " (HEIGHT) } role="img" {
            line class="axis" x1=(px(PAD_LEFT)) y1=(px(baseline)) x2=(px(WIDTH - PAD_RIGHT)) y2=(px(baseline)) {}
            @for (i, point) in points.iter().enumerate() {
                @let center = PAD_LEFT + step * (i as f64 + 0.5);
                @let height = (point.value.max(0.0)) * scale;
                @let y = baseline - height;
                rect class="bar"
                    x=(px(center - bar_w / 2.0))
                    y=(px(y))
                    width=(px(bar_w))
                    height=(px(height)) {
                    title { (point.label) ": " (point.display) }
                }
                @if show_values {
                    text class="value" x=(px(center)) y=(px(y - 6.0)) text-anchor="middle" {
                        (point.display)
                    }
                }
                text class="tick" x=(px(center)) y=(px(HEIGHT - 12.0)) text-anchor="middle" {
                    (point.label)
                }
            }
        }
    }
}

/// Connected line with point markers. Handles series that cross zero by
/// drawing a dashed baseline at y = 0.
pub fn line_chart(points: &[ChartPoint]) -> Markup {
    if points.is_empty() {
        return empty_chart();
    }

    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let mut min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let mut max = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        // Flat series still needs a non-zero domain to plot against.
        min -= 1.0;
        max += 1.0;
    }
    let span = max - min;

    let step = if points.len() > 1 {
        plot_w / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_of = |i: usize| PAD_LEFT + step * i as f64;
    let y_of = |value: f64| PAD_TOP + (max - value) / span * plot_h;
    let show_values = points.len() <= 8;

    let path: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{},{}", px(x_of(i)), px(y_of(p.value))))
        .collect();

    html! {
        svg class="chart" viewBox={ "0 0 " (WIDTH) " " (HEIGHT) } role="img" {
            @if min < 0.0 && max > 0.0 {
                line class="zero-line" x1=(px(PAD_LEFT)) y1=(px(y_of(0.0)))
                    x2=(px(WIDTH - PAD_RIGHT)) y2=(px(y_of(0.0))) {}
            }
            polyline class="line" points=(path.join(" ")) {}
            @for (i, point) in points.iter().enumerate() {
                circle class="dot" cx=(px(x_of(i))) cy=(px(y_of(point.value))) r="3.5" {
                    title { (point.label) ": " (point.display) }
                }
                @if show_values {
                    text class="value" x=(px(x_of(i))) y=(px(y_of(point.value) - 8.0)) text-anchor="middle" {
                        (point.display)
                    }
                }
                text class="tick" x=(px(x_of(i))) y=(px(HEIGHT - 12.0)) text-anchor="middle" {
                    (point.label)
                }
            }
        }
    }
}
