//! Chart Drawing
//!
//! Line-plus-marker rendering of series descriptors on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::dataset::SeriesDescriptor;

/// Chart colors for different series
pub const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Smallest canvas we will size down to
const MIN_WIDTH: u32 = 200;
const MIN_HEIGHT: u32 = 150;

pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Data-space extent of everything being drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    /// Extent over all finite points, with 10% vertical padding.
    ///
    /// `None` when there is nothing finite to draw.
    pub fn from_series(series: &[SeriesDescriptor]) -> Option<Self> {
        let mut bounds: Option<ChartBounds> = None;

        for (x, y) in series.iter().flat_map(SeriesDescriptor::points) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => ChartBounds { x_min: x, x_max: x, y_min: y, y_max: y },
                Some(b) => ChartBounds {
                    x_min: b.x_min.min(x),
                    x_max: b.x_max.max(x),
                    y_min: b.y_min.min(y),
                    y_max: b.y_max.max(y),
                },
            });
        }

        bounds.map(|mut b| {
            let y_range = b.y_max - b.y_min;
            let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
            b.y_min -= y_padding;
            b.y_max += y_padding;

            if b.x_min == b.x_max {
                b.x_min -= 1.0;
                b.x_max += 1.0;
            }
            b
        })
    }
}

/// Pixel rectangle inside the margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        }
    }

    /// Map a data point to canvas pixels (y grows downward)
    pub fn project(&self, bounds: &ChartBounds, x: f64, y: f64) -> (f64, f64) {
        let px = self.left + (x - bounds.x_min) / (bounds.x_max - bounds.x_min) * self.width;
        let py = self.top + (bounds.y_max - y) / (bounds.y_max - bounds.y_min) * self.height;
        (px, py)
    }
}

/// Axis tick text
pub fn format_tick(value: f64) -> String {
    if value.abs() >= 1000.0 || value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Size the canvas backing store to its container. Returns whether it changed.
pub fn fit_canvas_to_container(canvas: &HtmlCanvasElement) -> bool {
    let Some(parent) = canvas.parent_element() else {
        return false;
    };
    let width = (parent.client_width().max(0) as u32).max(MIN_WIDTH);
    let height = (parent.client_height().max(0) as u32).max(MIN_HEIGHT);

    if canvas.width() == width && canvas.height() == height {
        return false;
    }
    canvas.set_width(width);
    canvas.set_height(height);
    true
}

/// Draw all descriptors in one pass, replacing whatever was on the canvas
pub fn draw_series(canvas: &HtmlCanvasElement, series: &[SeriesDescriptor]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::for_canvas(width, height);

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some(bounds) = ChartBounds::from_series(series) else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data to plot", width / 2.0 - 55.0, height / 2.0);
        return;
    };

    // Horizontal grid lines (5 lines) with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = area.top + (i as f64 / 5.0) * area.height;
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        let value = bounds.y_max - (i as f64 / 5.0) * (bounds.y_max - bounds.y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format_tick(value), 5.0, y + 4.0);
    }

    for (idx, descriptor) in series.iter().enumerate() {
        let color = series_color(idx);

        if descriptor.mode.draws_lines() {
            ctx.set_stroke_style(&color.into());
            ctx.set_line_width(2.0);
            ctx.begin_path();

            // NaN samples break the line
            let mut pen_down = false;
            for (x, y) in descriptor.points() {
                if !x.is_finite() || !y.is_finite() {
                    pen_down = false;
                    continue;
                }
                let (px, py) = area.project(&bounds, x, y);
                if pen_down {
                    ctx.line_to(px, py);
                } else {
                    ctx.move_to(px, py);
                    pen_down = true;
                }
            }
            ctx.stroke();
        }

        if descriptor.mode.draws_markers() {
            ctx.set_fill_style(&color.into());
            for (x, y) in descriptor.points() {
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                let (px, py) = area.project(&bounds, x, y);
                ctx.begin_path();
                let _ = ctx.arc(px, py, 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }

    // X-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let num_labels = 5;
    for i in 0..=num_labels {
        let fraction = i as f64 / num_labels as f64;
        let value = bounds.x_min + fraction * (bounds.x_max - bounds.x_min);
        let x = area.left + fraction * area.width;
        let _ = ctx.fill_text(&format_tick(value), x - 15.0, height - 10.0);
    }
}

/// Chart legend showing series colors
#[component]
pub fn ChartLegend(#[prop(into)] names: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-2">
            {move || {
                names.get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, name)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", series_color(idx))
                                />
                                <span class="text-sm text-gray-300">{name}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
