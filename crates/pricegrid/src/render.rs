//! Terminal rendering of single-run results and sweep heatmaps.
//!
//! Everything renders into a `String` so commands can write it to any sink.

use std::fmt::Write;

use crossterm::style::{Color, Stylize, style};
use pricegrid_core::analysis::{CellColor, ColorScale, GridResult, Rgb, ramp_color, ramp_ratio};
use pricegrid_core::model::{OutputMetric, ScenarioOutputs};

use crate::util::{UNDEFINED_DISPLAY, format_metric, format_value};

/// Width of one heatmap column, excluding padding
const CELL_WIDTH: usize = 8;
/// Width of the legend gradient bar
const LEGEND_WIDTH: usize = 32;

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Paint `text` with a cell's fill and text color when color is enabled
fn paint(text: &str, color: CellColor, enabled: bool) -> String {
    if enabled {
        style(text)
            .with(term_color(color.text.rgb()))
            .on(term_color(color.fill))
            .to_string()
    } else {
        text.to_string()
    }
}

/// Render the six result cards for a single scenario
pub fn render_results(outputs: &ScenarioOutputs) -> String {
    let mut out = String::from("Results\n");
    let label_width = OutputMetric::ALL
        .iter()
        .map(|m| m.short_label().len())
        .max()
        .unwrap_or(0);

    for metric in OutputMetric::ALL {
        let _ = writeln!(
            out,
            "  {:<label_width$}  {:>10}",
            metric.short_label(),
            format_metric(metric, outputs.get(metric)),
        );
    }
    out
}

/// Render a colored heatmap of one metric over a sweep.
///
/// Rows follow the first axis (vertical), columns the second (horizontal).
pub fn render_heatmap(grid: &GridResult, metric: OutputMetric, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", metric.label());

    if grid.is_empty() {
        out.push_str("  No data to display.\n");
        return out;
    }
    // None when every cell is undefined for this metric
    let scale = ColorScale::for_metric(grid, metric);

    let row_label_width = grid
        .axis1_values()
        .iter()
        .map(|v| format_value(*v).len())
        .max()
        .unwrap_or(0)
        .max(CELL_WIDTH);

    // Header row: blank corner, then axis2 samples
    let _ = write!(out, "{:>row_label_width$} ", "");
    for value in grid.axis2_values() {
        let _ = write!(out, " {:>CELL_WIDTH$} ", format_value(*value));
    }
    out.push('\n');

    for (row, axis1_value) in grid.rows().zip(grid.axis1_values()) {
        let _ = write!(out, "{:>row_label_width$} ", format_value(*axis1_value));
        for cell in row {
            let value = cell.outputs.get(metric);
            let (text, cell_color) = match scale.as_ref().and_then(|s| s.color(value)) {
                Some(c) => (format_value(value), c),
                None => (UNDEFINED_DISPLAY.to_string(), CellColor::UNDEFINED),
            };
            let padded = format!(" {text:>CELL_WIDTH$} ");
            out.push_str(&paint(&padded, cell_color, color));
        }
        out.push('\n');
    }

    out.push('\n');
    match &scale {
        Some(scale) => out.push_str(&render_legend(scale, color)),
        None => out.push_str("Scale: no finite values for this metric\n"),
    }
    let _ = writeln!(
        out,
        "Axes: {} (vertical) x {} (horizontal)",
        grid.axis1().label(),
        grid.axis2().label()
    );

    let undefined = grid.undefined_count();
    if undefined > 0 {
        let _ = writeln!(out, "{undefined} cell(s) undefined ({UNDEFINED_DISPLAY})");
    }
    out
}

/// Gradient bar from the metric minimum to its maximum, with end labels
pub fn render_legend(scale: &ColorScale, color: bool) -> String {
    let mut out = String::from("Scale: ");

    if color {
        for k in 0..LEGEND_WIDTH {
            let position = k as f64 / (LEGEND_WIDTH - 1) as f64;
            let value = scale.min + (scale.max - scale.min) * position;
            let fill = ramp_color(ramp_ratio(value, scale.min, scale.max, scale.lower_is_better));
            out.push_str(&style(" ").on(term_color(fill)).to_string());
        }
        out.push('\n');
        out.push_str("       ");
    }

    let (low_tag, high_tag) = if scale.lower_is_better {
        ("Better", "Worse")
    } else {
        ("Worse", "Better")
    };
    let _ = writeln!(
        out,
        "{low_tag}: {}  |  {}  |  {high_tag}: {}",
        format_value(scale.min),
        format_value(scale.midpoint()),
        format_value(scale.max),
    );
    out
}
