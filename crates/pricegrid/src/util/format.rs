use pricegrid_core::model::OutputMetric;

/// Shown wherever a value is NaN or infinite
pub const UNDEFINED_DISPLAY: &str = "-";

/// Format a metric value with two decimals and its unit, e.g. `8.20%`,
/// `2.50x`, `$8.00M`
pub fn format_metric(metric: OutputMetric, value: f64) -> String {
    if !value.is_finite() {
        return UNDEFINED_DISPLAY.to_string();
    }
    match metric.unit() {
        "M" => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{sign}${:.2}M", value.abs())
        }
        unit => format!("{value:.2}{unit}"),
    }
}

/// Format a bare value with two decimals, as used in heatmap cells and headers
pub fn format_value(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        UNDEFINED_DISPLAY.to_string()
    }
}
