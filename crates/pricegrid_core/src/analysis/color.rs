//! Heatmap color scaling.
//!
//! Values are normalized against the observed range of the selected metric
//! and mapped onto a two-segment red → yellow → green ramp. Green is always
//! the favourable end; metrics where lower is better are inverted before
//! mapping.

use serde::{Deserialize, Serialize};

use crate::model::OutputMetric;

use super::GridResult;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived luminance in [0, 1]
    #[must_use]
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// CSS `rgb(r, g, b)` notation
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// `#rrggbb` notation
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Worst end of the ramp
pub const RAMP_BAD: Rgb = Rgb::new(220, 20, 60);
/// Ramp midpoint
pub const RAMP_MEDIUM: Rgb = Rgb::new(255, 255, 0);
/// Best end of the ramp
pub const RAMP_GOOD: Rgb = Rgb::new(34, 139, 34);
/// Background for cells whose value is undefined
pub const UNDEFINED_FILL: Rgb = Rgb::new(240, 240, 240);

/// Text color chosen for legibility over a fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextColor {
    Dark,
    Light,
}

impl TextColor {
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        match self {
            Self::Dark => Rgb::new(0, 0, 0),
            Self::Light => Rgb::new(255, 255, 255),
        }
    }

    #[must_use]
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Dark => "#000000",
            Self::Light => "#ffffff",
        }
    }
}

/// Fill and text color for one heatmap cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellColor {
    pub fill: Rgb,
    pub text: TextColor,
}

impl CellColor {
    /// Neutral cell for NaN or infinite values
    pub const UNDEFINED: CellColor = CellColor {
        fill: UNDEFINED_FILL,
        text: TextColor::Dark,
    };
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// Position of `value` within `[min, max]`, oriented so that 1.0 is best.
///
/// A degenerate range (`min == max`) maps every value to the midpoint.
#[must_use]
pub fn ramp_ratio(value: f64, min: f64, max: f64, lower_is_better: bool) -> f64 {
    let normalized = if max == min {
        0.5
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    };
    if lower_is_better {
        1.0 - normalized
    } else {
        normalized
    }
}

/// Map a ratio in [0, 1] (0 = bad, 1 = good) onto the ramp
#[must_use]
pub fn ramp_color(ratio: f64) -> Rgb {
    if ratio < 0.5 {
        let t = ratio * 2.0;
        Rgb::new(
            RAMP_BAD.r,
            lerp(RAMP_BAD.g, RAMP_MEDIUM.g, t),
            lerp(RAMP_BAD.b, 0, t),
        )
    } else {
        let t = (ratio - 0.5) * 2.0;
        Rgb::new(
            lerp(RAMP_MEDIUM.r, RAMP_GOOD.r, t),
            lerp(RAMP_MEDIUM.g, RAMP_GOOD.g, t),
            lerp(RAMP_MEDIUM.b, RAMP_GOOD.b, t),
        )
    }
}

/// Dark text over light fills, light text over dark fills
#[must_use]
pub fn contrast_color(fill: Rgb) -> TextColor {
    if fill.luminance() > 0.5 {
        TextColor::Dark
    } else {
        TextColor::Light
    }
}

/// Heatmap color for `value` given the observed range of its metric.
///
/// A non-finite `value`, `min` or `max` gets [`CellColor::UNDEFINED`].
#[must_use]
pub fn color_for(value: f64, min: f64, max: f64, lower_is_better: bool) -> CellColor {
    if !(value.is_finite() && min.is_finite() && max.is_finite()) {
        return CellColor::UNDEFINED;
    }
    let fill = ramp_color(ramp_ratio(value, min, max, lower_is_better));
    CellColor {
        fill,
        text: contrast_color(fill),
    }
}

/// Observed range and direction for one metric over a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub metric: OutputMetric,
    pub min: f64,
    pub max: f64,
    pub lower_is_better: bool,
}

impl ColorScale {
    /// Scale a metric over all finite cells of a grid. Returns `None` when
    /// the grid has no finite value for the metric.
    #[must_use]
    pub fn for_metric(grid: &GridResult, metric: OutputMetric) -> Option<Self> {
        let (min, max) = grid.metric_range(metric)?;
        Some(Self {
            metric,
            min,
            max,
            lower_is_better: metric.lower_is_better(),
        })
    }

    /// Color for a value, or `None` if the value is undefined
    #[must_use]
    pub fn color(&self, value: f64) -> Option<CellColor> {
        value
            .is_finite()
            .then(|| color_for(value, self.min, self.max, self.lower_is_better))
    }

    /// Legend midpoint
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Value at the favourable end of the legend
    #[must_use]
    pub fn best(&self) -> f64 {
        if self.lower_is_better { self.min } else { self.max }
    }

    /// Value at the unfavourable end of the legend
    #[must_use]
    pub fn worst(&self) -> f64 {
        if self.lower_is_better { self.max } else { self.min }
    }

    /// Ramp stops ordered from `min` to `max`
    #[must_use]
    pub fn legend_stops(&self) -> [Rgb; 3] {
        if self.lower_is_better {
            [RAMP_GOOD, RAMP_MEDIUM, RAMP_BAD]
        } else {
            [RAMP_BAD, RAMP_MEDIUM, RAMP_GOOD]
        }
    }
}
