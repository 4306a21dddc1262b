//! Configuration types for two-dimensional sweeps.

use serde::{Deserialize, Serialize};

use crate::error::AxisError;
use crate::model::InputField;

/// Decimal places kept on every generated axis sample
pub const AXIS_DECIMALS: i32 = 3;

/// Relative slack (in steps) allowed when deciding whether `max` was reached
const STEP_TOLERANCE: f64 = 1e-9;

/// Upper bound on the samples one axis may produce
pub const MAX_AXIS_SAMPLES: usize = 1_000_000;

/// Round to [`AXIS_DECIMALS`] places
#[must_use]
pub fn round_sample(value: f64) -> f64 {
    let scale = 10f64.powi(AXIS_DECIMALS);
    (value * scale).round() / scale
}

/// Generate `min, min + step, min + 2·step, …` up to and including `max`.
///
/// Each sample is computed as `min + k·step` rather than by running addition,
/// then rounded to three decimals. `max` is included when it lies on a step
/// multiple within floating-point tolerance. An empty vector is returned when
/// `min > max`. Axes longer than [`MAX_AXIS_SAMPLES`] are rejected.
pub fn range(min: f64, max: f64, step: f64) -> Result<Vec<f64>, AxisError> {
    range_for("axis", min, max, step)
}

fn range_for(field: &'static str, min: f64, max: f64, step: f64) -> Result<Vec<f64>, AxisError> {
    let count = count_for(field, min, max, step)?;
    Ok((0..count)
        .map(|k| round_sample(min + step * k as f64))
        .collect())
}

/// Number of samples `range_for` yields, without generating them
fn count_for(field: &'static str, min: f64, max: f64, step: f64) -> Result<usize, AxisError> {
    check_finite(field, "min", min)?;
    check_finite(field, "max", max)?;
    check_finite(field, "step", step)?;
    if step <= 0.0 {
        return Err(AxisError::NonPositiveStep { field, step });
    }
    if min > max {
        return Ok(0);
    }

    // Stays in f64 until the bound check; the span may be infinite
    let limit = max + step * STEP_TOLERANCE;
    let last = ((limit - min) / step).floor();
    if last >= MAX_AXIS_SAMPLES as f64 {
        return Err(AxisError::TooManySamples {
            field,
            limit: MAX_AXIS_SAMPLES,
        });
    }

    let mut count = last as usize + 1;
    // The floored quotient can overshoot by one when min + k·step rounds up
    while count > 1 && min + step * (count - 1) as f64 > limit {
        count -= 1;
    }
    Ok(count)
}

fn check_finite(field: &'static str, bound: &'static str, value: f64) -> Result<(), AxisError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AxisError::NonFinite {
            field,
            bound,
            value,
        })
    }
}

/// One sweep axis: which input varies and over what range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// The input overridden along this axis
    pub field: InputField,
    pub min: f64,
    pub max: f64,
    /// Distance between samples (must be positive)
    pub step: f64,
}

impl AxisSpec {
    /// Create an axis, rejecting a non-positive step or non-finite bounds
    pub fn new(field: InputField, min: f64, max: f64, step: f64) -> Result<Self, AxisError> {
        let axis = Self {
            field,
            min,
            max,
            step,
        };
        axis.validate()?;
        Ok(axis)
    }

    pub fn validate(&self) -> Result<(), AxisError> {
        let field = self.field.key();
        check_finite(field, "min", self.min)?;
        check_finite(field, "max", self.max)?;
        check_finite(field, "step", self.step)?;
        if self.step <= 0.0 {
            return Err(AxisError::NonPositiveStep {
                field,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Generate the sample values for this axis
    pub fn samples(&self) -> Result<Vec<f64>, AxisError> {
        range_for(self.field.key(), self.min, self.max, self.step)
    }

    /// Number of samples the axis will produce, computed without generating them
    pub fn sample_count(&self) -> Result<usize, AxisError> {
        count_for(self.field.key(), self.min, self.max, self.step)
    }

    /// Get a descriptive label for display
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.field.label()
    }
}

/// A pair of axes describing a full sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Outer (vertical) axis
    pub axis1: AxisSpec,
    /// Inner (horizontal) axis
    pub axis2: AxisSpec,
}

impl GridSpec {
    pub fn new(axis1: AxisSpec, axis2: AxisSpec) -> Result<Self, AxisError> {
        let spec = Self { axis1, axis2 };
        spec.validate()?;
        Ok(spec)
    }

    /// Validate both axes and that they vary different inputs
    pub fn validate(&self) -> Result<(), AxisError> {
        self.axis1.validate()?;
        self.axis2.validate()?;
        if self.axis1.field == self.axis2.field {
            return Err(AxisError::DuplicateField(self.axis1.field.key()));
        }
        Ok(())
    }

    /// Get the shape of the sweep grid (sample counts for each axis)
    pub fn grid_shape(&self) -> Result<(usize, usize), AxisError> {
        Ok((self.axis1.sample_count()?, self.axis2.sample_count()?))
    }

    /// Get total number of cells the sweep will produce
    pub fn total_cells(&self) -> Result<usize, AxisError> {
        let (rows, cols) = self.grid_shape()?;
        rows.checked_mul(cols).ok_or(AxisError::GridTooLarge { rows, cols })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_includes_max() {
        assert_eq!(range(0.0, 10.0, 2.0).unwrap(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_range_single_point() {
        assert_eq!(range(1.0, 1.0, 1.0).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_range_min_above_max_is_empty() {
        assert_eq!(range(5.0, 1.0, 1.0).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_range_excludes_unreachable_max() {
        assert_eq!(range(0.0, 5.0, 2.0).unwrap(), vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_range_fractional_step_has_no_drift() {
        // Running addition reaches 0.30000000000000004 and would drop the last point
        assert_eq!(range(0.0, 0.3, 0.1).unwrap(), vec![0.0, 0.1, 0.2, 0.3]);

        let samples = range(0.0, 1.0, 0.1).unwrap();
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[7], 0.7);
        assert_eq!(samples[10], 1.0);
    }

    #[test]
    fn test_range_rounds_to_three_decimals() {
        assert_eq!(range(0.0, 0.01, 0.0033).unwrap(), vec![0.0, 0.003, 0.007, 0.01]);
        assert_eq!(round_sample(1.23456), 1.235);
    }

    #[test]
    fn test_range_negative_bounds() {
        assert_eq!(range(-1.0, 1.0, 0.5).unwrap(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_range_rejects_bad_step() {
        assert_eq!(
            range(0.0, 10.0, 0.0),
            Err(AxisError::NonPositiveStep {
                field: "axis",
                step: 0.0
            })
        );
        assert!(range(0.0, 10.0, -1.0).is_err());
        assert!(range(0.0, f64::INFINITY, 1.0).is_err());
        assert!(range(0.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_range_rejects_tiny_step() {
        assert_eq!(
            range(0.0, 1.0, 1e-308),
            Err(AxisError::TooManySamples {
                field: "axis",
                limit: MAX_AXIS_SAMPLES
            })
        );
        // Span overflows to infinity
        assert!(range(-1e308, 1e308, 1.0).is_err());
    }

    #[test]
    fn test_range_at_sample_cap() {
        let samples = range(0.0, (MAX_AXIS_SAMPLES - 1) as f64, 1.0).unwrap();
        assert_eq!(samples.len(), MAX_AXIS_SAMPLES);
        assert!(range(0.0, MAX_AXIS_SAMPLES as f64, 1.0).is_err());
    }

    #[test]
    fn test_sample_count_matches_samples() {
        let axes = [
            (0.0, 0.3, 0.1),
            (0.0, 5.0, 2.0),
            (0.0, 0.01, 0.0033),
            (250.0, 450.0, 33.3),
            (3.0, 7.0, 0.75),
            (5.0, 1.0, 1.0),
        ];
        for (min, max, step) in axes {
            let axis = AxisSpec::new(InputField::Spread, min, max, step).unwrap();
            assert_eq!(
                axis.sample_count().unwrap(),
                axis.samples().unwrap().len(),
                "{min}:{max}:{step}"
            );
        }
    }

    #[test]
    fn test_huge_axis_is_counted_without_sampling() {
        let axis = AxisSpec::new(InputField::Spread, 0.0, 1e12, 1.0).unwrap();
        assert_eq!(
            axis.sample_count(),
            Err(AxisError::TooManySamples {
                field: "spread",
                limit: MAX_AXIS_SAMPLES
            })
        );

        let wide = AxisSpec::new(InputField::Spread, 0.0, 999_999.0, 1.0).unwrap();
        let spec = GridSpec::new(wide, AxisSpec::new(InputField::Oid, 0.0, 1.0, 1.0).unwrap())
            .unwrap();
        assert_eq!(spec.total_cells().unwrap(), 2_000_000);
    }

    #[test]
    fn test_range_is_restartable() {
        let axis = AxisSpec::new(InputField::Spread, 250.0, 400.0, 25.0).unwrap();
        assert_eq!(axis.samples().unwrap(), axis.samples().unwrap());
        assert_eq!(axis.sample_count().unwrap(), 7);
    }

    #[test]
    fn test_axis_spec_rejects_non_positive_step() {
        let err = AxisSpec::new(InputField::Oid, 0.0, 2.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            AxisError::NonPositiveStep {
                field: "oid",
                step: 0.0
            }
        );
    }

    #[test]
    fn test_grid_spec_rejects_duplicate_field() {
        let a = AxisSpec::new(InputField::Tenor, 3.0, 7.0, 1.0).unwrap();
        let b = AxisSpec::new(InputField::Tenor, 1.0, 2.0, 1.0).unwrap();
        assert_eq!(GridSpec::new(a, b), Err(AxisError::DuplicateField("tenor")));
    }

    #[test]
    fn test_grid_spec_total_cells() {
        let spec = GridSpec::new(
            AxisSpec::new(InputField::Spread, 200.0, 400.0, 50.0).unwrap(),
            AxisSpec::new(InputField::Oid, 0.0, 2.0, 0.5).unwrap(),
        )
        .unwrap();
        assert_eq!(spec.grid_shape().unwrap(), (5, 5));
        assert_eq!(spec.total_cells().unwrap(), 25);
    }
}
