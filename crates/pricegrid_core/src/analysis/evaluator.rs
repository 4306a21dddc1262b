//! Sweep evaluator - recomputes scenario metrics across a two-axis grid.
//!
//! Every cell copies the base inputs, overrides the two swept fields and
//! evaluates the closed-form metrics. Cells are stored in row-major order:
//! the first axis is the outer loop, the second axis varies fastest.

use serde::{Deserialize, Serialize};

use crate::calculator;
use crate::error::{PricingError, Result};
use crate::model::{InputField, OutputMetric, ScenarioInputs, ScenarioOutputs};

use super::{AxisSpec, GridSpec};

/// Result of evaluating one (axis1, axis2) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub axis1_value: f64,
    pub axis2_value: f64,
    pub outputs: ScenarioOutputs,
}

/// Immutable result of a two-dimensional sweep.
///
/// Holds `axis1_values.len() * axis2_values.len()` cells. A sweep over an
/// axis with no samples is valid and produces an empty result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridResult {
    axis1: InputField,
    axis2: InputField,
    axis1_values: Vec<f64>,
    axis2_values: Vec<f64>,
    cells: Vec<GridCell>,
}

impl GridResult {
    /// Field varied along the outer axis
    #[must_use]
    pub fn axis1(&self) -> InputField {
        self.axis1
    }

    /// Field varied along the inner axis
    #[must_use]
    pub fn axis2(&self) -> InputField {
        self.axis2
    }

    #[must_use]
    pub fn axis1_values(&self) -> &[f64] {
        &self.axis1_values
    }

    #[must_use]
    pub fn axis2_values(&self) -> &[f64] {
        &self.axis2_values
    }

    /// All cells in axis1-outer, axis2-inner order
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// (rows, columns)
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.axis1_values.len(), self.axis2_values.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at row `i` (axis1 index) and column `j` (axis2 index)
    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> Option<&GridCell> {
        let (rows, cols) = self.shape();
        if i >= rows || j >= cols {
            return None;
        }
        self.cells.get(i * cols + j)
    }

    /// Iterate over rows, one slice of cells per axis1 sample
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        let cols = self.axis2_values.len().max(1);
        self.cells.chunks(cols)
    }

    /// Values of one metric for every cell, in cell order
    pub fn metric_values(&self, metric: OutputMetric) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().map(move |cell| cell.outputs.get(metric))
    }

    /// Smallest and largest finite value of a metric, or `None` if no cell
    /// has a finite value
    #[must_use]
    pub fn metric_range(&self, metric: OutputMetric) -> Option<(f64, f64)> {
        self.metric_values(metric)
            .filter(|value| value.is_finite())
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }

    /// Number of cells holding at least one non-finite metric
    #[must_use]
    pub fn undefined_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.outputs.is_finite())
            .count()
    }
}

/// Run a two-axis sweep over the base inputs.
///
/// The base inputs must be finite. Individual cells whose overrides hit a
/// singularity (for example a tenor axis that crosses zero) keep their
/// non-finite metrics; callers render those as undefined.
pub fn build_grid(
    base: &ScenarioInputs,
    axis1: &AxisSpec,
    axis2: &AxisSpec,
) -> Result<GridResult> {
    let spec = GridSpec::new(*axis1, *axis2)?;
    sweep_evaluate(base, &spec)
}

/// Run a sweep described by a validated [`GridSpec`]
pub fn sweep_evaluate(base: &ScenarioInputs, spec: &GridSpec) -> Result<GridResult> {
    spec.validate()?;
    if let Some(field) = base.first_non_finite() {
        return Err(PricingError::input(field, "must be a finite number"));
    }

    let axis1_values = spec.axis1.samples()?;
    let axis2_values = spec.axis2.samples()?;
    let total = axis1_values.len() * axis2_values.len();

    tracing::debug!(
        axis1 = spec.axis1.field.key(),
        axis2 = spec.axis2.field.key(),
        rows = axis1_values.len(),
        cols = axis2_values.len(),
        "building sweep grid"
    );

    let mut cells = Vec::with_capacity(total);
    for &v1 in &axis1_values {
        for &v2 in &axis2_values {
            let inputs = base
                .with(spec.axis1.field, v1)
                .with(spec.axis2.field, v2);
            let outputs = match calculator::compute(&inputs) {
                Ok(outputs) => outputs,
                Err(err) => {
                    tracing::trace!(axis1_value = v1, axis2_value = v2, %err, "undefined cell");
                    ScenarioOutputs::from_inputs(&inputs)
                }
            };
            cells.push(GridCell {
                axis1_value: v1,
                axis2_value: v2,
                outputs,
            });
        }
    }

    let grid = GridResult {
        axis1: spec.axis1.field,
        axis2: spec.axis2.field,
        axis1_values,
        axis2_values,
        cells,
    };

    let undefined = grid.undefined_count();
    if undefined > 0 {
        tracing::warn!(undefined, total, "sweep contains cells with undefined metrics");
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AxisError;

    fn spread_by_oid() -> (AxisSpec, AxisSpec) {
        (
            AxisSpec::new(InputField::Spread, 200.0, 400.0, 100.0).unwrap(),
            AxisSpec::new(InputField::Oid, 0.0, 1.0, 0.5).unwrap(),
        )
    }

    #[test]
    fn test_size_law() {
        let (a1, a2) = spread_by_oid();
        let grid = build_grid(&ScenarioInputs::default(), &a1, &a2).unwrap();

        assert_eq!(grid.shape(), (3, 3));
        assert_eq!(grid.len(), a1.sample_count().unwrap() * a2.sample_count().unwrap());
    }

    #[test]
    fn test_cells_are_axis1_outer() {
        let (a1, a2) = spread_by_oid();
        let grid = build_grid(&ScenarioInputs::default(), &a1, &a2).unwrap();

        let coords: Vec<(f64, f64)> = grid
            .cells()
            .iter()
            .map(|c| (c.axis1_value, c.axis2_value))
            .collect();
        assert_eq!(
            coords,
            vec![
                (200.0, 0.0),
                (200.0, 0.5),
                (200.0, 1.0),
                (300.0, 0.0),
                (300.0, 0.5),
                (300.0, 1.0),
                (400.0, 0.0),
                (400.0, 0.5),
                (400.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_cell_matches_single_run() {
        let (a1, a2) = spread_by_oid();
        let base = ScenarioInputs::default();
        let grid = build_grid(&base, &a1, &a2).unwrap();

        let cell = grid.cell(2, 1).unwrap();
        let expected = calculator::compute(&ScenarioInputs {
            spread: 400.0,
            oid: 0.5,
            ..base
        })
        .unwrap();
        assert_eq!(cell.outputs, expected);
        assert!(grid.cell(3, 0).is_none());
        assert!(grid.cell(0, 3).is_none());
    }

    #[test]
    fn test_rows_follow_axis1() {
        let (a1, a2) = spread_by_oid();
        let grid = build_grid(&ScenarioInputs::default(), &a1, &a2).unwrap();

        let rows: Vec<&[GridCell]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].iter().all(|c| c.axis1_value == 300.0));
    }

    #[test]
    fn test_empty_axis_gives_empty_grid() {
        let a1 = AxisSpec::new(InputField::Spread, 400.0, 200.0, 50.0).unwrap();
        let a2 = AxisSpec::new(InputField::Oid, 0.0, 1.0, 0.5).unwrap();
        let grid = build_grid(&ScenarioInputs::default(), &a1, &a2).unwrap();

        assert!(grid.is_empty());
        assert_eq!(grid.shape(), (0, 3));
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.metric_range(OutputMetric::Leverage), None);
    }

    #[test]
    fn test_singular_cells_are_kept() {
        let a1 = AxisSpec::new(InputField::Tenor, 0.0, 2.0, 1.0).unwrap();
        let a2 = AxisSpec::new(InputField::Ebitda, 10.0, 20.0, 10.0).unwrap();
        let grid = build_grid(&ScenarioInputs::default(), &a1, &a2).unwrap();

        assert_eq!(grid.len(), 6);
        assert_eq!(grid.undefined_count(), 2);
        assert!(grid.cell(0, 0).unwrap().outputs.all_in_yield.is_infinite());
        assert!(grid.cell(1, 0).unwrap().outputs.is_finite());
    }

    #[test]
    fn test_metric_range_skips_undefined() {
        let a1 = AxisSpec::new(InputField::Tenor, 0.0, 2.0, 1.0).unwrap();
        let a2 = AxisSpec::new(InputField::Oid, 1.0, 2.0, 1.0).unwrap();
        let grid = build_grid(&ScenarioInputs::default(), &a1, &a2).unwrap();

        // tenor 1: 8 + oid, tenor 2: 8 + oid / 2
        let (min, max) = grid.metric_range(OutputMetric::AllInYield).unwrap();
        assert!((min - 8.5).abs() < 1e-9);
        assert!((max - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_same_field_twice() {
        let a = AxisSpec::new(InputField::Spread, 200.0, 300.0, 50.0).unwrap();
        let err = build_grid(&ScenarioInputs::default(), &a, &a).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidAxis(AxisError::DuplicateField("spread"))
        );
    }

    #[test]
    fn test_rejects_non_finite_base() {
        let (a1, a2) = spread_by_oid();
        let base = ScenarioInputs {
            ebitda: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            build_grid(&base, &a1, &a2),
            Err(PricingError::InvalidInput { field: "ebitda", .. })
        ));
    }

    #[test]
    fn test_sweep_evaluate_from_spec() {
        let spec = GridSpec::new(
            AxisSpec::new(InputField::BaseRate, 4.0, 6.0, 1.0).unwrap(),
            AxisSpec::new(InputField::Ebitda, 15.0, 25.0, 5.0).unwrap(),
        )
        .unwrap();
        let grid = sweep_evaluate(&ScenarioInputs::default(), &spec).unwrap();
        assert_eq!(grid.shape(), (3, 3));
        assert_eq!(grid.axis1(), InputField::BaseRate);
        assert_eq!(grid.axis2(), InputField::Ebitda);
    }
}
