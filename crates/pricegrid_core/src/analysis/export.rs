//! Delimited-text export of sweep results.

use std::fmt::Write;

use crate::model::OutputMetric;

use super::GridResult;

/// Suggested file name for a CSV export
pub const DEFAULT_EXPORT_FILENAME: &str = "pricing-grid-export.csv";

/// Decimal places written for every numeric field
pub const EXPORT_DECIMALS: usize = 4;

/// Written in place of NaN or infinite values
pub const UNDEFINED_FIELD: &str = "n/a";

fn push_number(out: &mut String, value: f64) {
    if value.is_finite() {
        // Writing to a String cannot fail
        let _ = write!(out, "{value:.EXPORT_DECIMALS$}");
    } else {
        out.push_str(UNDEFINED_FIELD);
    }
}

/// Render a grid as delimited text.
///
/// The header holds the two axis keys followed by the metric keys in the
/// order given. Each cell becomes one newline-terminated row in cell order.
#[must_use]
pub fn to_delimited_text(grid: &GridResult, columns: &[OutputMetric], delimiter: char) -> String {
    let mut out = String::new();

    let header = [grid.axis1().key(), grid.axis2().key()]
        .into_iter()
        .chain(columns.iter().map(OutputMetric::key));
    for (i, name) in header.enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(name);
    }
    out.push('\n');

    for cell in grid.cells() {
        push_number(&mut out, cell.axis1_value);
        out.push(delimiter);
        push_number(&mut out, cell.axis2_value);
        for &metric in columns {
            out.push(delimiter);
            push_number(&mut out, cell.outputs.get(metric));
        }
        out.push('\n');
    }

    out
}

/// Comma-separated export with the default metric columns
#[must_use]
pub fn to_csv(grid: &GridResult) -> String {
    to_delimited_text(grid, &OutputMetric::EXPORT_DEFAULT, ',')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AxisSpec, build_grid};
    use crate::model::{InputField, ScenarioInputs};

    fn small_grid() -> GridResult {
        build_grid(
            &ScenarioInputs::default(),
            &AxisSpec::new(InputField::Spread, 300.0, 400.0, 100.0).unwrap(),
            &AxisSpec::new(InputField::Ebitda, 20.0, 25.0, 5.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = to_csv(&small_grid());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "spread,ebitda,allInYield,leverage,interestCoverage,dscr"
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "300.0000,20.0000,8.2000,5.0000,2.5000,2.5000");
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_custom_columns_and_delimiter() {
        let text = to_delimited_text(
            &small_grid(),
            &[OutputMetric::TotalDebtService, OutputMetric::EffectiveRate],
            '\t',
        );
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("spread\tebitda\ttotalDebtService\teffectiveRate")
        );
        assert_eq!(lines.next(), Some("300.0000\t20.0000\t8.0000\t8.0800"));
    }

    #[test]
    fn test_undefined_values_are_marked() {
        let grid = build_grid(
            &ScenarioInputs::default(),
            &AxisSpec::new(InputField::Tenor, 0.0, 1.0, 1.0).unwrap(),
            &AxisSpec::new(InputField::Oid, 1.0, 1.0, 1.0).unwrap(),
        )
        .unwrap();
        let csv = to_csv(&grid);
        let first_row = csv.lines().nth(1).unwrap();
        assert_eq!(first_row, "0.0000,1.0000,n/a,5.0000,2.5000,2.5000");
    }

    #[test]
    fn test_empty_grid_exports_header_only() {
        let grid = build_grid(
            &ScenarioInputs::default(),
            &AxisSpec::new(InputField::Spread, 5.0, 1.0, 1.0).unwrap(),
            &AxisSpec::new(InputField::Oid, 0.0, 1.0, 1.0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            to_csv(&grid),
            "spread,oid,allInYield,leverage,interestCoverage,dscr\n"
        );
    }
}
