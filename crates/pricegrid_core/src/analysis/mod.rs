//! Two-dimensional parameter sweep analysis.
//!
//! A sweep varies two of the six scenario inputs over evenly spaced samples
//! and recomputes every metric at each (axis1, axis2) pair:
//!
//! ```ignore
//! use pricegrid_core::analysis::{AxisSpec, ColorScale, build_grid, to_csv};
//! use pricegrid_core::model::{InputField, OutputMetric, ScenarioInputs};
//!
//! let grid = build_grid(
//!     &ScenarioInputs::default(),
//!     &AxisSpec::new(InputField::Spread, 200.0, 400.0, 50.0)?,
//!     &AxisSpec::new(InputField::Oid, 0.0, 2.0, 0.5)?,
//! )?;
//!
//! // Color one metric for display
//! if let Some(scale) = ColorScale::for_metric(&grid, OutputMetric::Leverage) {
//!     for cell in grid.cells() {
//!         let color = scale.color(cell.outputs.leverage);
//!     }
//! }
//!
//! // Export for download
//! let csv = to_csv(&grid);
//! ```
//!
//! The returned [`GridResult`] is owned by the caller and never mutated; a new
//! sweep produces a new result.

mod color;
mod config;
mod evaluator;
mod export;

pub use color::*;
pub use config::*;
pub use evaluator::*;
pub use export::*;
