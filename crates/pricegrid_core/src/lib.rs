//! Loan pricing scenario engine
//!
//! This crate computes derived credit metrics for a leveraged loan scenario and
//! sweeps two inputs across a cartesian grid. It supports:
//! - Single-scenario metrics (all-in yield, leverage, coverage, effective rate)
//! - Axis sampling with fixed 3-decimal rounding
//! - Two-dimensional sweeps with row-major cell storage
//! - Red/yellow/green heatmap color scaling with per-metric directionality
//! - Delimited-text export of sweep results
//!
//! # Builder DSL
//!
//! ```ignore
//! use pricegrid_core::config::ScenarioBuilder;
//! use pricegrid_core::analysis::{AxisSpec, build_grid};
//! use pricegrid_core::model::InputField;
//!
//! let inputs = ScenarioBuilder::new()
//!     .loan_amount(100.0)
//!     .base_rate(5.0)
//!     .spread_bps(300.0)
//!     .oid(1.0)
//!     .tenor(5.0)
//!     .ebitda(20.0)
//!     .build();
//!
//! let grid = build_grid(
//!     &inputs,
//!     &AxisSpec::new(InputField::Spread, 200.0, 400.0, 50.0)?,
//!     &AxisSpec::new(InputField::Oid, 0.0, 2.0, 0.5)?,
//! )?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod calculator;
pub mod error;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calculator::compute;
pub use config::ScenarioBuilder;
pub use error::{AxisError, PricingError};
