//! Scenario configuration
//!
//! The engine takes a plain [`ScenarioInputs`](crate::model::ScenarioInputs)
//! record. For a more ergonomic way to create one, use the builder DSL:
//!
//! ```ignore
//! use pricegrid_core::config::ScenarioBuilder;
//!
//! let inputs = ScenarioBuilder::standard_model()
//!     .spread_bps(425.0)
//!     .ebitda(35.0)
//!     .try_build()?;
//! ```

pub mod builder;

pub use builder::ScenarioBuilder;

/// Name of the model whose inputs [`ScenarioInputs::default`](crate::model::ScenarioInputs) carries
pub const STANDARD_MODEL_NAME: &str = "Standard Credit Model v2.3";
