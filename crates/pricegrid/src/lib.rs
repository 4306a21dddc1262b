//! Command-line front end for the loan pricing scenario engine
//!
//! Loads a scenario file, applies per-field overrides, and prints either the
//! single-scenario result cards or a colored sweep heatmap. Diagnostics are
//! written to a rotating log file in the data directory.

pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;
pub mod util;

pub use logging::init_logging;
pub use settings::Settings;
