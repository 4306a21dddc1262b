//! Scenario files.
//!
//! A scenario file is YAML. Every section is optional; missing inputs fall
//! back to the standard credit model.
//!
//! ```yaml
//! inputs:
//!   loanAmount: 150
//!   baseRate: 4.5
//!   spread: 350
//!   oid: 1.5
//!   tenor: 6
//!   ebitda: 30
//! grid:
//!   axis1: { field: spread, min: 250, max: 450, step: 50 }
//!   axis2: { field: oid, min: 0, max: 2, step: 0.5 }
//!   metric: leverage
//! limits:
//!   max_cells: 2500
//! ```

use std::fs;
use std::path::Path;

use pricegrid_core::analysis::AxisSpec;
use pricegrid_core::model::{OutputMetric, ScenarioInputs};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound on cells in one sweep
pub const DEFAULT_MAX_CELLS: usize = 10_000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario file: {0}")]
    Parse(String),
}

/// Saved sweep definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub axis1: AxisSpec,
    pub axis2: AxisSpec,
    /// Metric colored in the heatmap
    #[serde(default = "default_metric")]
    pub metric: OutputMetric,
}

fn default_metric() -> OutputMetric {
    OutputMetric::AllInYield
}

/// Bounds the caller places on sweep size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_cells: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// Contents of a scenario file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub inputs: ScenarioInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSettings>,
    pub limits: Limits,
}

impl Settings {
    /// Parse a scenario file from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, SettingsError> {
        serde_saphyr::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Load a scenario file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded scenario file");
        Ok(settings)
    }

    /// Load `path` if given, otherwise use the standard model
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
