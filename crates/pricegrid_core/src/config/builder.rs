//! Scenario Builder
//!
//! Fluent construction of [`ScenarioInputs`], starting either from zeroed
//! inputs or from the standard credit model.
//!
//! # Example
//!
//! ```ignore
//! use pricegrid_core::config::ScenarioBuilder;
//!
//! let inputs = ScenarioBuilder::new()
//!     .loan_amount(250.0)
//!     .base_rate(4.5)
//!     .spread_bps(375.0)
//!     .oid(2.0)
//!     .tenor(6.0)
//!     .ebitda(50.0)
//!     .build();
//! ```

use crate::calculator;
use crate::error::Result;
use crate::model::{InputField, ScenarioInputs};

/// Builder for scenario inputs
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    inputs: ScenarioInputs,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Create a builder with every input set to zero
    #[must_use]
    pub fn new() -> Self {
        Self {
            inputs: ScenarioInputs {
                loan_amount: 0.0,
                base_rate: 0.0,
                spread: 0.0,
                oid: 0.0,
                tenor: 0.0,
                ebitda: 0.0,
            },
        }
    }

    /// Start from the standard credit model
    #[must_use]
    pub fn standard_model() -> Self {
        Self::from_inputs(ScenarioInputs::default())
    }

    #[must_use]
    pub fn from_inputs(inputs: ScenarioInputs) -> Self {
        Self { inputs }
    }

    // =========================================================================
    // Loan terms
    // =========================================================================

    /// Set the loan amount ($M)
    #[must_use]
    pub fn loan_amount(mut self, amount_mm: f64) -> Self {
        self.inputs.loan_amount = amount_mm;
        self
    }

    /// Set the base reference rate (%)
    #[must_use]
    pub fn base_rate(mut self, rate_pct: f64) -> Self {
        self.inputs.base_rate = rate_pct;
        self
    }

    /// Set the credit spread in basis points
    #[must_use]
    pub fn spread_bps(mut self, bps: f64) -> Self {
        self.inputs.spread = bps;
        self
    }

    /// Set the original issue discount (% of par)
    #[must_use]
    pub fn oid(mut self, pct_of_par: f64) -> Self {
        self.inputs.oid = pct_of_par;
        self
    }

    /// Set the tenor in years
    #[must_use]
    pub fn tenor(mut self, years: f64) -> Self {
        self.inputs.tenor = years;
        self
    }

    // =========================================================================
    // Borrower
    // =========================================================================

    /// Set EBITDA ($M)
    #[must_use]
    pub fn ebitda(mut self, ebitda_mm: f64) -> Self {
        self.inputs.ebitda = ebitda_mm;
        self
    }

    /// Set any field by its typed name
    #[must_use]
    pub fn field(mut self, field: InputField, value: f64) -> Self {
        self.inputs.set(field, value);
        self
    }

    /// Apply optional overrides, skipping `None`
    #[must_use]
    pub fn overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (InputField, Option<f64>)>,
    {
        for (field, value) in overrides {
            if let Some(value) = value {
                self.inputs.set(field, value);
            }
        }
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Return the inputs without validation
    #[must_use]
    pub fn build(self) -> ScenarioInputs {
        self.inputs
    }

    /// Return the inputs if they can be evaluated without a singularity
    pub fn try_build(self) -> Result<ScenarioInputs> {
        calculator::validate(&self.inputs)?;
        Ok(self.inputs)
    }
}
