//! Single-scenario metric calculation.
//!
//! Every metric is a closed-form expression of the inputs. `compute` rejects
//! inputs that would divide by zero; [`ScenarioOutputs::from_inputs`] is the
//! unchecked form used inside sweeps, where singular cells are reported as
//! non-finite values instead of failing the whole grid.

use crate::error::{PricingError, Result};
use crate::model::{InputField, ScenarioInputs, ScenarioOutputs};

impl ScenarioOutputs {
    /// Evaluate all metrics without validation. Division by zero yields
    /// infinities or NaN.
    #[must_use]
    pub fn from_inputs(inputs: &ScenarioInputs) -> Self {
        let coupon = inputs.coupon_rate();
        let total_debt_service = inputs.loan_amount * coupon / 100.0;

        Self {
            all_in_yield: coupon + inputs.oid / inputs.tenor,
            leverage: inputs.loan_amount / inputs.ebitda,
            interest_coverage: inputs.ebitda / total_debt_service,
            effective_rate: coupon * (1.0 + inputs.oid / 100.0),
            total_debt_service,
            dscr: inputs.ebitda / total_debt_service,
        }
    }
}

/// Check that the inputs can be evaluated without hitting a singularity.
///
/// Negative amounts are accepted; only NaN/infinite inputs, a zero tenor and
/// a zero annual interest payment are rejected.
pub fn validate(inputs: &ScenarioInputs) -> Result<()> {
    if let Some(field) = inputs.first_non_finite() {
        return Err(PricingError::input(field, "must be a finite number"));
    }
    if inputs.tenor == 0.0 {
        return Err(PricingError::input(InputField::Tenor, "must not be zero"));
    }
    if inputs.loan_amount * inputs.coupon_rate() == 0.0 {
        let field = if inputs.loan_amount == 0.0 {
            InputField::LoanAmount
        } else {
            InputField::Spread
        };
        return Err(PricingError::input(
            field,
            "annual debt service is zero (loan amount or base rate + spread)",
        ));
    }
    Ok(())
}

/// Compute the derived metrics for one scenario.
pub fn compute(inputs: &ScenarioInputs) -> Result<ScenarioOutputs> {
    validate(inputs)?;
    Ok(ScenarioOutputs::from_inputs(inputs))
}
