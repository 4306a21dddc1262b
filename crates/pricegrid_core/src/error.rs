use thiserror::Error;

use crate::model::InputField;

/// Errors raised while validating an axis definition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    #[error("step for {field} must be positive (got {step})")]
    NonPositiveStep { field: &'static str, step: f64 },
    #[error("{bound} for {field} must be a finite number (got {value})")]
    NonFinite {
        field: &'static str,
        bound: &'static str,
        value: f64,
    },
    #[error("both sweep axes vary {0}; choose two different inputs")]
    DuplicateField(&'static str),
    #[error("axis {field} would produce more than {limit} samples; widen the step")]
    TooManySamples { field: &'static str, limit: usize },
    #[error("sweep of {rows} x {cols} cells is too large to evaluate")]
    GridTooLarge { rows: usize, cols: usize },
}

/// Errors returned by the scenario engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// An input would make a metric undefined (division by zero, NaN)
    #[error("invalid input {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
    #[error("invalid sweep axis: {0}")]
    InvalidAxis(#[from] AxisError),
}

impl PricingError {
    pub(crate) fn input(field: InputField, reason: &'static str) -> Self {
        PricingError::InvalidInput {
            field: field.key(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = PricingError::input(InputField::Tenor, "must not be zero");
        assert_eq!(err.to_string(), "invalid input tenor: must not be zero");

        let err: PricingError = AxisError::NonPositiveStep {
            field: "spread",
            step: 0.0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid sweep axis: step for spread must be positive (got 0)"
        );
    }

    #[test]
    fn test_size_errors() {
        let err = AxisError::TooManySamples {
            field: "oid",
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "axis oid would produce more than 10 samples; widen the step"
        );
        let err = AxisError::GridTooLarge { rows: 3, cols: 4 };
        assert_eq!(err.to_string(), "sweep of 3 x 4 cells is too large to evaluate");
    }
}
