//! Scenario inputs and the typed field enumeration used by sweep axes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Loan pricing inputs for a single scenario.
///
/// Units are fixed: amounts in $M, rates in percent, spread in basis points,
/// OID in percent of par, tenor in years. Fields missing from serialized
/// input take their standard-model value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioInputs {
    /// Loan amount ($M)
    #[serde(alias = "loan_amount")]
    pub loan_amount: f64,
    /// Base reference rate (%)
    #[serde(alias = "base_rate")]
    pub base_rate: f64,
    /// Credit spread (bps)
    pub spread: f64,
    /// Original issue discount (% of par)
    pub oid: f64,
    /// Tenor (years)
    pub tenor: f64,
    /// EBITDA ($M)
    pub ebitda: f64,
}

impl Default for ScenarioInputs {
    /// The standard credit model used when no scenario is supplied.
    fn default() -> Self {
        Self {
            loan_amount: 100.0,
            base_rate: 5.0,
            spread: 300.0,
            oid: 1.0,
            tenor: 5.0,
            ebitda: 20.0,
        }
    }
}

impl ScenarioInputs {
    /// Read a single field
    #[must_use]
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::LoanAmount => self.loan_amount,
            InputField::BaseRate => self.base_rate,
            InputField::Spread => self.spread,
            InputField::Oid => self.oid,
            InputField::Tenor => self.tenor,
            InputField::Ebitda => self.ebitda,
        }
    }

    /// Overwrite a single field
    pub fn set(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::LoanAmount => &mut self.loan_amount,
            InputField::BaseRate => &mut self.base_rate,
            InputField::Spread => &mut self.spread,
            InputField::Oid => &mut self.oid,
            InputField::Tenor => &mut self.tenor,
            InputField::Ebitda => &mut self.ebitda,
        };
        *slot = value;
    }

    /// Return a copy with one field replaced
    #[must_use]
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Base rate plus spread, in percent
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.base_rate + self.spread / 100.0
    }

    /// First field holding a NaN or infinite value, if any
    #[must_use]
    pub fn first_non_finite(&self) -> Option<InputField> {
        InputField::ALL
            .iter()
            .copied()
            .find(|&field| !self.get(field).is_finite())
    }
}

/// One of the six scenario inputs, used to select a sweep axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    LoanAmount,
    BaseRate,
    Spread,
    Oid,
    Tenor,
    Ebitda,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        InputField::LoanAmount,
        InputField::BaseRate,
        InputField::Spread,
        InputField::Oid,
        InputField::Tenor,
        InputField::Ebitda,
    ];

    /// Stable camelCase key, used in export headers and scenario files
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::LoanAmount => "loanAmount",
            Self::BaseRate => "baseRate",
            Self::Spread => "spread",
            Self::Oid => "oid",
            Self::Tenor => "tenor",
            Self::Ebitda => "ebitda",
        }
    }

    /// Display label including the unit
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoanAmount => "Loan Amt ($M)",
            Self::BaseRate => "Base Rate (%)",
            Self::Spread => "Spread (bps)",
            Self::Oid => "OID (%)",
            Self::Tenor => "Tenor (yrs)",
            Self::Ebitda => "EBITDA ($M)",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a field or metric name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}' (expected one of: {expected})")]
pub struct ParseFieldError {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}

/// Normalise `loanAmount`, `loan_amount` and `LOAN-AMOUNT` to one spelling.
pub(crate) fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for InputField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(s);
        Self::ALL
            .iter()
            .copied()
            .find(|field| normalize_key(field.key()) == wanted)
            .ok_or_else(|| ParseFieldError {
                kind: "input field",
                name: s.to_string(),
                expected: Self::ALL.map(|f| f.key()).join(", "),
            })
    }
}
