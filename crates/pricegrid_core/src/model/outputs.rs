//! Derived credit metrics and the typed metric selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::inputs::{ParseFieldError, normalize_key};

/// Derived metrics for one scenario.
///
/// `dscr` is computed from the same formula as `interest_coverage`; there is
/// no principal amortization in the model, so the two are always equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutputs {
    /// All-in yield (%)
    pub all_in_yield: f64,
    /// Loan amount / EBITDA (x)
    pub leverage: f64,
    /// EBITDA / annual interest (x)
    pub interest_coverage: f64,
    /// Coupon grossed up by OID (%)
    pub effective_rate: f64,
    /// Annual interest payment ($M)
    pub total_debt_service: f64,
    /// Debt service coverage (x)
    pub dscr: f64,
}

impl ScenarioOutputs {
    /// Read a single metric
    #[must_use]
    pub fn get(&self, metric: OutputMetric) -> f64 {
        match metric {
            OutputMetric::AllInYield => self.all_in_yield,
            OutputMetric::Leverage => self.leverage,
            OutputMetric::InterestCoverage => self.interest_coverage,
            OutputMetric::EffectiveRate => self.effective_rate,
            OutputMetric::TotalDebtService => self.total_debt_service,
            OutputMetric::Dscr => self.dscr,
        }
    }

    /// True when every metric is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        OutputMetric::ALL.iter().all(|&m| self.get(m).is_finite())
    }
}

/// One of the six derived metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputMetric {
    AllInYield,
    Leverage,
    InterestCoverage,
    EffectiveRate,
    TotalDebtService,
    Dscr,
}

impl OutputMetric {
    pub const ALL: [OutputMetric; 6] = [
        OutputMetric::AllInYield,
        OutputMetric::Leverage,
        OutputMetric::InterestCoverage,
        OutputMetric::EffectiveRate,
        OutputMetric::TotalDebtService,
        OutputMetric::Dscr,
    ];

    /// Columns written by a default grid export, after the two axis columns
    pub const EXPORT_DEFAULT: [OutputMetric; 4] = [
        OutputMetric::AllInYield,
        OutputMetric::Leverage,
        OutputMetric::InterestCoverage,
        OutputMetric::Dscr,
    ];

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::AllInYield => "allInYield",
            Self::Leverage => "leverage",
            Self::InterestCoverage => "interestCoverage",
            Self::EffectiveRate => "effectiveRate",
            Self::TotalDebtService => "totalDebtService",
            Self::Dscr => "dscr",
        }
    }

    /// Heatmap title
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AllInYield => "All-In Yield (%)",
            Self::Leverage => "Leverage (x)",
            Self::InterestCoverage => "Interest Coverage (x)",
            Self::EffectiveRate => "Effective Rate (%)",
            Self::TotalDebtService => "Annual Debt Service ($M)",
            Self::Dscr => "DSCR (x)",
        }
    }

    /// Result card caption
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::AllInYield => "All-In Yield",
            Self::Leverage => "Net Debt / EBITDA",
            Self::InterestCoverage => "Interest Coverage",
            Self::EffectiveRate => "Effective Rate",
            Self::TotalDebtService => "Annual Debt Service",
            Self::Dscr => "DSCR",
        }
    }

    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Self::AllInYield | Self::EffectiveRate => "%",
            Self::Leverage | Self::InterestCoverage | Self::Dscr => "x",
            Self::TotalDebtService => "M",
        }
    }

    /// Whether smaller values are the favourable end of the color ramp.
    ///
    /// Only leverage is inverted.
    #[must_use]
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::Leverage)
    }
}

impl fmt::Display for OutputMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OutputMetric {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(s);
        Self::ALL
            .iter()
            .copied()
            .find(|metric| normalize_key(metric.key()) == wanted)
            .ok_or_else(|| ParseFieldError {
                kind: "metric",
                name: s.to_string(),
                expected: Self::ALL.map(|m| m.key()).join(", "),
            })
    }
}
