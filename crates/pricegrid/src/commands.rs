//! Command handlers for the `run` and `grid` subcommands.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use pricegrid_core::analysis::{AxisSpec, GridSpec, sweep_evaluate, to_csv};
use pricegrid_core::compute;
use pricegrid_core::config::ScenarioBuilder;
use pricegrid_core::model::{InputField, OutputMetric, ScenarioInputs};

use crate::render::{render_heatmap, render_results};
use crate::settings::Settings;
use crate::util::atomic_write;

/// Per-field overrides applied on top of the scenario file
#[derive(Args, Debug, Clone, Default)]
pub struct InputOverrides {
    /// Loan amount ($M)
    #[arg(long)]
    pub loan_amount: Option<f64>,
    /// Base rate (%)
    #[arg(long)]
    pub base_rate: Option<f64>,
    /// Spread (bps)
    #[arg(long)]
    pub spread: Option<f64>,
    /// Original issue discount (% of par)
    #[arg(long)]
    pub oid: Option<f64>,
    /// Tenor (years)
    #[arg(long)]
    pub tenor: Option<f64>,
    /// EBITDA ($M)
    #[arg(long)]
    pub ebitda: Option<f64>,
}

impl InputOverrides {
    /// Apply the overrides to a base scenario
    pub fn apply(&self, base: ScenarioInputs) -> ScenarioInputs {
        ScenarioBuilder::from_inputs(base)
            .overrides([
                (InputField::LoanAmount, self.loan_amount),
                (InputField::BaseRate, self.base_rate),
                (InputField::Spread, self.spread),
                (InputField::Oid, self.oid),
                (InputField::Tenor, self.tenor),
                (InputField::Ebitda, self.ebitda),
            ])
            .build()
    }
}

/// Parse `field:min:max:step`, e.g. `spread:200:400:50`
pub fn parse_axis(s: &str) -> std::result::Result<AxisSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [field, min, max, step] = parts.as_slice() else {
        return Err(format!("expected field:min:max:step, got '{s}'"));
    };

    let field: InputField = field.parse().map_err(|e| format!("{e}"))?;
    let number = |name: &str, text: &str| {
        text.trim()
            .parse::<f64>()
            .map_err(|_| format!("{name} '{text}' is not a number"))
    };
    AxisSpec::new(
        field,
        number("min", min)?,
        number("max", max)?,
        number("step", step)?,
    )
    .map_err(|e| e.to_string())
}

/// Options for a sweep request; anything unset falls back to the scenario file
#[derive(Debug, Clone, Default)]
pub struct GridRequest {
    pub axis1: Option<AxisSpec>,
    pub axis2: Option<AxisSpec>,
    pub metric: Option<OutputMetric>,
    pub export: Option<PathBuf>,
    pub color: bool,
    pub overrides: InputOverrides,
}

/// Evaluate a single scenario and print its metrics
pub fn run_single(
    settings: &Settings,
    overrides: &InputOverrides,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let inputs = overrides.apply(settings.inputs);
    tracing::info!(?inputs, "running single scenario");

    let outputs = compute(&inputs).wrap_err("cannot evaluate scenario")?;

    if json {
        let text = serde_json::to_string_pretty(&outputs)?;
        writeln!(out, "{text}")?;
    } else {
        write!(out, "{}", render_results(&outputs))?;
    }
    Ok(())
}

/// Run a sweep, print the heatmap and optionally export it
pub fn run_grid(settings: &Settings, request: &GridRequest, out: &mut impl Write) -> Result<()> {
    let saved = settings.grid.as_ref();
    let axis1 = request
        .axis1
        .or_else(|| saved.map(|g| g.axis1))
        .ok_or_else(|| eyre!("no first axis: pass --axis1 or add a grid section"))?;
    let axis2 = request
        .axis2
        .or_else(|| saved.map(|g| g.axis2))
        .ok_or_else(|| eyre!("no second axis: pass --axis2 or add a grid section"))?;
    let metric = request
        .metric
        .or_else(|| saved.map(|g| g.metric))
        .unwrap_or(OutputMetric::AllInYield);

    let spec = GridSpec::new(axis1, axis2).wrap_err("invalid sweep")?;
    let total = spec.total_cells()?;
    if total > settings.limits.max_cells {
        bail!(
            "sweep of {total} cells exceeds the limit of {} (raise limits.max_cells or widen the steps)",
            settings.limits.max_cells
        );
    }

    let inputs = request.overrides.apply(settings.inputs);
    tracing::info!(
        axis1 = %spec.axis1.field,
        axis2 = %spec.axis2.field,
        %metric,
        total,
        "running sweep"
    );
    let grid = sweep_evaluate(&inputs, &spec).wrap_err("sweep failed")?;

    write!(out, "{}", render_heatmap(&grid, metric, request.color))?;

    if let Some(path) = &request.export {
        atomic_write(path, &to_csv(&grid))
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), rows = grid.len(), "exported sweep");
        writeln!(out, "Exported {} rows to {}", grid.len(), path.display())?;
    }
    Ok(())
}
