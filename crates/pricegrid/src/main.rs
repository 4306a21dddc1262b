use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use pricegrid::commands::{self, GridRequest, InputOverrides, parse_axis};
use pricegrid::{Settings, init_logging};
use pricegrid_core::analysis::AxisSpec;
use pricegrid_core::config::STANDARD_MODEL_NAME;
use pricegrid_core::model::OutputMetric;

#[derive(Parser, Debug)]
#[command(name = "pricegrid")]
#[command(about = "Loan pricing scenarios and two-input sensitivity grids")]
struct Args {
    /// Scenario file (YAML); the standard credit model is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the data directory (default: ~/.pricegrid/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the metrics for one scenario
    Run {
        #[command(flatten)]
        overrides: InputOverrides,

        /// Print the metrics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep two inputs and print a heatmap of one metric
    Grid {
        /// Vertical axis as field:min:max:step
        #[arg(long, value_parser = parse_axis)]
        axis1: Option<AxisSpec>,

        /// Horizontal axis as field:min:max:step
        #[arg(long, value_parser = parse_axis)]
        axis2: Option<AxisSpec>,

        /// Metric to color (allInYield, leverage, interestCoverage, ...)
        #[arg(short, long)]
        metric: Option<OutputMetric>,

        /// Write every cell to a CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Disable terminal colors
        #[arg(long)]
        no_color: bool,

        #[command(flatten)]
        overrides: InputOverrides,
    },
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pricegrid")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let settings = Settings::load_or_default(args.config.as_deref())
        .wrap_err("failed to load scenario file")?;
    match &args.config {
        Some(path) => tracing::info!(path = %path.display(), "using scenario file"),
        None => tracing::info!(model = STANDARD_MODEL_NAME, "using default scenario"),
    }

    let mut out = io::stdout().lock();
    let result = match args.command {
        Command::Run { overrides, json } => {
            commands::run_single(&settings, &overrides, json, &mut out)
        }
        Command::Grid {
            axis1,
            axis2,
            metric,
            export,
            no_color,
            overrides,
        } => {
            let request = GridRequest {
                axis1,
                axis2,
                metric,
                export,
                color: !no_color,
                overrides,
            };
            commands::run_grid(&settings, &request, &mut out)
        }
    };

    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    tracing::info!("pricegrid finished");
    result
}
