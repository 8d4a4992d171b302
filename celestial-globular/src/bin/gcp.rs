//! gcp: chart a globular cluster catalog and estimate the Galactic Center.
//!
//! With no arguments, reads `./equatorial_coordinates.txt`, prints the
//! RA × Dec chart, then the center position and distance estimates.

use anyhow::Context;
use celestial_globular::catalog::{load_catalog, DEFAULT_CATALOG_PATH};
use celestial_globular::{estimate_center, CenterEstimate, SkyChart, SurveyConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "gcp")]
#[command(about = "Estimate the Galactic Center from globular cluster positions")]
#[command(version)]
struct Cli {
    /// Path to the cluster catalog
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// JSON file overriding the center window and chart grid
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Only print the center estimate
    #[arg(long)]
    skip_chart: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<&'a SkyChart>,
    center: &'a CenterEstimate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => SurveyConfig::from_json_file(path)
            .with_context(|| format!("Failed to load survey config {:?}", path))?,
        None => SurveyConfig::default(),
    };
    info!(window = %config.window, "survey configured");

    let clusters = load_catalog(&cli.catalog)
        .with_context(|| format!("Failed to load cluster catalog {:?}", cli.catalog))?;
    info!(count = clusters.len(), "catalog loaded");

    let chart = if cli.skip_chart {
        None
    } else {
        Some(SkyChart::build(&clusters, &config.grid).context("Cannot build the sky chart")?)
    };

    match cli.format {
        OutputFormat::Table => {
            if let Some(chart) = &chart {
                println!("{}", chart);
            }
            let estimate = estimate_center(&clusters, &config.window)
                .context("Cannot estimate the Galactic Center")?;
            println!("{}", estimate);
        }
        OutputFormat::Json => {
            let estimate = estimate_center(&clusters, &config.window)
                .context("Cannot estimate the Galactic Center")?;
            println!("{}", json_report(chart.as_ref(), &estimate)?);
        }
    }

    Ok(())
}

fn json_report(
    chart: Option<&SkyChart>,
    center: &CenterEstimate,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { chart, center })
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
