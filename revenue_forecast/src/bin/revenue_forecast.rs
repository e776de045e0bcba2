//! Command-line entry point: forecast daily revenue from a transactions CSV

use clap::Parser;
use log::{error, info};
use revenue_forecast::{ForecastConfig, ForecastError, ForecastPipeline, PipelineReport};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "revenue_forecast")]
#[command(about = "Forecast daily revenue from e-commerce transactions", long_about = None)]
struct Cli {
    /// Transactions CSV with order date and revenue columns
    input: PathBuf,

    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fraction of days used for training
    #[arg(short, long)]
    split_ratio: Option<f64>,

    /// Number of days to forecast
    #[arg(long)]
    horizon: Option<usize>,

    /// Name of the order date column
    #[arg(long)]
    date_column: Option<String>,

    /// Name of the revenue column
    #[arg(long)]
    revenue_column: Option<String>,

    /// Write the full report as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<ForecastConfig, ForecastError> {
        let mut config = match &self.config {
            Some(path) => ForecastConfig::from_json_file(path)?,
            None => ForecastConfig::default(),
        };

        if let Some(ratio) = self.split_ratio {
            config.split_ratio = ratio;
        }
        if let Some(horizon) = self.horizon {
            config.horizon = horizon;
        }
        if let Some(column) = &self.date_column {
            config.date_column = column.clone();
        }
        if let Some(column) = &self.revenue_column {
            config.revenue_column = column.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn write_report(report: &PipelineReport, path: &Path) -> Result<(), ForecastError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, report)
        .map_err(|e| ForecastError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    info!("Wrote report to {}", path.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<(), ForecastError> {
    let config = cli.resolve_config()?;
    let pipeline = ForecastPipeline::new(config)?;
    let report = pipeline.run_csv(&cli.input)?;

    println!("Forecasting Model: Linear Regression");
    println!("{}", report.metrics);
    println!();
    println!("Forecast ({} days):", report.forecast.horizon());
    for point in report.forecast.points() {
        println!("  {}  {:>12.2}", point.date, point.revenue);
    }

    if let Some(path) = &cli.output {
        write_report(&report, path)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Forecast failed in {} stage: {}", e.stage(), e);
            ExitCode::FAILURE
        }
    }
}
