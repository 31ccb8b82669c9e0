//! # bi-analytics
//!
//! Command-line interface for the analytics engine.

mod input;

use std::fs::File;
use std::path::{Path, PathBuf};

use analytics::{bucket_by_interval, entity_time_series, parse_datetime, AnalyticsEngine, Interval};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "bi-analytics")]
#[command(about = "Business-intelligence analytics CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full dashboard report: trends, anomalies and correlations
    Aggregate {
        /// Input file (JSON object of metric arrays, or CSV with one column per metric)
        #[arg(short, long)]
        input: PathBuf,

        /// Engine configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Moving averages and forecasts for every metric
    Timeseries {
        /// Input file (metric set, or dated points with --interval)
        #[arg(short, long)]
        input: PathBuf,

        /// Bucket dated points first (daily, weekly, monthly, quarterly, yearly)
        #[arg(long)]
        interval: Option<String>,

        /// Engine configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Project a series forward from its overall growth rate
    Forecast {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Metric name (default: first metric in the input file)
        #[arg(short, long)]
        column: Option<String>,

        /// Number of points to project
        #[arg(long, default_value = "12")]
        horizon: usize,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Business scorecard of an entity directory
    Scorecard {
        /// Input file (JSON array of entities)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Entities created per period
    Creations {
        /// Input file (JSON array of entities)
        #[arg(short, long)]
        input: PathBuf,

        /// Period (daily, weekly, monthly, quarterly, yearly)
        #[arg(long, default_value = "monthly")]
        interval: String,

        /// Earliest creation timestamp, inclusive
        #[arg(long)]
        start: Option<String>,

        /// Latest creation timestamp, inclusive
        #[arg(long)]
        end: Option<String>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// IQR outliers of a series
    Outliers {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Metric name (default: first metric in the input file)
        #[arg(short, long)]
        column: Option<String>,

        /// Engine configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Write a result as pretty JSON to a file or stdout
fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            let mut file =
                File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
            serde_json::to_writer_pretty(&mut file, value)
                .map_err(|e| format!("Failed to write JSON: {}", e))?;
            info!("results written to {:?}", path);
        }
        None => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to encode JSON: {}", e))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn engine(config: Option<&Path>) -> CliResult<AnalyticsEngine> {
    let config = input::load_config(config)?;
    AnalyticsEngine::new(config).map_err(|e| format!("Invalid configuration: {}", e))
}

/// Run aggregate command
fn run_aggregate(input: &Path, config: Option<&Path>, output: Option<&Path>) -> CliResult<()> {
    let engine = engine(config)?;
    let metrics = input::load_metrics(input)?;
    let report = engine.aggregate(&metrics);
    write_json(&report, output)
}

/// Run timeseries command
fn run_timeseries(
    input: &Path,
    interval: Option<&str>,
    config: Option<&Path>,
    output: Option<&Path>,
) -> CliResult<()> {
    let engine = engine(config)?;
    let metrics = match interval {
        Some(name) => {
            let interval = Interval::from_name(name);
            let points = input::load_points(input)?;
            info!(interval = interval.as_str(), "bucketing dated points");
            bucket_by_interval(&points, interval).map_err(|e| e.to_string())?
        }
        None => input::load_metrics(input)?,
    };
    let report = engine.process_time_series(&metrics);
    write_json(&report, output)
}

/// Run forecast command
fn run_forecast(
    input: &Path,
    column: Option<&str>,
    horizon: usize,
    output: Option<&Path>,
) -> CliResult<()> {
    let data = input::load_series(input, column)?;
    let forecasts = analytics::try_forecast(&data, horizon).map_err(|e| e.to_string())?;
    let json = serde_json::json!({
        "growthRate": analytics::growth_rate(&data),
        "forecasts": forecasts,
        "horizon": horizon,
    });
    write_json(&json, output)
}

/// Run outliers command
fn run_outliers(
    input: &Path,
    column: Option<&str>,
    config: Option<&Path>,
    output: Option<&Path>,
) -> CliResult<()> {
    let engine = engine(config)?;
    let data = input::load_series(input, column)?;
    let result = engine.outliers(&data);
    info!(outliers = result.outliers.len(), "outlier detection complete");
    write_json(&result, output)
}

/// Run scorecard command
fn run_scorecard(input: &Path, output: Option<&Path>) -> CliResult<()> {
    let entities = input::load_entities(input)?;
    let card = analytics::scorecard(&entities).map_err(|e| e.to_string())?;
    info!(
        score = card.summary.overall_score,
        grade = ?card.summary.score_grade,
        "scorecard complete"
    );
    write_json(&card, output)
}

/// Run creations command
fn run_creations(
    input: &Path,
    interval: &str,
    start: Option<&str>,
    end: Option<&str>,
    output: Option<&Path>,
) -> CliResult<()> {
    let interval = interval.parse::<Interval>().map_err(|e| e.to_string())?;
    let bound = |raw: Option<&str>| {
        raw.map(parse_datetime)
            .transpose()
            .map_err(|e| e.to_string())
    };
    let (start, end) = (bound(start)?, bound(end)?);

    let entities = input::load_entities(input)?;
    let series: Vec<serde_json::Value> = entity_time_series(&entities, interval, start, end)
        .into_iter()
        .map(|(period, count)| serde_json::json!({ "period": period, "count": count }))
        .collect();
    write_json(&series, output)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "analytics=info,bi_analytics=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Aggregate {
            input,
            config,
            output,
        } => run_aggregate(&input, config.as_deref(), output.as_deref()),

        Commands::Timeseries {
            input,
            interval,
            config,
            output,
        } => run_timeseries(
            &input,
            interval.as_deref(),
            config.as_deref(),
            output.as_deref(),
        ),

        Commands::Forecast {
            input,
            column,
            horizon,
            output,
        } => run_forecast(&input, column.as_deref(), horizon, output.as_deref()),

        Commands::Scorecard { input, output } => run_scorecard(&input, output.as_deref()),

        Commands::Creations {
            input,
            interval,
            start,
            end,
            output,
        } => run_creations(
            &input,
            &interval,
            start.as_deref(),
            end.as_deref(),
            output.as_deref(),
        ),

        Commands::Outliers {
            input,
            column,
            config,
            output,
        } => run_outliers(&input, column.as_deref(), config.as_deref(), output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
