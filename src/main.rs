use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use weather_summary::{generate_daily_summary, generate_overview_summary, load_records, Error};

/// Summarise daily temperature extremes recorded in Fahrenheit.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file with a header row followed by `date,low,high` rows.
    file: PathBuf,

    /// Which report to print.
    #[arg(long, value_enum, default_value_t = ReportKind::All)]
    report: ReportKind,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    /// Extremes and averages of the whole period.
    Overview,
    /// One block per day.
    Daily,
    /// The overview followed by the daily blocks.
    All,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    print!("{}", run(&cli)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<String, Error> {
    tracing::info!(file = %cli.file.display(), report = ?cli.report, "summarising");
    let records = load_records(&cli.file)?;

    let output = match cli.report {
        ReportKind::Overview => generate_overview_summary(&records)?,
        ReportKind::Daily => generate_daily_summary(&records)?,
        ReportKind::All => format!(
            "{}\n{}",
            generate_overview_summary(&records)?,
            generate_daily_summary(&records)?
        ),
    };

    Ok(output)
}
