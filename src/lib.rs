//! Summaries of daily temperature extremes.
//!
//! Records are read from a CSV file of `date,low,high` rows in Fahrenheit,
//! converted to Celsius and rendered either as an overview of the whole
//! period or as one block per day.

use miette::Diagnostic;
use thiserror::Error;

pub mod date;
mod lexer;
pub mod loader;
pub mod record;
pub mod stats;
pub mod summary;
pub mod temperature;

pub use date::{days_in_month, format_date, is_leap_year, parse_iso_date, DateError};
pub use loader::{load_records, read_records, LoadError};
pub use record::{CelsiusRecord, WeatherRecord};
pub use stats::{find_max, find_min, mean, Extreme, StatsError};
pub use summary::{
    convert_records, generate_daily_summary, generate_overview_summary, RecordError, SummaryError,
};
pub use temperature::{
    fahrenheit_to_celsius, Celsius, Fahrenheit, Numeric, TemperatureError, DEGREE_SYMBOL,
};

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Temperature(#[from] TemperatureError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Stats(#[from] StatsError),
}
