use std::{fs::File, io::Read, path::Path};

use csv::StringRecord;
use miette::Diagnostic;
use thiserror::Error;

use crate::record::WeatherRecord;

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Could not open `{path}`")]
    #[diagnostic(code(weather_summary::loader::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed CSV: {0}")]
    #[diagnostic(
        code(weather_summary::loader::csv),
        help("the file must be UTF-8 text with a header row")
    )]
    Csv(#[from] csv::Error),
}

/// Read every usable row of a CSV file. See [`read_records`].
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<WeatherRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    read_records(file)
}

/// Parse `date,low,high` rows after a header row.
///
/// Rows with fewer than three fields, or whose low/high are not integers,
/// are skipped. Extra fields are ignored.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<WeatherRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;

    for row in reader.records() {
        let row = row?;
        match parse_row(&row) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                let line = row.position().map(|position| position.line());
                tracing::debug!(?line, ?row, "skipping row");
            }
        }
    }

    tracing::debug!(rows = records.len(), skipped, "loaded weather records");
    Ok(records)
}

fn parse_row(row: &StringRecord) -> Option<WeatherRecord> {
    let (date, low, high) = match (row.get(0), row.get(1), row.get(2)) {
        (Some(date), Some(low), Some(high)) => (date, low, high),
        _ => return None,
    };

    let low: i64 = low.trim().parse().ok()?;
    let high: i64 = high.trim().parse().ok()?;

    Some(WeatherRecord::new(date, low as f64, high as f64))
}
