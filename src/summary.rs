use miette::Diagnostic;
use thiserror::Error;

use crate::{
    date::{format_date, DateError},
    record::{CelsiusRecord, WeatherRecord},
    stats::{find_max, find_min, mean, StatsError},
    temperature::{Celsius, TemperatureError},
};

/// Why a single record could not be part of a report.
#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Temperature(#[from] TemperatureError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Date(#[from] DateError),
}

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum SummaryError {
    #[error("Cannot summarise day #{index} (`{date}`)")]
    #[diagnostic(code(weather_summary::summary::record))]
    Record {
        index: usize,
        date: String,
        #[diagnostic_source]
        source: RecordError,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Stats(#[from] StatsError),
}

fn record_error(index: usize, record: &WeatherRecord, source: RecordError) -> SummaryError {
    tracing::error!(index, date = %record.date, error = %source, "record aborted the report");
    SummaryError::Record {
        index,
        date: record.date.clone(),
        source,
    }
}

/// Convert every record to Celsius. The input is not modified.
pub fn convert_records(records: &[WeatherRecord]) -> Result<Vec<CelsiusRecord>, SummaryError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .to_celsius()
                .map_err(|e| record_error(index, record, e.into()))
        })
        .collect()
}

fn format_record_date(records: &[WeatherRecord], index: usize) -> Result<String, SummaryError> {
    let record = &records[index];
    format_date(&record.date).map_err(|e| record_error(index, record, e.into()))
}

/// Overview of the whole period: extremes with their dates and averages.
///
/// Fails on an empty slice, and on the first record whose readings or date
/// cannot be used. Ties on the extremes go to the last matching day.
pub fn generate_overview_summary(records: &[WeatherRecord]) -> Result<String, SummaryError> {
    tracing::debug!(days = records.len(), "generating overview summary");

    let converted = convert_records(records)?;
    let lows: Vec<Celsius> = converted.iter().map(|record| record.low).collect();
    let highs: Vec<Celsius> = converted.iter().map(|record| record.high).collect();

    let lowest = find_min(&lows)?;
    let highest = find_max(&highs)?;
    let average_low = mean(&lows)?;
    let average_high = mean(&highs)?;

    let lowest_date = format_record_date(records, lowest.index)?;
    let highest_date = format_record_date(records, highest.index)?;

    Ok(format!(
        "{days} Day Overview\n\
         \x20 The lowest temperature will be {lowest}, and will occur on {lowest_date}.\n\
         \x20 The highest temperature will be {highest}, and will occur on {highest_date}.\n\
         \x20 The average low this week is {average_low}.\n\
         \x20 The average high this week is {average_high}.\n",
        days = records.len(),
        lowest = Celsius(lowest.value),
        highest = Celsius(highest.value),
        average_low = Celsius(average_low),
        average_high = Celsius(average_high),
    ))
}

/// One block per day with its date, minimum and maximum. An empty slice
/// gives an empty report.
pub fn generate_daily_summary(records: &[WeatherRecord]) -> Result<String, SummaryError> {
    tracing::debug!(days = records.len(), "generating daily summary");

    let mut summary = String::new();
    for (index, record) in records.iter().enumerate() {
        let date = format_record_date(records, index)?;
        let converted = record
            .to_celsius()
            .map_err(|e| record_error(index, record, e.into()))?;

        summary.push_str(&format!(
            "---- {date} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n\n",
            converted.low, converted.high,
        ));
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_days() -> Vec<WeatherRecord> {
        vec![
            WeatherRecord::new("2021-07-01", 30.0, 50.0),
            WeatherRecord::new("2021-07-02", 20.0, 60.0),
        ]
    }

    #[test]
    fn overview_of_two_days() {
        let summary = generate_overview_summary(&two_days()).unwrap();
        assert_eq!(
            summary,
            "2 Day Overview\n\
             \x20 The lowest temperature will be -6.7°C, and will occur on Friday 02 July 2021.\n\
             \x20 The highest temperature will be 15.6°C, and will occur on Friday 02 July 2021.\n\
             \x20 The average low this week is -3.9°C.\n\
             \x20 The average high this week is 12.8°C.\n"
        );
    }

    #[test]
    fn overview_names_the_latest_of_tied_days() {
        let records = vec![
            WeatherRecord::new("2021-07-01", 20.0, 60.0),
            WeatherRecord::new("2021-07-02", 25.0, 55.0),
            WeatherRecord::new("2021-07-03", 20.0, 60.0),
        ];
        let summary = generate_overview_summary(&records).unwrap();
        assert!(summary.contains("-6.7°C, and will occur on Saturday 03 July 2021."));
        assert!(summary.contains("15.6°C, and will occur on Saturday 03 July 2021."));
    }

    #[test]
    fn daily_summary_of_two_days() {
        let summary = generate_daily_summary(&two_days()).unwrap();
        assert_eq!(
            summary,
            "---- Thursday 01 July 2021 ----\n\
             \x20 Minimum Temperature: -1.1°C\n\
             \x20 Maximum Temperature: 10.0°C\n\
             \n\
             ---- Friday 02 July 2021 ----\n\
             \x20 Minimum Temperature: -6.7°C\n\
             \x20 Maximum Temperature: 15.6°C\n\
             \n"
        );
    }

    #[test]
    fn reports_leave_records_untouched() {
        let records = two_days();
        let first = generate_overview_summary(&records).unwrap();
        let second = generate_overview_summary(&records).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            generate_daily_summary(&records).unwrap(),
            generate_daily_summary(&records).unwrap()
        );
        assert_eq!(records, two_days());
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            generate_overview_summary(&[]),
            Err(SummaryError::Stats(StatsError::EmptyInput))
        );
        assert_eq!(generate_daily_summary(&[]), Ok(String::new()));
        assert_eq!(convert_records(&[]), Ok(Vec::new()));
    }

    #[test]
    fn bad_date_aborts_both_reports() {
        let mut records = two_days();
        records[1].date = String::from("2021-02-29");

        for result in [
            generate_overview_summary(&records),
            generate_daily_summary(&records),
        ] {
            assert!(matches!(
                result,
                Err(SummaryError::Record {
                    index: 1,
                    source: RecordError::Date(DateError::InvalidDate { .. }),
                    ..
                })
            ));
        }
    }

    #[test]
    fn unused_bad_date_only_aborts_the_daily_report() {
        // The overview only formats the dates of the extreme days.
        let mut records = two_days();
        records[0].date = String::from("not a date");

        assert!(generate_overview_summary(&records).is_ok());
        assert!(generate_daily_summary(&records).is_err());
    }

    #[test]
    fn bad_reading_aborts_both_reports() {
        let mut records = two_days();
        records[0].high.0 = f64::INFINITY;

        for result in [
            generate_overview_summary(&records),
            generate_daily_summary(&records),
        ] {
            assert!(matches!(
                result,
                Err(SummaryError::Record {
                    index: 0,
                    source: RecordError::Temperature(_),
                    ..
                })
            ));
        }
    }
}
