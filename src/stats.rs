use std::{cmp::Ordering, fmt};

use miette::Diagnostic;
use thiserror::Error;

use crate::temperature::Numeric;

#[derive(Debug, Clone, Error, Diagnostic, PartialEq)]
pub enum StatsError {
    #[error("Cannot aggregate an empty list")]
    #[diagnostic(code(weather_summary::stats::empty))]
    EmptyInput,
    #[error("Non numeric value at position {index}: {value}")]
    #[diagnostic(code(weather_summary::stats::non_numeric))]
    NonNumericValue { index: usize, value: String },
}

/// An extreme value and the position it was found at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    pub value: f64,
    pub index: usize,
}

fn coerce<T: Numeric + fmt::Debug>(values: &[T]) -> Result<Vec<f64>, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.to_number().ok_or_else(|| StatsError::NonNumericValue {
                index,
                value: format!("{value:?}"),
            })
        })
        .collect()
}

/// Arithmetic mean, unrounded.
pub fn mean<T: Numeric + fmt::Debug>(values: &[T]) -> Result<f64, StatsError> {
    let values = coerce(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Left to right scan that replaces the best value whenever the candidate
/// orders as `keep` *or equal*, so ties resolve to the last occurrence.
fn scan(values: &[f64], keep: Ordering) -> Extreme {
    let mut best = Extreme {
        value: values[0],
        index: 0,
    };

    for (index, &value) in values.iter().enumerate() {
        match value.partial_cmp(&best.value) {
            Some(ordering) if ordering == keep || ordering == Ordering::Equal => {
                best = Extreme { value, index };
            }
            _ => (),
        }
    }

    best
}

/// Smallest value; on ties the last occurrence wins.
pub fn find_min<T: Numeric + fmt::Debug>(values: &[T]) -> Result<Extreme, StatsError> {
    Ok(scan(&coerce(values)?, Ordering::Less))
}

/// Largest value; on ties the last occurrence wins.
pub fn find_max<T: Numeric + fmt::Debug>(values: &[T]) -> Result<Extreme, StatsError> {
    Ok(scan(&coerce(values)?, Ordering::Greater))
}
