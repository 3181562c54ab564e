use crate::temperature::{Celsius, Fahrenheit, TemperatureError};

/// One day of the input, as read from the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// ISO-8601 date, validated only when a report formats it.
    pub date: String,
    pub low: Fahrenheit,
    pub high: Fahrenheit,
}

/// A [`WeatherRecord`] with both readings converted to Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct CelsiusRecord {
    pub date: String,
    pub low: Celsius,
    pub high: Celsius,
}

impl WeatherRecord {
    pub fn new(date: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            date: date.into(),
            low: Fahrenheit(low),
            high: Fahrenheit(high),
        }
    }

    /// Build the Celsius counterpart of this record. `self` is left untouched.
    pub fn to_celsius(&self) -> Result<CelsiusRecord, TemperatureError> {
        Ok(CelsiusRecord {
            date: self.date.clone(),
            low: self.low.to_celsius()?,
            high: self.high.to_celsius()?,
        })
    }
}
