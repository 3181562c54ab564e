use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::lex_number;

/// Unit marker appended to every rendered temperature.
pub const DEGREE_SYMBOL: &str = "°C";

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fahrenheit(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(pub f64);

impl Fahrenheit {
    /// Shorthand for [`fahrenheit_to_celsius`].
    pub fn to_celsius(self) -> Result<Celsius, TemperatureError> {
        fahrenheit_to_celsius(self)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{DEGREE_SYMBOL}", self.0)
    }
}

/// Anything a temperature or a statistic can be computed from: numbers,
/// unit-tagged numbers, and numeric strings.
///
/// Non-finite values (`inf`, `NaN`) are never considered numeric.
pub trait Numeric {
    fn to_number(&self) -> Option<f64>;
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

impl Numeric for str {
    fn to_number(&self) -> Option<f64> {
        lex_number(self)
    }
}

impl Numeric for String {
    fn to_number(&self) -> Option<f64> {
        lex_number(self)
    }
}

impl Numeric for f64 {
    fn to_number(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl Numeric for f32 {
    fn to_number(&self) -> Option<f64> {
        f64::from(*self).to_number()
    }
}

impl Numeric for Fahrenheit {
    fn to_number(&self) -> Option<f64> {
        self.0.to_number()
    }
}

impl Numeric for Celsius {
    fn to_number(&self) -> Option<f64> {
        self.0.to_number()
    }
}

macro_rules! integer_numeric {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn to_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

integer_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum TemperatureError {
    #[error("Invalid temperature: {0}")]
    #[diagnostic(
        code(weather_summary::temperature::invalid),
        help("temperatures must be finite numbers, e.g. `72` or `-3.5`")
    )]
    InvalidTemperature(String),
}

/// Convert a Fahrenheit reading to Celsius, rounded to one decimal place.
///
/// Rounding is applied to the exact binary value with ties going to the even
/// digit, so `fahrenheit_to_celsius(x)` always renders identically through
/// `{:.1}`.
pub fn fahrenheit_to_celsius<T>(value: T) -> Result<Celsius, TemperatureError>
where
    T: Numeric + fmt::Debug,
{
    let fahrenheit = value
        .to_number()
        .ok_or_else(|| TemperatureError::InvalidTemperature(format!("{value:?}")))?;

    let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
    Ok(Celsius(round_to_tenth(celsius)))
}

fn round_to_tenth(value: f64) -> f64 {
    // `{:.1}` is correctly rounded, ties to even.
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(32.0, 0.0)]
    #[case(212.0, 100.0)]
    #[case(-40.0, -40.0)]
    #[case(30.0, -1.1)]
    #[case(20.0, -6.7)]
    #[case(50.0, 10.0)]
    #[case(60.0, 15.6)]
    #[case(98.6, 37.0)]
    fn converts_numbers(#[case] fahrenheit: f64, #[case] celsius: f64) {
        assert_eq!(fahrenheit_to_celsius(fahrenheit), Ok(Celsius(celsius)));
    }

    #[test]
    fn converts_every_numeric_kind() {
        assert_eq!(fahrenheit_to_celsius(32), Ok(Celsius(0.0)));
        assert_eq!(fahrenheit_to_celsius(212_u8), Ok(Celsius(100.0)));
        assert_eq!(fahrenheit_to_celsius("212"), Ok(Celsius(100.0)));
        assert_eq!(fahrenheit_to_celsius(String::from(" 50 ")), Ok(Celsius(10.0)));
        assert_eq!(fahrenheit_to_celsius(Fahrenheit(60.0)), Ok(Celsius(15.6)));
        assert_eq!(Fahrenheit(32.0).to_celsius(), Ok(Celsius(0.0)));
    }

    #[rstest]
    #[case("not a number")]
    #[case("")]
    #[case("12 degrees")]
    #[case("nan")]
    fn rejects_non_numeric_strings(#[case] input: &str) {
        assert_eq!(
            fahrenheit_to_celsius(input),
            Err(TemperatureError::InvalidTemperature(format!("{input:?}")))
        );
    }

    #[test]
    fn rejects_non_finite_numbers() {
        assert!(fahrenheit_to_celsius(f64::NAN).is_err());
        assert!(fahrenheit_to_celsius(f64::INFINITY).is_err());
    }

    #[rstest]
    #[case(0.25, 0.2)]
    #[case(0.75, 0.8)]
    #[case(-0.25, -0.2)]
    #[case(1.04, 1.0)]
    #[case(1.06, 1.1)]
    fn rounds_half_to_even(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round_to_tenth(value), expected);
    }

    #[test]
    fn displays_with_degree_symbol() {
        assert_eq!(Celsius(-6.7).to_string(), "-6.7°C");
        assert_eq!(Celsius(10.0).to_string(), "10.0°C");
        assert_eq!(Celsius(12.345).to_string(), "12.3°C");
    }
}
