use miette::Diagnostic;
use thiserror::Error;
use time::{macros::format_description, Date, Month};

use crate::lexer::{lex_date, DateToken};

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum DateError {
    #[error("Invalid date `{input}`: {reason}")]
    #[diagnostic(
        code(weather_summary::date::invalid),
        help("dates must be ISO-8601 calendar dates such as `2021-07-06`")
    )]
    InvalidDate { input: String, reason: String },
}

impl DateError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
    }
}

/// Parse the calendar date of an ISO-8601 string.
///
/// Accepts `YYYY-MM-DD`, optionally followed by `T` (or a space), a time of
/// day (`HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`) and a `Z` or `±HH:MM` offset.
/// The time part is validated then dropped: the date is the one written,
/// not the one in UTC.
pub fn parse_iso_date(input: &str) -> Result<Date, DateError> {
    let tokens = lex_date(input)
        .map_err(|at| DateError::new(input, format!("unexpected character at {at}")))?;

    let (year, month, day, rest) = match tokens.as_slice() {
        [(DateToken::Digits, year), (DateToken::Dash, _), (DateToken::Digits, month), (DateToken::Dash, _), (DateToken::Digits, day), rest @ ..]
            if year.len() == 4 && month.len() == 2 && day.len() == 2 =>
        {
            (*year, *month, *day, rest)
        }
        _ => return Err(DateError::new(input, "expected YYYY-MM-DD")),
    };

    match rest {
        [] => (),
        [(DateToken::TimeSeparator, _), time @ ..] => {
            check_time(time).map_err(|reason| DateError::new(input, reason))?
        }
        _ => return Err(DateError::new(input, "unexpected text after the date")),
    }

    // Two or four ASCII digits always fit.
    let year: i32 = year.parse().map_err(|_| DateError::new(input, "bad year"))?;
    let month: u8 = month.parse().map_err(|_| DateError::new(input, "bad month"))?;
    let day: u8 = day.parse().map_err(|_| DateError::new(input, "bad day"))?;

    if year == 0 {
        return Err(DateError::new(input, "year 0000 does not exist"));
    }
    let month = Month::try_from(month)
        .map_err(|_| DateError::new(input, format!("there is no month {month:02}")))?;

    let last_day = days_in_month(year, month);
    if day == 0 || day > last_day {
        return Err(DateError::new(
            input,
            format!("{month} {year} has {last_day} days"),
        ));
    }

    Date::from_calendar_date(year, month, day).map_err(|e| DateError::new(input, e.to_string()))
}

fn check_time(tokens: &[(DateToken, &str)]) -> Result<(), &'static str> {
    let (hour, minute, second, offset) = match tokens {
        [(DateToken::Digits, h), (DateToken::Colon, _), (DateToken::Digits, m), (DateToken::Colon, _), (DateToken::Digits, s), (DateToken::Dot, _), (DateToken::Digits, _), rest @ ..]
        | [(DateToken::Digits, h), (DateToken::Colon, _), (DateToken::Digits, m), (DateToken::Colon, _), (DateToken::Digits, s), rest @ ..] => {
            (*h, *m, Some(*s), rest)
        }
        [(DateToken::Digits, h), (DateToken::Colon, _), (DateToken::Digits, m), rest @ ..] => {
            (*h, *m, None, rest)
        }
        _ => return Err("expected a time of day after the date"),
    };

    if !two_digits_below(hour, 24) || !two_digits_below(minute, 60) {
        return Err("time of day out of range");
    }
    if second.is_some_and(|s| !two_digits_below(s, 60)) {
        return Err("time of day out of range");
    }

    match offset {
        [] | [(DateToken::Utc, _)] => Ok(()),
        [(DateToken::Plus | DateToken::Dash, _), (DateToken::Digits, h), (DateToken::Colon, _), (DateToken::Digits, m)]
            if two_digits_below(h, 24) && two_digits_below(m, 60) =>
        {
            Ok(())
        }
        _ => Err("malformed UTC offset"),
    }
}

fn two_digits_below(digits: &str, bound: u8) -> bool {
    digits.len() == 2 && digits.parse::<u8>().is_ok_and(|value| value < bound)
}

/// Render an ISO-8601 date as `Weekday DD Month YYYY`, e.g.
/// `Tuesday 06 July 2021`.
pub fn format_date(input: &str) -> Result<String, DateError> {
    let date = parse_iso_date(input)?;
    date.format(format_description!("[weekday] [day] [month repr:long] [year]"))
        .map_err(|e| DateError::new(input, e.to_string()))
}
