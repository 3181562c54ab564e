use logos::Logos;

/// Tokens of a temperature field. Surrounding whitespace is skipped so that
/// `" 42 "` lexes as a single number.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum NumberToken {
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,
}

/// Tokens of an ISO-8601 date, optionally followed by a time of day and a
/// UTC offset (`2021-07-02T07:00:00+08:00`).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum DateToken {
    #[regex("[0-9]+")]
    Digits,
    #[token("-")]
    Dash,
    #[token("+")]
    Plus,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("T")]
    #[token(" ")]
    TimeSeparator,
    #[token("Z")]
    Utc,
}

/// Lex a whole field as exactly one number. Returns `None` if the field is
/// empty, holds anything else, or does not fit in a finite `f64`.
pub(crate) fn lex_number(s: &str) -> Option<f64> {
    let mut lexer = NumberToken::lexer(s);
    let value = match lexer.next() {
        Some(Ok(NumberToken::Number)) => lexer.slice().parse::<f64>().ok()?,
        _ => return None,
    };

    match lexer.next() {
        None if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Split a date field into `(token, text)` pairs. Fails on the first
/// character that is not part of a date.
pub(crate) fn lex_date(s: &str) -> Result<Vec<(DateToken, &str)>, usize> {
    DateToken::lexer(s)
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok((token, &s[span])),
            Err(()) => Err(span.start),
        })
        .collect()
}
