use std::fmt::Display;
use std::num::{ParseFloatError, ParseIntError};
use std::ops::RangeInclusive;

#[derive(Debug)]
pub enum ParseError {
    MissingValue(&'static str),
    InvalidNumber(String, ParseIntError),
    InvalidAlpha(String, ParseFloatError),
    InvalidRange(String),
}

impl std::error::Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingValue(flag) => write!(f, "{flag} option requires a value"),
            ParseError::InvalidNumber(val, e) => write!(f, "'{val}' is not a valid number: {e}"),
            ParseError::InvalidAlpha(val, e) => write!(f, "'{val}' is not a valid alpha: {e}"),
            ParseError::InvalidRange(val) => {
                write!(f, "'{val}' is not a range, expected LOW-HIGH or a single number")
            }
        }
    }
}

pub fn parse_number<T>(val: &str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    val.trim()
        .parse()
        .map_err(|e| ParseError::InvalidNumber(val.to_owned(), e))
}

pub fn parse_alpha(val: &str) -> Result<f64, ParseError> {
    val.trim()
        .parse()
        .map_err(|e| ParseError::InvalidAlpha(val.to_owned(), e))
}

/// Accepts `LOW-HIGH`, `LOW,HIGH`, or a single `N` meaning `N-N`.
/// Bounds are not checked here, an inverted range is left for validation to reject.
pub fn parse_range(val: &str) -> Result<RangeInclusive<u16>, ParseError> {
    let mut parts = val.split(['-', ',']);
    let (Some(low), high, None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::InvalidRange(val.to_owned()));
    };

    let low = parse_number(low)?;
    let high = match high {
        Some(high) => parse_number(high)?,
        None => low,
    };
    Ok(low..=high)
}
