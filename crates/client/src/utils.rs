//! Date and id helpers shared by request construction.

use chrono::{Local, NaiveDate};
use contracts::validation::CANONICAL_DATE_FORMAT;
use rand::Rng;
use thiserror::Error;

/// A date string was not strict `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date string `{input}`: expected YYYY-MM-DD")]
pub struct InvalidDateError {
    pub input: String,
}

/// `random_int` was called with `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid range: min {min} is greater than max {max}")]
pub struct InvalidRangeError {
    pub min: i64,
    pub max: i64,
}

/// Today's date in the local timezone as `YYYY-MM-DD`.
///
/// Reads the clock on every call; nothing is cached.
pub fn canonical_today() -> String {
    canonical_date(Local::now().date_naive())
}

/// Format a date as `YYYY-MM-DD`.
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Strict parse of a canonical `YYYY-MM-DD` string.
///
/// Rejects anything that would not reformat to the same string (unpadded
/// components, trailing time-of-day, impossible dates) rather than emitting
/// a best-effort value.
pub fn parse_canonical(input: &str) -> Result<NaiveDate, InvalidDateError> {
    let date = NaiveDate::parse_from_str(input, CANONICAL_DATE_FORMAT).map_err(|_| InvalidDateError {
        input: input.to_string(),
    })?;
    if canonical_date(date) != input {
        return Err(InvalidDateError {
            input: input.to_string(),
        });
    }
    Ok(date)
}

/// Uniformly distributed random integer in `[min, max]`, bounds inclusive.
pub fn random_int(min: i64, max: i64) -> Result<i64, InvalidRangeError> {
    if min > max {
        return Err(InvalidRangeError { min, max });
    }
    Ok(rand::thread_rng().gen_range(min..=max))
}

/// Random id in the conventional `[1, 99999]` range.
pub fn random_id() -> i64 {
    // Range is statically valid.
    random_int(1, 99_999).unwrap_or(1)
}
