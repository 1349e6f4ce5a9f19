//! dateentry.rs
//!
//! Two-way conversion between manual date-entry strings (`DD.MM.YYYY`)
//! and Gregorian day counts, for the rendering layer's date field and its
//! forward/back navigation links.
//!
//! Day counts produced here are relative to the Gregorian definition's
//! epoch (2000-01-01) and feed straight into
//! [`resolve`](crate::resolve) against
//! [`GREGORIAN`](crate::definitions::gregorian::GREGORIAN); the matching
//! ancient-Bulgarian day count for the same civil date is obtained by
//! shifting with the two definitions' epoch offsets.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::definitions::gregorian::EPOCH_OFFSET_DAYS;
use crate::error::CalendarError;
use crate::resolver::MAX_DAY_SPAN;

lazy_static! {
    /// `DD.MM.YYYY`, tolerating one-digit day/month and a signed year.
    static ref DATE_ENTRY: Regex =
        Regex::new(r"^\s*(\d{1,2})\.(\d{1,2})\.(-?\d{1,6})\s*$").unwrap();
}

/// The civil date of the Gregorian definition's day 0.
fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Parses a `DD.MM.YYYY` string into a day count from 2000-01-01.
///
/// ```
/// # use calendarium::dateentry::parse_date;
/// assert_eq!(parse_date("01.01.2000").unwrap(), 0);
/// assert_eq!(parse_date("29.02.2024").unwrap(), 8825);
/// assert!(parse_date("29.02.2023").is_err()); // not a leap year
/// assert!(parse_date("2024-02-29").is_err()); // wrong shape
/// ```
///
/// # Errors
///
/// [`CalendarError::BadDateString`] when the input does not match the
/// `DD.MM.YYYY` shape or names a day that does not exist.
pub fn parse_date(input: &str) -> Result<i64, CalendarError> {
    let bad = || CalendarError::BadDateString {
        input: input.to_string(),
    };
    let caps = DATE_ENTRY.captures(input).ok_or_else(bad)?;
    let day: u32 = caps[1].parse().map_err(|_| bad())?;
    let month: u32 = caps[2].parse().map_err(|_| bad())?;
    let year: i32 = caps[3].parse().map_err(|_| bad())?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad)?;
    Ok(date.signed_duration_since(anchor()).num_days())
}

/// Formats a day count from 2000-01-01 as a `DD.MM.YYYY` string.
///
/// ```
/// # use calendarium::dateentry::format_date;
/// assert_eq!(format_date(8825).unwrap(), "29.02.2024");
/// assert_eq!(format_date(-1).unwrap(), "31.12.1999");
/// ```
///
/// # Errors
///
/// [`CalendarError::OutOfRange`] when the day count leaves the supported
/// span.
pub fn format_date(day_count: i64) -> Result<String, CalendarError> {
    if day_count.abs() > MAX_DAY_SPAN {
        return Err(CalendarError::OutOfRange {
            day_count,
            max: MAX_DAY_SPAN,
        });
    }
    let date = anchor()
        .checked_add_signed(chrono::Duration::days(day_count))
        .ok_or(CalendarError::OutOfRange {
            day_count,
            max: MAX_DAY_SPAN,
        })?;
    Ok(format!(
        "{:02}.{:02}.{:04}",
        date.day(),
        date.month(),
        date.year()
    ))
}

/// Shifts a `DD.MM.YYYY` string by `days` (possibly negative) and returns
/// the new string: the arithmetic behind "previous day" / "next day"
/// links.
///
/// ```
/// # use calendarium::dateentry::shift_date;
/// assert_eq!(shift_date("28.02.2023", 1).unwrap(), "01.03.2023");
/// assert_eq!(shift_date("01.03.2024", -1).unwrap(), "29.02.2024");
/// ```
///
/// # Errors
///
/// The failure modes of [`parse_date`] and [`format_date`].
pub fn shift_date(input: &str, days: i64) -> Result<String, CalendarError> {
    format_date(parse_date(input)? + days)
}

/// Converts a Gregorian day count into the ancient-Bulgarian day count of
/// the same civil day.
pub fn to_bulgar_day_count(gregorian_day_count: i64) -> i64 {
    gregorian_day_count + EPOCH_OFFSET_DAYS
        - crate::definitions::bulgar::EPOCH_OFFSET_DAYS
}
