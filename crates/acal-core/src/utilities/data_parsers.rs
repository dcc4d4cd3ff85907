//! Parsers for the textual inputs of a generation request.
//!
//! The collection layer hands over raw strings (year ranges, week counts,
//! holiday dates). Each parser returns the raw components or a
//! configuration error naming the rejected text and the expected shape.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` without checking that the day exists in
/// the month; range checks belong to the date type.
pub fn parse_iso_date(s: &str) -> Result<(u16, u8, u8)> {
    let invalid = || Error::configuration("date", s, "YYYY-MM-DD");
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return Err(invalid());
    }
    let year: u16 = parts[0].parse().map_err(|_| invalid())?;
    let month: u8 = parts[1].parse().map_err(|_| invalid())?;
    let day: u8 = parts[2].parse().map_err(|_| invalid())?;
    Ok((year, month, day))
}

/// Parse an academic-year token such as `"2025/2026"`.
///
/// Returns `(start_year, end_year)`; whether the two years are consecutive
/// is checked by the academic-year constructor.
pub fn parse_year_pair(s: &str) -> Result<(i32, i32)> {
    let token = s.trim();
    let Some((a, b)) = token.split_once('/') else {
        return Err(Error::configuration("academic year", token, "YYYY/YYYY"));
    };
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|_| Error::configuration("academic year", token, "YYYY/YYYY with numeric years"))
    };
    Ok((parse(a)?, parse(b)?))
}

/// Split a whitespace-separated list of academic-year tokens.
///
/// # Errors
/// Returns a configuration error if the list is empty or any token is
/// malformed.
pub fn parse_year_list(s: &str) -> Result<Vec<(i32, i32)>> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(Error::configuration(
            "academic year list",
            s,
            "at least one YYYY/YYYY token",
        ));
    }
    tokens.into_iter().map(parse_year_pair).collect()
}

/// Parse a week count such as `"10"`, `"1.5"` or `"0,5"`.
///
/// The count must be a finite, strictly positive number.
pub fn parse_week_count(s: &str) -> Result<f64> {
    let text = s.trim();
    let weeks: f64 = text
        .replace(',', ".")
        .parse()
        .map_err(|_| Error::configuration("week count", text, "a number of weeks"))?;
    if !weeks.is_finite() || weeks <= 0.0 {
        return Err(Error::configuration(
            "week count",
            text,
            "a positive number of weeks",
        ));
    }
    Ok(weeks)
}
