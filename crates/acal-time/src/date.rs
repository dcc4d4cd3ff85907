//! `Date` type.
//!
//! Dates are stored as a signed count of days since 1970-01-01 and
//! converted to and from the proleptic Gregorian calendar with the
//! days-from-civil algorithm.
//!
//! # Supported range
//! 1900-01-01 to 2199-12-31. Constructors reject anything outside it.

use crate::month::Month;
use crate::weekday::Weekday;
use acal_core::errors::{Error, Result};
use acal_core::utilities::data_formatters::{format_dmy, format_iso};
use acal_core::utilities::data_parsers::parse_iso_date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date without time or timezone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum supported date: January 1, 1900.
    pub const MIN: Date = Date(-25_567);

    /// Maximum supported date: December 31, 2199.
    pub const MAX: Date = Date(84_005);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year, month, day)))
    }

    /// Create a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(
            (1900..=2199).contains(&year)
                && (1..=12).contains(&month)
                && day >= 1
                && day <= days_in_month(year, month),
            "invalid date {year}-{month:02}-{day:02}"
        );
        Date(days_from_civil(year, month, day))
    }

    /// Parse an ISO `YYYY-MM-DD` string.
    pub fn from_iso(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)?;
        Date::from_ymd(y, m, d)
            .map_err(|_| Error::configuration("date", s.trim(), "an existing YYYY-MM-DD date"))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the number of days since 1970-01-01.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        civil_from_days(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("civil_from_days yields months in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        civil_from_days(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (index 3 with Monday = 0).
        let index = (self.0 + 3).rem_euclid(7) as u8;
        Weekday::from_index(index).expect("rem_euclid always in 0..7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let days = self.0 + n;
        if days < Self::MIN.0 || days > Self::MAX.0 {
            return Err(Error::Date(format!(
                "date arithmetic: {self} {n:+} days leaves the supported range"
            )));
        }
        Ok(Date(days))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the Monday starting the week that contains this date.
    pub fn monday_of_week(self) -> Self {
        Date(self.0 - self.weekday().index() as i32)
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = civil_from_days(self.0);
        Date(days_from_civil(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = civil_from_days(self.0);
        Date(days_from_civil(y, m, days_in_month(y, m)))
    }

    /// Iterate over every date from `self` to `last`, both inclusive.
    ///
    /// The iterator is empty when `last < self`.
    pub fn iter_through(self, last: Date) -> impl Iterator<Item = Date> {
        (self.0..=last.0).map(Date)
    }

    /// Format as `DD.MM.YYYY`.
    pub fn to_dmy_string(&self) -> String {
        let (y, m, d) = self.ymd();
        format_dmy(y, m, d)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Display / serde ───────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        f.write_str(&format_iso(y, m, d))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Date::from_iso(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::from_iso(&text).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Days since 1970-01-01 for a Gregorian date (March-based era arithmetic).
fn days_from_civil(year: u16, month: u8, day: u8) -> i32 {
    let m = month as i32;
    let y = year as i32 - i32::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i32) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
