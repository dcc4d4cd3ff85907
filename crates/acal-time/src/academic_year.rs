//! `AcademicYear`: the September-to-August scheduling horizon.

use crate::date::Date;
use crate::month::Month;
use acal_core::errors::{Error, Result};
use acal_core::utilities::data_parsers::{parse_year_list, parse_year_pair};
use serde::Serialize;

/// An academic year running from September 1 of `start_year` to August 31
/// of `end_year`, where `end_year == start_year + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AcademicYear {
    start_year: u16,
    end_year: u16,
}

impl AcademicYear {
    /// Create an academic year from a pair of consecutive calendar years.
    ///
    /// # Errors
    /// Returns a configuration error if the years are not consecutive or
    /// fall outside the supported date range.
    pub fn new(start_year: i32, end_year: i32) -> Result<Self> {
        let shown = format!("{start_year}/{end_year}");
        if !(1900..=2198).contains(&start_year) {
            return Err(Error::configuration(
                "academic year",
                shown,
                "years between 1900 and 2199",
            ));
        }
        if end_year != start_year + 1 {
            return Err(Error::configuration(
                "academic year",
                shown,
                "two consecutive years such as 2025/2026",
            ));
        }
        Ok(Self {
            start_year: start_year as u16,
            end_year: end_year as u16,
        })
    }

    /// Return the academic year that starts in September of `start_year`.
    pub fn starting(start_year: i32) -> Result<Self> {
        Self::new(start_year, start_year.saturating_add(1))
    }

    /// Parse a whitespace-separated list such as `"2025/2026 2026/2027"`.
    ///
    /// # Errors
    /// Returns a configuration error if the list is empty or any token is
    /// malformed.
    pub fn parse_list(s: &str) -> Result<Vec<Self>> {
        parse_year_list(s)?
            .into_iter()
            .map(|(a, b)| Self::new(a, b))
            .collect()
    }

    /// Calendar year containing September–December.
    pub fn start_year(&self) -> u16 {
        self.start_year
    }

    /// Calendar year containing January–August.
    pub fn end_year(&self) -> u16 {
        self.end_year
    }

    /// September 1 of the start year.
    pub fn start_date(&self) -> Date {
        Date::from_ymd_unchecked(self.start_year, 9, 1)
    }

    /// August 31 of the end year.
    pub fn end_date(&self) -> Date {
        Date::from_ymd_unchecked(self.end_year, 8, 31)
    }

    /// The following academic year, if it is still in the supported range.
    pub fn next(&self) -> Option<Self> {
        Self::starting(self.end_year as i32).ok()
    }

    /// The twelve `(calendar year, month)` pairs in academic order.
    pub fn months(&self) -> [(u16, Month); 12] {
        Month::ACADEMIC_ORDER.map(|m| {
            let year = if m.opens_academic_year() {
                self.start_year
            } else {
                self.end_year
            };
            (year, m)
        })
    }

    /// First day of `month` within this academic year.
    pub fn first_of_month(&self, month: Month) -> Date {
        let year = if month.opens_academic_year() {
            self.start_year
        } else {
            self.end_year
        };
        Date::from_ymd_unchecked(year, month.number(), 1)
    }

    /// Return `true` if `date` lies between the start and end dates.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date() <= date && date <= self.end_date()
    }

    /// Semester of `date` under the fixed split: 1 for September–January,
    /// 2 for February–August. `None` if the date is outside this year.
    pub fn semester_of(&self, date: Date) -> Option<u8> {
        if !self.contains(date) {
            return None;
        }
        match date.month() {
            9..=12 | 1 => Some(1),
            _ => Some(2),
        }
    }
}

impl std::fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start_year, self.end_year)
    }
}

impl std::str::FromStr for AcademicYear {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let (a, b) = parse_year_pair(s)?;
        Self::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn bounds() {
        let ay = AcademicYear::new(2025, 2026).unwrap();
        assert_eq!(ay.start_date(), date(2025, 9, 1));
        assert_eq!(ay.end_date(), date(2026, 8, 31));
        assert!(ay.contains(date(2026, 2, 28)));
        assert!(!ay.contains(date(2026, 9, 1)));
        assert_eq!(ay.to_string(), "2025/2026");
    }

    #[test]
    fn rejects_non_consecutive_years() {
        assert!(AcademicYear::new(2025, 2027).is_err());
        assert!(AcademicYear::new(2026, 2025).is_err());
        assert!(AcademicYear::new(1850, 1851).is_err());
        assert!(AcademicYear::new(i32::MAX, 1).is_err());
        assert!(AcademicYear::starting(i32::MAX).is_err());
    }

    #[test]
    fn parse() {
        let ay: AcademicYear = "2026/2027".parse().unwrap();
        assert_eq!(ay.start_year(), 2026);
        assert!("2026-2027".parse::<AcademicYear>().is_err());

        let list = AcademicYear::parse_list("2025/2026 2026/2027").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].next(), Some(list[1]));
        assert!(AcademicYear::parse_list("").is_err());
        assert!(AcademicYear::parse_list("2147483647/1").is_err());
    }

    #[test]
    fn months_in_academic_order() {
        let ay = AcademicYear::starting(2025).unwrap();
        let months = ay.months();
        assert_eq!(months[0], (2025, Month::September));
        assert_eq!(months[3], (2025, Month::December));
        assert_eq!(months[4], (2026, Month::January));
        assert_eq!(months[11], (2026, Month::August));
        assert_eq!(ay.first_of_month(Month::February), date(2026, 2, 1));
        assert_eq!(ay.first_of_month(Month::October), date(2025, 10, 1));
    }

    #[test]
    fn semester_split() {
        let ay = AcademicYear::starting(2025).unwrap();
        assert_eq!(ay.semester_of(date(2025, 9, 1)), Some(1));
        assert_eq!(ay.semester_of(date(2026, 1, 31)), Some(1));
        assert_eq!(ay.semester_of(date(2026, 2, 1)), Some(2));
        assert_eq!(ay.semester_of(date(2026, 8, 31)), Some(2));
        assert_eq!(ay.semester_of(date(2026, 9, 1)), None);
    }
}
