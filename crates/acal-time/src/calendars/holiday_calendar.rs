//! Holiday calendar: a calendar whose holidays come from a per-year table.
//!
//! The table is supplied once (from configuration or a built-in list such
//! as [`HolidayCalendar::russia`](crate::calendars::russia)) and is
//! read-only afterwards. Years absent from the table fall back to
//! weekend-only determination.

use crate::calendar::Calendar;
use crate::date::Date;
use acal_core::errors::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// A calendar with holidays declared per calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeMap<u16, BTreeSet<Date>>,
}

impl HolidayCalendar {
    /// Create a new holiday calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeMap::new(),
        }
    }

    /// Build a calendar from a table of ISO `YYYY-MM-DD` strings keyed by
    /// calendar year.
    ///
    /// # Errors
    /// Returns a configuration error if a string is not a valid date or is
    /// filed under a year other than its own.
    pub fn from_iso_table<S: AsRef<str>>(
        name: impl Into<String>,
        table: &BTreeMap<u16, Vec<S>>,
    ) -> Result<Self> {
        let mut calendar = Self::new(name);
        for (&year, dates) in table {
            for text in dates {
                let text = text.as_ref();
                let date = Date::from_iso(text)?;
                if date.year() != year {
                    return Err(Error::configuration(
                        "holiday date",
                        text,
                        format!("a date in {year}"),
                    ));
                }
                calendar.add_holiday(date);
            }
        }
        Ok(calendar)
    }

    /// Declare a holiday.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.entry(date.year()).or_default().insert(date);
    }

    /// Return the holidays declared for `year`, in date order.
    pub fn holidays_in(&self, year: u16) -> impl Iterator<Item = Date> + '_ {
        self.holidays.get(&year).into_iter().flatten().copied()
    }

    /// Return the years that have a holiday table.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.holidays.keys().copied()
    }

    /// Return `true` if the table has an entry for `year`.
    pub fn covers_year(&self, year: u16) -> bool {
        self.holidays.contains_key(&year)
    }

    /// Return the number of declared holidays across all years.
    pub fn holiday_count(&self) -> usize {
        self.holidays.values().map(BTreeSet::len).sum()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays
            .get(&date.year())
            .is_some_and(|days| days.contains(&date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar_is_weekends_only() {
        let cal = HolidayCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        // Monday is a working day
        assert!(cal.is_working_day(date(2025, 9, 1)));
        // Saturday is not
        assert!(!cal.is_working_day(date(2025, 9, 6)));
        assert_eq!(cal.holiday_count(), 0);
    }

    #[test]
    fn table_lookup() {
        let table = BTreeMap::from([(2025, vec!["2025-11-03", "2025-11-04"])]);
        let cal = HolidayCalendar::from_iso_table("Custom", &table).unwrap();
        assert!(cal.is_holiday(date(2025, 11, 4)));
        assert!(!cal.is_working_day(date(2025, 11, 3)));
        assert!(cal.is_working_day(date(2025, 11, 5)));
        assert_eq!(cal.holiday_count(), 2);
        assert!(cal.covers_year(2025));
        assert!(!cal.covers_year(2026));
        assert_eq!(
            cal.holidays_in(2025).collect::<Vec<_>>(),
            vec![date(2025, 11, 3), date(2025, 11, 4)]
        );
        assert_eq!(cal.holidays_in(2030).count(), 0);
    }

    #[test]
    fn unlisted_year_degrades_to_weekends() {
        let table = BTreeMap::from([(2025, vec!["2025-01-01"])]);
        let cal = HolidayCalendar::from_iso_table("Custom", &table).unwrap();
        // 2031-01-01 is a Wednesday and the table has no 2031 entry
        assert!(cal.is_working_day(date(2031, 1, 1)));
    }

    #[test]
    fn rejects_malformed_and_misfiled_dates() {
        let bad = BTreeMap::from([(2025, vec!["2025-13-01"])]);
        assert!(HolidayCalendar::from_iso_table("Bad", &bad).is_err());

        let misfiled = BTreeMap::from([(2025, vec!["2026-01-01"])]);
        let err = HolidayCalendar::from_iso_table("Bad", &misfiled).unwrap_err();
        assert!(err.is_configuration());
    }
}
