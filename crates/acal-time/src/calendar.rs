//! `Calendar` trait: the working-day oracle.
//!
//! A calendar decides whether a date is a working day: Saturdays and
//! Sundays never are, and neither is any date the calendar declares a
//! holiday. Implementations are immutable after construction and safe to
//! share across threads.

use crate::date::Date;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Russia"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a declared public holiday.
    ///
    /// A declared holiday that falls on a weekend is still a holiday.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return the first working day on or after `date`, or `None` if there
    /// is none up to and including `limit`.
    fn next_working_day(&self, date: Date, limit: Date) -> Option<Date> {
        date.iter_through(limit).find(|&d| self.is_working_day(d))
    }

    /// Count the working days between `first` and `last`, both inclusive.
    fn working_days_between(&self, first: Date, last: Date) -> usize {
        first
            .iter_through(last)
            .filter(|&d| self.is_working_day(d))
            .count()
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
