//! # acal-time
//!
//! Date, weekday, month, working-day calendar, and academic-year types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `AcademicYear`: the September-to-August horizon.
pub mod academic_year;

/// Calendar trait (the working-day oracle) and `WeekendsOnly`.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use academic_year::AcademicYear;
pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::HolidayCalendar;
pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
