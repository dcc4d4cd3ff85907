//! Concrete holiday calendars.

/// Table-driven holiday calendar.
pub mod holiday_calendar;

/// Built-in Russian production calendar.
pub mod russia;

pub use holiday_calendar::HolidayCalendar;
