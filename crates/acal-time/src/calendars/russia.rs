//! Russian production calendar.
//!
//! Non-working public holidays as published for 2025–2028, including the
//! transferred days off. The table is hand-curated; other years fall back
//! to weekend-only determination.

use crate::calendars::holiday_calendar::HolidayCalendar;
use crate::date::Date;

/// Non-working holidays by year as `(month, day)` pairs.
const RUSSIA_HOLIDAYS: &[(u16, &[(u8, u8)])] = &[
    (
        2025,
        &[
            (1, 1), (1, 2), (1, 3), (1, 4), (1, 6), (1, 7), (1, 8),
            (2, 23), (3, 8), (5, 1), (5, 2), (5, 8), (5, 9),
            (6, 12), (6, 13), (11, 3), (11, 4),
        ],
    ),
    (
        2026,
        &[
            (1, 1), (1, 2), (1, 5), (1, 6), (1, 7), (1, 8), (1, 9),
            (2, 23), (3, 9), (5, 1), (5, 9), (5, 11), (6, 12), (11, 4),
        ],
    ),
    (
        2027,
        &[
            (1, 1), (1, 4), (1, 5), (1, 6), (1, 7), (1, 8),
            (2, 22), (2, 23), (3, 8), (5, 3), (5, 10), (6, 14), (11, 4),
        ],
    ),
    (
        2028,
        &[
            (1, 3), (1, 4), (1, 5), (1, 6), (1, 7),
            (2, 23), (3, 8), (5, 1), (5, 9), (6, 12), (11, 4),
        ],
    ),
];

impl HolidayCalendar {
    /// The Russian production calendar for 2025–2028.
    pub fn russia() -> Self {
        let mut calendar = HolidayCalendar::new("Russia");
        for &(year, days) in RUSSIA_HOLIDAYS {
            for &(month, day) in days {
                calendar.add_holiday(Date::from_ymd_unchecked(year, month, day));
            }
        }
        calendar
    }
}
