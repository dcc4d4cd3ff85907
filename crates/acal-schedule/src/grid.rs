//! Week grid indexer.
//!
//! Re-projects the day-level assignment onto a month × week × weekday
//! matrix for one academic year. Each month contributes the Monday-first
//! rows of an ordinary month calendar; days belonging to the neighbouring
//! month are left empty in the row. A Monday-to-Sunday span crossing a
//! month boundary therefore shows up once in each month, and each
//! appearance takes the next number from a running week counter that
//! starts at 1 in September.

use crate::activity::ActivityCode;
use crate::period::Period;
use acal_time::{AcademicYear, Calendar, Date, Month, Weekday};
use serde::Serialize;
use std::collections::HashMap;

/// Day → activity lookup built once from the engine output.
pub type ActivityIndex = HashMap<Date, ActivityCode>;

/// Build the lookup for `periods`.
pub fn activity_index(periods: &[Period]) -> ActivityIndex {
    periods
        .iter()
        .flat_map(|p| p.assigned_days.iter().map(move |&d| (d, p.code)))
        .collect()
}

/// Classification of one grid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayKind {
    /// Saturday or Sunday.
    Weekend,
    /// Declared public holiday.
    Holiday,
    /// Working day assigned to a block.
    Activity(ActivityCode),
    /// Working day no block reached.
    Unassigned,
}

impl DayKind {
    /// Code shown in the grid: `В` for weekends and holidays, the block
    /// code for assigned days, nothing otherwise.
    pub fn activity_code(&self) -> Option<ActivityCode> {
        match self {
            DayKind::Weekend | DayKind::Holiday => Some(ActivityCode::Weekend),
            DayKind::Activity(code) => Some(*code),
            DayKind::Unassigned => None,
        }
    }
}

/// One in-month day of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The date.
    pub date: Date,
    /// Day of the week.
    pub weekday: Weekday,
    /// Month the cell is displayed in.
    pub month: Month,
    /// 0-based row index within the month.
    pub week_in_month: u8,
    /// Running week number across the academic year.
    pub global_week: u32,
    /// Classification.
    pub kind: DayKind,
}

impl DayCell {
    /// Shorthand for `self.kind.activity_code()`.
    pub fn activity_code(&self) -> Option<ActivityCode> {
        self.kind.activity_code()
    }

    /// Label to render, empty for unassigned days.
    pub fn label(&self) -> &'static str {
        self.activity_code().map_or("", |c| c.label())
    }
}

/// One Monday-first row of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridWeek {
    /// Running week number.
    pub number: u32,
    /// Monday of the row; may belong to the previous month.
    pub monday: Date,
    /// Cells keyed by weekday index (0 = Monday); `None` outside the month.
    pub days: [Option<DayCell>; 7],
}

impl GridWeek {
    /// In-month cells of the row.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().flatten()
    }
}

/// All rows of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridMonth {
    /// Calendar year of the month.
    pub year: u16,
    /// The month.
    pub month: Month,
    /// Rows in order.
    pub weeks: Vec<GridWeek>,
}

/// Month/week/weekday matrix for one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    academic_year: AcademicYear,
    months: Vec<GridMonth>,
}

impl Grid {
    /// The academic year covered.
    pub fn academic_year(&self) -> AcademicYear {
        self.academic_year
    }

    /// Months in academic order, September first.
    pub fn months(&self) -> &[GridMonth] {
        &self.months
    }

    /// Every row in order.
    pub fn weeks(&self) -> impl Iterator<Item = &GridWeek> {
        self.months.iter().flat_map(|m| m.weeks.iter())
    }

    /// Every in-month cell in date order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks().flat_map(GridWeek::cells)
    }

    /// The cell for `date`, if it lies in this academic year.
    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        let month = self
            .months
            .iter()
            .find(|m| m.year == date.year() && m.month == date.month_of_year())?;
        let index = date.weekday().index() as usize;
        month
            .weeks
            .iter()
            .find_map(|w| w.days[index].as_ref().filter(|c| c.date == date))
    }

    /// Number of rows, equal to the last week number.
    pub fn week_count(&self) -> usize {
        self.months.iter().map(|m| m.weeks.len()).sum()
    }
}

/// Builds grids against a calendar.
#[derive(Debug, Clone, Copy)]
pub struct WeekGridIndexer<'a> {
    calendar: &'a dyn Calendar,
}

impl<'a> WeekGridIndexer<'a> {
    /// Create an indexer marking non-working days from `calendar`.
    pub fn new(calendar: &'a dyn Calendar) -> Self {
        Self { calendar }
    }

    /// Build the grid of `year` from a prebuilt activity index.
    pub fn build(&self, year: &AcademicYear, index: &ActivityIndex) -> Grid {
        let mut counter = 0u32;
        let months = year
            .months()
            .into_iter()
            .map(|(y, month)| {
                let first = year.first_of_month(month);
                let last = first.end_of_month();
                let mut weeks = Vec::with_capacity(6);
                let mut monday = first.monday_of_week();
                while monday <= last {
                    counter += 1;
                    let week_in_month = weeks.len() as u8;
                    let days = std::array::from_fn(|i| {
                        let date = monday + i as i32;
                        (first <= date && date <= last).then(|| DayCell {
                            date,
                            weekday: date.weekday(),
                            month,
                            week_in_month,
                            global_week: counter,
                            kind: self.classify(date, index),
                        })
                    });
                    weeks.push(GridWeek {
                        number: counter,
                        monday,
                        days,
                    });
                    monday = monday + 7;
                }
                GridMonth {
                    year: y,
                    month,
                    weeks,
                }
            })
            .collect();

        Grid {
            academic_year: *year,
            months,
        }
    }

    fn classify(&self, date: Date, index: &ActivityIndex) -> DayKind {
        if self.calendar.is_holiday(date) {
            DayKind::Holiday
        } else if self.calendar.is_weekend(date) {
            DayKind::Weekend
        } else {
            index
                .get(&date)
                .map_or(DayKind::Unassigned, |&code| DayKind::Activity(code))
        }
    }
}

/// Build the grid of `year` for `periods`, marking non-working days from
/// `calendar`.
pub fn build_grid(year: &AcademicYear, periods: &[Period], calendar: &dyn Calendar) -> Grid {
    WeekGridIndexer::new(calendar).build(year, &activity_index(periods))
}
