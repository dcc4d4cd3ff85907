//! Summary aggregator: working days per activity, year and semester.
//!
//! A tagged period counts entirely toward its `(year, semester)` tag.
//! Untagged periods are split day by day: the year is the 1-based position
//! of the academic year containing the day, and the semester follows the
//! fixed split (September–January is 1, February–August is 2). Days outside
//! every academic year are not counted.

use crate::activity::ActivityCode;
use crate::period::Period;
use acal_core::Size;
use acal_time::{AcademicYear, Date};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Aggregated day counts.
///
/// Serializes the per-semester counts as a list of rows, since their
/// composite keys have no map-key form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    #[serde(rename = "rows", serialize_with = "serialize_counts")]
    counts: BTreeMap<(ActivityCode, u8, u8), Size>,
    by_activity: BTreeMap<ActivityCode, Size>,
    by_year: BTreeMap<u8, Size>,
    total: Size,
}

impl Summary {
    fn add(&mut self, code: ActivityCode, year: u8, semester: u8, days: Size) {
        if days == 0 {
            return;
        }
        *self.counts.entry((code, year, semester)).or_default() += days;
        *self.by_activity.entry(code).or_default() += days;
        *self.by_year.entry(year).or_default() += days;
        self.total += days;
    }

    /// Days of `code` in `(year, semester)`.
    pub fn count(&self, code: ActivityCode, year: u8, semester: u8) -> Size {
        self.counts.get(&(code, year, semester)).copied().unwrap_or(0)
    }

    /// Days of `code` across all years.
    pub fn activity_total(&self, code: ActivityCode) -> Size {
        self.by_activity.get(&code).copied().unwrap_or(0)
    }

    /// Days in `year` across all activities.
    pub fn year_total(&self, year: u8) -> Size {
        self.by_year.get(&year).copied().unwrap_or(0)
    }

    /// Days of `code` in `year`, both semesters.
    pub fn activity_year_total(&self, code: ActivityCode, year: u8) -> Size {
        self.count(code, year, 1) + self.count(code, year, 2)
    }

    /// Grand total.
    pub fn total(&self) -> Size {
        self.total
    }

    /// Year indices that received at least one day.
    pub fn years(&self) -> impl Iterator<Item = u8> + '_ {
        self.by_year.keys().copied()
    }

    /// `(code, year, semester, days)` rows in key order.
    pub fn rows(&self) -> impl Iterator<Item = (ActivityCode, u8, u8, Size)> + '_ {
        self.counts
            .iter()
            .map(|(&(code, year, semester), &days)| (code, year, semester, days))
    }

    /// Return `true` if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[derive(Serialize)]
struct Row {
    activity: ActivityCode,
    year: u8,
    semester: u8,
    days: Size,
}

fn serialize_counts<S: Serializer>(
    counts: &BTreeMap<(ActivityCode, u8, u8), Size>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(counts.iter().map(|(&(activity, year, semester), &days)| Row {
        activity,
        year,
        semester,
        days,
    }))
}

/// Locate `date` among `years`: 1-based year index and semester.
fn position(date: Date, years: &[AcademicYear]) -> Option<(u8, u8)> {
    years.iter().enumerate().find_map(|(i, y)| {
        y.semester_of(date)
            .map(|semester| (i as u8 + 1, semester))
    })
}

/// Tally the assigned days of `periods`.
pub fn summarize(periods: &[Period], years: &[AcademicYear]) -> Summary {
    let mut summary = Summary::default();
    for period in periods {
        match period.tag {
            Some(tag) => summary.add(period.code, tag.year, tag.semester, period.day_count()),
            None => {
                for &day in &period.assigned_days {
                    if let Some((year, semester)) = position(day, years) {
                        summary.add(period.code, year, semester, 1);
                    }
                }
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn period(block: &Block, first: Date, last: Date) -> Period {
        let days = first
            .iter_through(last)
            .filter(|d| !d.weekday().is_weekend())
            .collect();
        Period::from_block(block, days).unwrap()
    }

    #[test]
    fn untagged_split_by_semester() {
        let years = AcademicYear::parse_list("2025/2026 2026/2027").unwrap();
        let block = Block::new(ActivityCode::Theory, 2.0).unwrap();
        // Mon 2026-01-26 .. Fri 2026-02-06
        let p = period(&block, date(2026, 1, 26), date(2026, 2, 6));
        let summary = summarize(&[p], &years);

        assert_eq!(summary.count(ActivityCode::Theory, 1, 1), 5);
        assert_eq!(summary.count(ActivityCode::Theory, 1, 2), 5);
        assert_eq!(summary.activity_year_total(ActivityCode::Theory, 1), 10);
        assert_eq!(summary.total(), 10);
    }

    #[test]
    fn untagged_second_year_and_outside_days() {
        let years = vec![AcademicYear::starting(2025).unwrap()];
        let block = Block::new(ActivityCode::Vacation, 2.0).unwrap();
        // Mon 2026-08-24 .. Fri 2026-09-04 runs past the horizon
        let p = period(&block, date(2026, 8, 24), date(2026, 9, 4));
        let summary = summarize(&[p], &years);
        assert_eq!(summary.count(ActivityCode::Vacation, 1, 2), 6);
        assert_eq!(summary.total(), 6);

        let two = AcademicYear::parse_list("2025/2026 2026/2027").unwrap();
        let p = period(&block, date(2026, 8, 24), date(2026, 9, 4));
        let summary = summarize(&[p], &two);
        assert_eq!(summary.count(ActivityCode::Vacation, 2, 1), 4);
        assert_eq!(summary.year_total(2), 4);
    }

    #[test]
    fn tagged_period_uses_tag() {
        let years = vec![AcademicYear::starting(2025).unwrap()];
        let block = Block::tagged(ActivityCode::Practice, 1.0, 2, 1).unwrap();
        let p = period(&block, date(2026, 3, 2), date(2026, 3, 6));
        let summary = summarize(&[p], &years);
        assert_eq!(summary.count(ActivityCode::Practice, 2, 1), 5);
        assert_eq!(summary.count(ActivityCode::Practice, 1, 2), 0);
        assert_eq!(summary.years().collect::<Vec<_>>(), vec![2]);
        assert_eq!(
            summary.rows().collect::<Vec<_>>(),
            vec![(ActivityCode::Practice, 2, 1, 5)]
        );
    }

    #[test]
    fn serializes_rows() {
        let years = vec![AcademicYear::starting(2025).unwrap()];
        let block = Block::new(ActivityCode::Theory, 1.0).unwrap();
        let p = period(&block, date(2025, 9, 1), date(2025, 9, 5));
        let value = serde_json::to_value(summarize(&[p], &years)).unwrap();

        assert_eq!(
            value["rows"],
            serde_json::json!([{ "activity": "theory", "year": 1, "semester": 1, "days": 5 }])
        );
        assert_eq!(value["by_activity"]["theory"], 5);
        assert_eq!(value["by_year"]["1"], 5);
        assert_eq!(value["total"], 5);
    }

    #[test]
    fn empty_input() {
        let summary = summarize(&[], &[]);
        assert!(summary.is_empty());
        assert_eq!(summary.activity_total(ActivityCode::Theory), 0);
    }
}
