//! Plain-text renderings of a generation: the period table, the summary
//! table, and a compact grid.

use acal_core::utilities::data_formatters::format_weeks;
use acal_schedule::{ActivityCode, Grid, Period, Summary};
use acal_time::AcademicYear;
use std::fmt;

/// `(year, semester)` of a period: its tag, or the position of its first
/// day among `years`.
pub fn period_position(period: &Period, years: &[AcademicYear]) -> Option<(u8, u8)> {
    if let Some(tag) = period.tag {
        return Some((tag.year, tag.semester));
    }
    years.iter().enumerate().find_map(|(i, y)| {
        y.semester_of(period.start_date)
            .map(|semester| (i as u8 + 1, semester))
    })
}

/// One line per period with year, semester, label, weeks, dates and day
/// count. Truncated periods are marked with `*`.
pub fn period_report(periods: &[Period], years: &[AcademicYear]) -> String {
    PeriodTable { periods, years }.to_string()
}

/// Working days per activity, split by year and semester, with totals.
pub fn summary_report(summary: &Summary, year_count: usize) -> String {
    SummaryTable {
        summary,
        year_count: u8::try_from(year_count).unwrap_or(u8::MAX),
    }
    .to_string()
}

/// Month blocks of week rows, one label per weekday. Days of the
/// neighbouring month show as `.`, unassigned working days as `-`.
pub fn grid_report(grid: &Grid) -> String {
    GridTable(grid).to_string()
}

struct PeriodTable<'a> {
    periods: &'a [Period],
    years: &'a [AcademicYear],
}

impl fmt::Display for PeriodTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<5} {:<4} {:<4} {:>6}  {:<10}  {:<10}  {:>4}",
            "Year", "Sem", "Type", "Weeks", "Start", "End", "Days"
        )?;
        for period in self.periods {
            let (year, semester) = period_position(period, self.years)
                .map_or(("-".to_string(), "-".to_string()), |(y, s)| (y.to_string(), s.to_string()));
            writeln!(
                f,
                "{:<5} {:<4} {:<4} {:>6}  {:<10}  {:<10}  {:>4}{}",
                year,
                semester,
                period.code.label(),
                format_weeks(period.weeks),
                period.start_date.to_dmy_string(),
                period.end_date.to_dmy_string(),
                period.day_count(),
                if period.partial { " *" } else { "" }
            )?;
        }
        Ok(())
    }
}

struct SummaryTable<'a> {
    summary: &'a Summary,
    year_count: u8,
}

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        write!(f, "{:<5}", "")?;
        for year in 1..=self.year_count {
            write!(f, " {:>6} {:>6} {:>6}", format!("{year}.1"), format!("{year}.2"), year)?;
        }
        writeln!(f, " {:>6}", "Total")?;

        for &code in ActivityCode::ALL.iter().filter(|c| c.is_block_code()) {
            write!(f, "{:<5}", code.label())?;
            for year in 1..=self.year_count {
                write!(
                    f,
                    " {:>6} {:>6} {:>6}",
                    summary.count(code, year, 1),
                    summary.count(code, year, 2),
                    summary.activity_year_total(code, year)
                )?;
            }
            writeln!(f, " {:>6}", summary.activity_total(code))?;
        }

        write!(f, "{:<5}", "Σ")?;
        for year in 1..=self.year_count {
            let sem = |s| -> usize {
                ActivityCode::ALL
                    .iter()
                    .map(|&c| summary.count(c, year, s))
                    .sum()
            };
            write!(f, " {:>6} {:>6} {:>6}", sem(1), sem(2), summary.year_total(year))?;
        }
        writeln!(f, " {:>6}", summary.total())
    }
}

struct GridTable<'a>(&'a Grid);

impl fmt::Display for GridTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.academic_year())?;
        for month in self.0.months() {
            writeln!(f, "{} {}", month.month.short_name(), month.year)?;
            for week in &month.weeks {
                write!(f, "  {:>2} ", week.number)?;
                for day in &week.days {
                    let label = match day {
                        None => ".",
                        Some(cell) if cell.activity_code().is_none() => "-",
                        Some(cell) => cell.label(),
                    };
                    write!(f, " {label:<3}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acal_schedule::{build_grid, summarize, Block};
    use acal_time::{Date, WeekendsOnly};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn theory_period() -> Period {
        let block = Block::new(ActivityCode::Theory, 1.5).unwrap();
        let days = date(2025, 9, 1)
            .iter_through(date(2025, 9, 9))
            .filter(|d| !d.weekday().is_weekend())
            .collect();
        Period::from_block(&block, days).unwrap()
    }

    #[test]
    fn period_line() {
        let years = vec![AcademicYear::starting(2025).unwrap()];
        let report = period_report(&[theory_period()], &years);
        let line = report.lines().nth(1).unwrap();
        assert!(line.starts_with("1     1    Т"));
        assert!(line.contains("1.5"));
        assert!(line.contains("01.09.2025"));
        assert!(line.contains("09.09.2025"));
        assert!(line.trim_end().ends_with('7'));
    }

    #[test]
    fn summary_table() {
        let years = vec![AcademicYear::starting(2025).unwrap()];
        let summary = summarize(&[theory_period()], &years);
        let report = summary_report(&summary, 1);
        let theory = report.lines().find(|l| l.starts_with('Т')).unwrap();
        let numbers: Vec<&str> = theory.split_whitespace().skip(1).collect();
        assert_eq!(numbers, vec!["7", "0", "7", "7"]);
    }

    #[test]
    fn grid_rows() {
        let year = AcademicYear::starting(2025).unwrap();
        let grid = build_grid(&year, &[theory_period()], &WeekendsOnly);
        let report = grid_report(&grid);
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("2025/2026"));
        assert_eq!(lines.next(), Some("Sep 2025"));
        let first = lines.next().unwrap();
        let cells: Vec<&str> = first.split_whitespace().collect();
        assert_eq!(cells, vec!["1", "Т", "Т", "Т", "Т", "Т", "В", "В"]);
        let second: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
        assert_eq!(second, vec!["2", "Т", "Т", "-", "-", "-", "В", "В"]);
    }
}
