//! `Generator`: one schedule request from validated inputs to grids.

use crate::block::BlockSequence;
use crate::engine::{BlockConsumptionEngine, Consumption, Exhaustion};
use crate::grid::{activity_index, Grid, WeekGridIndexer};
use crate::mode::ConsumptionMode;
use crate::period::Period;
use crate::round_robin::RoundRobinEngine;
use crate::summary::{summarize, Summary};
use acal_core::errors::{Error, Result};
use acal_core::ensure;
use acal_time::{AcademicYear, Calendar, WeekendsOnly};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generation {
    /// Periods in consumption order.
    pub periods: Vec<Period>,
    /// One grid per academic year, in year order.
    pub grids: Vec<Grid>,
    /// Day counts per activity, year and semester.
    pub summary: Summary,
    /// Present when the block sequence did not fit.
    pub exhaustion: Option<Exhaustion>,
}

impl Generation {
    /// Turn an exhausted generation into [`Error::CalendarExhaustion`].
    pub fn into_strict(self) -> Result<Self> {
        match self.exhaustion {
            Some(exhaustion) => Err(exhaustion.into_error()),
            None => Ok(self),
        }
    }

    /// The grid of `year`, if it was part of the request.
    pub fn grid(&self, year: AcademicYear) -> Option<&Grid> {
        self.grids.iter().find(|g| g.academic_year() == year)
    }
}

/// Validated generation inputs: academic years, calendar and mode.
#[derive(Debug)]
pub struct Generator {
    years: Vec<AcademicYear>,
    calendar: Box<dyn Calendar>,
    mode: ConsumptionMode,
}

impl Generator {
    /// Validate the year list and build a generator.
    ///
    /// # Errors
    /// Returns a configuration error if `years` is empty or not a run of
    /// consecutive academic years in ascending order.
    pub fn new(
        years: Vec<AcademicYear>,
        calendar: Box<dyn Calendar>,
        mode: ConsumptionMode,
    ) -> Result<Self> {
        ensure!(!years.is_empty(), "academic years", "", "at least one academic year");
        for pair in years.windows(2) {
            if pair[0].next() != Some(pair[1]) {
                return Err(Error::configuration(
                    "academic years",
                    format!("{} {}", pair[0], pair[1]),
                    "consecutive academic years in ascending order",
                ));
            }
        }
        Ok(Self {
            years,
            calendar,
            mode,
        })
    }

    /// Configured academic years.
    pub fn years(&self) -> &[AcademicYear] {
        &self.years
    }

    /// Selected consumption mode.
    pub fn mode(&self) -> ConsumptionMode {
        self.mode
    }

    /// The working-day calendar.
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// Run the selected engine and derive grids and summary.
    #[tracing::instrument(skip_all, fields(mode = %self.mode, blocks = blocks.len()))]
    pub fn generate(&self, blocks: &BlockSequence) -> Generation {
        let first = self.years[0];
        let last = self.years[self.years.len() - 1];
        info!(
            years = self.years.len(),
            calendar = self.calendar.name(),
            from = %first.start_date(),
            to = %last.end_date(),
            requested_days = blocks.total_working_days(),
            "generating schedule"
        );

        let Consumption {
            periods,
            exhaustion,
        } = match self.mode {
            ConsumptionMode::WorkingDays => {
                BlockConsumptionEngine::new(self.calendar(), last.end_date())
                    .consume(first.start_date(), blocks)
            }
            ConsumptionMode::FixedWeekRoundRobin => RoundRobinEngine.consume(&self.years, blocks),
        };

        for period in &periods {
            debug!(
                code = %period.code,
                start = %period.start_date,
                end = %period.end_date,
                days = period.day_count(),
                partial = period.partial,
                "period"
            );
        }
        if let Some(e) = &exhaustion {
            warn!(
                requested = e.requested,
                assigned = e.assigned,
                blocks_unscheduled = e.blocks_unscheduled,
                "block sequence does not fit the academic years; last period truncated"
            );
        }

        let grid_calendar: &dyn Calendar = if self.mode.uses_holidays() {
            self.calendar()
        } else {
            &WeekendsOnly
        };
        let index = activity_index(&periods);
        let indexer = WeekGridIndexer::new(grid_calendar);
        let grids = self.years.iter().map(|y| indexer.build(y, &index)).collect();
        let summary = summarize(&periods, &self.years);

        Generation {
            periods,
            grids,
            summary,
            exhaustion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityCode;
    use crate::block::Block;
    use acal_time::{Date, HolidayCalendar};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn rejects_bad_year_lists() {
        assert!(Generator::new(Vec::new(), Box::new(WeekendsOnly), ConsumptionMode::WorkingDays)
            .is_err());
        let gap = AcademicYear::parse_list("2025/2026 2027/2028").unwrap();
        assert!(Generator::new(gap, Box::new(WeekendsOnly), ConsumptionMode::WorkingDays).is_err());
        let reversed = AcademicYear::parse_list("2026/2027 2025/2026").unwrap();
        assert!(
            Generator::new(reversed, Box::new(WeekendsOnly), ConsumptionMode::WorkingDays).is_err()
        );
    }

    #[test]
    fn round_robin_grid_ignores_holidays() {
        let years = vec![AcademicYear::starting(2025).unwrap()];
        let generator = Generator::new(
            years,
            Box::new(HolidayCalendar::russia()),
            ConsumptionMode::FixedWeekRoundRobin,
        )
        .unwrap();
        let seq = BlockSequence::new(vec![Block::new(ActivityCode::Theory, 10.0).unwrap()]).unwrap();
        let out = generator.generate(&seq);

        // 2025-11-04 is a holiday, but this mode assigns it anyway
        let cell = out.grids[0].cell(date(2025, 11, 4)).unwrap();
        assert_eq!(cell.activity_code(), Some(ActivityCode::Theory));
        assert!(out.exhaustion.is_none());
    }

    #[test]
    fn round_robin_tagged_blocks_count_per_year() {
        let years = AcademicYear::parse_list("2025/2026 2026/2027").unwrap();
        let generator = Generator::new(
            years,
            Box::new(WeekendsOnly),
            ConsumptionMode::FixedWeekRoundRobin,
        )
        .unwrap();
        let seq = BlockSequence::new(vec![
            Block::tagged(ActivityCode::Theory, 2.0, 1, 1).unwrap(),
            Block::tagged(ActivityCode::Vacation, 1.0, 1, 2).unwrap(),
        ])
        .unwrap();
        let out = generator.generate(&seq);

        assert_eq!(out.summary.count(ActivityCode::Theory, 1, 1), 10);
        assert_eq!(out.summary.count(ActivityCode::Theory, 2, 1), 10);
        assert_eq!(out.summary.count(ActivityCode::Vacation, 2, 2), 5);
        assert_eq!(out.summary.year_total(2), 15);
    }

    #[test]
    fn generation_serializes() {
        let years = vec![AcademicYear::starting(2025).unwrap()];
        let generator =
            Generator::new(years, Box::new(WeekendsOnly), ConsumptionMode::WorkingDays).unwrap();
        let seq = BlockSequence::new(vec![Block::new(ActivityCode::Theory, 1.0).unwrap()]).unwrap();
        let value = serde_json::to_value(generator.generate(&seq)).unwrap();

        assert_eq!(value["periods"][0]["start_date"], "2025-09-01");
        assert_eq!(value["summary"]["total"], 5);
        assert!(value["exhaustion"].is_null());
        assert_eq!(value["grids"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn strict_conversion() {
        let years = vec![AcademicYear::starting(2025).unwrap()];
        let generator =
            Generator::new(years, Box::new(WeekendsOnly), ConsumptionMode::WorkingDays).unwrap();
        let seq = BlockSequence::new(vec![Block::new(ActivityCode::Theory, 60.0).unwrap()]).unwrap();
        let out = generator.generate(&seq);
        assert!(out.periods[0].partial);
        assert!(matches!(
            out.into_strict(),
            Err(Error::CalendarExhaustion { requested: 300, assigned: 261, .. })
        ));
    }
}
