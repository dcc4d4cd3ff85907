//! `RoundRobinEngine`: the fixed 52-week consumption mode.
//!
//! Each academic year is a window of 52 whole weeks starting on its
//! September 1. Saturdays and Sundays are skipped; every other day goes to
//! the current block until `ceil(weeks * 5)` days are assigned. Holidays
//! are not consulted. The block sequence starts over in every year, and
//! blocks still open when the window closes are truncated. A tagged block
//! repeated in a later year has its tag's year index moved to that year.

use crate::block::{Block, BlockSequence, BlockTag};
use crate::engine::{Consumption, Exhaustion};
use crate::period::Period;
use acal_core::{Real, Size, WORKING_DAYS_PER_WEEK};
use acal_time::{AcademicYear, Date};

/// Weeks in the fixed window.
pub const WINDOW_WEEKS: i32 = 52;

/// Round-robin consumer over fixed 52-week windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinEngine;

impl RoundRobinEngine {
    /// Days a block occupies in this mode: `ceil(weeks * 5)`.
    pub fn quota(block: &Block) -> Size {
        (block.weeks() * WORKING_DAYS_PER_WEEK as Real).ceil() as Size
    }

    /// First and last day of the window for `year`.
    pub fn window(year: &AcademicYear) -> (Date, Date) {
        let first = year.start_date();
        (first, first + (WINDOW_WEEKS * 7 - 1))
    }

    /// Consume `blocks` once per academic year in `years`.
    pub fn consume(&self, years: &[AcademicYear], blocks: &BlockSequence) -> Consumption {
        let mut out = Consumption::default();
        let mut total = Exhaustion::default();
        let mut exhausted = false;

        for (index, year) in years.iter().enumerate() {
            let year_index = u8::try_from(index + 1).unwrap_or(u8::MAX);
            let (periods, shortfall) = Self::consume_year(year, year_index, blocks);
            out.periods.extend(periods);
            if let Some(report) = shortfall {
                total.absorb(report);
                exhausted = true;
            }
        }

        if exhausted {
            out.exhaustion = Some(total);
        }
        out
    }

    fn consume_year(
        year: &AcademicYear,
        year_index: u8,
        blocks: &BlockSequence,
    ) -> (Vec<Period>, Option<Exhaustion>) {
        let (first, last) = Self::window(year);
        let mut days = first
            .iter_through(last)
            .filter(|d| !d.weekday().is_weekend());

        let mut periods = Vec::with_capacity(blocks.len());
        let mut assigned = 0;
        let mut unscheduled = 0;
        let mut short = false;

        for block in blocks {
            let quota = Self::quota(block);
            let collected: Vec<Date> = days.by_ref().take(quota).collect();
            assigned += collected.len();
            if collected.len() < quota {
                short = true;
                if collected.is_empty() {
                    unscheduled += 1;
                }
            }
            if let Some(mut period) = Period::with_quota(block, collected, quota) {
                period.tag = period.tag.map(|tag| BlockTag {
                    year: year_index,
                    ..tag
                });
                periods.push(period);
            }
        }

        let report = short.then(|| Exhaustion {
            requested: blocks.iter().map(Self::quota).sum(),
            assigned,
            blocks_unscheduled: unscheduled,
        });
        (periods, report)
    }
}
