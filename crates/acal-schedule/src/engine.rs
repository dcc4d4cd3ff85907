//! `BlockConsumptionEngine`: turns a block sequence into periods.
//!
//! Starting from a date, the engine walks forward one calendar day at a
//! time and hands each working day to the current block until its quota is
//! met, then moves on to the next block. Non-working days are skipped, so
//! a holiday inside a block lengthens its calendar span by one day while
//! the quota stays fixed.

use crate::block::BlockSequence;
use crate::period::Period;
use acal_core::errors::Error;
use acal_core::Size;
use acal_time::{Calendar, Date};
use serde::Serialize;

/// Report of a block sequence that did not fit before the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Exhaustion {
    /// Working days requested by the whole sequence.
    pub requested: Size,
    /// Working days actually assigned.
    pub assigned: Size,
    /// Blocks that never received a day.
    pub blocks_unscheduled: Size,
}

impl Exhaustion {
    /// Working days that could not be placed.
    pub fn shortfall(&self) -> Size {
        self.requested.saturating_sub(self.assigned)
    }

    /// Merge another report into this one.
    pub fn absorb(&mut self, other: Exhaustion) {
        self.requested += other.requested;
        self.assigned += other.assigned;
        self.blocks_unscheduled += other.blocks_unscheduled;
    }

    /// Convert the report into [`Error::CalendarExhaustion`] for callers
    /// that treat an overflowing sequence as a failure.
    pub fn into_error(self) -> Error {
        Error::CalendarExhaustion {
            requested: self.requested,
            assigned: self.assigned,
            blocks_unscheduled: self.blocks_unscheduled,
        }
    }
}

/// Engine output: the periods in sequence order plus an optional
/// exhaustion report.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Consumption {
    /// One period per block that received at least one day.
    pub periods: Vec<Period>,
    /// Present when the horizon closed before the sequence was consumed.
    pub exhaustion: Option<Exhaustion>,
}

impl Consumption {
    /// Return `true` if every block met its quota.
    pub fn is_complete(&self) -> bool {
        self.exhaustion.is_none()
    }
}

/// Holiday-aware block consumer.
#[derive(Debug, Clone, Copy)]
pub struct BlockConsumptionEngine<'a> {
    calendar: &'a dyn Calendar,
    horizon: Date,
}

impl<'a> BlockConsumptionEngine<'a> {
    /// Create an engine over `calendar` that may assign days up to and
    /// including `horizon`.
    pub fn new(calendar: &'a dyn Calendar, horizon: Date) -> Self {
        Self { calendar, horizon }
    }

    /// Last date the engine may assign.
    pub fn horizon(&self) -> Date {
        self.horizon
    }

    /// Consume `blocks` in order starting at `start`.
    pub fn consume(&self, start: Date, blocks: &BlockSequence) -> Consumption {
        let mut periods = Vec::with_capacity(blocks.len());
        let mut cursor = Some(start);
        let mut assigned = 0;

        for (i, block) in blocks.iter().enumerate() {
            let needed = block.working_days_needed();
            let mut collected = Vec::with_capacity(needed);

            while collected.len() < needed {
                let day = cursor.and_then(|c| self.calendar.next_working_day(c, self.horizon));
                match day {
                    Some(day) => {
                        collected.push(day);
                        cursor = day.add_days(1).ok();
                    }
                    None => break,
                }
            }

            let short = collected.len() < needed;
            let started = !collected.is_empty();
            assigned += collected.len();
            if let Some(period) = Period::from_block(block, collected) {
                periods.push(period);
            }

            if short {
                let exhaustion = Exhaustion {
                    requested: blocks.total_working_days(),
                    assigned,
                    blocks_unscheduled: usize::from(!started)
                        + blocks
                            .iter()
                            .skip(i + 1)
                            .filter(|b| b.working_days_needed() > 0)
                            .count(),
                };
                return Consumption {
                    periods,
                    exhaustion: Some(exhaustion),
                };
            }
        }

        Consumption {
            periods,
            exhaustion: None,
        }
    }
}
