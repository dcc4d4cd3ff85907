//! `Period`: the realized span of one consumed block.

use crate::activity::ActivityCode;
use crate::block::{Block, BlockTag};
use acal_core::{Real, Size};
use acal_time::Date;
use serde::Serialize;

/// Engine output for one block: the working days it was given.
///
/// `assigned_days` is ascending and never empty. A period is `partial`
/// when the horizon closed before its quota was met.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Period {
    /// Activity code of the originating block.
    pub code: ActivityCode,
    /// Requested length in weeks.
    pub weeks: Real,
    /// First assigned day.
    pub start_date: Date,
    /// Last assigned day.
    pub end_date: Date,
    /// Every assigned day, in order.
    pub assigned_days: Vec<Date>,
    /// Year/semester metadata of the originating block.
    pub tag: Option<BlockTag>,
    /// `true` if fewer days were assigned than requested.
    pub partial: bool,
}

impl Period {
    /// Build a period from the days collected for `block`.
    ///
    /// Returns `None` when no day was collected.
    pub fn from_block(block: &Block, assigned_days: Vec<Date>) -> Option<Self> {
        Self::with_quota(block, assigned_days, block.working_days_needed())
    }

    /// Like [`Period::from_block`], measuring `partial` against `quota`
    /// instead of the block's working-day need.
    pub(crate) fn with_quota(block: &Block, assigned_days: Vec<Date>, quota: Size) -> Option<Self> {
        let start_date = *assigned_days.first()?;
        let end_date = *assigned_days.last()?;
        Some(Self {
            code: block.code(),
            weeks: block.weeks(),
            start_date,
            end_date,
            partial: assigned_days.len() < quota,
            assigned_days,
            tag: block.tag(),
        })
    }

    /// Number of assigned days.
    pub fn day_count(&self) -> Size {
        self.assigned_days.len()
    }

    /// Calendar days spanned, both ends inclusive.
    pub fn span_days(&self) -> i32 {
        self.end_date - self.start_date + 1
    }
}
