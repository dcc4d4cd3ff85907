//! # acal-schedule
//!
//! Block consumption engines, the week grid indexer, and the summary
//! aggregator.
//!
//! ```
//! use acal_schedule::{ActivityCode, Block, BlockSequence, ConsumptionMode, Generator};
//! use acal_time::{AcademicYear, WeekendsOnly};
//!
//! let years = AcademicYear::parse_list("2025/2026").unwrap();
//! let generator =
//!     Generator::new(years, Box::new(WeekendsOnly), ConsumptionMode::WorkingDays).unwrap();
//! let blocks = BlockSequence::new(vec![
//!     Block::new(ActivityCode::Theory, 2.0).unwrap(),
//!     Block::new(ActivityCode::Vacation, 1.0).unwrap(),
//! ])
//! .unwrap();
//!
//! let out = generator.generate(&blocks);
//! assert_eq!(out.periods.len(), 2);
//! assert_eq!(out.summary.total(), 15);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod activity;
pub mod block;
pub mod engine;
pub mod generator;
pub mod grid;
pub mod mode;
pub mod period;
pub mod round_robin;
pub mod summary;

pub use activity::ActivityCode;
pub use block::{Block, BlockSequence, BlockTag};
pub use engine::{BlockConsumptionEngine, Consumption, Exhaustion};
pub use generator::{Generation, Generator};
pub use grid::{
    activity_index, build_grid, ActivityIndex, DayCell, DayKind, Grid, GridMonth, GridWeek,
    WeekGridIndexer,
};
pub use mode::ConsumptionMode;
pub use period::Period;
pub use round_robin::RoundRobinEngine;
pub use summary::{summarize, Summary};
