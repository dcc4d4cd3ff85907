//! Built-in program presets.
//!
//! Two training programs come with default durations and week counts: a
//! two-year residency and a three-year postgraduate program. The residency
//! also has a fully tagged example plan split by year and semester.

use acal_core::errors::{Error, Result};
use acal_core::Real;
use acal_schedule::{ActivityCode, Block, BlockSequence};
use acal_time::AcademicYear;

/// Consumption order shared by both programs.
pub const DEFAULT_ORDER: [ActivityCode; 5] = [
    ActivityCode::Theory,
    ActivityCode::Practice,
    ActivityCode::InterimAssessment,
    ActivityCode::FinalAssessment,
    ActivityCode::Vacation,
];

/// Training program with preset durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    /// Residency (ординатура): two academic years.
    Residency,
    /// Postgraduate study (аспирантура): three academic years.
    Postgraduate,
}

impl Program {
    /// Number of academic years.
    pub fn duration_years(&self) -> usize {
        match self {
            Program::Residency => 2,
            Program::Postgraduate => 3,
        }
    }

    /// Default week count for `code`, or `None` for the weekend marker.
    pub fn weeks(&self, code: ActivityCode) -> Option<Real> {
        let table: [Real; 5] = match self {
            Program::Residency => [10.0, 14.0, 1.0, 1.0, 2.0],
            Program::Postgraduate => [15.0, 20.0, 2.0, 2.0, 4.0],
        };
        DEFAULT_ORDER
            .iter()
            .position(|&c| c == code)
            .map(|i| table[i])
    }

    /// Consecutive academic years starting in September of `start_year`.
    pub fn default_years(&self, start_year: i32) -> Result<Vec<AcademicYear>> {
        (0..self.duration_years() as i32)
            .map(|offset| {
                let year = start_year.checked_add(offset).ok_or_else(|| {
                    Error::configuration(
                        "start_year",
                        start_year.to_string(),
                        "a year between 1900 and 2198",
                    )
                })?;
                AcademicYear::starting(year)
            })
            .collect()
    }

    /// The default block sequence in [`DEFAULT_ORDER`].
    pub fn block_sequence(&self) -> Result<BlockSequence> {
        let blocks = DEFAULT_ORDER
            .iter()
            .map(|&code| {
                let weeks = self.weeks(code).unwrap_or_default();
                Block::new(code, weeks)
            })
            .collect::<Result<Vec<_>>>()?;
        BlockSequence::new(blocks)
    }
}

impl std::str::FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "residency" | "ordinatura" | "ординатура" => Ok(Program::Residency),
            "postgraduate" | "aspirantura" | "аспирантура" => Ok(Program::Postgraduate),
            other => Err(Error::configuration(
                "program",
                other,
                "residency or postgraduate",
            )),
        }
    }
}

/// Tagged residency plan: `(year, semester, code, weeks)` rows.
const RESIDENCY_EXAMPLE: [(u8, u8, ActivityCode, Real); 15] = [
    (1, 1, ActivityCode::Theory, 10.0),
    (1, 1, ActivityCode::Practice, 12.0),
    (1, 1, ActivityCode::InterimAssessment, 1.0),
    (1, 2, ActivityCode::Theory, 4.0),
    (1, 2, ActivityCode::Practice, 16.0),
    (1, 2, ActivityCode::InterimAssessment, 1.0),
    (1, 2, ActivityCode::Vacation, 6.0),
    (2, 1, ActivityCode::Theory, 10.0),
    (2, 1, ActivityCode::Practice, 12.0),
    (2, 1, ActivityCode::InterimAssessment, 1.0),
    (2, 2, ActivityCode::Theory, 9.0),
    (2, 2, ActivityCode::Practice, 8.0),
    (2, 2, ActivityCode::InterimAssessment, 1.0),
    (2, 2, ActivityCode::FinalAssessment, 2.0),
    (2, 2, ActivityCode::Vacation, 6.0),
];

/// The example residency plan, one tagged block per row.
pub fn residency_example() -> Result<BlockSequence> {
    let blocks = RESIDENCY_EXAMPLE
        .iter()
        .map(|&(year, semester, code, weeks)| Block::tagged(code, weeks, year, semester))
        .collect::<Result<Vec<_>>>()?;
    BlockSequence::new(blocks)
}
