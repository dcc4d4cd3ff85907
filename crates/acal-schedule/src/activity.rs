//! `ActivityCode`: the closed set of labels a calendar day can carry.

use acal_core::errors::{Error, Result};
use serde::Serialize;

/// Kind of academic activity assigned to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityCode {
    /// Theoretical training (Т).
    Theory,
    /// Practicum (П).
    Practice,
    /// Interim assessment (ПА).
    InterimAssessment,
    /// Final state assessment (ГИА).
    FinalAssessment,
    /// Vacation (К).
    Vacation,
    /// Non-working day marker (В). Never a block code.
    Weekend,
}

impl ActivityCode {
    /// All codes in display order.
    pub const ALL: [ActivityCode; 6] = [
        ActivityCode::Theory,
        ActivityCode::Practice,
        ActivityCode::InterimAssessment,
        ActivityCode::FinalAssessment,
        ActivityCode::Vacation,
        ActivityCode::Weekend,
    ];

    /// Short Cyrillic label used in grids and reports.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCode::Theory => "Т",
            ActivityCode::Practice => "П",
            ActivityCode::InterimAssessment => "ПА",
            ActivityCode::FinalAssessment => "ГИА",
            ActivityCode::Vacation => "К",
            ActivityCode::Weekend => "В",
        }
    }

    /// English name, as accepted by [`FromStr`](std::str::FromStr).
    pub fn name(&self) -> &'static str {
        match self {
            ActivityCode::Theory => "theory",
            ActivityCode::Practice => "practice",
            ActivityCode::InterimAssessment => "interim-assessment",
            ActivityCode::FinalAssessment => "final-assessment",
            ActivityCode::Vacation => "vacation",
            ActivityCode::Weekend => "weekend",
        }
    }

    /// Return `true` if the code may label a block.
    pub fn is_block_code(&self) -> bool {
        !matches!(self, ActivityCode::Weekend)
    }
}

impl std::fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ActivityCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        ActivityCode::ALL
            .into_iter()
            .find(|c| c.label() == token || c.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                Error::configuration(
                    "activity code",
                    token,
                    "one of Т, П, ПА, ГИА, К or its English name",
                )
            })
    }
}
