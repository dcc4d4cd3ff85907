//! `ConsumptionMode`: which engine a generation runs.

use acal_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Engine selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsumptionMode {
    /// Holiday-aware working-day consumption over the whole horizon.
    #[default]
    WorkingDays,
    /// Fixed 52-week window per academic year, holidays ignored.
    FixedWeekRoundRobin,
}

impl ConsumptionMode {
    /// Name as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            ConsumptionMode::WorkingDays => "working-days",
            ConsumptionMode::FixedWeekRoundRobin => "fixed-week-round-robin",
        }
    }

    /// Return `true` if the mode consults the holiday calendar.
    pub fn uses_holidays(&self) -> bool {
        matches!(self, ConsumptionMode::WorkingDays)
    }
}

impl std::fmt::Display for ConsumptionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ConsumptionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "working-days" => Ok(ConsumptionMode::WorkingDays),
            "fixed-week-round-robin" => Ok(ConsumptionMode::FixedWeekRoundRobin),
            other => Err(Error::configuration(
                "consumption mode",
                other,
                "working-days or fixed-week-round-robin",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_working_days() {
        assert_eq!(ConsumptionMode::default(), ConsumptionMode::WorkingDays);
        assert!(ConsumptionMode::default().uses_holidays());
    }

    #[test]
    fn parse_names() {
        assert_eq!(
            "Fixed-Week-Round-Robin".parse::<ConsumptionMode>().unwrap(),
            ConsumptionMode::FixedWeekRoundRobin
        );
        assert!("weekly".parse::<ConsumptionMode>().is_err());
    }
}
