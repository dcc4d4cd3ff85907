//! TOML request configuration.
//!
//! The file is deserialized into [`CalendarConfig`] and then validated into
//! a [`Request`] of core types. Every input problem surfaces as a
//! configuration error before any engine work starts.

use crate::presets::Program;
use acal_core::errors::{Error, Result};
use acal_core::utilities::data_parsers::parse_week_count;
use acal_core::{ensure, fail, Real};
use acal_schedule::{ActivityCode, Block, BlockSequence, ConsumptionMode, Generator};
use acal_time::{AcademicYear, Calendar, HolidayCalendar, WeekendsOnly};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A week count given either as a TOML number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WeekCount {
    /// `weeks = 10`
    Number(Real),
    /// `weeks = "1,5"`
    Text(String),
}

impl WeekCount {
    /// Validated number of weeks.
    pub fn value(&self) -> Result<Real> {
        match self {
            WeekCount::Number(n) => {
                ensure!(
                    n.is_finite() && *n > 0.0,
                    "week count",
                    n.to_string(),
                    "a positive number of weeks"
                );
                Ok(*n)
            }
            WeekCount::Text(s) => parse_week_count(s),
        }
    }

    fn as_text(&self) -> String {
        match self {
            WeekCount::Number(n) => n.to_string(),
            WeekCount::Text(s) => s.clone(),
        }
    }
}

/// One row of the tabular block form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockRow {
    /// Activity label or English name.
    pub code: String,
    /// Week count.
    pub weeks: WeekCount,
    /// 1-based academic year index.
    #[serde(default)]
    pub year: Option<u8>,
    /// Semester, 1 or 2.
    #[serde(default)]
    pub semester: Option<u8>,
}

impl BlockRow {
    fn to_block(&self) -> Result<Block> {
        let code: ActivityCode = self.code.parse()?;
        let weeks = self.weeks.value()?;
        match (self.year, self.semester) {
            (Some(year), Some(semester)) => Block::tagged(code, weeks, year, semester),
            (None, None) => Block::new(code, weeks),
            _ => fail!(
                "block row",
                format!("{} {}", self.code, self.weeks.as_text()),
                "both year and semester, or neither"
            ),
        }
    }
}

/// Raw configuration file contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Academic years, e.g. `"2025/2026 2026/2027"`.
    #[serde(default)]
    pub years: Option<String>,
    /// Program preset name.
    #[serde(default)]
    pub program: Option<String>,
    /// First calendar year for the preset's academic years.
    #[serde(default)]
    pub start_year: Option<i32>,
    /// Consumption mode.
    #[serde(default)]
    pub mode: ConsumptionMode,
    /// Built-in holiday table: `"russia"` (default) or `"none"`.
    #[serde(default)]
    pub holidays: Option<String>,
    /// Custom holiday table, calendar year → ISO dates.
    #[serde(default)]
    pub holiday_table: Option<BTreeMap<String, Vec<String>>>,
    /// Tabular block form.
    #[serde(default)]
    pub blocks: Option<Vec<BlockRow>>,
    /// Order-string block form.
    #[serde(default)]
    pub order: Option<String>,
    /// Week counts for the order-string form, keyed by label.
    #[serde(default)]
    pub weeks: Option<BTreeMap<String, WeekCount>>,
    /// Treat an overflowing block sequence as an error.
    #[serde(default)]
    pub strict: bool,
}

/// Validated generation request.
#[derive(Debug)]
pub struct Request {
    /// Academic years in ascending order.
    pub years: Vec<AcademicYear>,
    /// Working-day calendar.
    pub calendar: Box<dyn Calendar>,
    /// Consumption mode.
    pub mode: ConsumptionMode,
    /// Blocks to consume.
    pub blocks: BlockSequence,
    /// Whether exhaustion is an error.
    pub strict: bool,
}

impl Request {
    /// Split into a generator and the block sequence to feed it.
    pub fn into_generator(self) -> Result<(Generator, BlockSequence)> {
        let generator = Generator::new(self.years, self.calendar, self.mode)?;
        Ok((generator, self.blocks))
    }
}

impl CalendarConfig {
    /// Parse TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            Error::configuration("configuration file", e.message(), "valid request TOML")
        })
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(
                "configuration file",
                path.display().to_string(),
                format!("a readable file ({e})"),
            )
        })?;
        Self::from_toml_str(&text)
    }

    fn program(&self) -> Result<Option<Program>> {
        self.program.as_deref().map(str::parse::<Program>).transpose()
    }

    fn academic_years(&self, program: Option<Program>) -> Result<Vec<AcademicYear>> {
        match (&self.years, program, self.start_year) {
            (Some(years), _, None) => AcademicYear::parse_list(years),
            (None, Some(program), Some(start)) => program.default_years(start),
            (Some(_), _, Some(start)) => fail!(
                "start_year",
                start.to_string(),
                "either years or program with start_year, not both"
            ),
            (None, _, _) => fail!(
                "academic years",
                "",
                "a years list, or program with start_year"
            ),
        }
    }

    fn calendar(&self) -> Result<Box<dyn Calendar>> {
        match (&self.holidays, &self.holiday_table) {
            (Some(_), Some(_)) => fail!(
                "holidays",
                "holidays and [holiday_table]",
                "only one holiday source"
            ),
            (_, Some(table)) => {
                let mut by_year = BTreeMap::new();
                for (year, dates) in table {
                    let year: u16 = year.trim().parse().map_err(|_| {
                        Error::configuration("holiday table year", year.as_str(), "a calendar year")
                    })?;
                    by_year.insert(year, dates.clone());
                }
                Ok(Box::new(HolidayCalendar::from_iso_table("Custom", &by_year)?))
            }
            (Some(name), None) => match name.trim().to_lowercase().as_str() {
                "russia" => Ok(Box::new(HolidayCalendar::russia())),
                "none" => Ok(Box::new(WeekendsOnly)),
                other => fail!("holidays", other, "russia or none"),
            },
            (None, None) => Ok(Box::new(HolidayCalendar::russia())),
        }
    }

    fn block_sequence(&self, program: Option<Program>) -> Result<BlockSequence> {
        match (&self.blocks, &self.order) {
            (Some(_), Some(order)) => fail!(
                "blocks",
                order.as_str(),
                "either [[blocks]] or order, not both"
            ),
            (Some(rows), None) => {
                ensure!(self.weeks.is_none(), "weeks", "[weeks]", "weeks inside each [[blocks]] row");
                let blocks = rows.iter().map(BlockRow::to_block).collect::<Result<Vec<_>>>()?;
                BlockSequence::new(blocks)
            }
            (None, Some(order)) => {
                let weeks: BTreeMap<String, String> = self
                    .weeks
                    .iter()
                    .flatten()
                    .map(|(k, v)| (k.clone(), v.as_text()))
                    .collect();
                BlockSequence::from_order(order, &weeks)
            }
            (None, None) => match program {
                Some(program) => program.block_sequence(),
                None => fail!("blocks", "", "[[blocks]], order with [weeks], or a program preset"),
            },
        }
    }

    /// Validate into a [`Request`].
    pub fn into_request(self) -> Result<Request> {
        let program = self.program()?;
        Ok(Request {
            years: self.academic_years(program)?,
            calendar: self.calendar()?,
            mode: self.mode,
            blocks: self.block_sequence(program)?,
            strict: self.strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_form() {
        let cfg = CalendarConfig::from_toml_str(
            r#"
            years = "2025/2026 2026/2027"
            holidays = "none"
            order = "Т П К"

            [weeks]
            "Т" = 10
            "П" = "14"
            "К" = "2,5"
            "#,
        )
        .unwrap();
        let request = cfg.into_request().unwrap();
        assert_eq!(request.years.len(), 2);
        assert_eq!(request.blocks.len(), 3);
        assert_eq!(request.blocks.blocks()[2].working_days_needed(), 12);
        assert_eq!(request.calendar.name(), "Weekends Only");
    }

    #[test]
    fn tabular_form_with_tags() {
        let cfg = CalendarConfig::from_toml_str(
            r#"
            program = "residency"
            start_year = 2025
            mode = "fixed-week-round-robin"

            [[blocks]]
            code = "Т"
            weeks = 10
            year = 1
            semester = 1

            [[blocks]]
            code = "vacation"
            weeks = "6"
            year = 1
            semester = 2
            "#,
        )
        .unwrap();
        let request = cfg.into_request().unwrap();
        assert_eq!(request.mode, ConsumptionMode::FixedWeekRoundRobin);
        assert_eq!(request.years.len(), 2);
        assert!(request.blocks.iter().all(|b| b.tag().is_some()));
        assert_eq!(request.calendar.name(), "Russia");
    }

    #[test]
    fn program_preset_fills_blocks() {
        let cfg = CalendarConfig::from_toml_str(
            "program = \"postgraduate\"\nstart_year = 2025\n",
        )
        .unwrap();
        let request = cfg.into_request().unwrap();
        assert_eq!(request.years.len(), 3);
        assert_eq!(request.blocks.total_working_days(), 215);
    }

    #[test]
    fn out_of_range_years_are_configuration_errors() {
        let cfg = CalendarConfig::from_toml_str(
            "program = \"residency\"\nstart_year = 2147483647\n",
        )
        .unwrap();
        assert!(matches!(cfg.into_request(), Err(Error::Configuration { .. })));

        let cfg = CalendarConfig::from_toml_str(
            "years = \"2147483647/1\"\nprogram = \"residency\"\n",
        )
        .unwrap();
        assert!(matches!(cfg.into_request(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn custom_holiday_table() {
        let cfg = CalendarConfig::from_toml_str(
            r#"
            years = "2025/2026"
            order = "Т"
            [weeks]
            "Т" = 1
            [holiday_table]
            2025 = ["2025-09-03"]
            "#,
        )
        .unwrap();
        let request = cfg.into_request().unwrap();
        let d = acal_time::Date::from_ymd(2025, 9, 3).unwrap();
        assert!(request.calendar.is_holiday(d));
    }

    #[test]
    fn rejects_invalid_inputs() {
        let cases = [
            "years = \"2025-2026\"\norder = \"Т\"\n[weeks]\n\"Т\" = 1\n",
            "years = \"2025/2026\"\norder = \"Т\"\n[weeks]\n\"Т\" = \"ten\"\n",
            "years = \"2025/2026\"\norder = \"Т\"\n[weeks]\n\"Т\" = -1\n",
            "years = \"2025/2026\"\norder = \"X\"\n[weeks]\n\"X\" = 1\n",
            "years = \"2025/2026\"\n",
            "years = \"\"\norder = \"Т\"\n[weeks]\n\"Т\" = 1\n",
            "years = \"2025/2026\"\nholidays = \"mars\"\norder = \"Т\"\n[weeks]\n\"Т\" = 1\n",
            "years = \"2025/2026\"\norder = \"Т\"\n[weeks]\n\"Т\" = 1\n[holiday_table]\n2025 = [\"2026-01-01\"]\n",
            "years = \"2025/2026\"\n[[blocks]]\ncode = \"Т\"\nweeks = 1\nyear = 1\n",
        ];
        for text in cases {
            let err = CalendarConfig::from_toml_str(text)
                .and_then(CalendarConfig::into_request)
                .unwrap_err();
            assert!(err.is_configuration(), "{text}: {err}");
        }
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = CalendarConfig::from_toml_str("colour = \"red\"\n").unwrap_err();
        assert!(err.is_configuration());
    }
}
