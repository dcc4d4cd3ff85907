//! Error types for the academic calendar workspace.
//!
//! Every fallible operation returns the single [`Error`] enum below. Input
//! validation goes through the [`ensure!`](crate::ensure) and
//! [`fail!`](crate::fail) macros, which produce [`Error::Configuration`]
//! values carrying the offending input and the shape that was expected.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid user-supplied input, detected before any engine work starts.
    #[error("invalid {what}: {value:?} (expected {expected})")]
    Configuration {
        /// Which input was rejected (e.g. `"academic year"`).
        what: String,
        /// The offending value as it was supplied.
        value: String,
        /// Description of the accepted shape.
        expected: String,
    },

    /// Date construction or arithmetic outside the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// The block sequence needed more working days than the horizon holds.
    ///
    /// Only produced when a caller opts into strict handling; by default
    /// exhaustion is reported as a warning alongside the partial output.
    #[error(
        "calendar exhausted: {assigned} of {requested} working days assigned, \
         {blocks_unscheduled} block(s) never started"
    )]
    CalendarExhaustion {
        /// Total working days requested by the block sequence.
        requested: usize,
        /// Working days actually assigned before the horizon closed.
        assigned: usize,
        /// Blocks that received no day at all.
        blocks_unscheduled: usize,
    },

    /// A generation was requested while another one is still running.
    #[error("a schedule generation is already in progress for this session")]
    ConcurrentInvocation,
}

impl Error {
    /// Build a [`Error::Configuration`] value.
    pub fn configuration(
        what: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Error::Configuration {
            what: what.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Return `true` for errors caused by user input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return a configuration error unless `$cond` holds.
///
/// # Example
/// ```
/// use acal_core::{ensure, errors::Result};
/// fn positive_weeks(weeks: f64) -> Result<f64> {
///     ensure!(weeks > 0.0, "week count", weeks.to_string(), "a positive number");
///     Ok(weeks)
/// }
/// assert!(positive_weeks(2.0).is_ok());
/// assert!(positive_weeks(0.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $what:expr, $value:expr, $expected:expr) => {
        if !$cond {
            return Err($crate::errors::Error::configuration($what, $value, $expected));
        }
    };
}

/// Return a configuration error immediately.
///
/// # Example
/// ```
/// use acal_core::{fail, errors::Result};
/// fn reject(label: &str) -> Result<()> {
///     fail!("activity code", label, "one of Т, П, ПА, ГИА, К");
/// }
/// assert!(reject("X").is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($what:expr, $value:expr, $expected:expr) => {
        return Err($crate::errors::Error::configuration($what, $value, $expected))
    };
}
