//! # academic-calendar
//!
//! Study schedule generator for residency and postgraduate programs.
//!
//! This crate is a **façade** over the workspace crates. It adds the
//! driving layer around the engine: TOML request configuration, program
//! presets, the per-session re-entrancy guard, and plain-text reports.
//!
//! ```rust
//! use academic_calendar::config::CalendarConfig;
//! use academic_calendar::session::Session;
//!
//! let config = CalendarConfig::from_toml_str(
//!     r#"
//!     years = "2025/2026"
//!     holidays = "none"
//!     order = "Т К"
//!     [weeks]
//!     "Т" = 2
//!     "К" = 1
//!     "#,
//! )
//! .unwrap();
//! let (generator, blocks) = config.into_request().unwrap().into_generator().unwrap();
//! let out = Session::new().run(|| generator.generate(&blocks)).unwrap();
//! assert_eq!(out.periods[1].start_date.to_string(), "2025-09-15");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, parsers and formatters.
pub use acal_core as core;

/// Dates, calendars and academic years.
pub use acal_time as time;

/// Engines, grid indexer and summary aggregator.
pub use acal_schedule as schedule;

/// TOML request configuration.
pub mod config;

/// Built-in program presets.
pub mod presets;

/// Plain-text reports.
pub mod report;

/// Re-entrancy guard.
pub mod session;

pub use config::{CalendarConfig, Request};
pub use presets::{residency_example, Program};
pub use session::Session;
