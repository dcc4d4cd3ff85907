//! # acal-core
//!
//! Core types and error definitions for the academic calendar workspace.
//!
//! This crate provides the building blocks shared by the other crates: the
//! error enum with its `ensure!` / `fail!` macros, numeric aliases, and the
//! parsers that turn raw collection-layer text into typed values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Input parsers and report formatters.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for week counts.
pub type Real = f64;

/// Alias used for day counts and indices.
pub type Size = usize;

/// Number of working days that make up one study week.
pub const WORKING_DAYS_PER_WEEK: Size = 5;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
