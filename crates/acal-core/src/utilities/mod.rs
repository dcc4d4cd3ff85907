//! Input parsers and report formatters.

pub mod data_formatters;
pub mod data_parsers;
