//! Pattern parsing module
//!
//! This module is responsible for parsing format pattern strings and converting them into the internal `NumberFormat` representation.
//! The main entry point is the `parse_pattern` function.

mod tokens;
mod combinators;
mod sections;
mod format;

pub use format::parse_pattern;
