//! Error types for pattern parsing and formatter construction.

use thiserror::Error;

/// Errors produced while parsing a format pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// A token could not be parsed
    #[error("parse error {message} at remaining input '{remaining}'")]
    Parse {
        /// Parser diagnostic
        message: String,
        /// The unconsumed tail of the pattern
        remaining: String,
    },
    /// Input left over after all sections were parsed
    #[error("too many sections or trailing characters: '{0}'")]
    TrailingInput(String),
    /// More than two sections carry a condition
    #[error("format pattern cannot have more than two conditional sections")]
    TooManyConditions,
}

/// Failures surfaced by the base formatting engine.
///
/// Resolution misses on the custom-renderer path are never errors; the only
/// failure the engine signals is a malformed pattern at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The format pattern could not be parsed
    #[error("invalid format pattern: {0}")]
    InvalidPattern(#[from] PatternError),
}
