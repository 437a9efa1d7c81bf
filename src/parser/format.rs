use winnow::Parser;
use winnow::error::ErrMode;
use winnow::token::literal;

use crate::error::PatternError;
use crate::parser::sections::parse_one_section;
use crate::types::*;

/// Parse a format pattern string
///
/// This is the main public API entry point of this module. It accepts a
/// pattern string and returns the parsed `NumberFormat` structure.
///
/// A pattern holds up to three `;`-separated sections (positive, negative,
/// zero); at most two of them may carry a `[operator value]` condition.
///
/// # Arguments
/// * `input_str` - The pattern string to parse
///
/// # Returns
/// * `Result<NumberFormat, PatternError>` - The parsing result
///
/// # Examples
/// ```
/// use number_spellout::parse_pattern;
///
/// let format = parse_pattern("#,##0.00").unwrap();
/// assert!(format.negative_section.is_none());
/// ```
pub fn parse_pattern(input_str: &str) -> Result<NumberFormat, PatternError> {
    let mut input = input_str;

    let make_err = |e, remaining: &str| PatternError::Parse {
        message: format!("{e:?}"),
        remaining: remaining.to_string(),
    };

    let positive_section = parse_one_section(&mut input).map_err(|e| make_err(e, input))?;

    let mut negative_section = None;
    if input.starts_with(';') {
        literal(";")
            .parse_next(&mut input)
            .map_err(ErrMode::Backtrack)
            .map_err(|e| make_err(e, input))?;
        negative_section = Some(parse_one_section(&mut input).map_err(|e| make_err(e, input))?);
    }

    let mut zero_section = None;
    if input.starts_with(';') {
        literal(";")
            .parse_next(&mut input)
            .map_err(ErrMode::Backtrack)
            .map_err(|e| make_err(e, input))?;
        zero_section = Some(parse_one_section(&mut input).map_err(|e| make_err(e, input))?);
    }

    if !input.is_empty() {
        return Err(PatternError::TrailingInput(input.to_string()));
    }

    // Validate condition constraints
    let mut condition_count = 0;
    if positive_section.condition.is_some() {
        condition_count += 1;
    }
    if negative_section
        .as_ref()
        .is_some_and(|s| s.condition.is_some())
    {
        condition_count += 1;
    }
    if zero_section.as_ref().is_some_and(|s| s.condition.is_some()) {
        condition_count += 1;
    }

    if condition_count > 2 {
        return Err(PatternError::TooManyConditions);
    }

    Ok(NumberFormat {
        positive_section,
        negative_section,
        zero_section,
    })
}
