use winnow::combinator::{opt, repeat};
use winnow::{ModalResult, Parser};

use crate::parser::combinators::{parse_condition, parse_single_token};
use crate::types::*;

/// Parse a sequence of tokens
pub fn parse_section_tokens(input: &mut &str) -> ModalResult<Vec<FormatToken>> {
    repeat(0.., parse_single_token).parse_next(input)
}

/// Parse a single format section: an optional condition followed by tokens
pub fn parse_one_section(input: &mut &str) -> ModalResult<FormatSection> {
    let condition = opt(parse_condition).parse_next(input)?;
    let tokens = parse_section_tokens(input)?;

    Ok(FormatSection { condition, tokens })
}
